// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end lifecycle tests for the appliance variants.

use domo_lib::types::{Brightness, Channel, FanSpeed, PowerState};
use domo_lib::{Device, DeviceKind, Error, Fan, Light, SmartTv, StateError, ValueError};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn all_devices() -> Vec<Device> {
    vec![
        Light::new("Living Room Light", 50).unwrap().into(),
        Fan::new("Bedroom Fan", 3).unwrap().into(),
        SmartTv::new("Samsung TV", "Netflix").unwrap().into(),
    ]
}

#[test]
fn power_state_is_reported_in_status() {
    for mut device in all_devices() {
        assert!(device.to_string().contains("Power: OFF"));

        device.turn_on();
        assert!(device.to_string().contains("Power: ON"));

        device.turn_off();
        assert!(device.to_string().contains("Power: OFF"));
    }
}

#[test]
fn setters_are_rejected_while_powered_off() {
    let mut light = Light::new("Living Room Light", 50).unwrap();
    let mut fan = Fan::new("Bedroom Fan", 3).unwrap();
    let mut tv = SmartTv::new("Samsung TV", "Netflix").unwrap();

    assert!(matches!(
        light.set_brightness(Brightness::new(80).unwrap()),
        Err(StateError::PoweredOff { .. })
    ));
    assert!(matches!(
        fan.set_speed(FanSpeed::MAX),
        Err(StateError::PoweredOff { .. })
    ));
    assert!(matches!(
        tv.change_channel(Channel::new("HBO").unwrap()),
        Err(StateError::PoweredOff { .. })
    ));

    // Attributes keep the values they were constructed with.
    assert_eq!(light.brightness().value(), 50);
    assert_eq!(fan.speed().value(), 3);
    assert_eq!(tv.channel().as_str(), "Netflix");
}

#[test]
fn living_room_light_scenario() {
    let mut light = Light::new("Living Room Light", 50).unwrap();
    light.turn_on();
    light.set_brightness(Brightness::new(80).unwrap()).unwrap();

    let status = light.to_string();
    assert!(status.contains("Power: ON, Brightness: 80%"), "{status}");
    assert_eq!(
        status,
        "Light [Living Room Light] - Power: ON, Brightness: 80%"
    );
}

#[test]
fn bedroom_fan_scenario() {
    // Never turned on: the speed change must be rejected and the status
    // line still reports the constructed speed.
    let mut fan = Fan::new("Bedroom Fan", 3).unwrap();

    let err = fan.try_set_speed(5).unwrap_err();
    assert!(matches!(err, Error::State(StateError::PoweredOff { .. })));
    assert_eq!(fan.to_string(), "Fan [Bedroom Fan] - Power: OFF, Speed: 3");
}

#[rstest]
#[case(0, true)]
#[case(50, true)]
#[case(100, true)]
#[case(101, false)]
#[case(255, false)]
fn brightness_succeeds_iff_in_range(#[case] level: u8, #[case] accepted: bool) {
    let mut light = Light::new("Living Room Light", 50).unwrap();
    light.turn_on();

    let result = light.try_set_brightness(level);
    assert_eq!(result.is_ok(), accepted);
    if accepted {
        assert_eq!(light.brightness().value(), level);
    } else {
        assert!(matches!(
            result.unwrap_err(),
            Error::Value(ValueError::OutOfRange { .. })
        ));
        assert_eq!(light.brightness().value(), 50);
    }
}

#[rstest]
#[case(0, true)]
#[case(5, true)]
#[case(6, false)]
#[case(9, false)]
fn fan_speed_succeeds_iff_in_range(#[case] level: u8, #[case] accepted: bool) {
    let mut fan = Fan::new("Bedroom Fan", 3).unwrap();
    fan.turn_on();

    let result = fan.try_set_speed(level);
    assert_eq!(result.is_ok(), accepted);
    if accepted {
        assert_eq!(fan.speed().value(), level);
    } else {
        assert_eq!(fan.speed().value(), 3);
    }
}

#[rstest]
#[case("StarSports", true)]
#[case("HBO", true)]
#[case("", false)]
#[case("   ", false)]
fn channel_change_succeeds_iff_non_empty(#[case] channel: &str, #[case] accepted: bool) {
    let mut tv = SmartTv::new("Samsung TV", "Netflix").unwrap();
    tv.turn_on();

    let result = tv.try_change_channel(channel);
    assert_eq!(result.is_ok(), accepted);
    if accepted {
        assert_eq!(tv.channel().as_str(), channel);
    } else {
        assert!(matches!(
            result.unwrap_err(),
            Error::Value(ValueError::EmptyChannel)
        ));
        assert_eq!(tv.channel().as_str(), "Netflix");
    }
}

#[test]
fn invalid_construction_never_yields_a_device() {
    assert_eq!(Light::new("", 50).unwrap_err(), ValueError::EmptyName);
    assert!(matches!(
        Light::new("Hallway Light", 150).unwrap_err(),
        ValueError::OutOfRange { actual: 150, .. }
    ));
    assert!(matches!(
        Fan::new("Attic Fan", 9).unwrap_err(),
        ValueError::OutOfRange { actual: 9, .. }
    ));
    assert_eq!(
        SmartTv::new("Kitchen TV", "").unwrap_err(),
        ValueError::EmptyChannel
    );
}

#[test]
fn deserialization_enforces_the_construction_invariants() {
    // Deserialization goes through the same validation as construction:
    // neither an out-of-range value nor a whole invalid device can be
    // materialized from JSON.
    assert!(serde_json::from_str::<Brightness>("150").is_err());
    assert!(serde_json::from_str::<FanSpeed>("9").is_err());
    assert!(serde_json::from_str::<Channel>("\"\"").is_err());

    assert!(
        serde_json::from_str::<Light>(r#"{"name":"","power":"Off","brightness":200}"#).is_err()
    );
    assert!(serde_json::from_str::<Fan>(r#"{"name":"Bedroom Fan","power":"Off","speed":9}"#)
        .is_err());

    let light: Light =
        serde_json::from_str(r#"{"name":"Living Room Light","power":"On","brightness":80}"#)
            .unwrap();
    assert_eq!(light.name().as_str(), "Living Room Light");
    assert_eq!(light.brightness().value(), 80);
    assert!(light.is_on());
}

#[test]
fn snapshot_serializes_to_flat_json() {
    let mut light = Light::new("Living Room Light", 50).unwrap();
    light.turn_on();
    light.set_brightness(Brightness::new(80).unwrap()).unwrap();

    let json = serde_json::to_value(light.snapshot()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "kind": "light",
            "name": "Living Room Light",
            "power": "On",
            "brightness": 80,
        })
    );
}

#[test]
fn snapshots_cover_all_kinds() {
    let kinds: Vec<DeviceKind> = all_devices()
        .iter()
        .map(|device| device.snapshot().kind)
        .collect();
    assert_eq!(
        kinds,
        vec![DeviceKind::Light, DeviceKind::Fan, DeviceKind::SmartTv]
    );
}

#[test]
fn fixed_driver_sequence_runs_clean() {
    // The same call sequence the `tour` example performs, asserted on
    // return values instead of console output.
    let mut light = Light::new("Living Room Light", 50).unwrap();
    let mut fan = Fan::new("Bedroom Fan", 3).unwrap();
    let mut tv = SmartTv::new("Samsung TV", "Netflix").unwrap();

    light.turn_on();
    fan.turn_on();
    tv.turn_on();

    light.try_set_brightness(80).unwrap();
    fan.try_set_speed(5).unwrap();
    tv.try_change_channel("StarSports").unwrap();

    assert_eq!(
        light.to_string(),
        "Light [Living Room Light] - Power: ON, Brightness: 80%"
    );
    assert_eq!(fan.to_string(), "Fan [Bedroom Fan] - Power: ON, Speed: 5");
    assert_eq!(
        tv.to_string(),
        "Smart TV [Samsung TV] - Power: ON, Channel: StarSports"
    );

    light.turn_off();
    fan.turn_off();
    tv.turn_off();

    assert_eq!(light.power(), PowerState::Off);
    assert_eq!(fan.power(), PowerState::Off);
    assert_eq!(tv.power(), PowerState::Off);

    // Everything is off again: all mutations are rejected.
    assert!(light.try_set_brightness(10).is_err());
    assert!(fan.try_set_speed(1).is_err());
    assert!(tv.try_change_channel("HBO").is_err());
}
