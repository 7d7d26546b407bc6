// SPDX-License-Identifier: MPL-2.0

//! Demo program: walk three appliances through their lifecycle, then
//! exercise the validation and power-gating paths.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example tour
//! ```
//!
//! Set `RUST_LOG=domo_lib=debug` to see the library's instrumentation.

use domo_lib::{Error, Fan, Light, SmartTv, ValueError};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut light = Light::new("Living Room Light", 50).expect("valid light");
    let mut fan = Fan::new("Bedroom Fan", 3).expect("valid fan");
    let mut tv = SmartTv::new("Samsung TV", "Netflix").expect("valid tv");

    // Turning on devices
    light.turn_on();
    println!("{} is now ON.", light.name());
    fan.turn_on();
    println!("{} is now ON.", fan.name());
    tv.turn_on();
    println!("{} is now ON.", tv.name());

    // Using devices
    report(light.try_set_brightness(80));
    println!("{} brightness set to {}.", light.name(), light.brightness());
    report(fan.try_set_speed(5));
    println!("{} speed set to level {}", fan.name(), fan.speed());
    report(tv.try_change_channel("StarSports"));
    println!("{} changed to channel: {}", tv.name(), tv.channel());

    // Display device statuses
    println!("{light}");
    println!("{fan}");
    println!("{tv}");

    // Turning off devices
    light.turn_off();
    println!("{} is now OFF.", light.name());
    fan.turn_off();
    println!("{} is now OFF.", fan.name());
    tv.turn_off();
    println!("{} is now OFF.", tv.name());

    // Invalid constructions: each fails fast instead of yielding a
    // half-initialized device.
    report_value(Light::new("", 50).map(drop));
    report_value(Fan::new("Attic Fan", 9).map(drop));
    report_value(SmartTv::new("Kitchen TV", "").map(drop));

    // Invalid mutations: all three devices are off again, so every
    // attempt is rejected and the attributes keep their last values.
    report(light.try_set_brightness(10));
    report(fan.try_set_speed(1));
    report(tv.try_change_channel("HBO"));

    println!("{light}");
    println!("{fan}");
    println!("{tv}");
}

fn report(result: Result<(), Error>) {
    if let Err(err) = result {
        println!("Error: {err}");
    }
}

fn report_value(result: Result<(), ValueError>) {
    if let Err(err) = result {
        println!("Error: {err}");
    }
}
