// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Multi-speed fan appliance.

use std::fmt;

use crate::error::{Error, StateError, ValueError};
use crate::types::{DeviceName, FanSpeed, PowerState};

use super::snapshot::{Attribute, DeviceSnapshot};
use super::{DeviceCore, DeviceKind};

/// A fan with a speed level of 0-5.
///
/// The speed can only be changed while the fan is powered on; a rejected
/// change leaves the stored level untouched.
///
/// # Examples
///
/// ```
/// use domo_lib::{Fan, types::FanSpeed};
///
/// let mut fan = Fan::new("Bedroom Fan", 3)?;
/// fan.turn_on();
/// fan.set_speed(FanSpeed::MAX)?;
/// assert_eq!(fan.speed().value(), 5);
/// # Ok::<(), domo_lib::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Fan {
    #[serde(flatten)]
    core: DeviceCore,
    speed: FanSpeed,
}

impl Fan {
    /// Creates a new fan, powered off.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::EmptyName` if the name is blank, or
    /// `ValueError::OutOfRange` if the speed exceeds 5.
    pub fn new(name: impl Into<String>, speed: u8) -> Result<Self, ValueError> {
        Ok(Self {
            core: DeviceCore::new(name)?,
            speed: FanSpeed::new(speed)?,
        })
    }

    /// Returns the fan's name.
    #[must_use]
    pub fn name(&self) -> &DeviceName {
        self.core.name()
    }

    /// Returns the current power state.
    #[must_use]
    pub fn power(&self) -> PowerState {
        self.core.power()
    }

    /// Returns `true` if the fan is powered on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.core.power().is_on()
    }

    /// Returns the current speed level.
    #[must_use]
    pub const fn speed(&self) -> FanSpeed {
        self.speed
    }

    /// Turns the fan on. Idempotent.
    pub fn turn_on(&mut self) {
        self.core.turn_on();
    }

    /// Turns the fan off. Idempotent.
    pub fn turn_off(&mut self) {
        self.core.turn_off();
    }

    /// Sets the speed level.
    ///
    /// # Errors
    ///
    /// Returns `StateError::PoweredOff` if the fan is off. The stored level
    /// is unchanged on error.
    pub fn set_speed(&mut self, level: FanSpeed) -> Result<(), StateError> {
        self.core.ensure_on()?;
        self.apply_speed(level);
        Ok(())
    }

    /// Sets the speed from a raw level, validating it first.
    ///
    /// The power gate is checked before the value.
    ///
    /// # Errors
    ///
    /// Returns `Error::State` if the fan is off, `Error::Value` if the
    /// level exceeds 5.
    pub fn try_set_speed(&mut self, level: u8) -> Result<(), Error> {
        self.core.ensure_on()?;
        self.apply_speed(FanSpeed::new(level)?);
        Ok(())
    }

    fn apply_speed(&mut self, level: FanSpeed) {
        self.speed = level;
        tracing::debug!(device = %self.core.name(), speed = %level, "speed set");
    }

    /// Captures the externally observable state of the fan.
    #[must_use]
    pub fn snapshot(&self) -> DeviceSnapshot {
        DeviceSnapshot {
            kind: DeviceKind::Fan,
            name: self.core.name().as_str().to_string(),
            power: self.core.power(),
            attribute: Attribute::Speed(self.speed),
        }
    }
}

impl fmt::Display for Fan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fan [{}] - Power: {}, Speed: {}",
            self.core.name(),
            self.core.power(),
            self.speed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_starts_powered_off() {
        let fan = Fan::new("Bedroom Fan", 3).unwrap();
        assert_eq!(fan.power(), PowerState::Off);
        assert_eq!(fan.speed().value(), 3);
    }

    #[test]
    fn fan_rejects_blank_name() {
        assert_eq!(Fan::new(" ", 3).unwrap_err(), ValueError::EmptyName);
    }

    #[test]
    fn fan_rejects_out_of_range_speed() {
        assert!(matches!(
            Fan::new("Attic Fan", 9).unwrap_err(),
            ValueError::OutOfRange { actual: 9, .. }
        ));
    }

    #[test]
    fn set_speed_requires_power() {
        let mut fan = Fan::new("Bedroom Fan", 3).unwrap();
        let err = fan.set_speed(FanSpeed::MAX).unwrap_err();
        assert!(matches!(err, StateError::PoweredOff { ref device } if device == "Bedroom Fan"));
        assert_eq!(fan.speed().value(), 3);
    }

    #[test]
    fn set_speed_while_on() {
        let mut fan = Fan::new("Bedroom Fan", 3).unwrap();
        fan.turn_on();
        fan.set_speed(FanSpeed::new(5).unwrap()).unwrap();
        assert_eq!(fan.speed().value(), 5);
    }

    #[test]
    fn try_set_speed_validates_raw_level() {
        let mut fan = Fan::new("Bedroom Fan", 3).unwrap();
        fan.turn_on();
        assert!(matches!(
            fan.try_set_speed(9).unwrap_err(),
            Error::Value(ValueError::OutOfRange { actual: 9, .. })
        ));
        assert_eq!(fan.speed().value(), 3);
        fan.try_set_speed(5).unwrap();
        assert_eq!(fan.speed().value(), 5);
    }

    #[test]
    fn fan_status_line() {
        let mut fan = Fan::new("Bedroom Fan", 3).unwrap();
        assert_eq!(
            fan.to_string(),
            "Fan [Bedroom Fan] - Power: OFF, Speed: 3"
        );
        fan.turn_on();
        fan.set_speed(FanSpeed::MAX).unwrap();
        assert_eq!(fan.to_string(), "Fan [Bedroom Fan] - Power: ON, Speed: 5");
    }
}
