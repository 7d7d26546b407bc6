// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dimmable light appliance.

use std::fmt;

use crate::error::{Error, StateError, ValueError};
use crate::types::{Brightness, DeviceName, PowerState};

use super::snapshot::{Attribute, DeviceSnapshot};
use super::{DeviceCore, DeviceKind};

/// A dimmable light with a brightness level of 0-100%.
///
/// The brightness can only be changed while the light is powered on; a
/// rejected change leaves the stored level untouched.
///
/// # Examples
///
/// ```
/// use domo_lib::{Light, types::Brightness};
///
/// let mut light = Light::new("Living Room Light", 50)?;
/// light.turn_on();
/// light.set_brightness(Brightness::new(80)?)?;
/// assert_eq!(light.brightness().value(), 80);
/// assert_eq!(
///     light.to_string(),
///     "Light [Living Room Light] - Power: ON, Brightness: 80%"
/// );
/// # Ok::<(), domo_lib::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Light {
    #[serde(flatten)]
    core: DeviceCore,
    brightness: Brightness,
}

impl Light {
    /// Creates a new light, powered off.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::EmptyName` if the name is blank, or
    /// `ValueError::OutOfRange` if the brightness exceeds 100.
    pub fn new(name: impl Into<String>, brightness: u8) -> Result<Self, ValueError> {
        Ok(Self {
            core: DeviceCore::new(name)?,
            brightness: Brightness::new(brightness)?,
        })
    }

    /// Returns the light's name.
    #[must_use]
    pub fn name(&self) -> &DeviceName {
        self.core.name()
    }

    /// Returns the current power state.
    #[must_use]
    pub fn power(&self) -> PowerState {
        self.core.power()
    }

    /// Returns `true` if the light is powered on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.core.power().is_on()
    }

    /// Returns the current brightness level.
    #[must_use]
    pub const fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// Turns the light on. Idempotent.
    pub fn turn_on(&mut self) {
        self.core.turn_on();
    }

    /// Turns the light off. Idempotent.
    pub fn turn_off(&mut self) {
        self.core.turn_off();
    }

    /// Sets the brightness level.
    ///
    /// # Errors
    ///
    /// Returns `StateError::PoweredOff` if the light is off. The stored
    /// level is unchanged on error.
    pub fn set_brightness(&mut self, level: Brightness) -> Result<(), StateError> {
        self.core.ensure_on()?;
        self.apply_brightness(level);
        Ok(())
    }

    /// Sets the brightness from a raw percentage, validating it first.
    ///
    /// The power gate is checked before the value, so a powered-off light
    /// reports `StateError` even for an out-of-range level.
    ///
    /// # Errors
    ///
    /// Returns `Error::State` if the light is off, `Error::Value` if the
    /// level exceeds 100.
    pub fn try_set_brightness(&mut self, level: u8) -> Result<(), Error> {
        self.core.ensure_on()?;
        self.apply_brightness(Brightness::new(level)?);
        Ok(())
    }

    fn apply_brightness(&mut self, level: Brightness) {
        self.brightness = level;
        tracing::debug!(device = %self.core.name(), brightness = %level, "brightness set");
    }

    /// Captures the externally observable state of the light.
    #[must_use]
    pub fn snapshot(&self) -> DeviceSnapshot {
        DeviceSnapshot {
            kind: DeviceKind::Light,
            name: self.core.name().as_str().to_string(),
            power: self.core.power(),
            attribute: Attribute::Brightness(self.brightness),
        }
    }
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Light [{}] - Power: {}, Brightness: {}",
            self.core.name(),
            self.core.power(),
            self.brightness
        )
    }
}
