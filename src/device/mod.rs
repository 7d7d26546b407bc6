// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Appliance variants and the closed [`Device`] sum type.
//!
//! The crate models a fixed set of appliance kinds. Each variant struct
//! ([`Light`], [`Fan`], [`SmartTv`]) owns its name, power state, and one
//! adjustable attribute; [`Device`] wraps the closed set and dispatches the
//! operations they share.
//!
//! Construction is fallible: an appliance either exists with valid state or
//! is never created. Attribute setters are gated on power state and return
//! [`StateError::PoweredOff`] while the appliance is off, leaving the
//! attribute unchanged.

use std::fmt;

use crate::error::{StateError, ValueError};
use crate::types::{DeviceName, PowerState};

mod fan;
mod light;
mod smart_tv;
mod snapshot;

pub use fan::Fan;
pub use light::Light;
pub use smart_tv::SmartTv;
pub use snapshot::{Attribute, DeviceSnapshot};

/// The kind of an appliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    /// A dimmable light.
    Light,
    /// A multi-speed fan.
    Fan,
    /// A smart TV.
    SmartTv,
}

impl DeviceKind {
    /// Returns the label used in status lines.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Fan => "Fan",
            Self::SmartTv => "Smart TV",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identity and power state shared by every appliance variant.
///
/// Variants embed this instead of inheriting from a base class; the power
/// gate for attribute setters lives here so every variant enforces it the
/// same way.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub(crate) struct DeviceCore {
    name: DeviceName,
    power: PowerState,
}

impl DeviceCore {
    /// Creates a powered-off core with the given name.
    pub(crate) fn new(name: impl Into<String>) -> Result<Self, ValueError> {
        Ok(Self {
            name: DeviceName::new(name)?,
            power: PowerState::Off,
        })
    }

    pub(crate) fn name(&self) -> &DeviceName {
        &self.name
    }

    pub(crate) fn power(&self) -> PowerState {
        self.power
    }

    pub(crate) fn turn_on(&mut self) {
        self.power = PowerState::On;
        tracing::debug!(device = %self.name, "powered on");
    }

    pub(crate) fn turn_off(&mut self) {
        self.power = PowerState::Off;
        tracing::debug!(device = %self.name, "powered off");
    }

    /// Rejects mutation while the appliance is powered off.
    pub(crate) fn ensure_on(&self) -> Result<(), StateError> {
        if self.power.is_on() {
            Ok(())
        } else {
            Err(StateError::PoweredOff {
                device: self.name.as_str().to_string(),
            })
        }
    }
}

/// An appliance of any supported kind.
///
/// `Device` is a closed sum over the variant structs. Use it to hold a
/// mixed collection of appliances or to dispatch the common operations
/// without knowing the concrete kind.
///
/// # Examples
///
/// ```
/// use domo_lib::{Device, Light};
///
/// let mut device: Device = Light::new("Living Room Light", 50)?.into();
/// device.turn_on();
/// assert!(device.is_on());
/// assert_eq!(
///     device.to_string(),
///     "Light [Living Room Light] - Power: ON, Brightness: 50%"
/// );
/// # Ok::<(), domo_lib::ValueError>(())
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Device {
    /// A dimmable light.
    Light(Light),
    /// A multi-speed fan.
    Fan(Fan),
    /// A smart TV.
    SmartTv(SmartTv),
}

impl Device {
    /// Returns the kind of this appliance.
    #[must_use]
    pub const fn kind(&self) -> DeviceKind {
        match self {
            Self::Light(_) => DeviceKind::Light,
            Self::Fan(_) => DeviceKind::Fan,
            Self::SmartTv(_) => DeviceKind::SmartTv,
        }
    }

    /// Returns the appliance name.
    #[must_use]
    pub fn name(&self) -> &DeviceName {
        match self {
            Self::Light(light) => light.name(),
            Self::Fan(fan) => fan.name(),
            Self::SmartTv(tv) => tv.name(),
        }
    }

    /// Returns the current power state.
    #[must_use]
    pub fn power(&self) -> PowerState {
        match self {
            Self::Light(light) => light.power(),
            Self::Fan(fan) => fan.power(),
            Self::SmartTv(tv) => tv.power(),
        }
    }

    /// Returns `true` if the appliance is powered on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.power().is_on()
    }

    /// Turns the appliance on. Idempotent.
    pub fn turn_on(&mut self) {
        match self {
            Self::Light(light) => light.turn_on(),
            Self::Fan(fan) => fan.turn_on(),
            Self::SmartTv(tv) => tv.turn_on(),
        }
    }

    /// Turns the appliance off. Idempotent.
    pub fn turn_off(&mut self) {
        match self {
            Self::Light(light) => light.turn_off(),
            Self::Fan(fan) => fan.turn_off(),
            Self::SmartTv(tv) => tv.turn_off(),
        }
    }

    /// Captures the externally observable state of the appliance.
    #[must_use]
    pub fn snapshot(&self) -> DeviceSnapshot {
        match self {
            Self::Light(light) => light.snapshot(),
            Self::Fan(fan) => fan.snapshot(),
            Self::SmartTv(tv) => tv.snapshot(),
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light(light) => light.fmt(f),
            Self::Fan(fan) => fan.fmt(f),
            Self::SmartTv(tv) => tv.fmt(f),
        }
    }
}

impl From<Light> for Device {
    fn from(light: Light) -> Self {
        Self::Light(light)
    }
}

impl From<Fan> for Device {
    fn from(fan: Fan) -> Self {
        Self::Fan(fan)
    }
}

impl From<SmartTv> for Device {
    fn from(tv: SmartTv) -> Self {
        Self::SmartTv(tv)
    }
}
