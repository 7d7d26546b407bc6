// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power state type for appliances.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Represents the power state of an appliance.
///
/// Appliances start powered off and transition unconditionally via
/// [`turn_on`](crate::Device::turn_on) and [`turn_off`](crate::Device::turn_off).
///
/// # Examples
///
/// ```
/// use domo_lib::types::PowerState;
///
/// let on = PowerState::On;
/// let off = PowerState::Off;
///
/// assert_eq!(on.as_str(), "ON");
/// assert_eq!(off.as_str(), "OFF");
/// assert_eq!(PowerState::default(), PowerState::Off);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum PowerState {
    /// Power is off.
    #[default]
    Off,
    /// Power is on.
    On,
}

impl PowerState {
    /// Returns the status string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::On => "ON",
        }
    }

    /// Returns `true` if the state is [`On`](Self::On).
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PowerState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OFF" | "0" | "FALSE" => Ok(Self::Off),
            "ON" | "1" | "TRUE" => Ok(Self::On),
            _ => Err(ValueError::InvalidPowerState(s.to_string())),
        }
    }
}

impl From<bool> for PowerState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_state_as_str() {
        assert_eq!(PowerState::Off.as_str(), "OFF");
        assert_eq!(PowerState::On.as_str(), "ON");
    }

    #[test]
    fn power_state_default_is_off() {
        assert_eq!(PowerState::default(), PowerState::Off);
    }

    #[test]
    fn power_state_from_str() {
        assert_eq!("ON".parse::<PowerState>().unwrap(), PowerState::On);
        assert_eq!("off".parse::<PowerState>().unwrap(), PowerState::Off);
        assert_eq!("1".parse::<PowerState>().unwrap(), PowerState::On);
        assert_eq!("0".parse::<PowerState>().unwrap(), PowerState::Off);
        assert_eq!("true".parse::<PowerState>().unwrap(), PowerState::On);
        assert_eq!("false".parse::<PowerState>().unwrap(), PowerState::Off);
    }

    #[test]
    fn power_state_from_str_invalid() {
        let result = "invalid".parse::<PowerState>();
        assert!(matches!(
            result.unwrap_err(),
            ValueError::InvalidPowerState(_)
        ));
    }

    #[test]
    fn power_state_from_bool() {
        assert_eq!(PowerState::from(true), PowerState::On);
        assert_eq!(PowerState::from(false), PowerState::Off);
    }
}
