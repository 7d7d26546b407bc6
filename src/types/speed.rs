// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan speed type.
//!
//! This module provides a type-safe representation of fan speed levels.
//! Level 0 means the rotor is stopped even while the fan is powered on.

use std::fmt;

use crate::error::ValueError;

/// Fan speed level (0-5).
///
/// # Examples
///
/// ```
/// use domo_lib::types::FanSpeed;
///
/// // Create a medium speed
/// let speed = FanSpeed::new(3).unwrap();
/// assert_eq!(speed.value(), 3);
///
/// // Use predefined values
/// let stopped = FanSpeed::STOPPED;
/// let full = FanSpeed::MAX;
/// assert_eq!(stopped.value(), 0);
/// assert_eq!(full.value(), 5);
///
/// // Invalid values return error
/// assert!(FanSpeed::new(6).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct FanSpeed(u8);

impl FanSpeed {
    /// Minimum speed level (rotor stopped).
    pub const STOPPED: Self = Self(0);

    /// Maximum speed level.
    pub const MAX: Self = Self(5);

    /// Creates a new fan speed level.
    ///
    /// # Arguments
    ///
    /// * `value` - The speed level (0-5)
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 5.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > Self::MAX.0 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: u16::from(Self::MAX.0),
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a fan speed, clamping to the valid range.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > Self::MAX.0 { Self::MAX } else { Self(value) }
    }

    /// Returns the speed level.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns whether the rotor is stopped (level 0).
    #[must_use]
    pub const fn is_stopped(&self) -> bool {
        self.0 == 0
    }
}

impl Default for FanSpeed {
    fn default() -> Self {
        Self::STOPPED
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for FanSpeed {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FanSpeed> for u8 {
    fn from(value: FanSpeed) -> Self {
        value.0
    }
}
