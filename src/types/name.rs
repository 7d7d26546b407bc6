// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device name type.
//!
//! A name is the only identity an appliance carries, so it must not be
//! empty or whitespace-only.

use std::fmt;

use crate::error::ValueError;

/// Human-readable name identifying an appliance.
///
/// # Examples
///
/// ```
/// use domo_lib::types::DeviceName;
///
/// let name = DeviceName::new("Living Room Light").unwrap();
/// assert_eq!(name.as_str(), "Living Room Light");
///
/// // Empty or blank names are rejected
/// assert!(DeviceName::new("").is_err());
/// assert!(DeviceName::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeviceName(String);

impl DeviceName {
    /// Creates a new device name.
    ///
    /// Surrounding whitespace is kept as-is; only fully blank input is
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::EmptyName` if the name is empty or contains
    /// only whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ValueError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValueError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for DeviceName {
    type Error = ValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for DeviceName {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DeviceName> for String {
    fn from(value: DeviceName) -> Self {
        value.0
    }
}

impl AsRef<str> for DeviceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
