// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! TV channel type.

use std::fmt;

use crate::error::ValueError;

/// A TV channel, identified by a non-empty name.
///
/// # Examples
///
/// ```
/// use domo_lib::types::Channel;
///
/// let channel = Channel::new("Netflix").unwrap();
/// assert_eq!(channel.as_str(), "Netflix");
///
/// // Empty or blank channels are rejected
/// assert!(Channel::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Channel(String);

impl Channel {
    /// Creates a new channel.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::EmptyChannel` if the name is empty or contains
    /// only whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ValueError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValueError::EmptyChannel);
        }
        Ok(Self(name))
    }

    /// Returns the channel name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Channel {
    type Error = ValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Channel {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Channel> for String {
    fn from(value: Channel) -> Self {
        value.0
    }
}

impl AsRef<str> for Channel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
