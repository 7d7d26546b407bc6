// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smart TV appliance.

use std::fmt;

use crate::error::{Error, StateError, ValueError};
use crate::types::{Channel, DeviceName, PowerState};

use super::snapshot::{Attribute, DeviceSnapshot};
use super::{DeviceCore, DeviceKind};

/// A smart TV tuned to a named channel.
///
/// The channel can only be changed while the TV is powered on; a rejected
/// change leaves the current channel untouched.
///
/// # Examples
///
/// ```
/// use domo_lib::{SmartTv, types::Channel};
///
/// let mut tv = SmartTv::new("Samsung TV", "Netflix")?;
/// tv.turn_on();
/// tv.change_channel(Channel::new("StarSports")?)?;
/// assert_eq!(tv.channel().as_str(), "StarSports");
/// # Ok::<(), domo_lib::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SmartTv {
    #[serde(flatten)]
    core: DeviceCore,
    channel: Channel,
}

impl SmartTv {
    /// Creates a new TV, powered off.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::EmptyName` if the name is blank, or
    /// `ValueError::EmptyChannel` if the channel is blank.
    pub fn new(name: impl Into<String>, channel: impl Into<String>) -> Result<Self, ValueError> {
        Ok(Self {
            core: DeviceCore::new(name)?,
            channel: Channel::new(channel)?,
        })
    }

    /// Returns the TV's name.
    #[must_use]
    pub fn name(&self) -> &DeviceName {
        self.core.name()
    }

    /// Returns the current power state.
    #[must_use]
    pub fn power(&self) -> PowerState {
        self.core.power()
    }

    /// Returns `true` if the TV is powered on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.core.power().is_on()
    }

    /// Returns the channel the TV is tuned to.
    #[must_use]
    pub const fn channel(&self) -> &Channel {
        &self.channel
    }

    /// Turns the TV on. Idempotent.
    pub fn turn_on(&mut self) {
        self.core.turn_on();
    }

    /// Turns the TV off. Idempotent.
    pub fn turn_off(&mut self) {
        self.core.turn_off();
    }

    /// Tunes the TV to another channel.
    ///
    /// # Errors
    ///
    /// Returns `StateError::PoweredOff` if the TV is off. The current
    /// channel is unchanged on error.
    pub fn change_channel(&mut self, channel: Channel) -> Result<(), StateError> {
        self.core.ensure_on()?;
        self.apply_channel(channel);
        Ok(())
    }

    /// Tunes the TV from a raw channel name, validating it first.
    ///
    /// The power gate is checked before the value.
    ///
    /// # Errors
    ///
    /// Returns `Error::State` if the TV is off, `Error::Value` if the
    /// channel name is blank.
    pub fn try_change_channel(&mut self, channel: &str) -> Result<(), Error> {
        self.core.ensure_on()?;
        self.apply_channel(Channel::new(channel)?);
        Ok(())
    }

    fn apply_channel(&mut self, channel: Channel) {
        tracing::debug!(device = %self.core.name(), channel = %channel, "channel changed");
        self.channel = channel;
    }

    /// Captures the externally observable state of the TV.
    #[must_use]
    pub fn snapshot(&self) -> DeviceSnapshot {
        DeviceSnapshot {
            kind: DeviceKind::SmartTv,
            name: self.core.name().as_str().to_string(),
            power: self.core.power(),
            attribute: Attribute::Channel(self.channel.clone()),
        }
    }
}

impl fmt::Display for SmartTv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Smart TV [{}] - Power: {}, Channel: {}",
            self.core.name(),
            self.core.power(),
            self.channel
        )
    }
}
