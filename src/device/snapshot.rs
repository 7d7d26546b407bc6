// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Point-in-time appliance state snapshots.
//!
//! A snapshot is an owned record of everything an appliance reports about
//! itself. It lets callers inspect or serialize device state without
//! parsing status strings.

use crate::types::{Brightness, Channel, FanSpeed, PowerState};

use super::DeviceKind;

/// The kind-specific attribute carried by a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Brightness of a light (0-100%).
    Brightness(Brightness),
    /// Speed level of a fan (0-5).
    Speed(FanSpeed),
    /// Channel a TV is tuned to.
    Channel(Channel),
}

/// Externally observable state of an appliance at one point in time.
///
/// # Examples
///
/// ```
/// use domo_lib::{Device, DeviceKind, Light};
/// use domo_lib::types::PowerState;
///
/// let device: Device = Light::new("Living Room Light", 50)?.into();
/// let snapshot = device.snapshot();
/// assert_eq!(snapshot.kind, DeviceKind::Light);
/// assert_eq!(snapshot.name, "Living Room Light");
/// assert_eq!(snapshot.power, PowerState::Off);
/// # Ok::<(), domo_lib::ValueError>(())
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DeviceSnapshot {
    /// The appliance kind.
    pub kind: DeviceKind,
    /// The appliance name.
    pub name: String,
    /// Power state at capture time.
    pub power: PowerState,
    /// Kind-specific attribute at capture time.
    #[serde(flatten)]
    pub attribute: Attribute,
}
