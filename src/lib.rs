// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `Domo` Lib - A Rust library modelling a closed set of smart home appliances.
//!
//! This library provides type-safe representations of a small fixed set of
//! appliances (lights, fans, smart TVs), each with a name, a power state,
//! and one adjustable attribute with its own valid range.
//!
//! # Design
//!
//! - **Fallible construction**: an appliance either exists with valid state
//!   or is never created; there is no half-initialized device.
//! - **Typed values**: brightness, fan speed, and channel are constrained
//!   types validated at construction ([`Brightness`], [`FanSpeed`],
//!   [`Channel`]).
//! - **Power gating**: attribute setters fail with
//!   [`StateError::PoweredOff`](error::StateError::PoweredOff) while the
//!   appliance is off and leave the attribute unchanged.
//! - **Closed set**: [`Device`] is a sum type over the three variants;
//!   adding a kind is a compile-time change, not a runtime registration.
//!
//! # Quick Start
//!
//! ```
//! use domo_lib::{Light, types::Brightness};
//!
//! fn main() -> domo_lib::Result<()> {
//!     let mut light = Light::new("Living Room Light", 50)?;
//!
//!     light.turn_on();
//!     light.set_brightness(Brightness::new(80)?)?;
//!
//!     assert_eq!(
//!         light.to_string(),
//!         "Light [Living Room Light] - Power: ON, Brightness: 80%"
//!     );
//!
//!     // Setters are rejected while the appliance is off.
//!     light.turn_off();
//!     assert!(light.set_brightness(Brightness::MAX).is_err());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Mixed collections
//!
//! ```
//! use domo_lib::{Device, Fan, Light, SmartTv};
//!
//! fn main() -> domo_lib::Result<()> {
//!     let mut devices: Vec<Device> = vec![
//!         Light::new("Living Room Light", 50)?.into(),
//!         Fan::new("Bedroom Fan", 3)?.into(),
//!         SmartTv::new("Samsung TV", "Netflix")?.into(),
//!     ];
//!
//!     for device in &mut devices {
//!         device.turn_on();
//!         println!("{device}");
//!     }
//!
//!     Ok(())
//! }
//! ```

mod device;
pub mod error;
pub mod types;

pub use device::{Attribute, Device, DeviceKind, DeviceSnapshot, Fan, Light, SmartTv};
pub use error::{Error, Result, StateError, ValueError};
pub use types::{Brightness, Channel, DeviceName, FanSpeed, PowerState};
