// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for appliance control.
//!
//! This module provides type-safe representations of the values appliances
//! accept. Each type ensures values are within their valid ranges at
//! construction time, preventing runtime errors.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off power state
//! - [`DeviceName`] - Non-empty appliance name
//! - [`Brightness`] - Light brightness (0-100%)
//! - [`FanSpeed`] - Fan speed level (0-5)
//! - [`Channel`] - Non-empty TV channel name

mod brightness;
mod channel;
mod name;
mod power;
mod speed;

pub use brightness::Brightness;
pub use channel::Channel;
pub use name::DeviceName;
pub use power::PowerState;
pub use speed::FanSpeed;
