// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `domo_lib` library.
//!
//! This module provides the error hierarchy for the two ways an appliance
//! operation can fail: a value outside its constraints, or a mutation
//! attempted while the appliance is powered off.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Operation was rejected by the appliance's current state.
    #[error("state error: {0}")]
    State(#[from] StateError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// A device name was empty or contained only whitespace.
    #[error("device name must not be empty")]
    EmptyName,

    /// A channel name was empty or contained only whitespace.
    #[error("channel must not be empty")]
    EmptyChannel,

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),
}

/// Errors caused by the appliance's power state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    /// A mutation was attempted while the appliance was powered off.
    #[error("{device} is OFF, turn it on first")]
    PoweredOff {
        /// Name of the appliance that rejected the operation.
        device: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
