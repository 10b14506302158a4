// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Configuration errors raised when building input objects.
//!
//! Gameplay failures (a wrong key, a missed window) are never errors; they are
//! counted by the objects themselves.

use sonar_core::DeviceKind;
use thiserror::Error;

/// An error raised when a quick-time event is built from an invalid definition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QteError {
    /// The event list and the time list do not have the same length.
    #[error("QTE has {events} events but {times} time limits")]
    LengthMismatch {
        /// Number of events supplied.
        events: usize,
        /// Number of time limits supplied.
        times: usize,
    },
    /// The events do not all come from the same kind of device.
    #[error("QTE event {index} is a {found} input, expected {expected}")]
    MixedDeviceKinds {
        /// Index of the first offending event.
        index: usize,
        /// Device kind of the first event.
        expected: DeviceKind,
        /// Device kind of the offending event.
        found: DeviceKind,
    },
    /// A time limit is negative, NaN or infinite.
    #[error("QTE time limit {index} is invalid: {value}")]
    InvalidTimeLimit {
        /// Index of the offending time limit.
        index: usize,
        /// The rejected value, in seconds.
        value: f32,
    },
}

/// An error raised when a sequence is given invalid bounds.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SequenceError {
    /// `min` is greater than `max`, or one of them is not finite.
    #[error("invalid sequence bounds: min {min} must be <= max {max} and both finite")]
    InvalidBounds {
        /// The rejected lower bound.
        min: f32,
        /// The rejected upper bound.
        max: f32,
    },
}
