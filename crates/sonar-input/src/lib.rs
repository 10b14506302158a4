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

//! # Sonar Input
//!
//! Timing-sensitive gameplay input built on the identities and clocks of
//! `sonar-core`:
//!
//! - [`Qte`]: a quick-time event, an ordered list of inputs with per-step
//!   time budgets, failure counting and optional automatic restarts.
//! - [`Sequence`]: a bounded counter nudged by device presses, with a
//!   last-press timer per input identity.
//! - [`ChordTracker`]: the set of currently held inputs, for simultaneous
//!   chords.
//!
//! All of them are single-threaded and frame-driven. Each owns its clock; the
//! game loop feeds inputs and, for a QTE, calls [`Qte::update`] once per frame
//! after the inputs.

#![warn(missing_docs)]

pub mod chord;
pub mod config;
pub mod error;
pub mod qte;
pub mod sequence;

pub use chord::ChordTracker;
pub use config::{QteDefinition, QteStep, SequenceSettings};
pub use error::{QteError, SequenceError};
pub use qte::{FailureReason, Qte, QteOutcome};
pub use sequence::{Direction, Sequence};
