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

//! # Sonar Core
//!
//! Foundational crate containing the clock abstraction, device identity
//! types and the injected logging capability shared by every other Sonar
//! crate.

#![warn(missing_docs)]

pub mod clock;
pub mod config;
pub mod debug;
pub mod platform;
pub mod utils;

pub use clock::{Clock, ManualClock, SimulatedTimeline, SystemClock};
pub use config::{CategoryConfig, DebugConfig};
pub use debug::{DebugLog, LogFacade, Logger};
pub use platform::input::{
    DeviceKind, InputEvent, InputId, JoystickButton, Key, MouseButton,
};
pub use utils::timer::Stopwatch;
