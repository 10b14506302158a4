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

//! The public-facing Software Development Kit (SDK) for the Sonar engine.
//!
//! Games implement [`GameState`] for each of their screens and drive a
//! [`Game`] once per frame with the translated input events of that frame.

#![warn(missing_docs)]

pub mod game;
pub mod state;

pub use game::Game;
pub use state::{GameState, StateMachine};

/// Everything a game typically needs, in one import.
pub mod prelude {
    pub use crate::{Game, GameState, StateMachine};
    pub use sonar_core::{
        Clock, DebugConfig, DebugLog, DeviceKind, InputEvent, InputId, JoystickButton, Key,
        LogFacade, Logger, ManualClock, MouseButton, SimulatedTimeline, SystemClock,
    };
    pub use sonar_input::{
        ChordTracker, Direction, FailureReason, Qte, QteDefinition, QteError, QteOutcome,
        Sequence, SequenceError, SequenceSettings,
    };
}
