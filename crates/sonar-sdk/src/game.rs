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

//! The frame loop driving the active [`GameState`].

use crate::state::{GameState, StateMachine};
use sonar_core::InputEvent;

/// Owns the state stack and runs it one frame at a time.
///
/// The caller supplies the frame's input events and delta time, which keeps
/// the loop independent of any window or clock backend.
#[derive(Default)]
pub struct Game {
    states: StateMachine,
    frame: u64,
}

impl Game {
    /// Creates a game with an empty state stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a game whose first frame activates `state`.
    pub fn with_initial_state(state: Box<dyn GameState>) -> Self {
        let mut game = Self::new();
        game.states.add_state(state, true);
        game
    }

    /// Runs one frame.
    ///
    /// Pending state changes are applied first. Every event is then forwarded
    /// to the active state, and `update` is called exactly once, after the
    /// inputs.
    pub fn run_frame(&mut self, events: &[InputEvent], dt: f32) {
        self.states.process_state_changes();
        self.frame += 1;

        let Some(state) = self.states.active_state_mut() else {
            log::trace!("Frame {}: no active state", self.frame);
            return;
        };
        for event in events {
            state.handle_input(event);
        }
        state.update(dt);
        log::trace!("Frame {} processed {} events", self.frame, events.len());
    }

    /// Whether there is no active state left, or the active one is finished.
    pub fn is_finished(&self) -> bool {
        self.states
            .active_state()
            .map_or(true, |state| state.is_finished())
    }

    /// Number of frames run so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// The state stack.
    pub fn states(&self) -> &StateMachine {
        &self.states
    }

    /// The state stack, mutably, for scheduling transitions.
    pub fn states_mut(&mut self) -> &mut StateMachine {
        &mut self.states
    }
}
