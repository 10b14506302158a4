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

//! Game states and the stack that owns them.

use sonar_core::InputEvent;

/// One screen or mode of a game: a menu, a level, a quick-time challenge.
///
/// The [`crate::Game`] loop calls [`GameState::handle_input`] for every input
/// event of a frame, then [`GameState::update`] once.
pub trait GameState {
    /// Called once when the state becomes part of the stack.
    fn init(&mut self) {}

    /// Called for each input event of the frame, in arrival order.
    fn handle_input(&mut self, event: &InputEvent);

    /// Called once per frame after all inputs, with the frame time in seconds.
    fn update(&mut self, dt: f32);

    /// Called when another state is pushed on top of this one.
    fn pause(&mut self) {}

    /// Called when this state becomes active again.
    fn resume(&mut self) {}

    /// Whether this state has nothing more to do.
    fn is_finished(&self) -> bool {
        false
    }
}

/// A stack of [`GameState`]s with deferred transitions.
///
/// [`StateMachine::add_state`] and [`StateMachine::remove_state`] only record
/// the request. The stack changes in [`StateMachine::process_state_changes`],
/// so a state can schedule its own replacement from inside `update`.
#[derive(Default)]
pub struct StateMachine {
    states: Vec<Box<dyn GameState>>,
    pending: Option<Box<dyn GameState>>,
    replacing: bool,
    removing: bool,
}

impl StateMachine {
    /// Creates an empty state machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `state` to become active.
    ///
    /// With `replacing`, the current top state is dropped; otherwise it is
    /// paused and resumes once the new state is removed. A second call before
    /// the next [`Self::process_state_changes`] supersedes the first.
    pub fn add_state(&mut self, state: Box<dyn GameState>, replacing: bool) {
        self.pending = Some(state);
        self.replacing = replacing;
    }

    /// Schedules the removal of the active state.
    pub fn remove_state(&mut self) {
        self.removing = true;
    }

    /// Applies the scheduled removal, then the scheduled addition.
    pub fn process_state_changes(&mut self) {
        if std::mem::take(&mut self.removing) && self.states.pop().is_some() {
            log::debug!("State removed, {} remaining", self.states.len());
            if let Some(top) = self.states.last_mut() {
                top.resume();
            }
        }

        if let Some(mut state) = self.pending.take() {
            if let Some(top) = self.states.last_mut() {
                if self.replacing {
                    self.states.pop();
                } else {
                    top.pause();
                }
            }
            state.init();
            self.states.push(state);
            log::debug!(
                "State {} ({} on the stack)",
                if self.replacing { "replaced" } else { "pushed" },
                self.states.len()
            );
        }
    }

    /// The state on top of the stack.
    pub fn active_state(&self) -> Option<&dyn GameState> {
        self.states.last().map(|state| state.as_ref())
    }

    /// The state on top of the stack, mutably.
    pub fn active_state_mut(&mut self) -> Option<&mut (dyn GameState + 'static)> {
        self.states.last_mut().map(|state| state.as_mut())
    }

    /// Number of states on the stack.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
