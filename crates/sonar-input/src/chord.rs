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

//! Held-input tracking for simultaneous chords (e.g. `LSystem + LShift + A`).

use sonar_core::{InputEvent, InputId};
use std::collections::HashSet;

/// Tracks which keys and buttons are currently held down.
#[derive(Debug, Clone, Default)]
pub struct ChordTracker {
    held: HashSet<InputId>,
}

impl ChordTracker {
    /// Creates a tracker with nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the held set from a raw event. Non-button events are ignored.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Pressed(id) => {
                self.held.insert(*id);
            }
            InputEvent::Released(id) => {
                self.held.remove(id);
            }
            _ => {}
        }
    }

    /// Returns `true` if `input` is currently held.
    pub fn is_held(&self, input: InputId) -> bool {
        self.held.contains(&input)
    }

    /// Returns `true` if every input of a non-empty `chord` is held.
    pub fn chord_pressed(&self, chord: &[InputId]) -> bool {
        !chord.is_empty() && chord.iter().all(|id| self.held.contains(id))
    }

    /// Iterates over the currently held inputs, in no particular order.
    pub fn held(&self) -> impl Iterator<Item = &InputId> {
        self.held.iter()
    }

    /// Forgets every held input (e.g. when the window loses focus).
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sonar_core::{Key, MouseButton};

    #[test]
    fn chord_requires_every_member_held() {
        let mut tracker = ChordTracker::new();
        let chord = [
            InputId::Keyboard(Key::LSystem),
            InputId::Keyboard(Key::LShift),
            InputId::Keyboard(Key::A),
        ];

        tracker.handle_event(&InputEvent::Pressed(Key::LSystem.into()));
        tracker.handle_event(&InputEvent::Pressed(Key::LShift.into()));
        assert!(!tracker.chord_pressed(&chord));

        tracker.handle_event(&InputEvent::Pressed(Key::A.into()));
        assert!(tracker.chord_pressed(&chord));

        tracker.handle_event(&InputEvent::Released(Key::LShift.into()));
        assert!(!tracker.chord_pressed(&chord));
    }

    #[test]
    fn joystick_chords_are_per_device() {
        let mut tracker = ChordTracker::new();
        tracker.handle_event(&InputEvent::Pressed(InputId::joystick(0, 1)));
        tracker.handle_event(&InputEvent::Pressed(InputId::joystick(1, 2)));

        assert!(!tracker.chord_pressed(&[InputId::joystick(0, 1), InputId::joystick(0, 2)]));
        assert!(tracker.chord_pressed(&[InputId::joystick(0, 1), InputId::joystick(1, 2)]));
    }

    #[test]
    fn empty_chord_is_never_pressed() {
        let mut tracker = ChordTracker::new();
        tracker.handle_event(&InputEvent::Pressed(MouseButton::Left.into()));
        assert!(!tracker.chord_pressed(&[]));
    }

    #[test]
    fn pointer_motion_is_ignored_and_clear_releases_all() {
        let mut tracker = ChordTracker::new();
        tracker.handle_event(&InputEvent::MouseMoved { x: 3.0, y: 4.0 });
        assert_eq!(tracker.held().count(), 0);

        tracker.handle_event(&InputEvent::Pressed(Key::Q.into()));
        assert!(tracker.is_held(Key::Q.into()));
        tracker.clear();
        assert!(!tracker.is_held(Key::Q.into()));
    }
}
