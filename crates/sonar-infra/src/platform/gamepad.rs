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

//! Gamepad support through `gilrs`.
//!
//! Gamepad buttons are exposed to the rest of the engine as
//! [`InputId::Joystick`] identities: the joystick index is the `gilrs` gamepad
//! id and the button index is the position of the `gilrs` [`Button`] in the
//! standard layout below.

use anyhow::anyhow;
use gilrs::{Button, Event, EventType, Gilrs};
use sonar_core::{InputEvent, InputId, JoystickButton};

/// Maps a `gilrs` button to its index in the standard layout.
///
/// Returns `None` for [`Button::Unknown`].
pub fn map_gamepad_button(button: Button) -> Option<u32> {
    let index = match button {
        Button::South => 0,
        Button::East => 1,
        Button::North => 2,
        Button::West => 3,
        Button::C => 4,
        Button::Z => 5,
        Button::LeftTrigger => 6,
        Button::LeftTrigger2 => 7,
        Button::RightTrigger => 8,
        Button::RightTrigger2 => 9,
        Button::Select => 10,
        Button::Start => 11,
        Button::Mode => 12,
        Button::LeftThumb => 13,
        Button::RightThumb => 14,
        Button::DPadUp => 15,
        Button::DPadDown => 16,
        Button::DPadLeft => 17,
        Button::DPadRight => 18,
        Button::Unknown => return None,
    };
    Some(index)
}

/// Builds the engine event for a button transition on `joystick`.
pub fn translate_gamepad_button(joystick: u32, button: Button, pressed: bool) -> Option<InputEvent> {
    let id = InputId::Joystick(JoystickButton::new(joystick, map_gamepad_button(button)?));
    Some(if pressed {
        InputEvent::Pressed(id)
    } else {
        InputEvent::Released(id)
    })
}

fn translate_event_type(joystick: u32, event: &EventType) -> Option<InputEvent> {
    match event {
        EventType::ButtonPressed(button, _) => translate_gamepad_button(joystick, *button, true),
        EventType::ButtonReleased(button, _) => translate_gamepad_button(joystick, *button, false),
        _ => None,
    }
}

/// Translates a `gilrs` event into Sonar's `InputEvent` format.
///
/// Only button presses and releases are translated. Axis motion, repeats and
/// connection changes yield `None`.
pub fn translate_gilrs_event(event: &Event) -> Option<InputEvent> {
    translate_event_type(usize::from(event.id) as u32, &event.event)
}

/// Owns the `gilrs` context and drains its event queue once per frame.
pub struct GamepadPoller {
    gilrs: Gilrs,
}

impl GamepadPoller {
    /// Opens the platform gamepad backend.
    pub fn new() -> anyhow::Result<Self> {
        let gilrs = Gilrs::new().map_err(|e| anyhow!("failed to initialize gamepad backend: {e}"))?;
        for (id, gamepad) in gilrs.gamepads() {
            log::info!("Gamepad {} connected: {}", id, gamepad.name());
        }
        Ok(Self { gilrs })
    }

    /// Returns every pending button event, in arrival order.
    pub fn poll(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.gilrs.next_event() {
            match event.event {
                EventType::Connected => log::info!("Gamepad {} connected", event.id),
                EventType::Disconnected => log::info!("Gamepad {} disconnected", event.id),
                _ => {}
            }
            if let Some(translated) = translate_gilrs_event(&event) {
                events.push(translated);
            }
        }
        events
    }
}
