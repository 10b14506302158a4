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

//! Engine-internal device identities and raw input events.
//!
//! Identities are plain values: two presses of the same key compare equal and
//! hash identically, which lets gameplay code use them as map keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A keyboard key, identified by its physical position.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Key {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,
    Escape,
    LControl,
    LShift,
    LAlt,
    LSystem,
    RControl,
    RShift,
    RAlt,
    RSystem,
    Menu,
    Space,
    Enter,
    Backspace,
    Tab,
    PageUp,
    PageDown,
    End,
    Home,
    Insert,
    Delete,
    Left,
    Right,
    Up,
    Down,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    /// A key the engine has no dedicated variant for.
    Unknown,
}

/// A mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// The left mouse button.
    Left,
    /// The right mouse button.
    Right,
    /// The middle mouse button.
    Middle,
    /// The back mouse button (typically on the side).
    Back,
    /// The forward mouse button (typically on the side).
    Forward,
    /// Another mouse button, identified by a numeric code.
    Other(u16),
}

/// A button on a specific joystick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JoystickButton {
    /// The joystick (device) index.
    pub joystick: u32,
    /// The button index on that joystick.
    pub button: u32,
}

impl JoystickButton {
    /// Creates a joystick button identity.
    pub const fn new(joystick: u32, button: u32) -> Self {
        Self { joystick, button }
    }
}

/// The kind of device an [`InputId`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    /// A keyboard.
    Keyboard,
    /// A mouse.
    Mouse,
    /// A joystick or gamepad.
    Joystick,
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceKind::Keyboard => write!(f, "keyboard"),
            DeviceKind::Mouse => write!(f, "mouse"),
            DeviceKind::Joystick => write!(f, "joystick"),
        }
    }
}

/// The identity of a single pressable input, on any device.
///
/// In JSON this is written as `{"keyboard": "Space"}`, `{"mouse": "Left"}` or
/// `{"joystick": {"joystick": 0, "button": 2}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputId {
    /// A keyboard key.
    Keyboard(Key),
    /// A mouse button.
    Mouse(MouseButton),
    /// A joystick button.
    Joystick(JoystickButton),
}

impl InputId {
    /// Returns the device kind this identity belongs to.
    pub fn kind(&self) -> DeviceKind {
        match self {
            InputId::Keyboard(_) => DeviceKind::Keyboard,
            InputId::Mouse(_) => DeviceKind::Mouse,
            InputId::Joystick(_) => DeviceKind::Joystick,
        }
    }

    /// Shorthand for a joystick button identity.
    pub const fn joystick(joystick: u32, button: u32) -> Self {
        InputId::Joystick(JoystickButton::new(joystick, button))
    }
}

impl From<Key> for InputId {
    fn from(key: Key) -> Self {
        InputId::Keyboard(key)
    }
}

impl From<MouseButton> for InputId {
    fn from(button: MouseButton) -> Self {
        InputId::Mouse(button)
    }
}

impl From<JoystickButton> for InputId {
    fn from(button: JoystickButton) -> Self {
        InputId::Joystick(button)
    }
}

/// A backend-agnostic raw input event, as delivered once per frame by the
/// input-polling backend.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key or button went down.
    Pressed(InputId),
    /// A key or button went up.
    Released(InputId),
    /// The mouse cursor moved.
    MouseMoved {
        /// The new x-coordinate of the cursor.
        x: f32,
        /// The new y-coordinate of the cursor.
        y: f32,
    },
    /// The mouse wheel was scrolled.
    MouseWheelScrolled {
        /// The horizontal scroll delta.
        delta_x: f32,
        /// The vertical scroll delta.
        delta_y: f32,
    },
}

impl InputEvent {
    /// Returns the identity that went down, if this is a press.
    pub fn pressed(&self) -> Option<InputId> {
        match self {
            InputEvent::Pressed(id) => Some(*id),
            _ => None,
        }
    }

    /// Returns the identity that went up, if this is a release.
    pub fn released(&self) -> Option<InputId> {
        match self {
            InputEvent::Released(id) => Some(*id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn input_id_reports_its_device_kind() {
        assert_eq!(InputId::Keyboard(Key::Space).kind(), DeviceKind::Keyboard);
        assert_eq!(InputId::Mouse(MouseButton::Left).kind(), DeviceKind::Mouse);
        assert_eq!(InputId::joystick(0, 3).kind(), DeviceKind::Joystick);
    }

    #[test]
    fn identities_hash_by_value() {
        let mut set = HashSet::new();
        set.insert(InputId::joystick(1, 2));
        set.insert(InputId::joystick(1, 2));
        set.insert(InputId::joystick(2, 1));
        set.insert(Key::A.into());
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn input_id_json_shape() {
        let id: InputId = serde_json::from_str(r#"{"keyboard":"Space"}"#).unwrap();
        assert_eq!(id, InputId::Keyboard(Key::Space));

        let id: InputId =
            serde_json::from_str(r#"{"joystick":{"joystick":0,"button":2}}"#).unwrap();
        assert_eq!(id, InputId::joystick(0, 2));

        let id: InputId = serde_json::from_str(r#"{"mouse":{"Other":9}}"#).unwrap();
        assert_eq!(id, InputId::Mouse(MouseButton::Other(9)));
    }

    #[test]
    fn event_accessors() {
        let down = InputEvent::Pressed(Key::Enter.into());
        let up = InputEvent::Released(Key::Enter.into());
        let moved = InputEvent::MouseMoved { x: 1.0, y: 2.0 };

        assert_eq!(down.pressed(), Some(InputId::Keyboard(Key::Enter)));
        assert_eq!(down.released(), None);
        assert_eq!(up.released(), Some(InputId::Keyboard(Key::Enter)));
        assert_eq!(moved.pressed(), None);
        assert_eq!(moved.released(), None);
    }
}
