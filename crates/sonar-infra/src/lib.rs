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

//! # Sonar Infra
//!
//! Adapters between third-party backends and the engine's abstract input
//! model: `winit` window events, `gilrs` gamepad events and the `env_logger`
//! logging backend.

#![warn(missing_docs)]

pub mod logging;
pub mod platform;

pub use logging::init_logging;
pub use platform::gamepad::{
    map_gamepad_button, translate_gamepad_button, translate_gilrs_event, GamepadPoller,
};
pub use platform::input::{map_keycode, map_mouse_button, translate_winit_input};
