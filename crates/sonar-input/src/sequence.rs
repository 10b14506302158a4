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

//! A bounded counter driven by device presses.
//!
//! A [`Sequence`] is one independent progress meter (a combo counter, a
//! mash-to-escape gauge). Every press nudges the counter and also records the
//! instant at which that particular key or button was last pressed, which
//! callers use for hold and chord detection.

use crate::error::SequenceError;
use serde::{Deserialize, Serialize};
use sonar_core::{Clock, InputId, JoystickButton, Key, LogFacade, Logger, MouseButton, SystemClock};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

const LOG_CATEGORY: &str = "sequence";

/// Which way a press moves the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Increase the counter.
    #[default]
    Up,
    /// Decrease the counter.
    Down,
}

/// A bounded counter with per-input press timers.
pub struct Sequence<C: Clock = SystemClock> {
    count: f32,
    min: f32,
    max: f32,
    clock: C,
    last_press: HashMap<InputId, Duration>,
    logger: Arc<dyn Logger>,
}

fn check_bounds(min: f32, max: f32) -> Result<(), SequenceError> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(SequenceError::InvalidBounds { min, max });
    }
    Ok(())
}

impl Sequence<SystemClock> {
    /// Creates a sequence over `[min, max]` timed by the system clock. The
    /// counter starts at `min`.
    pub fn new(min: f32, max: f32) -> Result<Self, SequenceError> {
        Self::with_clock(min, max, SystemClock::new())
    }
}

impl Default for Sequence<SystemClock> {
    fn default() -> Self {
        Self {
            count: 0.0,
            min: 0.0,
            max: 100.0,
            clock: SystemClock::new(),
            last_press: HashMap::new(),
            logger: Arc::new(LogFacade),
        }
    }
}

impl<C: Clock> Sequence<C> {
    /// Creates a sequence over `[min, max]` timed by `clock`. The counter
    /// starts at `min`.
    pub fn with_clock(min: f32, max: f32, clock: C) -> Result<Self, SequenceError> {
        check_bounds(min, max)?;
        Ok(Self {
            count: min,
            min,
            max,
            clock,
            last_press: HashMap::new(),
            logger: Arc::new(LogFacade),
        })
    }

    /// Replaces the logger used for diagnostics.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Adds `amount` to the counter. Unless `can_go_over` is set, the result
    /// is clamped to `max`.
    pub fn tick_up(&mut self, amount: f32, can_go_over: bool) {
        self.count += amount;
        if !can_go_over && self.count > self.max {
            self.count = self.max;
        }
    }

    /// Subtracts `amount` from the counter. Unless `can_go_under` is set, the
    /// result is clamped to `min`.
    pub fn tick_down(&mut self, amount: f32, can_go_under: bool) {
        self.count -= amount;
        if !can_go_under && self.count < self.min {
            self.count = self.min;
        }
    }

    /// Records a press of `input` at the current clock time, then ticks the
    /// counter by `amount` in `direction` (clamped to the bounds).
    pub fn press(&mut self, input: InputId, amount: f32, direction: Direction) {
        let now = self.clock.elapsed();
        self.last_press.insert(input, now);

        match direction {
            Direction::Up => self.tick_up(amount, false),
            Direction::Down => self.tick_down(amount, false),
        }

        self.logger.log(
            &format!("{input:?} pressed at {now:?}, count is now {}", self.count),
            LOG_CATEGORY,
        );
    }

    /// [`press`](Self::press) for a keyboard key.
    pub fn keyboard_press(&mut self, key: Key, amount: f32, direction: Direction) {
        self.press(InputId::Keyboard(key), amount, direction);
    }

    /// [`press`](Self::press) for a mouse button.
    pub fn mouse_press(&mut self, button: MouseButton, amount: f32, direction: Direction) {
        self.press(InputId::Mouse(button), amount, direction);
    }

    /// [`press`](Self::press) for a joystick button.
    pub fn joystick_press(&mut self, joystick: u32, button: u32, amount: f32, direction: Direction) {
        self.press(InputId::joystick(joystick, button), amount, direction);
    }

    /// Time elapsed since `input` was last pressed, or [`Duration::MAX`] if it
    /// never was.
    pub fn pressed_timer(&self, input: InputId) -> Duration {
        match self.last_press.get(&input) {
            Some(at) => self.clock.elapsed().saturating_sub(*at),
            None => Duration::MAX,
        }
    }

    /// [`pressed_timer`](Self::pressed_timer) for a keyboard key.
    pub fn keyboard_pressed_timer(&self, key: Key) -> Duration {
        self.pressed_timer(InputId::Keyboard(key))
    }

    /// [`pressed_timer`](Self::pressed_timer) for a mouse button.
    pub fn mouse_pressed_timer(&self, button: MouseButton) -> Duration {
        self.pressed_timer(InputId::Mouse(button))
    }

    /// [`pressed_timer`](Self::pressed_timer) for a joystick button.
    pub fn joystick_pressed_timer(&self, joystick: u32, button: u32) -> Duration {
        self.pressed_timer(InputId::Joystick(JoystickButton::new(joystick, button)))
    }

    /// Returns `true` if every input in `chord` was pressed within the last
    /// `window`. An empty chord is never pressed.
    pub fn pressed_within(&self, chord: &[InputId], window: Duration) -> bool {
        !chord.is_empty() && chord.iter().all(|id| self.pressed_timer(*id) <= window)
    }

    /// Overwrites the counter without clamping.
    pub fn set_count(&mut self, count: f32) {
        self.count = count;
    }

    /// Sets the lower bound. Rejected if it would exceed `max`.
    pub fn set_min(&mut self, min: f32) -> Result<(), SequenceError> {
        check_bounds(min, self.max)?;
        self.min = min;
        Ok(())
    }

    /// Sets the upper bound. Rejected if it would fall below `min`.
    pub fn set_max(&mut self, max: f32) -> Result<(), SequenceError> {
        check_bounds(self.min, max)?;
        self.max = max;
        Ok(())
    }

    /// The current counter value.
    pub fn count(&self) -> f32 {
        self.count
    }

    /// The inclusive lower bound.
    pub fn min(&self) -> f32 {
        self.min
    }

    /// The inclusive upper bound.
    pub fn max(&self) -> f32 {
        self.max
    }

    /// The clock used for press timers.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: Clock + fmt::Debug> fmt::Debug for Sequence<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("count", &self.count)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("clock", &self.clock)
            .field("tracked_inputs", &self.last_press.len())
            .finish_non_exhaustive()
    }
}
