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

//! The quick-time event state machine.
//!
//! A [`Qte`] is an ordered list of required inputs, each paired with a time
//! budget. The player has to perform the inputs in order; once the first one
//! lands, every following step must arrive within its budget, measured from
//! the previous successful step.
//!
//! # States
//!
//! ```text
//! NOT_STARTED --first correct input--> IN_PROGRESS --last step--> COMPLETE
//!                                        |     ^
//!                                        +-----+  wrong input / late input / timeout
//!                                                 (failure counted, cursor kept)
//! ```
//!
//! Failures are counted and never terminate the machine. The cursor stays put
//! on a failure; callers that want the player to start over call
//! [`Qte::restart`], or configure a non-zero `reset_amount` so the machine
//! restarts itself every `reset_amount` failures.
//!
//! # Frame ordering
//!
//! Within a frame, feed every input first and call [`Qte::update`] last. The
//! timeout check in `update` measures from the most recent successful step.

use crate::config::QteDefinition;
use crate::error::QteError;
use sonar_core::{
    Clock, DeviceKind, InputId, JoystickButton, Key, LogFacade, Logger, MouseButton, SystemClock,
};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

const LOG_CATEGORY: &str = "qte";

/// Why a step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    /// An input of the right device kind but the wrong identity was supplied.
    WrongInput,
    /// The right input arrived after the step's budget had run out.
    TooLate,
    /// [`Qte::update`] found the step's budget exhausted.
    TimedOut,
}

/// What a call into the state machine did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QteOutcome {
    /// The input was not for this QTE (other device kind) or the QTE is
    /// already complete. Nothing changed.
    Ignored,
    /// Nothing happened this frame.
    Pending,
    /// The first step was performed; the countdown for the next step is running.
    Started,
    /// A step was performed in time; `position` is the new cursor.
    Advanced {
        /// The index of the next expected input.
        position: usize,
    },
    /// The last step was performed; the QTE is complete.
    Completed,
    /// A failure was counted.
    Failed {
        /// What went wrong.
        reason: FailureReason,
        /// `true` if the failure triggered an automatic restart.
        restarted: bool,
    },
}

/// A timed, ordered sequence of required inputs from a single device kind.
pub struct Qte<C: Clock = SystemClock> {
    kind: DeviceKind,
    events: Vec<InputId>,
    time_limits: Vec<Duration>,
    position: usize,
    started: bool,
    clock: C,
    reset_amount: u32,
    failure_count: u32,
    logger: Arc<dyn Logger>,
}

fn parse_time_limits(times: &[f32]) -> Result<Vec<Duration>, QteError> {
    times
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            Duration::try_from_secs_f32(value)
                .map_err(|_| QteError::InvalidTimeLimit { index, value })
        })
        .collect()
}

impl Qte<SystemClock> {
    /// Creates a keyboard QTE timed by the system clock.
    pub fn keyboard(keys: &[Key], times: &[f32], reset_amount: u32) -> Result<Self, QteError> {
        let events = keys.iter().copied().map(InputId::Keyboard).collect();
        Self::build(DeviceKind::Keyboard, events, times, reset_amount, SystemClock::new())
    }

    /// Creates a mouse QTE timed by the system clock.
    pub fn mouse(
        buttons: &[MouseButton],
        times: &[f32],
        reset_amount: u32,
    ) -> Result<Self, QteError> {
        let events = buttons.iter().copied().map(InputId::Mouse).collect();
        Self::build(DeviceKind::Mouse, events, times, reset_amount, SystemClock::new())
    }

    /// Creates a joystick QTE from `(joystick, button)` pairs, timed by the
    /// system clock.
    pub fn joystick(
        buttons: &[(u32, u32)],
        times: &[f32],
        reset_amount: u32,
    ) -> Result<Self, QteError> {
        let events = buttons
            .iter()
            .map(|&(joystick, button)| InputId::joystick(joystick, button))
            .collect();
        Self::build(DeviceKind::Joystick, events, times, reset_amount, SystemClock::new())
    }
}

impl<C: Clock> Qte<C> {
    /// Creates a QTE over arbitrary events timed by `clock`.
    ///
    /// The device kind is taken from the first event; an empty list makes a
    /// keyboard QTE that is complete from the start.
    pub fn with_clock(
        events: Vec<InputId>,
        times: &[f32],
        reset_amount: u32,
        clock: C,
    ) -> Result<Self, QteError> {
        let kind = events
            .first()
            .map_or(DeviceKind::Keyboard, InputId::kind);
        Self::build(kind, events, times, reset_amount, clock)
    }

    /// Creates a QTE from a deserialized definition.
    pub fn from_definition(definition: &QteDefinition, clock: C) -> Result<Self, QteError> {
        let (events, times): (Vec<_>, Vec<_>) = definition
            .steps
            .iter()
            .map(|step| (step.input, step.time_limit))
            .unzip();
        Self::with_clock(events, &times, definition.reset_amount, clock)
    }

    fn build(
        kind: DeviceKind,
        events: Vec<InputId>,
        times: &[f32],
        reset_amount: u32,
        mut clock: C,
    ) -> Result<Self, QteError> {
        if events.len() != times.len() {
            return Err(QteError::LengthMismatch {
                events: events.len(),
                times: times.len(),
            });
        }
        if let Some((index, found)) = events
            .iter()
            .map(InputId::kind)
            .enumerate()
            .find(|(_, k)| *k != kind)
        {
            return Err(QteError::MixedDeviceKinds {
                index,
                expected: kind,
                found,
            });
        }
        let time_limits = parse_time_limits(times)?;
        clock.reset();

        Ok(Self {
            kind,
            events,
            time_limits,
            position: 0,
            started: false,
            clock,
            reset_amount,
            failure_count: 0,
            logger: Arc::new(LogFacade),
        })
    }

    /// Replaces the logger used for diagnostics.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Feeds one input into the state machine.
    pub fn next_input(&mut self, input: InputId) -> QteOutcome {
        if input.kind() != self.kind || self.is_complete() {
            return QteOutcome::Ignored;
        }

        if input != self.events[self.position] {
            return self.fail(FailureReason::WrongInput);
        }

        if !self.started {
            self.started = true;
            self.clock.reset();
            self.logger.log("first input accepted, QTE started", LOG_CATEGORY);
            return match self.advance() {
                QteOutcome::Advanced { .. } => QteOutcome::Started,
                outcome => outcome,
            };
        }

        if self.clock.elapsed() > self.time_limits[self.position] {
            return self.fail(FailureReason::TooLate);
        }

        self.clock.reset();
        self.advance()
    }

    /// [`next_input`](Self::next_input) for a keyboard key.
    pub fn next_input_keyboard(&mut self, key: Key) -> QteOutcome {
        self.next_input(InputId::Keyboard(key))
    }

    /// [`next_input`](Self::next_input) for a mouse button.
    pub fn next_input_mouse(&mut self, button: MouseButton) -> QteOutcome {
        self.next_input(InputId::Mouse(button))
    }

    /// [`next_input`](Self::next_input) for a joystick button.
    pub fn next_input_joystick(&mut self, joystick: u32, button: u32) -> QteOutcome {
        self.next_input(InputId::joystick(joystick, button))
    }

    /// Checks the running step against its budget. Call once per frame, after
    /// every input of the frame has been fed.
    pub fn update(&mut self) -> QteOutcome {
        if !self.started || self.is_complete() {
            return QteOutcome::Pending;
        }
        if self.clock.elapsed() > self.time_limits[self.position] {
            return self.fail(FailureReason::TimedOut);
        }
        QteOutcome::Pending
    }

    /// Moves the cursor back to the first step and stops the countdown. The
    /// failure count is kept.
    pub fn restart(&mut self) {
        self.position = 0;
        self.started = false;
        self.clock.reset();
        self.logger.log("QTE restarted", LOG_CATEGORY);
    }

    fn advance(&mut self) -> QteOutcome {
        self.position += 1;
        if self.is_complete() {
            self.logger.log(
                &format!("QTE complete with {} failure(s)", self.failure_count),
                LOG_CATEGORY,
            );
            QteOutcome::Completed
        } else {
            QteOutcome::Advanced {
                position: self.position,
            }
        }
    }

    fn fail(&mut self, reason: FailureReason) -> QteOutcome {
        self.failure_count += 1;
        if reason != FailureReason::WrongInput {
            // One overrun counts once; the step gets a fresh budget.
            self.clock.reset();
        }
        self.logger.log(
            &format!(
                "step {} failed ({reason:?}), failures: {}",
                self.position, self.failure_count
            ),
            LOG_CATEGORY,
        );

        let restarted = self.reset_amount > 0 && self.failure_count % self.reset_amount == 0;
        if restarted {
            self.restart();
        }
        QteOutcome::Failed { reason, restarted }
    }

    /// Returns `true` once the first input has been performed.
    pub fn has_started(&self) -> bool {
        self.started
    }

    /// The index of the next expected input.
    pub fn event_position(&self) -> usize {
        self.position
    }

    /// Moves the cursor directly. Values past the end are clamped to
    /// [`event_count`](Self::event_count).
    pub fn set_event_position(&mut self, position: usize) {
        self.position = position.min(self.events.len());
    }

    /// The total number of steps.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Every required input, in order.
    pub fn events(&self) -> &[InputId] {
        &self.events
    }

    /// The required keys, or an empty list for a non-keyboard QTE.
    pub fn event_list_keyboard(&self) -> Vec<Key> {
        self.events
            .iter()
            .filter_map(|id| match id {
                InputId::Keyboard(key) => Some(*key),
                _ => None,
            })
            .collect()
    }

    /// The required mouse buttons, or an empty list for a non-mouse QTE.
    pub fn event_list_mouse(&self) -> Vec<MouseButton> {
        self.events
            .iter()
            .filter_map(|id| match id {
                InputId::Mouse(button) => Some(*button),
                _ => None,
            })
            .collect()
    }

    /// The required joystick buttons, or an empty list for a non-joystick QTE.
    pub fn event_list_joystick(&self) -> Vec<JoystickButton> {
        self.events
            .iter()
            .filter_map(|id| match id {
                InputId::Joystick(button) => Some(*button),
                _ => None,
            })
            .collect()
    }

    /// The per-step time budgets.
    pub fn time_limits(&self) -> &[Duration] {
        &self.time_limits
    }

    /// Time left for the running step, or `None` before the first input and
    /// after completion.
    pub fn time_remaining(&self) -> Option<Duration> {
        if !self.started || self.is_complete() {
            return None;
        }
        Some(self.time_limits[self.position].saturating_sub(self.clock.elapsed()))
    }

    /// Returns `true` once every step has been performed.
    pub fn is_complete(&self) -> bool {
        self.position == self.events.len()
    }

    /// The clock timing the running step.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// How many failures have been counted since construction.
    pub fn failure_count(&self) -> u32 {
        self.failure_count
    }

    /// Failures between automatic restarts; `0` disables them.
    pub fn reset_amount(&self) -> u32 {
        self.reset_amount
    }

    /// The device kind every step belongs to.
    pub fn kind(&self) -> DeviceKind {
        self.kind
    }
}

impl<C: Clock + fmt::Debug> fmt::Debug for Qte<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Qte")
            .field("kind", &self.kind)
            .field("events", &self.events)
            .field("time_limits", &self.time_limits)
            .field("position", &self.position)
            .field("started", &self.started)
            .field("clock", &self.clock)
            .field("reset_amount", &self.reset_amount)
            .field("failure_count", &self.failure_count)
            .finish_non_exhaustive()
    }
}
