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

//! Scripted quick-time challenges.
//!
//! A challenge pairs a QTE definition with a timed list of inputs. The replay
//! drives a [`Game`] at a fixed frame rate on a [`SimulatedTimeline`], so the
//! outcome is identical on every machine.

use serde::{Deserialize, Serialize};
use sonar_sdk::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

/// One scripted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedInput {
    /// Seconds since the start of the replay.
    pub at: f32,
    /// The input pressed at that moment.
    pub input: InputId,
}

/// A challenge file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    /// Diagnostic settings.
    #[serde(default)]
    pub debug: DebugConfig,
    /// The quick-time event to perform.
    pub qte: QteDefinition,
    /// Bounds of the combo meter.
    #[serde(default)]
    pub sequence: SequenceSettings,
    /// The inputs to replay, in any order.
    #[serde(default)]
    pub script: Vec<ScriptedInput>,
}

impl Challenge {
    /// Parses a challenge from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// How a replay ended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChallengeReport {
    /// Whether every step was performed.
    pub completed: bool,
    /// The QTE cursor when the replay stopped.
    pub position: usize,
    /// Number of steps in the QTE.
    pub steps: usize,
    /// Failures counted by the QTE.
    pub failures: u32,
    /// The combo meter when the replay stopped.
    pub combo: f32,
    /// The highest combo reached.
    pub best_combo: f32,
    /// Frames run.
    pub frames: u64,
    /// Simulated time at the end of the replay.
    pub elapsed: Duration,
}

/// A [`GameState`] feeding every press into a QTE and a combo meter.
///
/// Each performed step adds one to the combo; any failure drains it.
pub struct QteChallengeState {
    qte: Qte<ManualClock>,
    combo: Sequence<ManualClock>,
    report: Rc<RefCell<ChallengeReport>>,
}

impl QteChallengeState {
    /// Builds the state and the report it keeps up to date.
    pub fn new(
        qte: Qte<ManualClock>,
        combo: Sequence<ManualClock>,
    ) -> (Self, Rc<RefCell<ChallengeReport>>) {
        let report = Rc::new(RefCell::new(ChallengeReport {
            steps: qte.event_count(),
            combo: combo.count(),
            best_combo: combo.count(),
            ..ChallengeReport::default()
        }));
        let state = Self {
            qte,
            combo,
            report: report.clone(),
        };
        (state, report)
    }

    fn record(&mut self, input: Option<InputId>, outcome: QteOutcome) {
        match outcome {
            QteOutcome::Started | QteOutcome::Advanced { .. } | QteOutcome::Completed => {
                if let Some(input) = input {
                    self.combo.press(input, 1.0, Direction::Up);
                }
            }
            QteOutcome::Failed { reason, restarted } => {
                log::info!(
                    "Step {} failed: {:?}{}",
                    self.qte.event_position(),
                    reason,
                    if restarted { " (restarted)" } else { "" }
                );
                self.combo.set_count(self.combo.min());
            }
            QteOutcome::Ignored | QteOutcome::Pending => {}
        }
        if outcome == QteOutcome::Completed {
            log::info!("QTE completed");
        }

        let mut report = self.report.borrow_mut();
        report.completed = self.qte.is_complete();
        report.position = self.qte.event_position();
        report.failures = self.qte.failure_count();
        report.combo = self.combo.count();
        report.best_combo = report.best_combo.max(report.combo);
    }
}

impl GameState for QteChallengeState {
    fn init(&mut self) {
        log::info!(
            "Challenge started: {} {} step(s)",
            self.qte.event_count(),
            self.qte.kind()
        );
    }

    fn handle_input(&mut self, event: &InputEvent) {
        if let Some(input) = event.pressed() {
            let outcome = self.qte.next_input(input);
            self.record(Some(input), outcome);
        }
    }

    fn update(&mut self, _dt: f32) {
        let outcome = self.qte.update();
        self.record(None, outcome);
    }

    fn is_finished(&self) -> bool {
        self.qte.is_complete()
    }
}

/// Replays `challenge` at `fps` frames per second for at most `max_seconds`.
///
/// Scripted inputs are delivered in the first frame whose end time is at or
/// after their timestamp.
pub fn replay(
    challenge: &Challenge,
    fps: u32,
    max_seconds: f32,
    logger: Arc<dyn Logger>,
) -> anyhow::Result<ChallengeReport> {
    anyhow::ensure!(fps > 0, "frame rate must be positive");
    let frame = Duration::from_secs(1) / fps;
    anyhow::ensure!(
        frame >= Duration::from_micros(1),
        "frame rate too high: {fps} fps is below the timeline's microsecond resolution"
    );
    let limit = Duration::try_from_secs_f32(max_seconds)
        .map_err(|_| anyhow::anyhow!("invalid time limit: {max_seconds}"))?;

    let timeline = SimulatedTimeline::new();
    let qte = Qte::from_definition(&challenge.qte, timeline.clock())?.with_logger(logger.clone());
    let combo = challenge
        .sequence
        .build(timeline.clock())?
        .with_logger(logger);
    let (state, report) = QteChallengeState::new(qte, combo);

    let mut script = challenge.script.clone();
    script.sort_by(|a, b| a.at.total_cmp(&b.at));
    let mut script = script.into_iter().peekable();

    let mut game = Game::with_initial_state(Box::new(state));
    let dt = frame.as_secs_f32();
    loop {
        timeline.advance(frame);
        let now = timeline.now();

        let mut events = Vec::new();
        while let Some(next) = script.next_if(|entry| entry.at <= now.as_secs_f32()) {
            events.push(InputEvent::Pressed(next.input));
        }
        game.run_frame(&events, dt);

        if game.is_finished() || now >= limit {
            break;
        }
    }

    let mut report = report.borrow().clone();
    report.frames = game.frame_count();
    report.elapsed = timeline.now();
    Ok(report)
}
