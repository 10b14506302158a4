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

use sonar_core::{DebugLog, InputId, Key, ManualClock, MouseButton, SimulatedTimeline};
use sonar_input::{FailureReason, Qte, QteDefinition, QteError, QteOutcome};
use std::sync::Arc;
use std::time::Duration;

fn space_enter_qte() -> (SimulatedTimeline, Qte<ManualClock>) {
    let timeline = SimulatedTimeline::new();
    let qte = Qte::with_clock(
        vec![Key::Space.into(), Key::Enter.into()],
        &[2.0, 1.5],
        0,
        timeline.clock(),
    )
    .unwrap();
    (timeline, qte)
}

#[test]
fn test_space_enter_completes_within_budget() {
    let (timeline, mut qte) = space_enter_qte();

    assert_eq!(qte.next_input_keyboard(Key::Space), QteOutcome::Started);
    assert!(qte.has_started());
    assert_eq!(qte.event_position(), 1);

    timeline.advance(Duration::from_secs(1));
    assert_eq!(qte.update(), QteOutcome::Pending);
    assert_eq!(qte.next_input_keyboard(Key::Enter), QteOutcome::Completed);

    assert_eq!(qte.event_position(), 2);
    assert!(qte.is_complete());
    assert_eq!(qte.failure_count(), 0);
}

#[test]
fn test_space_then_silence_times_out_without_restart() {
    let (timeline, mut qte) = space_enter_qte();
    qte.next_input_keyboard(Key::Space);

    timeline.advance(Duration::from_millis(2100));
    assert_eq!(
        qte.update(),
        QteOutcome::Failed {
            reason: FailureReason::TimedOut,
            restarted: false,
        }
    );

    assert_eq!(qte.failure_count(), 1);
    assert_eq!(qte.event_position(), 1);
    assert!(qte.has_started());
    assert!(!qte.is_complete());
}

#[test]
fn test_correct_inputs_drive_to_completion_without_failures() {
    let timeline = SimulatedTimeline::new();
    let buttons = [
        MouseButton::Left,
        MouseButton::Right,
        MouseButton::Left,
        MouseButton::Middle,
    ];
    let mut qte = Qte::with_clock(
        buttons.iter().copied().map(InputId::Mouse).collect(),
        &[1.0, 0.5, 0.5, 0.25],
        0,
        timeline.clock(),
    )
    .unwrap();

    for (index, button) in buttons.iter().enumerate() {
        assert_eq!(qte.is_complete(), qte.event_position() == qte.event_count());
        assert_eq!(qte.event_position(), index);

        timeline.advance(Duration::from_millis(200));
        qte.next_input_mouse(*button);
        qte.update();
        assert_eq!(qte.failure_count(), 0);
    }

    assert!(qte.is_complete());
    assert_eq!(qte.event_position(), qte.event_count());
}

#[test]
fn test_wrong_input_at_every_position_counts_exactly_once() {
    let timeline = SimulatedTimeline::new();
    let mut qte = Qte::with_clock(
        vec![
            InputId::joystick(0, 1),
            InputId::joystick(0, 2),
            InputId::joystick(0, 3),
        ],
        &[1.0, 1.0, 1.0],
        0,
        timeline.clock(),
    )
    .unwrap();

    for position in 0..qte.event_count() {
        let failures = qte.failure_count();
        qte.next_input_joystick(1, 9);
        assert_eq!(qte.failure_count(), failures + 1);
        assert_eq!(qte.event_position(), position);

        qte.next_input_joystick(0, position as u32 + 1);
    }
    assert!(qte.is_complete());
    assert_eq!(qte.failure_count(), 3);
}

#[test]
fn test_restart_after_failure_lets_player_retry() {
    let (timeline, mut qte) = space_enter_qte();
    qte.next_input_keyboard(Key::Space);
    timeline.advance(Duration::from_secs(3));
    qte.update();

    qte.restart();
    assert_eq!(qte.event_position(), 0);
    assert!(!qte.has_started());
    assert_eq!(qte.failure_count(), 1);

    qte.next_input_keyboard(Key::Space);
    timeline.advance(Duration::from_millis(500));
    assert_eq!(qte.next_input_keyboard(Key::Enter), QteOutcome::Completed);
    assert_eq!(qte.failure_count(), 1);
}

#[test]
fn test_definition_round_trip_into_state_machine() {
    let definition = QteDefinition::from_json_str(
        r#"{
            "steps": [
                { "input": { "joystick": { "joystick": 0, "button": 1 } }, "time_limit": 1.0 },
                { "input": { "joystick": { "joystick": 0, "button": 2 } }, "time_limit": 0.5 }
            ],
            "reset_amount": 3
        }"#,
    )
    .unwrap();

    let timeline = SimulatedTimeline::new();
    let mut qte = Qte::from_definition(&definition, timeline.clock())
        .unwrap()
        .with_logger(Arc::new(DebugLog::new()));

    assert_eq!(qte.reset_amount(), 3);
    assert_eq!(qte.time_limits()[1], Duration::from_millis(500));
    assert_eq!(qte.next_input_joystick(0, 1), QteOutcome::Started);
    assert_eq!(qte.next_input_joystick(0, 2), QteOutcome::Completed);
}

#[test]
fn test_definition_with_mixed_devices_is_rejected() {
    let definition = QteDefinition::from_json_str(
        r#"{
            "steps": [
                { "input": { "keyboard": "A" }, "time_limit": 1.0 },
                { "input": { "mouse": "Left" }, "time_limit": 1.0 }
            ]
        }"#,
    )
    .unwrap();

    let err = Qte::from_definition(&definition, SimulatedTimeline::new().clock()).unwrap_err();
    assert!(matches!(err, QteError::MixedDeviceKinds { index: 1, .. }));
}
