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

use approx::assert_relative_eq;
use sonar_core::{InputEvent, InputId, Key, SimulatedTimeline};
use sonar_input::{ChordTracker, Direction, Sequence};
use std::time::Duration;

#[test]
fn test_clamping_against_ten_point_range() {
    let timeline = SimulatedTimeline::new();
    let mut clamped = Sequence::with_clock(0.0, 10.0, timeline.clock()).unwrap();
    let mut unclamped = Sequence::with_clock(0.0, 10.0, timeline.clock()).unwrap();

    clamped.tick_up(15.0, false);
    unclamped.tick_up(15.0, true);

    assert_relative_eq!(clamped.count(), 10.0);
    assert_relative_eq!(unclamped.count(), 15.0);
}

#[test]
fn test_keyboard_timer_against_simulated_time() {
    let timeline = SimulatedTimeline::new();
    let mut sequence = Sequence::with_clock(0.0, 10.0, timeline.clock()).unwrap();

    timeline.set(Duration::from_secs(5));
    sequence.keyboard_press(Key::A, 1.0, Direction::Up);
    timeline.set(Duration::from_secs(7));

    let elapsed = sequence.keyboard_pressed_timer(Key::A).as_secs_f64();
    assert_relative_eq!(elapsed, 2.0, epsilon = 1e-6);
    assert_eq!(sequence.keyboard_pressed_timer(Key::B), Duration::MAX);
}

#[test]
fn test_mash_meter_drains_and_fills() {
    let timeline = SimulatedTimeline::new();
    let mut meter = Sequence::with_clock(0.0, 5.0, timeline.clock()).unwrap();

    for _ in 0..8 {
        meter.joystick_press(0, 0, 1.0, Direction::Up);
        timeline.advance(Duration::from_millis(100));
    }
    assert_relative_eq!(meter.count(), 5.0);

    meter.tick_down(7.0, false);
    assert_relative_eq!(meter.count(), 0.0);
    assert_eq!(meter.joystick_pressed_timer(0, 0), Duration::from_millis(100));
}

#[test]
fn test_held_and_timed_chords_agree_for_simultaneous_presses() {
    let timeline = SimulatedTimeline::new();
    let mut sequence = Sequence::with_clock(0.0, 10.0, timeline.clock()).unwrap();
    let mut tracker = ChordTracker::new();
    let chord = [InputId::Keyboard(Key::LControl), InputId::Keyboard(Key::S)];

    for id in chord {
        tracker.handle_event(&InputEvent::Pressed(id));
        sequence.press(id, 0.0, Direction::Up);
        timeline.advance(Duration::from_millis(30));
    }

    assert!(tracker.chord_pressed(&chord));
    assert!(sequence.pressed_within(&chord, Duration::from_millis(100)));
}
