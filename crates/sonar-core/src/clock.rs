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

//! Monotonic elapsed-time sources.
//!
//! Every timed gameplay object owns exactly one [`Clock`]. A clock measures the
//! time elapsed since it was last [reset](Clock::reset), with microsecond
//! resolution.
//!
//! Two implementations are provided:
//!
//! - [`SystemClock`], backed by a [`Stopwatch`] over `std::time::Instant`.
//! - [`ManualClock`], measured against a [`SimulatedTimeline`] that the owner
//!   advances explicitly. Tests and headless replays use it to drive time
//!   deterministically.

use crate::utils::timer::Stopwatch;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// An elapsed-time source that can be rebased to "now".
pub trait Clock {
    /// Rebases the clock so that elapsed time restarts from zero.
    fn reset(&mut self);

    /// Returns the time elapsed since the last reset (or creation).
    fn elapsed(&self) -> Duration;
}

/// A [`Clock`] driven by the operating system's monotonic clock.
#[derive(Debug, Clone, Default)]
pub struct SystemClock {
    stopwatch: Stopwatch,
}

impl SystemClock {
    /// Creates a clock that starts measuring immediately.
    pub fn new() -> Self {
        Self {
            stopwatch: Stopwatch::new(),
        }
    }
}

impl Clock for SystemClock {
    fn reset(&mut self) {
        self.stopwatch.restart();
    }

    fn elapsed(&self) -> Duration {
        // Truncate to microseconds so both clock kinds report the same resolution.
        Duration::from_micros(self.stopwatch.elapsed_us())
    }
}

/// A shared, simulated "now" that only moves when told to.
///
/// Cloning a timeline yields another handle onto the same instant, so a test
/// can keep one handle while the clocks it created observe the same time.
#[derive(Debug, Clone, Default)]
pub struct SimulatedTimeline {
    now_us: Arc<AtomicU64>,
}

impl SimulatedTimeline {
    /// Creates a timeline positioned at t = 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current simulated instant, as an offset from t = 0.
    pub fn now(&self) -> Duration {
        Duration::from_micros(self.now_us.load(Ordering::Acquire))
    }

    /// Moves the timeline forward by `delta`.
    ///
    /// Saturates at the largest representable instant.
    pub fn advance(&self, delta: Duration) {
        let delta_us = to_micros(delta);
        // The closure always returns `Some`, so the update cannot fail.
        let _ = self
            .now_us
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |now| {
                Some(now.saturating_add(delta_us))
            });
    }

    /// Moves the timeline forward by `secs` seconds. Negative or non-finite
    /// values are ignored.
    pub fn advance_secs(&self, secs: f32) {
        if let Ok(delta) = Duration::try_from_secs_f32(secs) {
            self.advance(delta);
        }
    }

    /// Jumps to an absolute instant. Moving backwards is ignored so clocks
    /// derived from the timeline stay monotonic.
    pub fn set(&self, at: Duration) {
        self.now_us
            .fetch_max(to_micros(at), Ordering::AcqRel);
    }

    /// Creates a clock whose elapsed time starts at the current instant.
    pub fn clock(&self) -> ManualClock {
        ManualClock::new(self.clone())
    }
}

fn to_micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

/// A [`Clock`] measured against a [`SimulatedTimeline`].
#[derive(Debug, Clone)]
pub struct ManualClock {
    timeline: SimulatedTimeline,
    start: Duration,
}

impl ManualClock {
    /// Creates a clock starting at the timeline's current instant.
    pub fn new(timeline: SimulatedTimeline) -> Self {
        let start = timeline.now();
        Self { timeline, start }
    }

    /// Returns the timeline this clock observes.
    pub fn timeline(&self) -> &SimulatedTimeline {
        &self.timeline
    }
}

impl Clock for ManualClock {
    fn reset(&mut self) {
        self.start = self.timeline.now();
    }

    fn elapsed(&self) -> Duration {
        self.timeline.now().saturating_sub(self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_tracks_timeline() {
        let timeline = SimulatedTimeline::new();
        let clock = timeline.clock();
        assert_eq!(clock.elapsed(), Duration::ZERO);

        timeline.advance(Duration::from_millis(1500));
        assert_eq!(clock.elapsed(), Duration::from_millis(1500));
    }

    #[test]
    fn manual_clock_reset_rebases_to_now() {
        let timeline = SimulatedTimeline::new();
        let mut clock = timeline.clock();

        timeline.advance(Duration::from_secs(3));
        clock.reset();
        assert_eq!(clock.elapsed(), Duration::ZERO);

        timeline.advance_secs(0.25);
        assert_eq!(clock.elapsed(), Duration::from_millis(250));
    }

    #[test]
    fn clock_created_later_starts_at_zero() {
        let timeline = SimulatedTimeline::new();
        timeline.advance(Duration::from_secs(10));
        let clock = timeline.clock();
        assert_eq!(clock.elapsed(), Duration::ZERO);
    }

    #[test]
    fn timeline_set_never_moves_backwards() {
        let timeline = SimulatedTimeline::new();
        timeline.set(Duration::from_secs(5));
        timeline.set(Duration::from_secs(2));
        assert_eq!(timeline.now(), Duration::from_secs(5));
    }

    #[test]
    fn timeline_saturates_instead_of_wrapping() {
        let timeline = SimulatedTimeline::new();
        timeline.advance(Duration::from_secs(5));
        timeline.advance(Duration::MAX);
        let saturated = timeline.now();
        assert_eq!(saturated, Duration::from_micros(u64::MAX));

        timeline.advance(Duration::from_secs(1));
        assert_eq!(timeline.now(), saturated);

        let other = SimulatedTimeline::new();
        other.set(Duration::MAX);
        assert_eq!(other.now(), Duration::from_micros(u64::MAX));
    }

    #[test]
    fn advance_secs_ignores_negative_values() {
        let timeline = SimulatedTimeline::new();
        timeline.advance_secs(-1.0);
        timeline.advance_secs(f32::NAN);
        assert_eq!(timeline.now(), Duration::ZERO);
    }

    #[test]
    fn system_clock_is_monotonic_and_resettable() {
        let mut clock = SystemClock::new();
        let first = clock.elapsed();
        let second = clock.elapsed();
        assert!(second >= first);

        clock.reset();
        assert!(clock.elapsed() < Duration::from_millis(50));
    }
}
