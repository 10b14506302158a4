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

//! Serializable definitions for quick-time events and sequences.

use crate::error::SequenceError;
use crate::sequence::Sequence;
use serde::{Deserialize, Serialize};
use sonar_core::{Clock, InputId};

/// One step of a quick-time event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QteStep {
    /// The input the player must perform.
    pub input: InputId,
    /// Seconds allowed for this step after the previous one succeeded.
    pub time_limit: f32,
}

/// A quick-time event as stored in game data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QteDefinition {
    /// The steps, in order.
    pub steps: Vec<QteStep>,
    /// Failures between automatic restarts; `0` disables them.
    #[serde(default)]
    pub reset_amount: u32,
}

impl QteDefinition {
    /// Parses a definition from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Bounds and starting value of a [`Sequence`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceSettings {
    /// The inclusive lower bound.
    pub min: f32,
    /// The inclusive upper bound.
    pub max: f32,
    /// The starting count; `min` when absent.
    pub start: Option<f32>,
}

impl Default for SequenceSettings {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            start: None,
        }
    }
}

impl SequenceSettings {
    /// Builds a sequence timed by `clock`.
    pub fn build<C: Clock>(&self, clock: C) -> Result<Sequence<C>, SequenceError> {
        let mut sequence = Sequence::with_clock(self.min, self.max, clock)?;
        if let Some(start) = self.start {
            sequence.set_count(start);
        }
        Ok(sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sonar_core::{Key, SimulatedTimeline};

    #[test]
    fn parses_qte_definition() {
        let definition = QteDefinition::from_json_str(
            r#"{
                "steps": [
                    { "input": { "keyboard": "Space" }, "time_limit": 2.0 },
                    { "input": { "keyboard": "Enter" }, "time_limit": 1.5 }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(definition.reset_amount, 0);
        assert_eq!(definition.steps.len(), 2);
        assert_eq!(definition.steps[1].input, InputId::Keyboard(Key::Enter));
        assert_relative_eq!(definition.steps[1].time_limit, 1.5);
    }

    #[test]
    fn sequence_settings_build() {
        let settings = SequenceSettings {
            min: -5.0,
            max: 5.0,
            start: Some(1.0),
        };
        let sequence = settings.build(SimulatedTimeline::new().clock()).unwrap();
        assert_relative_eq!(sequence.count(), 1.0);
        assert_relative_eq!(sequence.min(), -5.0);

        let invalid = SequenceSettings {
            min: 5.0,
            max: -5.0,
            start: None,
        };
        assert!(invalid.build(SimulatedTimeline::new().clock()).is_err());
    }
}
