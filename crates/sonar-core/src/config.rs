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

//! Diagnostic settings, loadable from JSON.

use crate::debug::DebugLog;
use serde::{Deserialize, Serialize};

/// The initial state of one debug category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// The category name (case-insensitive).
    pub name: String,
    /// Whether messages in this category are emitted.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Settings for the debug log and the `env_logger` backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// The master switch of the [`DebugLog`].
    pub enabled: bool,
    /// The default `env_logger` filter, used when `RUST_LOG` is unset.
    pub level: String,
    /// Categories registered up front.
    pub categories: Vec<CategoryConfig>,
}

fn default_true() -> bool {
    true
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            categories: Vec::new(),
        }
    }
}

impl DebugConfig {
    /// Parses a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Builds a [`DebugLog`] in the configured state.
    pub fn build_log(&self) -> DebugLog {
        let log = DebugLog::with_enabled(self.enabled);
        for category in &self.categories {
            log.add_category(&category.name, category.enabled);
        }
        log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = DebugConfig::from_json_str("{}").unwrap();
        assert_eq!(config, DebugConfig::default());
    }

    #[test]
    fn builds_log_with_categories() {
        let config = DebugConfig::from_json_str(
            r#"{
                "enabled": true,
                "level": "debug",
                "categories": [
                    { "name": "QTE", "enabled": false },
                    { "name": "sequence" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.level, "debug");
        let log = config.build_log();
        assert!(log.is_enabled());
        assert!(!log.is_category_enabled("qte"));
        assert!(log.is_category_enabled("sequence"));
    }

    #[test]
    fn disabled_config_builds_disabled_log() {
        let config = DebugConfig {
            enabled: false,
            ..Default::default()
        };
        assert!(!config.build_log().is_enabled());
    }
}
