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

//! `env_logger` setup for Sonar binaries.

use env_logger::{Builder, Env};
use sonar_core::DebugConfig;

/// Installs `env_logger` as the global `log` backend.
///
/// `RUST_LOG` wins when set; otherwise `config.level` is the default filter.
/// Backend crates are capped at warnings. Returns `false` when a logger was
/// already installed, which is not an error for callers such as tests that may
/// initialize more than once.
pub fn init_logging(config: &DebugConfig) -> bool {
    let installed = Builder::from_env(Env::default().default_filter_or(config.level.as_str()))
        .filter_module("winit", log::LevelFilter::Warn)
        .filter_module("gilrs", log::LevelFilter::Warn)
        .try_init()
        .is_ok();
    if installed {
        log::debug!("Logging initialized with default filter '{}'", config.level);
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_initialization_is_refused() {
        let config = DebugConfig::default();
        init_logging(&config);
        assert!(!init_logging(&config));
    }
}
