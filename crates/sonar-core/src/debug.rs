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

//! The injected logging capability.
//!
//! Gameplay components never reach for a process-wide debugger. They hold an
//! `Arc<dyn Logger>` handed to them by their owner, and every message carries
//! a category. Two implementations are provided:
//!
//! - [`LogFacade`] forwards straight to the `log` crate at debug level.
//! - [`DebugLog`] adds a master switch and per-category filtering before
//!   forwarding to the `log` crate at info level.
//!
//! In both cases the category becomes the `log` target, so `env_logger`
//! filters such as `RUST_LOG=qte=debug` keep working.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A sink for categorised diagnostic messages.
pub trait Logger: Send + Sync {
    /// Records `message` under `category`.
    fn log(&self, message: &str, category: &str);
}

/// A [`Logger`] that forwards every message to the `log` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

impl Logger for LogFacade {
    fn log(&self, message: &str, category: &str) {
        log::debug!(target: category, "{message}");
    }
}

#[derive(Debug)]
struct DebugState {
    enabled: bool,
    categories: Vec<(String, bool)>,
}

/// A category-aware debug log with a master enable switch.
///
/// Category names are case-insensitive. Messages in a category that was never
/// registered are let through; registering a category as disabled mutes it.
#[derive(Debug)]
pub struct DebugLog {
    state: RwLock<DebugState>,
}

impl DebugLog {
    /// Creates an enabled debug log with no registered categories.
    pub fn new() -> Self {
        Self::with_enabled(true)
    }

    /// Creates a debug log with the given master state.
    pub fn with_enabled(enabled: bool) -> Self {
        Self {
            state: RwLock::new(DebugState {
                enabled,
                categories: Vec::new(),
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, DebugState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, DebugState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Turns the log on.
    pub fn enable(&self) {
        self.write().enabled = true;
    }

    /// Turns the log off. Nothing but [`log_static`](Self::log_static) is
    /// emitted while disabled.
    pub fn disable(&self) {
        self.write().enabled = false;
    }

    /// Flips the master switch.
    pub fn toggle(&self) {
        let mut state = self.write();
        state.enabled = !state.enabled;
    }

    /// Returns `true` if the log is enabled.
    pub fn is_enabled(&self) -> bool {
        self.read().enabled
    }

    /// Registers `category`. Re-registering an existing category only updates
    /// its enabled flag.
    pub fn add_category(&self, category: &str, enabled: bool) {
        let name = category.to_lowercase();
        let mut state = self.write();
        match state.categories.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = enabled,
            None => state.categories.push((name, enabled)),
        }
    }

    /// Forgets `category`. Its messages are let through again afterwards.
    pub fn remove_category(&self, category: &str) {
        let name = category.to_lowercase();
        self.write().categories.retain(|(n, _)| *n != name);
    }

    /// Updates the enabled flag of an already registered category.
    ///
    /// Returns `false` (and changes nothing) if the category is unknown.
    pub fn update_category(&self, category: &str, enabled: bool) -> bool {
        let name = category.to_lowercase();
        let mut state = self.write();
        match state.categories.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => {
                entry.1 = enabled;
                true
            }
            None => false,
        }
    }

    /// Returns `true` if messages in `category` would be emitted, ignoring the
    /// master switch.
    pub fn is_category_enabled(&self, category: &str) -> bool {
        let name = category.to_lowercase();
        self.read()
            .categories
            .iter()
            .find(|(n, _)| *n == name)
            .map_or(true, |(_, enabled)| *enabled)
    }

    /// Returns every registered category with its enabled flag, in
    /// registration order.
    pub fn categories(&self) -> Vec<(String, bool)> {
        self.read().categories.clone()
    }

    /// Returns `true` if a message in `category` would currently be emitted.
    pub fn would_log(&self, category: &str) -> bool {
        self.is_enabled() && self.is_category_enabled(category)
    }

    /// Emits `message` regardless of any switch or category setting.
    pub fn log_static(message: &str) {
        log::info!(target: "sonar", "{message}");
    }
}

impl Default for DebugLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for DebugLog {
    fn log(&self, message: &str, category: &str) {
        if !self.would_log(category) {
            return;
        }
        let target = category.to_lowercase();
        log::info!(target: target.as_str(), "{message}");
    }
}
