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

//! Headless Sonar runtime.
//!
//! Loads a challenge file, replays its script against the quick-time event it
//! defines and prints how far the player got.

mod challenge;

use anyhow::{Context, Result};
use challenge::{replay, Challenge};
use clap::Parser;
use sonar_sdk::prelude::Logger;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "sonar-runtime", version, about = "Replay a scripted quick-time challenge")]
struct Args {
    /// Path to the challenge JSON file.
    challenge: PathBuf,

    /// Simulated frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Stop the replay after this many simulated seconds.
    #[arg(long, default_value_t = 30.0)]
    max_seconds: f32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let source = std::fs::read_to_string(&args.challenge)
        .with_context(|| format!("failed to read {}", args.challenge.display()))?;
    let challenge = Challenge::from_json_str(&source)
        .with_context(|| format!("failed to parse {}", args.challenge.display()))?;

    sonar_infra::init_logging(&challenge.debug);
    log::info!("Sonar runtime: replaying {}", args.challenge.display());

    let logger: Arc<dyn Logger> = Arc::new(challenge.debug.build_log());
    let report = replay(&challenge, args.fps, args.max_seconds, logger)?;

    println!(
        "{} after {:.3}s ({} frames)",
        if report.completed { "Completed" } else { "Not completed" },
        report.elapsed.as_secs_f32(),
        report.frames
    );
    println!("Position: {}/{}", report.position, report.steps);
    println!("Failures: {}", report.failures);
    println!("Combo: {} (best {})", report.combo, report.best_combo);
    Ok(())
}
