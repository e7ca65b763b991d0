//! Simulate command implementation

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;

use gamify::source::SimulatedSource;

use super::load_config;

/// Generate synthetic activity and emit it as JSONL
pub fn simulate_command(
    config_path: Option<&Path>,
    seed: u64,
    users: Option<usize>,
    logs_per_user: Option<u64>,
    out: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(config_path)?;

    let mut profile = config.simulator;
    if let Some(limit) = users {
        profile.users = profile.users.into_iter().take(limit).collect();
    }
    if let Some(base) = logs_per_user {
        profile.logs_per_user = base;
    }

    let events = SimulatedSource::new(profile, seed, Utc::now()).generate();

    let mut lines = String::new();
    for event in &events {
        let line = serde_json::to_string(event).context("Failed to serialize event")?;
        lines.push_str(&line);
        lines.push('\n');
    }

    match out {
        Some(path) => {
            std::fs::write(&path, lines)
                .with_context(|| format!("Failed to write activity log: {}", path.display()))?;
            println!("Wrote {} events to {}", events.len(), path.display());
        }
        None => print!("{}", lines),
    }

    Ok(())
}
