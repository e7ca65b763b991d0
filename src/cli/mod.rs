//! CLI command implementations

pub mod board;
pub mod init;
pub mod rules;
pub mod simulate;
pub mod user;

use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use tracing::debug;

use gamify::config::Config;
use gamify::source::{HttpSource, JsonlSource, LogSource, SimulatedSource, DEFAULT_SEED};

/// Load the config from an explicit path, or look one up in the current
/// directory (builtin defaults when absent).
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::from_file(path),
        None => Config::from_dir(Path::new(".")),
    }
}

/// Build the log source for a `--source` argument.
///
/// An `http://` or `https://` value is fetched over the network, anything
/// else is treated as a JSONL file path, and omission falls back to a seeded
/// batch of demo activity.
pub fn resolve_source(source: Option<&str>, config: &Config) -> Box<dyn LogSource> {
    match source {
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
            Box::new(HttpSource::new(url))
        }
        Some(path) => Box::new(JsonlSource::new(path)),
        None => {
            debug!(
                "no --source given, using simulated activity (seed {})",
                DEFAULT_SEED
            );
            Box::new(SimulatedSource::new(
                config.simulator.clone(),
                DEFAULT_SEED,
                Utc::now(),
            ))
        }
    }
}
