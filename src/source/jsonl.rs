//! JSONL file log source.

use std::path::PathBuf;

use tracing::debug;

use crate::domain::RawEvent;

use super::{LogSource, SourceError};

/// Reads an activity log with one JSON event object per line.
///
/// Blank lines are skipped. A line that is not a JSON object fails the whole
/// fetch with a [`SourceError::Parse`] naming the line; an object with
/// missing or mistyped fields parses fine and is defaulted downstream.
#[derive(Debug, Clone)]
pub struct JsonlSource {
    path: PathBuf,
}

impl JsonlSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LogSource for JsonlSource {
    fn fetch(&self) -> Result<Vec<RawEvent>, SourceError> {
        let content = std::fs::read_to_string(&self.path)?;

        let mut events = Vec::new();
        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let event: RawEvent = serde_json::from_str(line).map_err(|err| {
                SourceError::Parse(format!("line {}: {}", index + 1, err))
            })?;
            events.push(event);
        }

        debug!("read {} events from {}", events.len(), self.path.display());
        Ok(events)
    }
}
