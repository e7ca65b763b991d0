//! Log-source collaborators.
//!
//! The engine pulls raw events through the [`LogSource`] seam and never cares
//! where they came from. Four implementations ship: an in-memory wrapper, a
//! JSONL file reader, an HTTP endpoint client, and a seeded synthetic
//! generator.

mod http;
mod jsonl;
mod memory;
mod simulator;

pub use http::HttpSource;
pub use jsonl::JsonlSource;
pub use memory::MemorySource;
pub use simulator::{SimulatedSource, SimulatorProfile, DEFAULT_SEED};

use crate::domain::RawEvent;

/// Error type for log retrieval
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to read activity log: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed activity log: {0}")]
    Parse(String),

    #[error("Activity log endpoint unreachable: {0}")]
    Connectivity(String),
}

/// A collaborator that yields one batch of raw activity events per pull.
///
/// An empty log is a legitimate result, never an error. Field-level problems
/// inside an event are not errors either; the normalizer defaults them.
pub trait LogSource {
    fn fetch(&self) -> Result<Vec<RawEvent>, SourceError>;
}
