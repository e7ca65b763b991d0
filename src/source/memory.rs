//! In-memory log source.

use crate::domain::RawEvent;

use super::{LogSource, SourceError};

/// Wraps a batch of events the caller already holds. Never fails.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    events: Vec<RawEvent>,
}

impl MemorySource {
    pub fn new(events: Vec<RawEvent>) -> Self {
        Self { events }
    }
}

impl LogSource for MemorySource {
    fn fetch(&self) -> Result<Vec<RawEvent>, SourceError> {
        Ok(self.events.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_returns_events_in_order() {
        let source = MemorySource::new(vec![
            RawEvent::new("u1", "Ann", "post", 10),
            RawEvent::new("u2", "Bob", "like", 2),
        ]);

        let events = source.fetch().unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].user_id.as_deref(), Some("u1"));
        assert_eq!(events[1].user_id.as_deref(), Some("u2"));
    }

    #[test]
    fn test_empty_source_fetches_empty_batch() {
        assert!(MemorySource::default().fetch().unwrap().is_empty());
    }
}
