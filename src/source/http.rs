//! HTTP log source.

use std::time::Duration;

use tracing::debug;

use crate::domain::RawEvent;

use super::{LogSource, SourceError};

/// Fetches a JSON array of raw events from an HTTP endpoint.
///
/// Transport failures (unreachable host, timeout, non-2xx status) surface as
/// [`SourceError::Connectivity`]. An empty response body is an empty log, not
/// a failure.
#[derive(Clone)]
pub struct HttpSource {
    url: String,
    agent: ureq::Agent,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .timeout_read(Duration::from_secs(30))
            .build();

        Self {
            url: url.into(),
            agent,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl LogSource for HttpSource {
    fn fetch(&self) -> Result<Vec<RawEvent>, SourceError> {
        let response = self
            .agent
            .get(&self.url)
            .call()
            .map_err(|err| SourceError::Connectivity(err.to_string()))?;

        let body = response
            .into_string()
            .map_err(|err| SourceError::Connectivity(err.to_string()))?;

        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        let events: Vec<RawEvent> = serde_json::from_str(&body)
            .map_err(|err| SourceError::Parse(format!("response body: {}", err)))?;

        debug!("fetched {} events from {}", events.len(), self.url);
        Ok(events)
    }
}
