//! Raw-event normalization.
//!
//! Turns the lenient [`RawEvent`] shape into the canonical [`ActivityEvent`]
//! by applying the documented field defaults. Total and side-effect-free: a
//! malformed event is a defaulted event, never an error.

use chrono::{DateTime, Utc};

use crate::domain::{ActivityEvent, RawEvent};

/// Default display name for events without one.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Bucket for missing or empty ids, actions, devices, and locations.
pub const UNKNOWN: &str = "unknown";

/// Normalize one raw event into its canonical shape.
///
/// Defaults: missing `user_name` → "Unknown"; missing `user_id` / `action` →
/// "unknown"; missing `points_awarded` → 0; `device` falls back to the
/// `devices` alias and then to "unknown", `location` analogously; a missing
/// timestamp is supplied by the caller's clock, or left empty when no clock
/// value is available. Empty and whitespace-only strings count as missing.
pub fn normalize(event: RawEvent, clock: Option<DateTime<Utc>>) -> ActivityEvent {
    ActivityEvent {
        user_id: event.user_id.filter(is_present).unwrap_or_else(|| UNKNOWN.to_string()),
        user_name: event
            .user_name
            .filter(is_present)
            .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        action: event.action.filter(is_present).unwrap_or_else(|| UNKNOWN.to_string()),
        points_awarded: event.points_awarded.unwrap_or(0),
        device: resolve_aliased(event.device, event.devices),
        location: resolve_aliased(event.location, event.locations),
        timestamp: event
            .timestamp
            .filter(is_present)
            .or_else(|| clock.map(|now| now.to_rfc3339()))
            .unwrap_or_default(),
    }
}

/// Resolve an aliased field pair: canonical value first, then the alias,
/// then the "unknown" bucket. This is the only place aliases are read.
fn resolve_aliased(canonical: Option<String>, alias: Option<String>) -> String {
    canonical
        .filter(is_present)
        .or_else(|| alias.filter(is_present))
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn is_present(value: &String) -> bool {
    !value.trim().is_empty()
}
