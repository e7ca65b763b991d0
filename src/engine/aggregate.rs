//! Event aggregation into per-user statistics.
//!
//! A single pass over the normalized event sequence. Counters and point sums
//! are order-insensitive; the single-value display attributes (`name`,
//! `primary_device`, `primary_location`) are fixed by each user's first event
//! so that reordering duplicate interactions cannot change them.

use crate::domain::{ActivityEvent, UserStats, UserStatsMap};

/// Fold an ordered event sequence into a `user_id` → [`UserStats`] map.
///
/// The accumulator is owned by this call and returned to the caller; nothing
/// is shared across invocations. An empty input yields an empty map.
pub fn aggregate(events: &[ActivityEvent]) -> UserStatsMap {
    let mut stats = UserStatsMap::new();

    for event in events {
        let record = stats
            .entry(event.user_id.clone())
            .or_insert_with(|| first_seen_record(event));

        record.total_points += event.points_awarded;
        *record.actions.entry(event.action.clone()).or_insert(0) += 1;
        *record.device_counts.entry(event.device.clone()).or_insert(0) += 1;
        *record
            .location_counts
            .entry(event.location.clone())
            .or_insert(0) += 1;
    }

    stats
}

/// A user's first event fixes the display attributes; later events only add
/// to the counters.
fn first_seen_record(event: &ActivityEvent) -> UserStats {
    UserStats {
        name: event.user_name.clone(),
        primary_device: event.device.clone(),
        primary_location: event.location.clone(),
        ..UserStats::default()
    }
}
