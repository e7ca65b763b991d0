//! Per-user engagement statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregated counters, categorical breakdowns, and granted badges for one
/// user.
///
/// Records are created lazily when a user's first event is folded in and are
/// discarded at the end of each engine invocation; nothing is carried across
/// runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    /// Display name, fixed by the user's first event.
    pub name: String,

    /// Sum of `points_awarded` over every event attributed to this user.
    pub total_points: u64,

    /// Events per action token. The values sum to the user's event count.
    pub actions: BTreeMap<String, u64>,

    /// Events per device value.
    pub device_counts: BTreeMap<String, u64>,

    /// Events per location value.
    pub location_counts: BTreeMap<String, u64>,

    /// Badge ids in first-granted order, no duplicates.
    pub badges: Vec<String>,

    /// Device of the user's first event (first-seen, never overwritten).
    pub primary_device: String,

    /// Location of the user's first event (first-seen, never overwritten).
    pub primary_location: String,
}

impl UserStats {
    /// Number of events attributed to this user.
    pub fn event_count(&self) -> u64 {
        self.actions.values().sum()
    }

    /// Whether this user holds the given badge.
    pub fn has_badge(&self, badge: &str) -> bool {
        self.badges.iter().any(|b| b == badge)
    }
}

/// The per-invocation accumulator: `user_id` → [`UserStats`].
///
/// Owned by and returned from each aggregation call; there is no process-wide
/// instance. A `BTreeMap` keeps iteration deterministic.
pub type UserStatsMap = BTreeMap<String, UserStats>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_count_sums_actions() {
        let mut stats = UserStats::default();
        stats.actions.insert("post".to_string(), 3);
        stats.actions.insert("like".to_string(), 2);

        assert_eq!(stats.event_count(), 5);
    }

    #[test]
    fn test_event_count_empty_record() {
        assert_eq!(UserStats::default().event_count(), 0);
    }

    #[test]
    fn test_has_badge() {
        let mut stats = UserStats::default();
        stats.badges.push("Content Creator".to_string());

        assert!(stats.has_badge("Content Creator"));
        assert!(!stats.has_badge("Engager"));
    }
}
