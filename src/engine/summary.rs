//! Dashboard summary assembly.
//!
//! Bundles everything the rendering collaborator needs for one paint: the
//! ranked (optionally filtered) leaderboard, the distinct device and location
//! values for building filter selectors, and overall totals for the header.

use crate::domain::{LeaderboardEntry, UserStats, UserStatsMap};

use super::filter::{filter_stats, EngagementFilter};
use super::leaderboard::build_leaderboard;

/// One invocation's worth of render-ready dashboard data.
#[derive(Debug, Clone, Default)]
pub struct DashboardSummary {
    /// Ranked entries after the filter is applied.
    pub leaderboard: Vec<LeaderboardEntry>,

    /// Distinct device values, sorted ascending. Computed from the
    /// unfiltered map so selectors never lose options.
    pub available_devices: Vec<String>,

    /// Distinct location values, sorted ascending, unfiltered.
    pub available_locations: Vec<String>,

    // Overall totals for the header strip (unfiltered).
    pub total_users: usize,
    pub total_events: u64,
    pub total_points: u64,
}

/// Assemble the dashboard bundle for one stats map and filter.
pub fn summarize(stats: &UserStatsMap, filter: &EngagementFilter) -> DashboardSummary {
    let filtered = if filter.is_unconstrained() {
        stats.clone()
    } else {
        filter_stats(stats, filter)
    };

    DashboardSummary {
        leaderboard: build_leaderboard(&filtered),
        available_devices: available_devices(stats),
        available_locations: available_locations(stats),
        total_users: stats.len(),
        total_events: stats.values().map(UserStats::event_count).sum(),
        total_points: stats.values().map(|record| record.total_points).sum(),
    }
}

/// Distinct device values observed across all records, sorted ascending.
pub fn available_devices(stats: &UserStatsMap) -> Vec<String> {
    distinct_keys(stats, |record| &record.device_counts)
}

/// Distinct location values observed across all records, sorted ascending.
pub fn available_locations(stats: &UserStatsMap) -> Vec<String> {
    distinct_keys(stats, |record| &record.location_counts)
}

/// Look up one user's detail record by identity.
pub fn user_detail<'a>(stats: &'a UserStatsMap, user_id: &str) -> Option<&'a UserStats> {
    stats.get(user_id)
}

fn distinct_keys<F>(stats: &UserStatsMap, counts: F) -> Vec<String>
where
    F: Fn(&UserStats) -> &std::collections::BTreeMap<String, u64>,
{
    let mut values: Vec<String> = stats
        .values()
        .flat_map(|record| counts(record).keys().cloned())
        .collect();
    values.sort();
    values.dedup();
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(points: u64, devices: &[(&str, u64)], locations: &[(&str, u64)]) -> UserStats {
        let mut stats = UserStats {
            total_points: points,
            ..UserStats::default()
        };
        stats.actions.insert(
            "post".to_string(),
            devices.iter().map(|(_, count)| count).sum(),
        );
        for (device, count) in devices {
            stats.device_counts.insert(device.to_string(), *count);
        }
        for (location, count) in locations {
            stats.location_counts.insert(location.to_string(), *count);
        }
        stats
    }

    fn sample_map() -> UserStatsMap {
        let mut stats = UserStatsMap::new();
        stats.insert(
            "u1".to_string(),
            record(30, &[("mobile", 2), ("desktop", 1)], &[("Boston", 3)]),
        );
        stats.insert(
            "u2".to_string(),
            record(50, &[("desktop", 2)], &[("Austin", 2)]),
        );
        stats
    }

    #[test]
    fn test_available_values_are_distinct_and_sorted() {
        let stats = sample_map();

        assert_eq!(available_devices(&stats), vec!["desktop", "mobile"]);
        assert_eq!(available_locations(&stats), vec!["Austin", "Boston"]);
    }

    #[test]
    fn test_selectors_computed_from_unfiltered_map() {
        let stats = sample_map();

        let summary = summarize(&stats, &EngagementFilter::none().with_location("Austin"));

        // Only u2 survives the filter, yet both locations stay selectable.
        assert_eq!(summary.leaderboard.len(), 1);
        assert_eq!(summary.available_locations, vec!["Austin", "Boston"]);
        assert_eq!(summary.available_devices, vec!["desktop", "mobile"]);
    }

    #[test]
    fn test_totals_cover_the_whole_map() {
        let stats = sample_map();

        let summary = summarize(&stats, &EngagementFilter::none().with_device("mobile"));

        assert_eq!(summary.total_users, 2);
        assert_eq!(summary.total_events, 5);
        assert_eq!(summary.total_points, 80);
    }

    #[test]
    fn test_leaderboard_reflects_filter() {
        let stats = sample_map();

        let summary = summarize(&stats, &EngagementFilter::none().with_device("mobile"));

        assert_eq!(summary.leaderboard.len(), 1);
        assert_eq!(summary.leaderboard[0].user_id, "u1");
        assert_eq!(summary.leaderboard[0].rank, 1);
    }

    #[test]
    fn test_empty_map_summary() {
        let summary = summarize(&UserStatsMap::new(), &EngagementFilter::none());

        assert!(summary.leaderboard.is_empty());
        assert!(summary.available_devices.is_empty());
        assert_eq!(summary.total_users, 0);
        assert_eq!(summary.total_events, 0);
        assert_eq!(summary.total_points, 0);
    }

    #[test]
    fn test_user_detail_lookup() {
        let stats = sample_map();

        assert!(user_detail(&stats, "u1").is_some());
        assert!(user_detail(&stats, "nobody").is_none());
    }
}
