//! Device/location filtering of aggregated records.
//!
//! A record matches a filter value when that value appears with a nonzero
//! count in the record's breakdown, not merely when it equals the single
//! primary attribute. A user who posted from two devices is found under
//! either device.

use crate::domain::{UserStats, UserStatsMap};

/// Optional constraints on the device and location axes.
///
/// `None`, an empty string, or the literal "All" (any case) leave an axis
/// unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngagementFilter {
    pub device: Option<String>,
    pub location: Option<String>,
}

impl EngagementFilter {
    /// A filter with no constraint on either axis.
    pub fn none() -> Self {
        Self::default()
    }

    /// Constrain the device axis.
    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }

    /// Constrain the location axis.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Whether both axes are unconstrained.
    pub fn is_unconstrained(&self) -> bool {
        constraint(&self.device).is_none() && constraint(&self.location).is_none()
    }

    /// Whether a record satisfies both axes.
    pub fn matches(&self, record: &UserStats) -> bool {
        let device_ok = match constraint(&self.device) {
            Some(device) => record.device_counts.get(device).copied().unwrap_or(0) > 0,
            None => true,
        };
        let location_ok = match constraint(&self.location) {
            Some(location) => record.location_counts.get(location).copied().unwrap_or(0) > 0,
            None => true,
        };
        device_ok && location_ok
    }
}

/// Treat "All" and empty selections the same as an absent constraint.
fn constraint(value: &Option<String>) -> Option<&str> {
    match value.as_deref().map(str::trim) {
        None => None,
        Some(v) if v.is_empty() || v.eq_ignore_ascii_case("all") => None,
        Some(v) => Some(v),
    }
}

/// Select the subset of records matching the filter.
///
/// Matching records are copied unchanged; the counts are not narrowed to the
/// filtered axis. Composes with ranking in either order.
pub fn filter_stats(stats: &UserStatsMap, filter: &EngagementFilter) -> UserStatsMap {
    stats
        .iter()
        .filter(|(_, record)| filter.matches(record))
        .map(|(user_id, record)| (user_id.clone(), record.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(device_counts: &[(&str, u64)], location_counts: &[(&str, u64)]) -> UserStats {
        let mut stats = UserStats::default();
        for (device, count) in device_counts {
            stats.device_counts.insert(device.to_string(), *count);
        }
        for (location, count) in location_counts {
            stats.location_counts.insert(location.to_string(), *count);
        }
        if let Some((device, _)) = device_counts.first() {
            stats.primary_device = device.to_string();
        }
        if let Some((location, _)) = location_counts.first() {
            stats.primary_location = location.to_string();
        }
        stats
    }

    fn sample_map() -> UserStatsMap {
        let mut stats = UserStatsMap::new();
        stats.insert(
            "u1".to_string(),
            record(&[("mobile", 2), ("desktop", 1)], &[("Boston", 3)]),
        );
        stats.insert(
            "u2".to_string(),
            record(&[("desktop", 4)], &[("Austin", 4)]),
        );
        stats
    }

    #[test]
    fn test_unconstrained_filter_keeps_everything() {
        let stats = sample_map();

        assert_eq!(filter_stats(&stats, &EngagementFilter::none()), stats);
    }

    #[test]
    fn test_all_and_empty_mean_no_constraint() {
        let stats = sample_map();

        for value in ["All", "all", "ALL", "", "  "] {
            let filter = EngagementFilter::none().with_device(value);
            assert!(filter.is_unconstrained(), "{value:?} should not constrain");
            assert_eq!(filter_stats(&stats, &filter).len(), 2);
        }
    }

    #[test]
    fn test_nonzero_count_matches_beyond_primary_device() {
        let stats = sample_map();

        // u1's primary device is "mobile", but one desktop event is enough.
        let filter = EngagementFilter::none().with_device("desktop");
        let filtered = filter_stats(&stats, &filter);

        assert_eq!(filtered.len(), 2);
        assert!(filtered.contains_key("u1"));
        assert_eq!(filtered["u1"].primary_device, "mobile");
    }

    #[test]
    fn test_device_filter_excludes_non_matching_users() {
        let stats = sample_map();

        let filtered = filter_stats(&stats, &EngagementFilter::none().with_device("mobile"));

        assert_eq!(filtered.len(), 1);
        assert!(filtered.contains_key("u1"));
    }

    #[test]
    fn test_axes_combine_with_and() {
        let stats = sample_map();

        let filter = EngagementFilter::none()
            .with_device("desktop")
            .with_location("Austin");
        let filtered = filter_stats(&stats, &filter);

        assert_eq!(filtered.len(), 1);
        assert!(filtered.contains_key("u2"));
    }

    #[test]
    fn test_unseen_value_yields_empty_subset() {
        let stats = sample_map();

        let filtered = filter_stats(&stats, &EngagementFilter::none().with_device("tablet"));

        assert!(filtered.is_empty());
    }

    #[test]
    fn test_zero_count_does_not_match() {
        let mut stats = UserStatsMap::new();
        stats.insert("u1".to_string(), record(&[("mobile", 0)], &[]));

        let filtered = filter_stats(&stats, &EngagementFilter::none().with_device("mobile"));

        assert!(filtered.is_empty());
    }

    #[test]
    fn test_matching_records_are_copied_unchanged() {
        let stats = sample_map();

        let filtered = filter_stats(&stats, &EngagementFilter::none().with_device("mobile"));

        assert_eq!(filtered["u1"], stats["u1"]);
    }
}
