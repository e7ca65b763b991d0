//! Engagement aggregation and ranking engine.
//!
//! Pure transformation stages behind a small facade. The engine holds no
//! state between invocations: every run starts from the batch it is handed
//! and the caller owns the resulting stats map.
//!
//! # Architecture
//!
//! ```text
//! raw events ──▶ normalize ──▶ aggregate ──▶ badges ──▶ UserStatsMap
//!                                                           │
//! pre-aggregated records ──▶ adapt ─────────▶ badges ───────┤
//!                                                           ▼
//!                                        filter (optional) ──▶ leaderboard
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let engine = EngagementEngine::new();
//! let stats = engine.compute(ActivityBatch::Raw(events), Some(Utc::now()));
//! let board = build_leaderboard(&stats);
//! ```

mod aggregate;
mod badges;
mod filter;
mod leaderboard;
mod normalize;
mod summary;

pub use aggregate::aggregate;
pub use badges::{grant_badges, grant_user_badges};
pub use filter::{filter_stats, EngagementFilter};
pub use leaderboard::build_leaderboard;
pub use normalize::{normalize, UNKNOWN, UNKNOWN_NAME};
pub use summary::{
    available_devices, available_locations, summarize, user_detail, DashboardSummary,
};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{
    ActivityBatch, ActivityEvent, BadgeRule, PreAggregatedRecord, RawEvent, UserStats,
    UserStatsMap,
};

/// Facade over the engine stages.
///
/// Owns the badge-rule list (configuration, not accumulated state) and
/// exposes one entry point per input schema.
#[derive(Debug, Clone)]
pub struct EngagementEngine {
    rules: Vec<BadgeRule>,
}

impl EngagementEngine {
    /// Create an engine with the builtin badge rules.
    pub fn new() -> Self {
        Self {
            rules: BadgeRule::defaults(),
        }
    }

    /// Create an engine with a custom badge-rule list.
    pub fn with_rules(rules: Vec<BadgeRule>) -> Self {
        Self { rules }
    }

    /// The active badge rules, in evaluation order.
    pub fn rules(&self) -> &[BadgeRule] {
        &self.rules
    }

    /// Compute per-user stats for one batch, dispatching on its schema tag.
    ///
    /// `now` supplies timestamps for raw events that carry none; it is
    /// ignored for pre-aggregated records.
    pub fn compute(&self, batch: ActivityBatch, now: Option<DateTime<Utc>>) -> UserStatsMap {
        match batch {
            ActivityBatch::Raw(events) => self.compute_from_events(events, now),
            ActivityBatch::PreAggregated(records) => self.compute_from_preaggregated(records),
        }
    }

    /// Compute per-user stats from raw per-action events.
    pub fn compute_from_events(
        &self,
        events: Vec<RawEvent>,
        now: Option<DateTime<Utc>>,
    ) -> UserStatsMap {
        debug!("computing stats from {} raw events", events.len());

        let normalized: Vec<ActivityEvent> = events
            .into_iter()
            .map(|event| normalize(event, now))
            .collect();

        let mut stats = aggregate(&normalized);
        grant_badges(&mut stats, &self.rules);
        stats
    }

    /// Compute per-user stats from records aggregated upstream.
    ///
    /// Identity for this shape is the display name (it carries no id), so the
    /// stats map is keyed by name and records sharing a name merge additively.
    /// Supplied badges are kept in their given order; the rule list is then
    /// evaluated on top, so adoption never removes a badge.
    pub fn compute_from_preaggregated(
        &self,
        records: Vec<PreAggregatedRecord>,
    ) -> UserStatsMap {
        debug!("adapting {} pre-aggregated records", records.len());

        let mut stats = UserStatsMap::new();
        for record in records {
            adopt_record(&mut stats, record);
        }
        grant_badges(&mut stats, &self.rules);
        stats
    }
}

impl Default for EngagementEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold one pre-aggregated record into the stats map.
fn adopt_record(stats: &mut UserStatsMap, record: PreAggregatedRecord) {
    let name = record
        .name
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string());
    let device = record
        .device
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string());

    // The shape carries no per-event granularity, so the record's whole
    // action count lands on its single known device (and on the "unknown"
    // location), with a floor of 1 to keep the record visible to filters.
    let event_count = record.actions.values().sum::<u64>().max(1);

    let entry = stats.entry(name.clone()).or_insert_with(|| UserStats {
        name,
        primary_device: device.clone(),
        primary_location: UNKNOWN.to_string(),
        ..UserStats::default()
    });

    entry.total_points += record.points.unwrap_or(0);
    for (action, count) in record.actions {
        *entry.actions.entry(action).or_insert(0) += count;
    }
    *entry.device_counts.entry(device).or_insert(0) += event_count;
    *entry
        .location_counts
        .entry(UNKNOWN.to_string())
        .or_insert(0) += event_count;

    for badge in record.badges {
        if !entry.badges.contains(&badge) {
            entry.badges.push(badge);
        }
    }
}
