//! Badge evaluation against aggregated action counts.
//!
//! Runs once per aggregation pass over the final counts, not incrementally
//! per event. Idempotent, and monotonic under non-decreasing counts: a badge,
//! once granted, is never removed by a later evaluation.

use crate::domain::{BadgeRule, UserStats, UserStatsMap};

/// Evaluate every rule against every record in the map.
pub fn grant_badges(stats: &mut UserStatsMap, rules: &[BadgeRule]) {
    for record in stats.values_mut() {
        grant_user_badges(record, rules);
    }
}

/// Evaluate the rule list against one record.
///
/// A rule whose action count meets its threshold appends its badge, unless
/// already held. Insertion order follows the rule list, so the badge set
/// keeps first-granted order across repeated evaluations.
pub fn grant_user_badges(record: &mut UserStats, rules: &[BadgeRule]) {
    for rule in rules {
        let count = record.actions.get(&rule.action).copied().unwrap_or(0);
        if count >= rule.threshold && !record.badges.contains(&rule.badge) {
            record.badges.push(rule.badge.clone());
        }
    }
}
