//! Ranked leaderboard rows.

use serde::{Deserialize, Serialize};

use super::stats::UserStats;

/// One row of the ranked leaderboard: the user's identity plus a full copy
/// of their statistics, with a fixed position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based position. Ties still occupy distinct ranks in tie-break order.
    pub rank: u32,

    /// The user this row belongs to.
    pub user_id: String,

    /// Snapshot of the user's aggregated statistics.
    pub stats: UserStats,
}

impl LeaderboardEntry {
    /// Display name carried in the stats snapshot.
    pub fn name(&self) -> &str {
        &self.stats.name
    }

    /// Total points carried in the stats snapshot.
    pub fn total_points(&self) -> u64 {
        self.stats.total_points
    }
}
