//! Core domain types for the engagement engine

mod badge;
mod event;
mod leaderboard;
mod stats;

pub use badge::BadgeRule;
pub use event::{ActivityBatch, ActivityEvent, PreAggregatedRecord, RawEvent};
pub use leaderboard::LeaderboardEntry;
pub use stats::{UserStats, UserStatsMap};
