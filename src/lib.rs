//! GamifyConnect - engagement stats, badges, and leaderboards
//!
//! Turns raw user activity events into per-user engagement stats, badge
//! awards, and a ranked leaderboard. The pipeline is a set of pure
//! transformations behind the [`engine::EngagementEngine`] facade; events
//! come in through pluggable [`source::LogSource`] collaborators.
//!
//! ## Input Schemas
//!
//! Two input shapes are accepted, kept apart as an explicit tagged union:
//!
//! 1. **Raw events**: one record per user action, normalized and aggregated
//!    here.
//!
//! 2. **Pre-aggregated records**: per-user totals computed upstream, adapted
//!    into the same stats shape.

pub mod config;
pub mod domain;
pub mod engine;
pub mod source;

pub use domain::*;
