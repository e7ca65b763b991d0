//! Synthetic activity generation.
//!
//! Produces plausible raw events for demos and tests: a small user roster, a
//! uniform pick over the profile's action table, and timestamps spread over
//! the week before a caller-supplied clock value. Deterministic for a given
//! seed.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::RawEvent;

use super::{LogSource, SourceError};

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 42;

/// Shape of the generated activity: who acts, what actions are worth, and
/// where they happen. Every field has a builtin default and can be overridden
/// from the TOML config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorProfile {
    /// Action name → points awarded per occurrence.
    #[serde(default = "default_action_points")]
    pub action_points: BTreeMap<String, u64>,

    /// Device pool events are attributed to.
    #[serde(default = "default_devices")]
    pub devices: Vec<String>,

    /// Location pool events are attributed to.
    #[serde(default = "default_locations")]
    pub locations: Vec<String>,

    /// User roster: id → display name.
    #[serde(default = "default_users")]
    pub users: BTreeMap<String, String>,

    /// Base number of events per user.
    #[serde(default = "default_logs_per_user")]
    pub logs_per_user: u64,

    /// Events per user vary by up to this much around the base.
    #[serde(default = "default_logs_jitter")]
    pub logs_jitter: u64,
}

impl Default for SimulatorProfile {
    fn default() -> Self {
        Self {
            action_points: default_action_points(),
            devices: default_devices(),
            locations: default_locations(),
            users: default_users(),
            logs_per_user: default_logs_per_user(),
            logs_jitter: default_logs_jitter(),
        }
    }
}

fn default_action_points() -> BTreeMap<String, u64> {
    [
        ("post".to_string(), 10),
        ("comment".to_string(), 5),
        ("like".to_string(), 2),
        ("share".to_string(), 7),
        ("login_streak".to_string(), 5),
    ]
    .into()
}

fn default_devices() -> Vec<String> {
    vec!["mobile".to_string(), "desktop".to_string()]
}

fn default_locations() -> Vec<String> {
    vec![
        "Boston".to_string(),
        "New York".to_string(),
        "San Francisco".to_string(),
        "Chicago".to_string(),
        "Austin".to_string(),
    ]
}

fn default_users() -> BTreeMap<String, String> {
    [
        ("u001".to_string(), "David".to_string()),
        ("u002".to_string(), "Porter".to_string()),
        ("u003".to_string(), "Kevin".to_string()),
        ("u004".to_string(), "Peter".to_string()),
        ("u005".to_string(), "John".to_string()),
    ]
    .into()
}

fn default_logs_per_user() -> u64 {
    10
}

fn default_logs_jitter() -> u64 {
    3
}

/// Seeded log source generating synthetic raw events.
#[derive(Debug, Clone)]
pub struct SimulatedSource {
    profile: SimulatorProfile,
    seed: u64,
    now: DateTime<Utc>,
}

impl SimulatedSource {
    pub fn new(profile: SimulatorProfile, seed: u64, now: DateTime<Utc>) -> Self {
        Self { profile, seed, now }
    }

    /// Generate one batch of activity.
    ///
    /// Each roster user gets `logs_per_user ± logs_jitter` events, each with
    /// a uniformly picked action, device, and location, timestamped within
    /// the week before `now`. An empty action table yields no events; an
    /// empty device or location pool leaves that field unset.
    pub fn generate(&self) -> Vec<RawEvent> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let actions: Vec<(&String, &u64)> = self.profile.action_points.iter().collect();

        let mut events = Vec::new();
        if actions.is_empty() {
            return events;
        }

        let base = self.profile.logs_per_user;
        let low = base.saturating_sub(self.profile.logs_jitter);
        let high = base + self.profile.logs_jitter;

        for (user_id, name) in &self.profile.users {
            let count = rng.gen_range(low..=high);
            for _ in 0..count {
                let (action, points) = actions[rng.gen_range(0..actions.len())];
                let timestamp = self.now
                    - Duration::days(rng.gen_range(0..7))
                    - Duration::hours(rng.gen_range(0..24))
                    - Duration::minutes(rng.gen_range(0..60));

                let mut event = RawEvent::new(user_id, name, action.as_str(), *points)
                    .with_timestamp(timestamp.to_rfc3339());
                if let Some(device) = pick(&mut rng, &self.profile.devices) {
                    event = event.with_device(device);
                }
                if let Some(location) = pick(&mut rng, &self.profile.locations) {
                    event = event.with_location(location);
                }
                events.push(event);
            }
        }

        debug!("simulated {} events with seed {}", events.len(), self.seed);
        events
    }
}

impl LogSource for SimulatedSource {
    fn fetch(&self) -> Result<Vec<RawEvent>, SourceError> {
        Ok(self.generate())
    }
}

fn pick<'a>(rng: &mut SmallRng, pool: &'a [String]) -> Option<&'a str> {
    if pool.is_empty() {
        None
    } else {
        Some(pool[rng.gen_range(0..pool.len())].as_str())
    }
}
