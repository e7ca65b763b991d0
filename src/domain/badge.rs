//! Badge rules and the built-in rule table.

use serde::{Deserialize, Serialize};

/// Built-in rule table: (action token, threshold, badge id).
///
/// Overridable through the `[[badges]]` section of the configuration file.
const DEFAULT_RULES: &[(&str, u64, &str)] = &[
    ("post", 5, "Content Creator"),
    ("comment", 10, "Engager"),
    ("like", 20, "Supporter"),
    ("share", 3, "Influencer"),
    ("login_streak", 7, "Loyal User"),
];

/// Grants `badge` once a user's count for `action` reaches `threshold`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeRule {
    /// Action token this rule counts.
    pub action: String,

    /// Minimum number of `action` events required.
    pub threshold: u64,

    /// Badge id granted when the threshold is reached.
    pub badge: String,
}

impl BadgeRule {
    /// Create a rule for `action` granting `badge` at `threshold` events.
    pub fn new(action: impl Into<String>, threshold: u64, badge: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            threshold,
            badge: badge.into(),
        }
    }

    /// The built-in badge rules, in grant-evaluation order.
    pub fn defaults() -> Vec<BadgeRule> {
        DEFAULT_RULES
            .iter()
            .map(|(action, threshold, badge)| BadgeRule::new(*action, *threshold, *badge))
            .collect()
    }
}
