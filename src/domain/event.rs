//! Activity event types and the two accepted input schemas.
//!
//! Log sources deliver either raw per-action events (`RawEvent`) or records
//! that were aggregated upstream (`PreAggregatedRecord`). The two schemas are
//! kept apart as an explicit tagged union (`ActivityBatch`) so the engine
//! never has to guess which one it was handed.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A raw activity record exactly as the log source delivers it.
///
/// Every field is optional and parsed leniently: a missing or mistyped field
/// becomes `None` and is resolved to its documented default by the
/// normalizer. A record never fails to parse because of its field contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_name: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub action: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub points_awarded: Option<u64>,

    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub device: Option<String>,

    /// Alias for `device` seen in older logs. Resolved by the normalizer.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub devices: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,

    /// Alias for `location` seen in older logs. Resolved by the normalizer.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub locations: Option<String>,

    /// ISO-8601 instant, when the source recorded one.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<String>,
}

impl RawEvent {
    /// Create an event with the identifying fields set.
    pub fn new(
        user_id: impl Into<String>,
        user_name: impl Into<String>,
        action: impl Into<String>,
        points_awarded: u64,
    ) -> Self {
        Self {
            user_id: Some(user_id.into()),
            user_name: Some(user_name.into()),
            action: Some(action.into()),
            points_awarded: Some(points_awarded),
            ..Self::default()
        }
    }

    /// Set the device this event came from.
    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }

    /// Set the location this event came from.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the recorded timestamp (ISO-8601).
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}

/// The canonical event shape produced by the normalizer.
///
/// All fields are concrete; absent source data has already been replaced by
/// the documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub user_id: String,
    pub user_name: String,
    pub action: String,
    pub points_awarded: u64,
    pub device: String,
    pub location: String,
    /// RFC3339 instant, or empty when the source had none and no clock value
    /// was supplied.
    pub timestamp: String,
}

/// A record that was already aggregated upstream: `{name, points, badges,
/// actions, device}`. Its only identity is the display name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreAggregatedRecord {
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub points: Option<u64>,

    #[serde(default, deserialize_with = "lenient_string_list")]
    pub badges: Vec<String>,

    #[serde(default, deserialize_with = "lenient_count_map")]
    pub actions: BTreeMap<String, u64>,

    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub device: Option<String>,
}

/// One batch of input for the engine, tagged with its schema.
///
/// Callers state which schema they hold; the engine never probes field names
/// to guess.
#[derive(Debug, Clone, PartialEq)]
pub enum ActivityBatch {
    /// Raw per-action events to be normalized and aggregated.
    Raw(Vec<RawEvent>),
    /// Records aggregated upstream, adapted into the canonical stats shape.
    PreAggregated(Vec<PreAggregatedRecord>),
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_u64())
}

fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default())
}

fn lenient_count_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_object()
        .map(|entries| {
            entries
                .iter()
                .map(|(key, count)| (key.clone(), count.as_u64().unwrap_or(0)))
                .collect()
        })
        .unwrap_or_default())
}
