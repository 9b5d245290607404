use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One tracked session, as the server expects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlockSubmission {
    pub task_id: String,
    #[serde(with = "browser_timestamp")]
    pub start: DateTime<Utc>,
    #[serde(with = "browser_timestamp")]
    pub end: DateTime<Utc>,
}

/// Request body: `{"time_block": {...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlockEnvelope {
    pub time_block: TimeBlockSubmission,
}

impl From<TimeBlockSubmission> for TimeBlockEnvelope {
    fn from(time_block: TimeBlockSubmission) -> Self {
        Self { time_block }
    }
}

/// A serialized time block ready to be posted
#[derive(Debug, Clone)]
pub struct SubmitRequest {
    /// Value for the `X-CSRF-Token` header
    pub csrf_token: String,
    /// JSON-encoded `TimeBlockEnvelope`
    pub body: String,
}

/// An acknowledged submission
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitResponse {
    pub status: u16,
    /// Parsed JSON body (`None` for 204 No Content)
    pub body: Option<serde_json::Value>,
}

/// Timestamps in the shape `Date.prototype.toJSON` produces:
/// UTC, millisecond precision, `Z` suffix (`2019-03-01T09:30:00.000Z`)
pub mod browser_timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(ts: &DateTime<Utc>) -> String {
        ts.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(ts))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
