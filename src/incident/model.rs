//! Incident webhook data model

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

/// Incident state that switches the card to the health color
pub const STATE_CLOSED: &str = "closed";

/// One alerting event reported by the monitoring system
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Incident {
    pub incident_id: String,
    pub resource_id: String,
    pub resource_name: String,
    /// Lifecycle state, usually `open` or `closed`
    pub state: String,
    /// Unix seconds; `null` while the incident is still open
    pub started_at: Option<i64>,
    pub ended_at: Option<i64>,
    pub policy_name: String,
    pub condition_name: String,
    /// Link to the incident in the monitoring console
    pub url: String,
    pub summary: String,
}

impl Incident {
    pub fn is_closed(&self) -> bool {
        self.state == STATE_CLOSED
    }

    /// Start time as a UTC timestamp, if present and in range
    pub fn started_at_utc(&self) -> Option<DateTime<Utc>> {
        self.started_at
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
    }
}

/// Inbound request body: one incident plus the payload schema version
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AlertEnvelope {
    pub incident: Incident,
    /// Sent as either `"1.2"` or `1.2` depending on the sender; kept opaque
    pub version: serde_json::Value,
}
