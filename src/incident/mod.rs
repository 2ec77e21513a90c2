//! Inbound incident alerts
//!
//! Decodes the monitoring system's incident webhook body. Field values are
//! passed through untouched; only `state` and `condition_name` influence
//! how the alert is rendered downstream.

pub mod model;

pub use model::{AlertEnvelope, Incident, STATE_CLOSED};

/// Decode a raw request body into an [`AlertEnvelope`]
pub fn decode(body: &[u8]) -> Result<AlertEnvelope, DecodeError> {
    Ok(serde_json::from_slice(body)?)
}

/// Inbound body could not be decoded
#[derive(Debug, thiserror::Error)]
#[error("Failed to decode alert: {0}")]
pub struct DecodeError(#[from] serde_json::Error);
