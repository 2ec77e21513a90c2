//! Chat platform card messages
//!
//! Builds the card payload for an incident and serializes it for the
//! outbound webhook.

pub mod format;
pub mod message;

pub use format::{build_message, AlertLevel};
pub use message::{Card, ChatMessage, Section, Widget};

/// Serialize a message into the exact bytes sent to the webhook
pub fn encode(message: &ChatMessage) -> Result<Vec<u8>, EncodeError> {
    Ok(serde_json::to_vec(message)?)
}

/// Outbound message could not be serialized
#[derive(Debug, thiserror::Error)]
#[error("Failed to encode chat message: {0}")]
pub struct EncodeError(#[from] serde_json::Error);
