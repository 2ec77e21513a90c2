//! Incident Relay: monitoring alerts to chat cards
//!
//! Receives incident webhooks from a monitoring system, renders each one as
//! a chat card (colored title, console link, state and resource rows) and
//! posts it to a single chat webhook. The rendered card is echoed back to
//! the caller whether or not the chat platform accepted it.
//!
//! # Example
//!
//! ```
//! use incident_relay::chat::{build_message, AlertLevel};
//! use incident_relay::incident::decode;
//!
//! let body = br#"{"incident":{"state":"open","policy_name":"Web","condition_name":"[DANGER] CPU"},"version":"1.2"}"#;
//! let envelope = decode(body).unwrap();
//!
//! assert_eq!(AlertLevel::of(&envelope.incident), AlertLevel::Danger);
//! let message = build_message(&envelope.incident);
//! assert_eq!(message.text, "<users/all>");
//! ```

pub mod alerts;
pub mod api;
pub mod chat;
pub mod incident;

// Re-export commonly used types
pub use alerts::{Notifier, NotifierError};
pub use chat::{build_message, AlertLevel, ChatMessage};
pub use incident::{AlertEnvelope, Incident};
