use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::alerts::{Notifier, NotifierError};
use crate::chat::{self, EncodeError};
use crate::incident::{self, DecodeError};

/// Application state shared across handlers
pub struct AppState {
    pub notifier: Notifier,
}

// ============================================================================
// Health Check
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

// ============================================================================
// Incident Relay
// ============================================================================

/// Turn an incident webhook into a chat card, post it, and echo the card.
///
/// The body is taken raw so that malformed JSON is answered with a 500
/// like every other local failure. A failed delivery is only logged; the
/// caller still gets the message that was attempted.
pub async fn relay_incident(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let envelope = incident::decode(&body)?;
    let incident = &envelope.incident;

    tracing::info!(
        incident_id = %incident.incident_id,
        policy = %incident.policy_name,
        condition = %incident.condition_name,
        state = %incident.state,
        started_at = ?incident.started_at_utc().map(|t| t.to_rfc3339()),
        version = %envelope.version,
        "Received incident alert"
    );

    let message = chat::build_message(incident);
    let payload = chat::encode(&message)?;

    match state.notifier.deliver(payload.clone()).await {
        Ok(reply) => {
            tracing::info!(incident_id = %incident.incident_id, "Chat response: {}", reply);
        }
        Err(NotifierError::Status { status, body }) => {
            tracing::error!(
                incident_id = %incident.incident_id,
                status,
                "Chat webhook rejected message"
            );
            tracing::info!(incident_id = %incident.incident_id, "Chat response: {}", body);
        }
        Err(e @ NotifierError::Body(_)) => {
            tracing::warn!(incident_id = %incident.incident_id, error = %e, "Chat response unreadable");
        }
        Err(e) => {
            tracing::error!(
                incident_id = %incident.incident_id,
                error = %e,
                "Failed to deliver chat message"
            );
        }
    }

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        payload,
    )
        .into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Local failures that abort a request before anything is sent out
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        let body = serde_json::json!({
            "error": self.to_string()
        });

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
