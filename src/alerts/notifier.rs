//! Outbound chat webhook delivery

use reqwest::header::CONTENT_TYPE;
use reqwest::Url;

/// Posts serialized chat messages to a single webhook.
///
/// One attempt per message, no retries.
#[derive(Debug, Clone)]
pub struct Notifier {
    client: reqwest::Client,
    webhook_url: Url,
}

impl Notifier {
    /// Create a notifier for `webhook_url`
    pub fn new(webhook_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url,
        }
    }

    /// POST `payload` as JSON and return the remote response body.
    ///
    /// Non-2xx responses are errors carrying the status and, best-effort,
    /// the response body.
    pub async fn deliver(&self, payload: Vec<u8>) -> Result<String, NotifierError> {
        let response = self
            .client
            .post(self.webhook_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(NotifierError::Request)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
            return Err(NotifierError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(NotifierError::Body)?;

        tracing::debug!(
            url = %self.webhook_url,
            status = status.as_u16(),
            "Chat webhook accepted message"
        );

        Ok(body)
    }
}

/// Webhook delivery errors
#[derive(Debug, thiserror::Error)]
pub enum NotifierError {
    #[error("Failed to send webhook: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Webhook returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to read webhook response: {0}")]
    Body(#[source] reqwest::Error),
}
