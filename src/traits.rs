//! Transport seam between the webhook client and the network

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{Result, WebhookError};
use crate::models::WirePayload;

/// What the client needs to know about a webhook response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Delivers a payload to a webhook endpoint.
///
/// Implementations make exactly one attempt per call. Any failure to get a
/// response at all maps to [`WebhookError::Transport`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &str, payload: &WirePayload) -> Result<TransportResponse>;
}

/// Plain HTTPS transport on top of `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, payload: &WirePayload) -> Result<TransportResponse> {
        // `.json()` also sets `Content-Type: application/json`.
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| WebhookError::Transport(format!("Failed to reach Discord: {e}")))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| WebhookError::Transport(format!("Unreadable response from Discord: {e}")))?;

        Ok(TransportResponse { status, body })
    }
}

/// Test transport that records every call and answers with a canned response.
#[cfg(test)]
pub(crate) struct RecordingTransport {
    pub calls: std::sync::Mutex<Vec<(String, WirePayload)>>,
    answer: Result<TransportResponse>,
}

#[cfg(test)]
impl RecordingTransport {
    pub fn answering(status: u16, body: &str) -> Self {
        Self {
            calls: std::sync::Mutex::new(Vec::new()),
            answer: Ok(TransportResponse {
                status,
                body: body.to_string(),
            }),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            calls: std::sync::Mutex::new(Vec::new()),
            answer: Err(WebhookError::Transport(message.to_string())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[cfg(test)]
#[async_trait]
impl Transport for RecordingTransport {
    async fn post_json(&self, url: &str, payload: &WirePayload) -> Result<TransportResponse> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), payload.clone()));
        self.answer.clone()
    }
}
