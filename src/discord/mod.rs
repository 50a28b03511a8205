//! # Discord Webhook Delivery
//!
//! This module sends composed messages to a Discord webhook. It turns the
//! [`Message`] into its wire payload, POSTs it once, and turns whatever Discord
//! answers into either success or a [`WebhookError`] whose text can be shown
//! to the user directly.
//!
//! ## Behaviour
//!
//! - **Empty messages**: a payload with no keys fails with
//!   [`WebhookError::EmptyMessage`] before any request is made
//! - **Single attempt**: one POST, no retry, default client timeouts
//! - **Error surfacing**: for non-2xx answers the `message` field of a JSON
//!   body is preferred, then the raw body, then `Discord API error: <status>`
//! - **No side effects**: the message is only ever borrowed
//!
//! ## Endpoint Format
//!
//! `https://discord.com/api/webhooks/{id}/{token}`; see [`WebhookUrl`]. The
//! client itself does not re-validate the endpoint it is handed.

use tracing::{debug, error, info, warn};

use crate::error::{Result, WebhookError};
use crate::models::{Message, WirePayload};
use crate::payload::build;
use crate::traits::{HttpTransport, Transport, TransportResponse};

mod webhook_url;

pub use webhook_url::{WebhookUrl, is_valid_webhook_url};

/// Webhook client, generic over how requests reach the network.
///
/// With the default [`HttpTransport`] this wraps a `reqwest::Client`, which
/// pools connections and is cheap to clone, so one client can be shared by
/// every send.
#[derive(Debug, Clone, Default)]
pub struct WebhookClient<T = HttpTransport> {
    transport: T,
}

impl WebhookClient {
    /// Creates a client backed by a fresh `reqwest::Client`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Transport> WebhookClient<T> {
    /// Creates a client that delivers through `transport`.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds the payload for `message` and posts it to `endpoint`.
    ///
    /// ## Errors
    ///
    /// - [`WebhookError::EmptyMessage`] when nothing survives building; no
    ///   request is made
    /// - [`WebhookError::Transport`] for network failures and non-2xx
    ///   responses, carrying the text extracted from Discord's answer
    ///
    /// ## Example
    ///
    /// ```rust,no_run
    /// use webhook_composer::discord::WebhookClient;
    /// use webhook_composer::models::Message;
    ///
    /// # async fn run() -> webhook_composer::error::Result<()> {
    /// let client = WebhookClient::new();
    /// let message = Message::new().with_content("Deploy finished");
    /// client
    ///     .send("https://discord.com/api/webhooks/123/abc", &message)
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send(&self, endpoint: &str, message: &Message) -> Result<()> {
        let payload = build(message);
        self.send_payload(endpoint, &payload).await
    }

    /// Posts an already built payload. Same contract as [`WebhookClient::send`].
    pub async fn send_payload(&self, endpoint: &str, payload: &WirePayload) -> Result<()> {
        if payload.is_empty() {
            warn!("Refusing to send an empty webhook message");
            return Err(WebhookError::EmptyMessage);
        }

        let embeds = payload.embeds.as_ref().map_or(0, Vec::len);
        debug!(embeds = %embeds, "Posting webhook payload");

        let response = self
            .transport
            .post_json(endpoint, payload)
            .await
            .inspect_err(|e| error!(error = %e, "Webhook request failed"))?;

        if response.is_success() {
            info!(status = %response.status, embeds = %embeds, "Webhook message sent");
            Ok(())
        } else {
            let message = error_message(&response);
            error!(status = %response.status, error = %message, "Discord rejected webhook message");
            Err(WebhookError::Transport(message))
        }
    }
}

/// Sends `message` to `endpoint` with a one-off client.
pub async fn send(endpoint: &str, message: &Message) -> Result<()> {
    WebhookClient::new().send(endpoint, message).await
}

/// Picks the most useful text out of a failed response.
fn error_message(response: &TransportResponse) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(&response.body)
        .ok()
        .and_then(|json| {
            json.get("message")
                .and_then(serde_json::Value::as_str)
                .filter(|message| !message.trim().is_empty())
                .map(str::to_string)
        });

    if let Some(message) = from_json {
        return message;
    }
    if !response.body.trim().is_empty() {
        return response.body.clone();
    }
    format!("Discord API error: {}", response.status)
}
