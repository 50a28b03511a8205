use tracing::{info, warn};

use crate::config::Config;
use crate::discord::{WebhookClient, WebhookUrl};
use crate::error::{Result, WebhookError};
use crate::markup::MessagePreview;
use crate::models::{Message, WirePayload};
use crate::payload::build;
use crate::traits::{HttpTransport, Transport};
use crate::validator::{Violation, validate};

/// Owns the message being composed and the endpoint it goes to.
///
/// Preview and warnings are cheap and meant to be refreshed after every
/// edit; submitting builds the payload and sends it once.
#[derive(Debug, Clone, Default)]
pub struct Composer<T = HttpTransport> {
    message: Message,
    webhook: Option<WebhookUrl>,
    client: WebhookClient<T>,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the configured webhook, if any, and seeds a blank message with
    /// the configured username and avatar.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut composer = Self::new();
        if let Some(url) = &config.webhook_url {
            composer.set_webhook(url)?;
        }
        config.apply_defaults(&mut composer.message);
        Ok(composer)
    }
}

impl<T: Transport> Composer<T> {
    pub fn with_client(client: WebhookClient<T>) -> Self {
        Self {
            message: Message::default(),
            webhook: None,
            client,
        }
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Swaps in a new message, e.g. one loaded from a template, and returns
    /// the old one.
    pub fn replace_message(&mut self, message: Message) -> Message {
        std::mem::replace(&mut self.message, message)
    }

    pub fn message_mut(&mut self) -> &mut Message {
        &mut self.message
    }

    pub fn webhook(&self) -> Option<&WebhookUrl> {
        self.webhook.as_ref()
    }

    /// Validates and stores the endpoint; an invalid URL leaves the previous
    /// one in place.
    pub fn set_webhook(&mut self, raw: &str) -> Result<()> {
        let url = WebhookUrl::parse(raw)
            .inspect_err(|_| warn!("Rejected malformed webhook URL"))?;
        info!(webhook_id = %url.id(), "Webhook selected");
        self.webhook = Some(url);
        Ok(())
    }

    pub fn preview(&self) -> MessagePreview {
        MessagePreview::render(&self.message)
    }

    pub fn warnings(&self) -> Vec<Violation> {
        validate(&self.message)
    }

    pub fn payload(&self) -> WirePayload {
        build(&self.message)
    }

    /// Sends the message. Limit warnings do not block sending; Discord gets
    /// the final say.
    pub async fn submit(&self) -> Result<()> {
        let webhook = self.webhook.as_ref().ok_or(WebhookError::NotConfigured)?;

        let warnings = self.warnings();
        if !warnings.is_empty() {
            warn!(count = %warnings.len(), "Sending message that exceeds Discord limits");
        }

        self.client.send(webhook.as_str(), &self.message).await
    }

    /// Like [`Composer::submit`], but refuses to send while any limit is
    /// exceeded.
    pub async fn submit_strict(&self) -> Result<()> {
        let warnings = self.warnings();
        if !warnings.is_empty() {
            return Err(WebhookError::Validation(warnings));
        }
        self.submit().await
    }
}
