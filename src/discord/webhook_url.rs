//! Webhook endpoint URL validation

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::WebhookError;

static WEBHOOK_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://[^/\s]+/api/webhooks/([0-9]+)/([A-Za-z0-9_-]+)$").unwrap()
});

/// Whether `url` has the shape `https://<host>/api/webhooks/<id>/<token>`.
pub fn is_valid_webhook_url(url: &str) -> bool {
    WEBHOOK_URL_REGEX.is_match(url)
}

/// A webhook endpoint known to have the right shape.
///
/// `Debug` hides the token, since anyone holding it can post to the channel.
#[derive(Clone, PartialEq, Eq)]
pub struct WebhookUrl {
    url: String,
    id_start: usize,
    id_end: usize,
}

impl WebhookUrl {
    /// Validates a user-supplied URL; surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, WebhookError> {
        let url = raw.trim();
        let caps = WEBHOOK_URL_REGEX
            .captures(url)
            .ok_or(WebhookError::InvalidWebhookUrl)?;
        let id = caps.get(1).ok_or(WebhookError::InvalidWebhookUrl)?;

        Ok(Self {
            url: url.to_string(),
            id_start: id.start(),
            id_end: id.end(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// The numeric webhook id.
    pub fn id(&self) -> &str {
        &self.url[self.id_start..self.id_end]
    }

    pub fn token(&self) -> &str {
        &self.url[self.id_end + 1..]
    }
}

impl FromStr for WebhookUrl {
    type Err = WebhookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for WebhookUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookUrl")
            .field("id", &self.id())
            .field("token", &"<redacted>")
            .finish()
    }
}
