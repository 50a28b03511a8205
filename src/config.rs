//! Environment-driven configuration
//!
//! Call `dotenvy::dotenv()` before [`Config::from_env`] to pick up a `.env`
//! file. Recognised variables:
//!
//! - `DISCORD_WEBHOOK_URL`: endpoint used when none is given explicitly
//! - `WEBHOOK_USERNAME`: username applied to messages that leave it blank
//! - `WEBHOOK_AVATAR_URL`: avatar applied to messages that leave it blank

use tracing::warn;

use crate::models::Message;

pub const WEBHOOK_URL_VAR: &str = "DISCORD_WEBHOOK_URL";
pub const USERNAME_VAR: &str = "WEBHOOK_USERNAME";
pub const AVATAR_URL_VAR: &str = "WEBHOOK_AVATAR_URL";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub webhook_url: Option<String>,
    pub default_username: Option<String>,
    pub default_avatar_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let config = Self::from_lookup(|key| std::env::var(key).ok());

        if config.webhook_url.is_none() {
            warn!("{WEBHOOK_URL_VAR} not set - a webhook URL must be passed explicitly");
        }

        config
    }

    /// Builds a config from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            webhook_url: get(WEBHOOK_URL_VAR),
            default_username: get(USERNAME_VAR),
            default_avatar_url: get(AVATAR_URL_VAR),
        }
    }

    /// Fills a blank username or avatar from the configured defaults.
    pub fn apply_defaults(&self, message: &mut Message) {
        if let Some(username) = &self.default_username
            && message.username.trim().is_empty()
        {
            message.username = username.clone();
        }
        if let Some(avatar_url) = &self.default_avatar_url
            && message.avatar_url.trim().is_empty()
        {
            message.avatar_url = avatar_url.clone();
        }
    }
}
