//! Errors surfaced to whoever is sending a message
//!
//! Every `Display` string is meant to be shown to the user as is.

use thiserror::Error;

use crate::validator::Violation;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebhookError {
    /// The built payload had no keys; nothing was sent.
    #[error("Message cannot be empty. Add content or an embed.")]
    EmptyMessage,

    /// Length limits exceeded. Only raised when the caller asked for strict
    /// sending.
    #[error("{}", join_violations(.0))]
    Validation(Vec<Violation>),

    /// Network failure or a non-2xx answer from Discord.
    #[error("{0}")]
    Transport(String),

    #[error("Invalid Discord webhook URL format")]
    InvalidWebhookUrl,

    #[error("No webhook URL configured. Set DISCORD_WEBHOOK_URL or pass --webhook.")]
    NotConfigured,
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, WebhookError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::LimitedField;

    #[test]
    fn empty_message_text() {
        assert_eq!(
            WebhookError::EmptyMessage.to_string(),
            "Message cannot be empty. Add content or an embed."
        );
    }

    #[test]
    fn transport_shows_message_verbatim() {
        let err = WebhookError::Transport("Unknown Webhook".into());
        assert_eq!(err.to_string(), "Unknown Webhook");
    }

    #[test]
    fn validation_joins_violations() {
        let violation = |field, length, limit| Violation {
            field,
            embed: None,
            embed_field: None,
            length,
            limit,
        };
        let err = WebhookError::Validation(vec![
            violation(LimitedField::Content, 2001, 2000),
            violation(LimitedField::Username, 81, 80),
        ]);
        assert_eq!(
            err.to_string(),
            "Content is 2001 characters, over the 2000 character limit; \
             Username is 81 characters, over the 80 character limit"
        );
    }
}
