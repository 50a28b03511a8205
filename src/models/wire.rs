//! Discord webhook payload types
//!
//! Every optional key is skipped when `None`, so a payload never carries an
//! empty string, object or array.

use serde::{Deserialize, Serialize};

/// JSON body POSTed to a webhook
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WirePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<WireEmbed>>,
}

impl WirePayload {
    /// True when the payload would serialize to `{}`.
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.username.is_none()
            && self.avatar_url.is_none()
            && self.embeds.is_none()
    }
}

/// Discord embed structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireEmbed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<WireAuthor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<WireMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<WireMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<WireFooter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<WireField>>,
}

impl WireEmbed {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireAuthor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Thumbnail or full-size image reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMedia {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireFooter {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}
