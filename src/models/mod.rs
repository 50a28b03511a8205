//! Message model edited by the composing layer, and the wire payload it becomes
//!
//! [`Message`] and [`Embed`] are plain value types. They deserialize from the
//! camelCase JSON the composer UI stores (`avatarUrl`, `iconUrl`), with every
//! key optional. The wire types in [`wire`] are what actually goes to Discord.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::limits::Limits;
use crate::timestamp::format_timestamp;

pub mod wire;

pub use wire::{WireAuthor, WireEmbed, WireField, WireFooter, WireMedia, WirePayload};

/// Discord blurple, the color new embeds start out with in the composer.
pub const DEFAULT_EMBED_COLOR: &str = "#5865f2";

/// Swatches offered by the color picker.
pub const PRESET_COLORS: [&str; 8] = [
    "#5865f2", // blurple
    "#57f287", // green
    "#fee75c", // yellow
    "#eb459e", // fuchsia
    "#ed4245", // red
    "#ffffff", // white
    "#23272a", // dark
    "#99aab5", // gray
];

/// Left border color Discord draws for an embed without a color.
const NEUTRAL_EMBED_COLOR: &str = "#202225";

/// A webhook message as composed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Message {
    pub content: String,
    pub username: String,
    pub avatar_url: String,
    pub embeds: Vec<Embed>,
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = avatar_url.into();
        self
    }

    /// Builder form of [`Message::add_embed`]; embeds past the limit are dropped.
    pub fn with_embed(mut self, embed: Embed) -> Self {
        self.add_embed(embed);
        self
    }

    /// Appends an embed, refusing once the message already holds the
    /// maximum number of embeds.
    pub fn add_embed(&mut self, embed: Embed) -> Option<&mut Embed> {
        if self.embeds.len() >= Limits::DISCORD.embeds_per_message {
            return None;
        }
        self.embeds.push(embed);
        self.embeds.last_mut()
    }

    pub fn remove_embed(&mut self, index: usize) -> Option<Embed> {
        (index < self.embeds.len()).then(|| self.embeds.remove(index))
    }

    /// Whether there is anything worth previewing: non-blank content, or an
    /// embed with a title, description, author, footer or fields.
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty() || self.embeds.iter().any(Embed::has_visible_content)
    }
}

/// A rich embed card attached to a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub url: String,
    pub color: Option<EmbedColor>,
    /// ISO-8601 timestamp, already normalized by whoever set it.
    pub timestamp: Option<String>,
    pub author: EmbedAuthor,
    pub thumbnail: String,
    pub image: String,
    pub footer: EmbedFooter,
    pub fields: Vec<EmbedField>,
}

impl Embed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<EmbedColor>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.timestamp = Some(format_timestamp(at));
        self
    }

    pub fn with_author(mut self, author: EmbedAuthor) -> Self {
        self.author = author;
        self
    }

    pub fn with_footer(mut self, footer: EmbedFooter) -> Self {
        self.footer = footer;
        self
    }

    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = url.into();
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = url.into();
        self
    }

    /// Builder form of [`Embed::add_field`]; fields past the limit are dropped.
    pub fn with_field(mut self, field: EmbedField) -> Self {
        self.add_field(field);
        self
    }

    /// Appends a field, refusing once the embed already holds the maximum
    /// number of fields.
    pub fn add_field(&mut self, field: EmbedField) -> Option<&mut EmbedField> {
        if self.fields.len() >= Limits::DISCORD.fields_per_embed {
            return None;
        }
        self.fields.push(field);
        self.fields.last_mut()
    }

    pub fn remove_field(&mut self, index: usize) -> Option<EmbedField> {
        (index < self.fields.len()).then(|| self.fields.remove(index))
    }

    /// Characters counted against the per-embed aggregate limit.
    pub fn total_chars(&self) -> usize {
        let fields: usize = self
            .fields
            .iter()
            .map(|f| char_len(&f.name) + char_len(&f.value))
            .sum();

        char_len(&self.title)
            + char_len(&self.description)
            + char_len(&self.author.name)
            + char_len(&self.footer.text)
            + fields
    }

    /// Whether a preview would draw anything for this embed.
    pub fn has_visible_content(&self) -> bool {
        !self.title.is_empty()
            || !self.description.is_empty()
            || !self.author.name.is_empty()
            || !self.footer.text.is_empty()
            || !self.fields.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmbedAuthor {
    pub name: String,
    pub url: String,
    pub icon_url: String,
}

impl EmbedAuthor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = icon_url.into();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmbedFooter {
    pub text: String,
    pub icon_url: String,
}

impl EmbedFooter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon_url: String::new(),
        }
    }

    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = icon_url.into();
        self
    }
}

/// Key-value field inside an embed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}

/// Embed color as the user entered it: a `#rrggbb` string from the picker
/// or a raw integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmbedColor {
    Value(u32),
    Hex(String),
}

impl EmbedColor {
    /// Integer form sent on the wire.
    ///
    /// A zero integer or blank string is "no color". Strings lose a leading
    /// `#` and an optional `0x`, then are read as base 16 up to the first
    /// non-hex character; a string with no leading hex digits has no color.
    pub fn to_int(&self) -> Option<u32> {
        match self {
            Self::Value(0) => None,
            Self::Value(value) => Some(*value),
            Self::Hex(raw) => {
                let raw = raw.trim();
                if raw.is_empty() {
                    return None;
                }
                let digits = raw.strip_prefix('#').unwrap_or(raw);
                let digits = digits
                    .strip_prefix("0x")
                    .or_else(|| digits.strip_prefix("0X"))
                    .unwrap_or(digits);
                let end = digits
                    .find(|c: char| !c.is_ascii_hexdigit())
                    .unwrap_or(digits.len());
                u32::from_str_radix(&digits[..end], 16).ok()
            }
        }
    }
}

impl From<u32> for EmbedColor {
    fn from(value: u32) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for EmbedColor {
    fn from(hex: &str) -> Self {
        Self::Hex(hex.to_string())
    }
}

impl From<String> for EmbedColor {
    fn from(hex: String) -> Self {
        Self::Hex(hex)
    }
}

/// Renders an integer color as `#rrggbb`; zero maps to Discord's neutral
/// embed border.
pub fn color_to_hex(color: u32) -> String {
    if color == 0 {
        return NEUTRAL_EMBED_COLOR.to_string();
    }
    format!("#{color:06x}")
}

/// Length as Discord counts it: UTF-16 code units, so an emoji outside the
/// BMP counts twice.
pub(crate) fn char_len(s: &str) -> usize {
    s.encode_utf16().count()
}
