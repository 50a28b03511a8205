//! Render-ready view of a whole message

use serde::Serialize;

use super::{ParsedNode, parse};
use crate::models::{Embed, Message, color_to_hex};

/// What a preview pane needs to draw a message.
///
/// Content, descriptions and field text are parsed as markup; titles, author
/// and footer are shown as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessagePreview {
    pub username: Option<String>,
    pub content: Vec<ParsedNode>,
    pub embeds: Vec<EmbedPreview>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedPreview {
    /// Left border color as `#rrggbb`.
    pub color: String,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Vec<ParsedNode>,
    pub fields: Vec<FieldPreview>,
    pub footer: Option<String>,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldPreview {
    pub name: Vec<ParsedNode>,
    pub value: Vec<ParsedNode>,
    pub inline: bool,
}

impl MessagePreview {
    /// Embeds with nothing visible (no title, description, author, footer or
    /// fields) are skipped, as Discord would not draw them.
    pub fn render(message: &Message) -> Self {
        Self {
            username: non_blank(&message.username),
            content: parse(&message.content),
            embeds: message
                .embeds
                .iter()
                .filter(|embed| embed.has_visible_content())
                .map(EmbedPreview::render)
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.embeds.is_empty()
    }
}

impl EmbedPreview {
    fn render(embed: &Embed) -> Self {
        let color = embed
            .color
            .as_ref()
            .and_then(|color| color.to_int())
            .unwrap_or(0);

        Self {
            color: color_to_hex(color),
            author: non_blank(&embed.author.name),
            title: non_blank(&embed.title),
            description: parse(&embed.description),
            fields: embed
                .fields
                .iter()
                .map(|field| FieldPreview {
                    name: parse(&field.name),
                    value: parse(&field.value),
                    inline: field.inline,
                })
                .collect(),
            footer: non_blank(&embed.footer.text),
            timestamp: embed.timestamp.clone().filter(|ts| !ts.is_empty()),
        }
    }
}

fn non_blank(s: &str) -> Option<String> {
    (!s.trim().is_empty()).then(|| s.to_string())
}
