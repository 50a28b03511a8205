//! Advisory length checks against Discord's limits
//!
//! Violations come back in a fixed order: content, username, then for each
//! embed its title, description, author name, footer text and aggregate
//! total, followed by each of its fields' name and value. Nothing here stops
//! a message from being built or sent.

use std::fmt;

use serde::Serialize;

use crate::limits::Limits;
use crate::models::{Message, char_len};

/// Which part of the message went over its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitedField {
    Content,
    Username,
    EmbedTitle,
    EmbedDescription,
    EmbedAuthorName,
    EmbedFooterText,
    EmbedTotal,
    FieldName,
    FieldValue,
}

impl LimitedField {
    fn label(self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Username => "username",
            Self::EmbedTitle => "title",
            Self::EmbedDescription => "description",
            Self::EmbedAuthorName => "author name",
            Self::EmbedFooterText => "footer text",
            Self::EmbedTotal => "total characters",
            Self::FieldName => "name",
            Self::FieldValue => "value",
        }
    }
}

/// A single exceeded limit. `Display` gives the user-facing sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: LimitedField,
    /// 1-based embed position, for embed-level checks.
    pub embed: Option<usize>,
    /// 1-based field position within the embed, for field checks.
    pub embed_field: Option<usize>,
    pub length: usize,
    pub limit: usize,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.embed, self.embed_field) {
            (Some(embed), Some(field)) => write!(f, "Embed {embed} field {field} ")?,
            (Some(embed), None) => write!(f, "Embed {embed} ")?,
            _ => {
                let label = self.field.label();
                let mut chars = label.chars();
                if let Some(first) = chars.next() {
                    write!(f, "{}{} ", first.to_uppercase(), chars.as_str())?;
                }
                return write!(
                    f,
                    "is {} characters, over the {} character limit",
                    self.length, self.limit
                );
            }
        }
        write!(
            f,
            "{} is {} characters, over the {} character limit",
            self.field.label(),
            self.length,
            self.limit
        )
    }
}

/// Checks `message` against Discord's limits.
pub fn validate(message: &Message) -> Vec<Violation> {
    validate_with(message, &Limits::DISCORD)
}

/// Checks `message` against an arbitrary limit table.
pub fn validate_with(message: &Message, limits: &Limits) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut check = |field, embed, embed_field, text_len: usize, limit: usize| {
        if text_len > limit {
            violations.push(Violation {
                field,
                embed,
                embed_field,
                length: text_len,
                limit,
            });
        }
    };

    check(
        LimitedField::Content,
        None,
        None,
        char_len(&message.content),
        limits.content,
    );
    check(
        LimitedField::Username,
        None,
        None,
        char_len(&message.username),
        limits.username,
    );

    for (i, embed) in message.embeds.iter().enumerate() {
        let at = Some(i + 1);
        check(LimitedField::EmbedTitle, at, None, char_len(&embed.title), limits.embed_title);
        check(
            LimitedField::EmbedDescription,
            at,
            None,
            char_len(&embed.description),
            limits.embed_description,
        );
        check(
            LimitedField::EmbedAuthorName,
            at,
            None,
            char_len(&embed.author.name),
            limits.embed_author_name,
        );
        check(
            LimitedField::EmbedFooterText,
            at,
            None,
            char_len(&embed.footer.text),
            limits.embed_footer_text,
        );
        check(LimitedField::EmbedTotal, at, None, embed.total_chars(), limits.embed_total);

        for (j, field) in embed.fields.iter().enumerate() {
            let field_at = Some(j + 1);
            check(
                LimitedField::FieldName,
                at,
                field_at,
                char_len(&field.name),
                limits.embed_field_name,
            );
            check(
                LimitedField::FieldValue,
                at,
                field_at,
                char_len(&field.value),
                limits.embed_field_value,
            );
        }
    }

    violations
}
