//! Conversion of a composed [`Message`] into the webhook JSON body
//!
//! Strings are trimmed and dropped when blank, nested objects only appear
//! when their required key survives, and embeds left with no keys are
//! discarded. Limits are not enforced here; Discord rejects oversize
//! payloads itself.

use crate::models::{
    Embed, EmbedAuthor, EmbedField, EmbedFooter, Message, WireAuthor, WireEmbed, WireField,
    WireFooter, WireMedia, WirePayload,
};

/// Builds the minimal payload for `message`. Pure; never fails.
pub fn build(message: &Message) -> WirePayload {
    let embeds: Vec<WireEmbed> = message
        .embeds
        .iter()
        .map(build_embed)
        .filter(|embed| !embed.is_empty())
        .collect();

    WirePayload {
        content: trimmed(&message.content),
        username: trimmed(&message.username),
        avatar_url: trimmed(&message.avatar_url),
        embeds: non_empty(embeds),
    }
}

fn build_embed(embed: &Embed) -> WireEmbed {
    let fields: Vec<WireField> = embed.fields.iter().filter_map(build_field).collect();

    WireEmbed {
        title: trimmed(&embed.title),
        description: trimmed(&embed.description),
        url: trimmed(&embed.url),
        color: embed.color.as_ref().and_then(|color| color.to_int()),
        timestamp: embed.timestamp.clone().filter(|ts| !ts.is_empty()),
        author: build_author(&embed.author),
        thumbnail: trimmed(&embed.thumbnail).map(|url| WireMedia { url }),
        image: trimmed(&embed.image).map(|url| WireMedia { url }),
        footer: build_footer(&embed.footer),
        fields: non_empty(fields),
    }
}

fn build_author(author: &EmbedAuthor) -> Option<WireAuthor> {
    Some(WireAuthor {
        name: trimmed(&author.name)?,
        url: trimmed(&author.url),
        icon_url: trimmed(&author.icon_url),
    })
}

fn build_footer(footer: &EmbedFooter) -> Option<WireFooter> {
    Some(WireFooter {
        text: trimmed(&footer.text)?,
        icon_url: trimmed(&footer.icon_url),
    })
}

fn build_field(field: &EmbedField) -> Option<WireField> {
    Some(WireField {
        name: trimmed(&field.name)?,
        value: trimmed(&field.value)?,
        inline: field.inline,
    })
}

fn trimmed(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmbedColor;
    use serde_json::json;

    fn to_json(message: &Message) -> serde_json::Value {
        serde_json::to_value(build(message)).unwrap()
    }

    #[test]
    fn empty_message_builds_empty_object() {
        let payload = build(&Message::new());
        assert!(payload.is_empty());
        assert_eq!(to_json(&Message::new()), json!({}));
    }

    #[test]
    fn top_level_strings_are_trimmed() {
        let message = Message::new()
            .with_content("  hello  ")
            .with_username("\tbot\n")
            .with_avatar_url(" https://cdn.example.com/a.png ");
        assert_eq!(
            to_json(&message),
            json!({
                "content": "hello",
                "username": "bot",
                "avatar_url": "https://cdn.example.com/a.png"
            })
        );
    }

    #[test]
    fn trimming_law() {
        for s in ["x", "hello world", " padded ", "**bold**"] {
            let padded = Message::new().with_content(format!("  {s}  "));
            let plain = Message::new().with_content(s);
            assert_eq!(build(&padded), build(&plain));
        }
        for blank in ["", "   ", "\n\t "] {
            let padded = Message::new().with_content(format!("  {blank}  "));
            assert!(build(&padded).is_empty());
        }
    }

    #[test]
    fn build_is_idempotent() {
        let message = Message::new()
            .with_content("hi")
            .with_embed(Embed::new().with_title("t").with_color("#5865f2"));
        assert_eq!(build(&message), build(&message));
    }

    #[test]
    fn hex_color_becomes_integer() {
        let message = Message::new().with_embed(Embed::new().with_color("#5865f2"));
        let payload = build(&message);
        let embeds = payload.embeds.unwrap();
        assert_eq!(embeds[0].color, Some(0x5865f2));
        assert_eq!(embeds[0].color, Some(5_793_266));
    }

    #[test]
    fn color_edge_cases() {
        let color_of = |color: EmbedColor| {
            build(&Message::new().with_embed(Embed::new().with_title("t").with_color(color)))
                .embeds
                .and_then(|embeds| embeds[0].color)
        };
        assert_eq!(color_of(EmbedColor::Value(0xff0000)), Some(0xff0000));
        assert_eq!(color_of(EmbedColor::Value(0)), None);
        assert_eq!(color_of(EmbedColor::Hex(String::new())), None);
        assert_eq!(color_of(EmbedColor::Hex("#000000".into())), Some(0));
    }

    #[test]
    fn default_embed_is_dropped() {
        let message = Message::new()
            .with_content("text")
            .with_embed(Embed::new())
            .with_embed(Embed::new().with_title("   "));
        assert_eq!(to_json(&message), json!({ "content": "text" }));
    }

    #[test]
    fn surviving_embeds_keep_order() {
        let message = Message::new()
            .with_embed(Embed::new().with_title("one"))
            .with_embed(Embed::new())
            .with_embed(Embed::new().with_description("three"));
        assert_eq!(
            to_json(&message),
            json!({ "embeds": [{ "title": "one" }, { "description": "three" }] })
        );
    }

    #[test]
    fn author_requires_name() {
        let nameless = Embed::new()
            .with_author(EmbedAuthor::new("  ").with_url("https://example.com"))
            .with_title("t");
        assert_eq!(build_embed(&nameless).author, None);

        let named = Embed::new().with_author(
            EmbedAuthor::new(" me ")
                .with_url(" ")
                .with_icon_url(" https://cdn.example.com/i.png "),
        );
        assert_eq!(
            serde_json::to_value(build_embed(&named)).unwrap(),
            json!({ "author": { "name": "me", "icon_url": "https://cdn.example.com/i.png" } })
        );
    }

    #[test]
    fn footer_requires_text() {
        let embed = Embed::new()
            .with_footer(EmbedFooter::new("").with_icon_url("https://cdn.example.com/f.png"));
        assert!(build_embed(&embed).is_empty());

        let embed = Embed::new().with_footer(EmbedFooter::new(" foot "));
        assert_eq!(
            serde_json::to_value(build_embed(&embed)).unwrap(),
            json!({ "footer": { "text": "foot" } })
        );
    }

    #[test]
    fn media_wrapped_in_url_objects() {
        let embed = Embed::new()
            .with_thumbnail(" https://cdn.example.com/t.png ")
            .with_image("   ");
        assert_eq!(
            serde_json::to_value(build_embed(&embed)).unwrap(),
            json!({ "thumbnail": { "url": "https://cdn.example.com/t.png" } })
        );
    }

    #[test]
    fn fields_need_name_and_value() {
        let embed = Embed::new()
            .with_field(EmbedField::new("name", "   ", false))
            .with_field(EmbedField::new(" ", "value", true))
            .with_field(EmbedField::new(" Price ", " $450 ", true));
        assert_eq!(
            serde_json::to_value(build_embed(&embed)).unwrap(),
            json!({ "fields": [{ "name": "Price", "value": "$450", "inline": true }] })
        );
    }

    #[test]
    fn embed_with_only_blank_fields_is_dropped() {
        let message = Message::new().with_embed(
            Embed::new().with_field(EmbedField::new("", "", false)),
        );
        assert!(build(&message).is_empty());
    }

    #[test]
    fn timestamp_passes_through_verbatim() {
        let mut embed = Embed::new();
        embed.timestamp = Some("2024-01-02T03:04:05.000Z".to_string());
        assert_eq!(
            build_embed(&embed).timestamp.as_deref(),
            Some("2024-01-02T03:04:05.000Z")
        );

        embed.timestamp = Some(String::new());
        assert!(build_embed(&embed).is_empty());
    }

    #[test]
    fn full_embed_shape() {
        let mut embed = Embed::new()
            .with_title("Release v2.4.0 is out")
            .with_description("Buzz Rickson's - N-1")
            .with_url("https://example.com/item")
            .with_color(0x5865f2)
            .with_author(EmbedAuthor::new("Finder").with_url("https://example.com"))
            .with_thumbnail("https://example.com/t.png")
            .with_image("https://example.com/i.png")
            .with_footer(EmbedFooter::new("found").with_icon_url("https://example.com/f.png"))
            .with_field(EmbedField::new("Price", "$450", true));
        embed.timestamp = Some("2024-01-02T03:04:05.000Z".into());

        assert_eq!(
            to_json(&Message::new().with_embed(embed)),
            json!({
                "embeds": [{
                    "title": "Release v2.4.0 is out",
                    "description": "Buzz Rickson's - N-1",
                    "url": "https://example.com/item",
                    "color": 5793266,
                    "timestamp": "2024-01-02T03:04:05.000Z",
                    "author": { "name": "Finder", "url": "https://example.com" },
                    "thumbnail": { "url": "https://example.com/t.png" },
                    "image": { "url": "https://example.com/i.png" },
                    "footer": { "text": "found", "icon_url": "https://example.com/f.png" },
                    "fields": [{ "name": "Price", "value": "$450", "inline": true }]
                }]
            })
        );
    }
}
