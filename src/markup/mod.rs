//! Discord inline markup parsing for message previews
//!
//! Markup is resolved by a fixed rule order rather than a grammar: at each
//! step the first rule (by order) that matches anywhere in the remaining text
//! claims its leftmost match, and the text on either side is parsed with
//! the same rules. Matched bodies are kept verbatim, so a span
//! never carries nested styling. Unterminated markers are left as text.
//!
//! Only the text *before* a match is parsed recursively; the text after it is
//! handled by the same loop. A rule that failed on a segment cannot match
//! inside any sub-slice of it, so each nested call starts at a strictly later
//! rule and recursion depth is bounded by the number of rules. Each step is a
//! linear regex scan, giving O(n²) worst case on adversarial input, which is
//! fine for message-sized text.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

mod preview;

pub use preview::{EmbedPreview, FieldPreview, MessagePreview};

/// One inline element of parsed markup.
///
/// Container variants hold the matched text as a single [`ParsedNode::Text`]
/// child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ParsedNode {
    Text(String),
    Bold(Vec<ParsedNode>),
    Italic(Vec<ParsedNode>),
    Underline(Vec<ParsedNode>),
    Strikethrough(Vec<ParsedNode>),
    Spoiler(Vec<ParsedNode>),
    InlineCode(String),
    CodeBlock {
        language: Option<String>,
        body: String,
    },
    Link {
        label: String,
        url: String,
    },
}

impl ParsedNode {
    /// The text a reader would see, markers stripped.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Text(text) | Self::InlineCode(text) => text.clone(),
            Self::Bold(children)
            | Self::Italic(children)
            | Self::Underline(children)
            | Self::Strikethrough(children)
            | Self::Spoiler(children) => to_plain_text(children),
            Self::CodeBlock { body, .. } => body.clone(),
            Self::Link { label, .. } => label.clone(),
        }
    }
}

pub fn to_plain_text(nodes: &[ParsedNode]) -> String {
    nodes.iter().map(ParsedNode::plain_text).collect()
}

struct Rule {
    pattern: Regex,
    build: fn(&Captures<'_>) -> ParsedNode,
}

impl Rule {
    fn new(pattern: &str, build: fn(&Captures<'_>) -> ParsedNode) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            build,
        }
    }
}

fn group(caps: &Captures<'_>, index: usize) -> String {
    caps.get(index).map_or_else(String::new, |m| m.as_str().to_string())
}

fn span(caps: &Captures<'_>) -> Vec<ParsedNode> {
    vec![ParsedNode::Text(group(caps, 1))]
}

// Order is precedence.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new(r"(?s)```([A-Za-z0-9_]*)\n?(.*?)```", |caps| {
            let language = group(caps, 1);
            ParsedNode::CodeBlock {
                language: (!language.is_empty()).then_some(language),
                body: group(caps, 2),
            }
        }),
        Rule::new(r"`([^`]+)`", |caps| ParsedNode::InlineCode(group(caps, 1))),
        Rule::new(r"\[([^\]]+)\]\(([^)]+)\)", |caps| ParsedNode::Link {
            label: group(caps, 1),
            url: group(caps, 2),
        }),
        // Bold bodies may hold lone asterisks but never `**`.
        Rule::new(r"\*\*([^*]+(?:\*[^*]+)*)\*\*", |caps| {
            ParsedNode::Bold(span(caps))
        }),
        Rule::new(r"__([^_]+)__", |caps| ParsedNode::Underline(span(caps))),
        Rule::new(r"\*([^*]+)\*", |caps| ParsedNode::Italic(span(caps))),
        Rule::new(r"_([^_]+)_", |caps| ParsedNode::Italic(span(caps))),
        Rule::new(r"~~([^~]+)~~", |caps| ParsedNode::Strikethrough(span(caps))),
        Rule::new(r"\|\|([^|]+)\|\|", |caps| ParsedNode::Spoiler(span(caps))),
    ]
});

/// Parses markup into inline nodes. Never fails; empty input gives no nodes.
pub fn parse(text: &str) -> Vec<ParsedNode> {
    let mut nodes = Vec::new();
    parse_into(text, &RULES, &mut nodes);
    nodes
}

fn parse_into(mut text: &str, rules: &[Rule], out: &mut Vec<ParsedNode>) {
    'segment: while !text.is_empty() {
        for (index, rule) in rules.iter().enumerate() {
            let Some(caps) = rule.pattern.captures(text) else {
                continue;
            };
            let Some(whole) = caps.get(0) else {
                continue;
            };

            parse_into(&text[..whole.start()], &rules[index + 1..], out);
            out.push((rule.build)(&caps));
            text = &text[whole.end()..];
            continue 'segment;
        }

        out.push(ParsedNode::Text(text.to_string()));
        return;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ParsedNode::*;

    fn text(s: &str) -> ParsedNode {
        Text(s.to_string())
    }

    #[test]
    fn plain_text_is_one_leaf() {
        assert_eq!(parse("hello world"), vec![text("hello world")]);
        assert!(parse("").is_empty());
    }

    #[test]
    fn bold_body_is_not_reparsed() {
        assert_eq!(
            parse("**bold *mix* text**"),
            vec![Bold(vec![text("bold *mix* text")])]
        );
    }

    #[test]
    fn unterminated_markers_stay_literal() {
        assert_eq!(parse("a ** b"), vec![text("a ** b")]);
        assert_eq!(parse("~~nope"), vec![text("~~nope")]);
        assert_eq!(parse("`open"), vec![text("`open")]);
        assert_eq!(parse("[label](no-close"), vec![text("[label](no-close")]);
    }

    #[test]
    fn code_block_with_language() {
        assert_eq!(
            parse("```rust\nfn main() {}\n```"),
            vec![CodeBlock {
                language: Some("rust".to_string()),
                body: "fn main() {}\n".to_string(),
            }]
        );
    }

    #[test]
    fn code_block_body_is_verbatim() {
        assert_eq!(
            parse("before ```\n**x** `y`\n```"),
            vec![
                text("before "),
                CodeBlock {
                    language: None,
                    body: "**x** `y`\n".to_string(),
                },
            ]
        );
    }

    #[test]
    fn inline_code_beats_bold() {
        assert_eq!(
            parse("use `**raw**` here"),
            vec![text("use "), InlineCode("**raw**".to_string()), text(" here")]
        );
    }

    #[test]
    fn link_label_and_url() {
        assert_eq!(
            parse("see [the docs](https://discord.com/developers) now"),
            vec![
                text("see "),
                Link {
                    label: "the docs".to_string(),
                    url: "https://discord.com/developers".to_string(),
                },
                text(" now"),
            ]
        );
    }

    #[test]
    fn precedence_reapplies_on_both_sides() {
        assert_eq!(
            parse("*a* and **b** then ~~c~~"),
            vec![
                Italic(vec![text("a")]),
                text(" and "),
                Bold(vec![text("b")]),
                text(" then "),
                Strikethrough(vec![text("c")]),
            ]
        );
    }

    #[test]
    fn underline_before_underscore_italic() {
        assert_eq!(
            parse("__u__ _i_"),
            vec![
                Underline(vec![text("u")]),
                text(" "),
                Italic(vec![text("i")]),
            ]
        );
    }

    #[test]
    fn spoiler_and_multiline_spans() {
        assert_eq!(
            parse("||secret||\n**two\nlines**"),
            vec![
                Spoiler(vec![text("secret")]),
                text("\n"),
                Bold(vec![text("two\nlines")]),
            ]
        );
    }

    #[test]
    fn interleaved_markers_resolve_by_rule_order() {
        // Bold is tried before italic, so it claims "**b*c**" first.
        assert_eq!(
            parse("*a**b*c**"),
            vec![text("*a"), Bold(vec![text("b*c")])]
        );
    }

    #[test]
    fn triple_asterisks_leave_outer_stars() {
        assert_eq!(
            parse("***bold italic***"),
            vec![text("*"), Bold(vec![text("bold italic")]), text("*")]
        );
        assert_eq!(parse("*****"), vec![text("*****")]);
    }

    #[test]
    fn double_markers_do_not_span_their_own_character() {
        assert_eq!(
            parse("__a_b__"),
            vec![text("_"), Italic(vec![text("a")]), text("b__")]
        );
        assert_eq!(parse("~~a~b~~"), vec![text("~~a~b~~")]);
        assert_eq!(parse("||a|b||"), vec![text("||a|b||")]);
    }

    #[test]
    fn adjacent_bold_spans_stay_separate() {
        assert_eq!(
            parse("**a** and **b**"),
            vec![
                Bold(vec![text("a")]),
                text(" and "),
                Bold(vec![text("b")]),
            ]
        );
    }

    #[test]
    fn first_rule_wins_even_when_later_in_text() {
        assert_eq!(
            parse("*x* `y`"),
            vec![
                Italic(vec![text("x")]),
                text(" "),
                InlineCode("y".to_string()),
            ]
        );
    }

    #[test]
    fn parsing_is_restartable() {
        let input = "**a** _b_ ||c||";
        assert_eq!(parse(input), parse(input));
    }

    #[test]
    fn long_input_does_not_recurse_deeply() {
        let input = "**b** ".repeat(1_000);
        let nodes = parse(&input);
        assert_eq!(nodes.len(), 2_000);
    }

    #[test]
    fn plain_text_strips_markers() {
        let nodes = parse("**Hi** [there](https://x.example) `you`");
        assert_eq!(to_plain_text(&nodes), "Hi there you");
    }

    #[test]
    fn serializes_with_kind_tags() {
        let json = serde_json::to_value(parse("**a**")).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "kind": "bold", "value": [{ "kind": "text", "value": "a" }] }])
        );
    }
}
