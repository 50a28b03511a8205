//! Discord character and count limits for webhook messages

/// Maximum sizes accepted by a Discord webhook, all inclusive.
///
/// Lengths are counted in characters. The two count limits
/// (`embeds_per_message`, `fields_per_embed`) are enforced when embeds or
/// fields are added to the model, never by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub content: usize,
    pub username: usize,
    pub embed_title: usize,
    pub embed_description: usize,
    pub embed_author_name: usize,
    pub embed_footer_text: usize,
    pub embed_field_name: usize,
    pub embed_field_value: usize,
    /// Aggregate of title, description, author name, footer text and
    /// every field name and value within one embed.
    pub embed_total: usize,
    pub embeds_per_message: usize,
    pub fields_per_embed: usize,
}

impl Limits {
    /// The limits enforced by Discord's webhook endpoint.
    pub const DISCORD: Self = Self {
        content: 2000,
        username: 80,
        embed_title: 256,
        embed_description: 4096,
        embed_author_name: 256,
        embed_footer_text: 2048,
        embed_field_name: 256,
        embed_field_value: 1024,
        embed_total: 6000,
        embeds_per_message: 10,
        fields_per_embed: 25,
    };
}

impl Default for Limits {
    fn default() -> Self {
        Self::DISCORD
    }
}
