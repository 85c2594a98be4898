use serenity::all::CreateEmbed;

/// Rich reply content for a deck listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeckEmbed {
    pub title: String,
    pub fields: Vec<EmbedField>,
}

/// One named display field of an embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    /// Side-by-side when true, stacked when false.
    pub inline: bool,
}

impl DeckEmbed {
    /// Converts the embed into a Serenity builder at the Discord boundary.
    pub fn into_create_embed(self) -> CreateEmbed {
        CreateEmbed::new().title(self.title).fields(
            self.fields
                .into_iter()
                .map(|field| (field.name, field.value, field.inline)),
        )
    }
}
