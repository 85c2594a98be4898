//! Assembly of the deck reply embed.

use crate::{
    i18n::Catalog,
    model::{
        card::CardMemo,
        deck::{Deck, Section},
        embed::{DeckEmbed, EmbedField},
    },
    service::{
        paginate::{split_text, FIELD_VALUE_LIMIT},
        summary::summarize,
    },
};

/// Builds the deck embed.
///
/// Each non-empty section contributes a titled field carrying its card count
/// and type breakdown, followed by "(continued)" fields when the listing does
/// not fit one field value. Empty sections contribute nothing.
///
/// # Arguments
/// - `deck` - The decoded deck
/// - `memo` - Resolved cards for the deck's passwords
/// - `catalog` - Messages in the display locale
/// - `inline` - Field layout applied to every field
pub fn build_deck_embed(deck: &Deck, memo: &CardMemo, catalog: &Catalog, inline: bool) -> DeckEmbed {
    let mut embed = DeckEmbed {
        title: catalog.your_deck().to_string(),
        fields: Vec::new(),
    };

    for section in Section::ALL {
        let passwords = deck.section(section);
        if passwords.is_empty() {
            continue;
        }

        let summary = summarize(section, passwords, memo, catalog);
        let listing = summary.listing();
        let mut chunks = split_text(&listing, FIELD_VALUE_LIMIT).into_iter();

        let first = chunks.next().unwrap_or_default();
        embed.fields.push(EmbedField {
            name: catalog.section_title(section, passwords.len(), summary.breakdown()),
            value: first.to_string(),
            inline,
        });

        for part in chunks {
            embed.fields.push(EmbedField {
                name: catalog.section_continued(section).to_string(),
                value: part.to_string(),
                inline,
            });
        }
    }

    embed
}
