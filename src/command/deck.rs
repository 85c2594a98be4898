//! The `/deck` command: renders a ydke:// deck list as an embed.

use chrono::Utc;
use dioxus_logger::tracing;
use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};
use std::sync::Arc;

use crate::{
    error::AppError,
    i18n::Catalog,
    service::{
        card::{CardLookup, CardResolver},
        embed::build_deck_embed,
        locale::LocaleProvider,
        ydke,
    },
    util::latency::latency_since,
};

use super::{interaction::InteractionHandle, SlashCommand};

pub const DECK_OPTION: &str = "deck";
pub const PUBLIC_OPTION: &str = "public";
pub const STACKED_OPTION: &str = "stacked";

/// Decodes a deck token, resolves its cards and replies with a summary embed.
///
/// Bad tokens and empty decks are answered inline with an ephemeral message.
/// Lookup failures propagate to the command runner.
pub struct DeckCommand {
    lookup: Arc<dyn CardLookup>,
    locales: Arc<dyn LocaleProvider>,
}

impl DeckCommand {
    pub fn new(lookup: Arc<dyn CardLookup>, locales: Arc<dyn LocaleProvider>) -> Self {
        Self { lookup, locales }
    }
}

#[serenity::async_trait]
impl SlashCommand for DeckCommand {
    fn name(&self) -> &'static str {
        "deck"
    }

    fn definition(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description(
                "Display a deck list from ydke:// format, exported from a number of deck building programs.",
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    DECK_OPTION,
                    "The ydke:// URL of the deck you want to view.",
                )
                .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Boolean,
                    PUBLIC_OPTION,
                    "Whether to display the deck details publicly in chat. This is false by default.",
                )
                .required(false),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Boolean,
                    STACKED_OPTION,
                    "Whether to display the deck sections as one stacked column. This is false (side-by-side) by default.",
                )
                .required(false),
            )
    }

    async fn execute(&self, interaction: &dyn InteractionHandle) -> Result<i64, AppError> {
        let locale = self.locales.get(interaction).await;
        let catalog = Catalog::new(locale);

        let token = interaction
            .string_option(DECK_OPTION)
            .ok_or(AppError::MissingOption(DECK_OPTION))?;

        let deck = match ydke::parse_url(&token) {
            Ok(deck) => deck,
            Err(e) => {
                tracing::debug!("Rejected deck token: {}", e);
                interaction.reply_ephemeral(&e.to_string()).await?;
                return Ok(latency_since(interaction.created_at_millis()));
            }
        };

        if deck.is_empty() {
            interaction.reply_ephemeral(catalog.deck_empty()).await?;
            return Ok(latency_since(interaction.created_at_millis()));
        }

        let is_public = interaction.bool_option(PUBLIC_OPTION).unwrap_or(false);
        let is_stacked = interaction.bool_option(STACKED_OPTION).unwrap_or(false);

        // The lookup can outlast Discord's initial response window
        interaction.defer(!is_public).await?;

        let memo = CardResolver::new(self.lookup.as_ref()).resolve(&deck).await?;
        let embed = build_deck_embed(&deck, &memo, &catalog, !is_stacked);

        // Deferred replies report no edit timestamp, so measure up to the send
        let end = Utc::now().timestamp_millis();
        interaction.edit_reply(embed).await?;

        Ok(end - interaction.created_at_millis())
    }
}
