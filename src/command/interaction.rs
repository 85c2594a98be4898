//! Reply transport seam between commands and Discord.

use crate::{
    error::AppError,
    model::{command::CommandRecord, embed::DeckEmbed},
};

/// One incoming command interaction and the ways a command can answer it.
///
/// The bot layer implements this over Serenity's `CommandInteraction`; tests
/// implement it with recording fakes.
#[serenity::async_trait]
pub trait InteractionHandle: Send + Sync {
    /// Interaction creation time in Unix milliseconds.
    fn created_at_millis(&self) -> i64;

    /// Client locale of the invoking user, as a Discord locale code.
    fn user_locale(&self) -> &str;

    /// Preferred locale of the guild, when invoked in one.
    fn guild_locale(&self) -> Option<&str>;

    fn string_option(&self, name: &str) -> Option<String>;

    fn bool_option(&self, name: &str) -> Option<bool>;

    /// Identifying details for logs and metrics.
    fn record(&self) -> CommandRecord;

    /// Answers immediately with a plain text message only the user can see.
    async fn reply_ephemeral(&self, content: &str) -> Result<(), AppError>;

    /// Acknowledges the interaction so the final reply can be sent later.
    async fn defer(&self, ephemeral: bool) -> Result<(), AppError>;

    /// Replaces the deferred reply with the finished embed.
    async fn edit_reply(&self, embed: DeckEmbed) -> Result<(), AppError>;

    /// Tells the user the command failed, as a follow-up when the interaction
    /// was already acknowledged or as an ephemeral reply otherwise.
    async fn report_failure(&self, content: &str) -> Result<(), AppError>;
}
