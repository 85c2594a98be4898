//! `InteractionHandle` implementation over Serenity's command interactions.

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, EditInteractionResponse, ResolvedValue,
};
use std::{
    collections::BTreeMap,
    sync::atomic::{AtomicBool, Ordering},
};

use crate::{
    command::interaction::InteractionHandle,
    error::AppError,
    model::{command::CommandRecord, embed::DeckEmbed},
    util::latency::snowflake_created_at_millis,
};

/// A live command interaction together with the context to answer it.
///
/// Tracks whether an initial response was sent so failure reports pick
/// between a follow-up and a fresh response.
pub struct SerenityInteraction<'a> {
    ctx: &'a Context,
    command: &'a CommandInteraction,
    gateway_ping: Option<u64>,
    acknowledged: AtomicBool,
}

impl<'a> SerenityInteraction<'a> {
    pub fn new(ctx: &'a Context, command: &'a CommandInteraction, gateway_ping: Option<u64>) -> Self {
        Self {
            ctx,
            command,
            gateway_ping,
            acknowledged: AtomicBool::new(false),
        }
    }

    async fn respond(&self, response: CreateInteractionResponse) -> Result<(), AppError> {
        self.command.create_response(&self.ctx.http, response).await?;
        self.acknowledged.store(true, Ordering::SeqCst);
        Ok(())
    }
}

fn render_value(value: &ResolvedValue<'_>) -> String {
    match value {
        ResolvedValue::String(value) => value.to_string(),
        ResolvedValue::Boolean(value) => value.to_string(),
        ResolvedValue::Integer(value) => value.to_string(),
        ResolvedValue::Number(value) => value.to_string(),
        other => format!("{:?}", other),
    }
}

#[serenity::async_trait]
impl InteractionHandle for SerenityInteraction<'_> {
    fn created_at_millis(&self) -> i64 {
        snowflake_created_at_millis(self.command.id.get())
    }

    fn user_locale(&self) -> &str {
        &self.command.locale
    }

    fn guild_locale(&self) -> Option<&str> {
        self.command.guild_locale.as_deref()
    }

    fn string_option(&self, name: &str) -> Option<String> {
        self.command
            .data
            .options()
            .into_iter()
            .find_map(|option| match option.value {
                ResolvedValue::String(value) if option.name == name => Some(value.to_string()),
                _ => None,
            })
    }

    fn bool_option(&self, name: &str) -> Option<bool> {
        self.command
            .data
            .options()
            .into_iter()
            .find_map(|option| match option.value {
                ResolvedValue::Boolean(value) if option.name == name => Some(value),
                _ => None,
            })
    }

    fn record(&self) -> CommandRecord {
        let options = self
            .command
            .data
            .options()
            .iter()
            .map(|option| (option.name.to_string(), render_value(&option.value)))
            .collect::<BTreeMap<_, _>>();

        CommandRecord {
            id: self.command.id.get(),
            command: self.command.data.name.clone(),
            guild: self.command.guild_id.map(|id| id.get()),
            channel: self.command.channel_id.get(),
            author: self.command.user.id.get(),
            locale: self.command.locale.clone(),
            options,
            gateway_ping: self.gateway_ping,
        }
    }

    async fn reply_ephemeral(&self, content: &str) -> Result<(), AppError> {
        self.respond(CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(content)
                .ephemeral(true),
        ))
        .await
    }

    async fn defer(&self, ephemeral: bool) -> Result<(), AppError> {
        self.respond(CreateInteractionResponse::Defer(
            CreateInteractionResponseMessage::new().ephemeral(ephemeral),
        ))
        .await
    }

    async fn edit_reply(&self, embed: DeckEmbed) -> Result<(), AppError> {
        self.command
            .edit_response(
                &self.ctx.http,
                EditInteractionResponse::new().embed(embed.into_create_embed()),
            )
            .await?;
        Ok(())
    }

    async fn report_failure(&self, content: &str) -> Result<(), AppError> {
        if self.acknowledged.load(Ordering::SeqCst) {
            self.command
                .create_followup(
                    &self.ctx.http,
                    CreateInteractionResponseFollowup::new()
                        .content(content)
                        .ephemeral(true),
                )
                .await?;
            Ok(())
        } else {
            self.reply_ephemeral(content).await
        }
    }
}
