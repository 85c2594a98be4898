//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway. The handler registers the bot's slash commands,
//! either on the configured development guild or globally.

use dioxus_logger::tracing;
use serenity::all::{Command, Context, GuildId, Ready};

use crate::state::AppState;

/// Handles the ready event when the bot connects to Discord.
///
/// Registration replaces the full command set each time, so commands removed
/// from the registry disappear from Discord too. A registration failure is
/// logged and the bot keeps running with whatever Discord already has.
///
/// # Arguments
/// - `state` - Shared state holding the command registry
/// - `ctx` - Discord context for the registration requests
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    if state.commands.is_empty() {
        tracing::warn!("No application commands to register");
        return;
    }

    tracing::debug!("Registering {} application commands", state.commands.len());
    let definitions = state.commands.definitions();
    let result = match state.guild_id {
        Some(guild_id) => {
            GuildId::new(guild_id)
                .set_commands(&ctx.http, definitions)
                .await
        }
        None => Command::set_global_commands(&ctx.http, definitions).await,
    };

    match result {
        Ok(commands) => tracing::info!(
            "Registered {} application commands ({})",
            commands.len(),
            state
                .guild_id
                .map(|id| format!("guild {}", id))
                .unwrap_or_else(|| "global".to_string())
        ),
        Err(e) => tracing::error!("Failed to register application commands: {:?}", e),
    }
}
