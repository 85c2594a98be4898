use dioxus_logger::tracing;
use serenity::{
    all::{Client, GatewayIntents, ShardManager},
    prelude::TypeMapKey,
};
use std::sync::Arc;

use crate::{bot::handler::Handler, config::Config, error::AppError, state::AppState};

/// Client data key for the shard manager, read back for gateway latency.
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<ShardManager>;
}

/// Starts the Discord bot in a blocking manner
///
/// Creates the client with the bot's event handler and runs it until the
/// gateway connection shuts down.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `state` - Command registry and collaborators for the event handler
///
/// # Returns
/// - `Ok(())` if the bot runs and shuts down cleanly
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(config: &Config, state: AppState) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(state);

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    client
        .data
        .write()
        .await
        .insert::<ShardManagerContainer>(client.shard_manager.clone());

    tracing::info!("Starting Discord bot...");

    // Blocks until shutdown
    client.start().await?;

    Ok(())
}
