use dioxus_logger::tracing;
use serenity::all::{Context, Interaction};

use crate::{
    bot::{serenity_interaction::SerenityInteraction, start::ShardManagerContainer},
    command,
    state::AppState,
};

/// Dispatches a slash command interaction to its registered command.
///
/// Other interaction kinds and unknown command names are ignored.
pub async fn handle_interaction_create(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command_interaction) = interaction else {
        return;
    };

    let Some(slash_command) = state.commands.get(&command_interaction.data.name) else {
        tracing::warn!(
            "Received interaction for unknown command '{}'",
            command_interaction.data.name
        );
        return;
    };

    let gateway_ping = gateway_ping_millis(&ctx).await;
    let handle = SerenityInteraction::new(&ctx, &command_interaction, gateway_ping);
    command::run(slash_command.as_ref(), &handle, state.metrics.as_ref()).await;
}

/// Last heartbeat latency of the shard that received the event.
async fn gateway_ping_millis(ctx: &Context) -> Option<u64> {
    let shard_manager = ctx.data.read().await.get::<ShardManagerContainer>()?.clone();
    let runners = shard_manager.runners.lock().await;

    runners
        .get(&ctx.shard_id)?
        .latency
        .and_then(|latency| u64::try_from(latency.as_millis()).ok())
}
