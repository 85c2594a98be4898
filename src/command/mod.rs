//! Slash commands and their shared execution wrapper.
//!
//! Every command implements `SlashCommand`. The bot dispatches interactions by
//! name through `CommandRegistry` and drives them with `run`, which logs the
//! attempt, records latency metrics, and turns any error into a generic
//! failure reply so the user always hears back.

pub mod deck;
pub mod interaction;

use dioxus_logger::tracing;
use serenity::all::CreateCommand;
use std::{collections::HashMap, sync::Arc};

use crate::{
    error::AppError,
    service::metrics::{Metrics, FAILED_LATENCY},
};

use self::interaction::InteractionHandle;

/// Reply sent when a command fails unexpectedly.
pub const GENERIC_FAILURE: &str = "Something went wrong";

#[serenity::async_trait]
pub trait SlashCommand: Send + Sync {
    fn name(&self) -> &'static str;

    /// Registration payload sent to Discord.
    fn definition(&self) -> CreateCommand;

    /// Executes the command in response to an interaction.
    ///
    /// May return errors; `run` logs them and gives the user feedback.
    ///
    /// # Returns
    /// - `Ok(i64)` - Reply latency in milliseconds
    /// - `Err(AppError)` - Unexpected failure
    async fn execute(&self, interaction: &dyn InteractionHandle) -> Result<i64, AppError>;
}

/// Runs a command from start to finish. Never fails.
///
/// # Arguments
/// - `command` - Command matching the interaction's name
/// - `interaction` - The invocation to answer
/// - `metrics` - Receives the latency, or `FAILED_LATENCY` on error
pub async fn run(
    command: &dyn SlashCommand,
    interaction: &dyn InteractionHandle,
    metrics: &dyn Metrics,
) {
    let record = interaction.record();
    tracing::debug!("{}", record.to_log("attempt", None));

    match command.execute(interaction).await {
        Ok(latency) => {
            tracing::debug!("{}", record.to_log("success", Some(latency)));
            metrics.write_command(&record, latency);
        }
        Err(e) => {
            metrics.write_command(&record, FAILED_LATENCY);
            tracing::error!("{} {}", record.to_log("error", None), e);

            if let Err(e) = interaction.report_failure(GENERIC_FAILURE).await {
                tracing::error!("{} {}", record.to_log("error", None), e);
            }
        }
    }
}

/// Commands the bot serves, keyed by name.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, Arc<dyn SlashCommand>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, command: Arc<dyn SlashCommand>) -> Self {
        self.commands.insert(command.name(), command);
        self
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn SlashCommand>> {
        self.commands.get(name).cloned()
    }

    /// Registration payloads for every command, sorted by name.
    pub fn definitions(&self) -> Vec<CreateCommand> {
        let mut commands: Vec<&Arc<dyn SlashCommand>> = self.commands.values().collect();
        commands.sort_by_key(|command| command.name());
        commands
            .into_iter()
            .map(|command| command.definition())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod test;
