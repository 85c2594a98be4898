mod bot;
mod command;
mod config;
mod error;
mod i18n;
mod model;
mod service;
mod startup;
mod state;
mod util;

use dioxus_logger::tracing;
use std::sync::Arc;

use crate::{config::Config, error::AppError, service::metrics::LogMetrics, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::setup_logger(&config)?;
    let http_client = startup::setup_reqwest_client()?;
    let commands = startup::build_command_registry(&config, http_client);

    tracing::info!("Starting ydeck bot");

    let state = AppState::new(commands, Arc::new(LogMetrics), config.guild_id);
    bot::start::start_bot(&config, state).await
}
