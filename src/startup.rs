use std::sync::Arc;

use crate::{
    command::{deck::DeckCommand, CommandRegistry},
    config::Config,
    error::AppError,
    service::{card::YamlYugiClient, locale::InteractionLocaleProvider},
};

/// Installs the global tracing subscriber at the configured level.
pub fn setup_logger(config: &Config) -> Result<(), AppError> {
    dioxus_logger::init(config.log_level).map_err(|e| AppError::LoggerErr(e.to_string()))
}

/// Builds the HTTP client used for card lookups.
///
/// Redirects are disabled so the lookup only ever talks to the configured
/// search API host.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client ready for use
/// - `Err(AppError::ReqwestErr)` - TLS backend failed to initialise
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

/// Wires every command with its collaborators.
pub fn build_command_registry(config: &Config, http_client: reqwest::Client) -> CommandRegistry {
    let lookup = Arc::new(YamlYugiClient::new(http_client, config.search_api.clone()));
    let locales = Arc::new(InteractionLocaleProvider::new(config.default_locale));

    CommandRegistry::new().register(Arc::new(DeckCommand::new(lookup, locales)))
}
