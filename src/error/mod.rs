//! Error types for the bot.
//!
//! `AppError` is the top-level error that command execution and startup return.
//! Only decode failures and empty decks are handled inline by the deck command;
//! everything else reaching the command runner is reported to the user as a
//! generic failure and logged with full details.

pub mod config;
pub mod decode;
pub mod lookup;

use thiserror::Error;

use crate::error::{config::ConfigError, decode::DecodeError, lookup::LookupError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Malformed deck token.
    ///
    /// The deck command answers this inline, so it only surfaces here when
    /// another caller propagates it.
    #[error(transparent)]
    DecodeErr(#[from] DecodeError),

    /// Card lookup service answered with a non-success status.
    #[error(transparent)]
    LookupErr(#[from] LookupError),

    /// HTTP client request error from reqwest.
    ///
    /// Covers transport failures and undecodable response bodies from the
    /// card lookup service.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// A required command option was absent from the interaction.
    #[error("Missing required command option: {0}")]
    MissingOption(&'static str),

    /// The global logger could not be installed.
    #[error("Failed to initialise logger: {0}")]
    LoggerErr(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
