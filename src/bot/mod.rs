//! Discord bot integration.
//!
//! The bot connects to the gateway, registers its slash commands once ready,
//! and dispatches each command interaction to the matching `SlashCommand`
//! as an independent task. No state is shared between invocations.
//!
//! # Gateway Intents
//!
//! Slash commands arrive without any privileged intent; only `GUILDS` is
//! requested so guild locales are available.

pub mod handler;
pub mod serenity_interaction;
pub mod start;
