//! Domain models shared by the deck command, its services and the bot layer.
//!
//! Nothing here talks to Discord or the network. Conversion into serenity
//! builder types happens at the edge (`embed::DeckEmbed::into_create_embed`).

pub mod card;
pub mod command;
pub mod deck;
pub mod embed;
pub mod locale;
