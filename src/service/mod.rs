//! Deck summarization services.
//!
//! Data flows strictly downstream through these modules:
//!
//! 1. **ydke** - decodes a `ydke://` token into a `Deck`
//! 2. **card** - resolves every distinct password with one lookup request
//! 3. **summary** - counts cards per display name and per type
//! 4. **paginate** - splits long listings to fit embed field limits
//! 5. **embed** - assembles the reply embed from the above
//!
//! `locale` and `metrics` hold the collaborator traits the deck command is
//! wired with.

pub mod card;
pub mod embed;
pub mod locale;
pub mod metrics;
pub mod paginate;
pub mod summary;
pub mod ydke;

#[cfg(test)]
pub(crate) mod test;
