//! ydeck Test Utils
//!
//! Shared testing utilities for the ydeck bot. Provides builders for the JSON
//! the card search API returns and an encoder for ydke:// deck tokens, so tests
//! can describe decks and cards by password and name instead of raw bytes.
//!
//! # Overview
//!
//! - **factory**: Fluent builders for card lookup JSON records
//! - **ydke**: Encoding of deck sections into ydke:// URLs
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{factory::card::CardFactory, ydke::encode_url};
//!
//! #[tokio::test]
//! async fn renders_deck() {
//!     let token = encode_url(&[1, 1, 2], &[], &[]);
//!     let cards = vec![
//!         CardFactory::monster(1, "Card A").build(),
//!         CardFactory::spell(2, "Card B").build(),
//!     ];
//!     // Feed `token` and `cards` to the code under test...
//! }
//! ```

pub mod factory;
pub mod ydke;
