//! Factory methods for creating test data.
//!
//! Factories build the JSON the card search API would send, with sensible
//! defaults and builder methods for the fields a test cares about. They return
//! `serde_json::Value` so tests exercise the same deserialization path as the
//! live client.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::factory::card::CardFactory;
//!
//! let fusion = CardFactory::monster(1, "Blue-Eyes Ultimate Dragon")
//!     .monster_type_line("Dragon / Fusion")
//!     .build();
//! let trap = CardFactory::trap(2, "Trap Hole").name("fr", "Trou Traquenard").build();
//! ```

pub mod card;
