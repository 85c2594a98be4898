//! Card records returned by the card lookup service.

use serde::Deserialize;
use std::collections::HashMap;

use super::{deck::Password, locale::Locale};

/// Coarse card category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum CardType {
    Monster,
    Spell,
    Trap,
}

impl CardType {
    /// Breakdown order for main and side deck summaries.
    pub const ALL: [CardType; 3] = [CardType::Monster, CardType::Spell, CardType::Trap];
}

/// Extra deck monster classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtraType {
    Fusion,
    Synchro,
    Xyz,
    Link,
}

impl ExtraType {
    /// Breakdown order, and the precedence used when a type line names more
    /// than one extra deck type.
    pub const ALL: [ExtraType; 4] = [
        ExtraType::Fusion,
        ExtraType::Synchro,
        ExtraType::Xyz,
        ExtraType::Link,
    ];

    /// Token as it appears in a monster type line.
    pub fn as_str(self) -> &'static str {
        match self {
            ExtraType::Fusion => "Fusion",
            ExtraType::Synchro => "Synchro",
            ExtraType::Xyz => "Xyz",
            ExtraType::Link => "Link",
        }
    }
}

/// A resolved card definition.
///
/// Only the fields the deck summary needs are deserialized; the service sends
/// many more.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CardRecord {
    #[serde(default)]
    pub password: Option<Password>,
    /// Display names keyed by card database locale (`en`, `ja`, `zh-CN`, ...).
    #[serde(default)]
    pub name: HashMap<String, Option<String>>,
    pub card_type: CardType,
    /// Slash-delimited monster type line, e.g. `Dragon / Fusion / Effect`.
    #[serde(default)]
    pub monster_type_line: Option<String>,
}

impl CardRecord {
    /// Name in the requested locale, falling back to English.
    ///
    /// # Returns
    /// - `Some(&str)` - First non-empty name of the two
    /// - `None` - Neither name is present
    pub fn display_name(&self, locale: Locale) -> Option<&str> {
        self.name_in(locale.as_str()).or_else(|| self.name_in("en"))
    }

    fn name_in(&self, key: &str) -> Option<&str> {
        self.name
            .get(key)
            .and_then(|name| name.as_deref())
            .filter(|name| !name.is_empty())
    }

    /// Extra deck type of a monster, taking the first match in
    /// `ExtraType::ALL` order when the type line carries several.
    pub fn extra_type(&self) -> Option<ExtraType> {
        if self.card_type != CardType::Monster {
            return None;
        }
        let line = self.monster_type_line.as_deref()?;
        let tokens: Vec<&str> = line.split('/').map(str::trim).collect();

        ExtraType::ALL
            .into_iter()
            .find(|extra_type| tokens.contains(&extra_type.as_str()))
    }
}

/// Password to card lookup table for one command invocation.
#[derive(Debug, Clone, Default)]
pub struct CardMemo {
    cards: HashMap<Password, CardRecord>,
}

impl CardMemo {
    /// Builds the memo from a lookup response.
    ///
    /// Null entries (unknown passwords) and records without a password are
    /// skipped.
    pub fn from_records(records: impl IntoIterator<Item = Option<CardRecord>>) -> Self {
        let cards = records
            .into_iter()
            .flatten()
            .filter_map(|card| card.password.map(|password| (password, card)))
            .collect();

        Self { cards }
    }

    pub fn get(&self, password: Password) -> Option<&CardRecord> {
        self.cards.get(&password)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Name to display for a password: localized, English, then the number.
    pub fn display_name(&self, password: Password, locale: Locale) -> String {
        self.get(password)
            .and_then(|card| card.display_name(locale))
            .map(str::to_string)
            .unwrap_or_else(|| password.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::factory::card::CardFactory;

    fn record(value: serde_json::Value) -> CardRecord {
        serde_json::from_value(value).unwrap()
    }

    /// Tests name fallback from localized name to English to password.
    ///
    /// Expected: French name when present, English otherwise, number when unknown
    #[test]
    fn display_name_falls_back_to_english_then_password() {
        let memo = CardMemo::from_records(vec![
            Some(record(
                CardFactory::spell(1, "Pot of Greed")
                    .name("fr", "Pot de Cupidité")
                    .build(),
            )),
            Some(record(CardFactory::trap(2, "Trap Hole").name("fr", "").build())),
        ]);

        assert_eq!(memo.display_name(1, Locale::Fr), "Pot de Cupidité");
        assert_eq!(memo.display_name(2, Locale::Fr), "Trap Hole");
        assert_eq!(memo.display_name(3, Locale::Fr), "3");
    }

    /// Tests that null entries and password-less records are skipped.
    ///
    /// Expected: only the complete record is kept
    #[test]
    fn skips_null_and_anonymous_records() {
        let memo = CardMemo::from_records(vec![
            None,
            Some(record(CardFactory::spell(5, "Raigeki").without_password().build())),
            Some(record(CardFactory::spell(6, "Dark Hole").build())),
        ]);

        assert_eq!(memo.len(), 1);
        assert!(memo.get(6).is_some());
    }

    /// Tests extra deck type detection on the type line tokens.
    ///
    /// Expected: first match in Fusion, Synchro, Xyz, Link order
    #[test]
    fn extra_type_prefers_first_in_fixed_order() {
        let both = record(
            CardFactory::monster(1, "Odd One")
                .monster_type_line("Cyberse / Link / Fusion / Effect")
                .build(),
        );
        let xyz = record(
            CardFactory::monster(2, "Number 39: Utopia")
                .monster_type_line("Warrior / Xyz / Effect")
                .build(),
        );
        let main_deck = record(
            CardFactory::monster(3, "Dark Magician")
                .monster_type_line("Spellcaster / Normal")
                .build(),
        );

        assert_eq!(both.extra_type(), Some(ExtraType::Fusion));
        assert_eq!(xyz.extra_type(), Some(ExtraType::Xyz));
        assert_eq!(main_deck.extra_type(), None);
    }

    /// Tests that only whole tokens of the type line match.
    ///
    /// Expected: "Linked" does not count as Link
    #[test]
    fn extra_type_ignores_partial_tokens() {
        let card = record(
            CardFactory::monster(1, "Odd One")
                .monster_type_line("Linked / Effect")
                .build(),
        );

        assert_eq!(card.extra_type(), None);
    }
}
