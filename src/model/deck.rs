use std::{collections::HashSet, fmt};

/// Card password, the numeric identifier of a card definition.
pub type Password = u32;

/// One of the three deck partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Main,
    Extra,
    Side,
}

impl Section {
    /// Display order of the sections.
    pub const ALL: [Section; 3] = [Section::Main, Section::Extra, Section::Side];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Main => "main",
            Section::Extra => "extra",
            Section::Side => "side",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded deck list.
///
/// Order within each section is kept for display; counting ignores it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    pub main: Vec<Password>,
    pub extra: Vec<Password>,
    pub side: Vec<Password>,
}

impl Deck {
    pub fn section(&self, section: Section) -> &[Password] {
        match section {
            Section::Main => &self.main,
            Section::Extra => &self.extra,
            Section::Side => &self.side,
        }
    }

    /// Total number of cards across all sections.
    pub fn len(&self) -> usize {
        self.main.len() + self.extra.len() + self.side.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distinct passwords across all sections in first-seen order.
    pub fn distinct_passwords(&self) -> Vec<Password> {
        let mut seen = HashSet::new();
        self.main
            .iter()
            .chain(&self.extra)
            .chain(&self.side)
            .copied()
            .filter(|password| seen.insert(*password))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_duplicates_across_sections() {
        let deck = Deck {
            main: vec![3, 1, 3],
            extra: vec![2, 1],
            side: vec![2, 4],
        };

        assert_eq!(deck.len(), 7);
        assert_eq!(deck.distinct_passwords(), vec![3, 1, 2, 4]);
    }

    #[test]
    fn empty_deck_has_no_cards() {
        let deck = Deck::default();

        assert!(deck.is_empty());
        assert!(deck.distinct_passwords().is_empty());
    }
}
