//! Per-section card counts and type breakdowns.

use std::collections::HashMap;

use crate::{
    i18n::Catalog,
    model::{
        card::{CardMemo, CardType, ExtraType},
        deck::{Password, Section},
        locale::Locale,
    },
};

/// Counted listing and type breakdown of one deck section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSummary {
    /// Occurrences per display name, in first-seen order.
    counts: Vec<(String, usize)>,
    /// Localized breakdown, e.g. `3 Monsters, 2 Spells`.
    breakdown: String,
}

impl SectionSummary {
    pub fn counts(&self) -> &[(String, usize)] {
        &self.counts
    }

    pub fn count_of(&self, name: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(counted, _)| counted == name)
            .map(|(_, count)| *count)
    }

    pub fn breakdown(&self) -> &str {
        &self.breakdown
    }

    /// One `<count> <name>` line per distinct card.
    pub fn listing(&self) -> String {
        self.counts
            .iter()
            .map(|(name, count)| format!("{} {}", count, name))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Summarizes a section: name counts plus the breakdown that fits the section,
/// coarse types for main and side, extra deck types for the extra deck.
pub fn summarize(
    section: Section,
    passwords: &[Password],
    memo: &CardMemo,
    catalog: &Catalog,
) -> SectionSummary {
    let breakdown = match section {
        Section::Main | Section::Side => {
            render_card_types(&count_card_types(passwords, memo), catalog)
        }
        Section::Extra => render_extra_types(&count_extra_types(passwords, memo), catalog),
    };

    SectionSummary {
        counts: count_names(passwords, memo, catalog.locale()),
        breakdown,
    }
}

/// Occurrences of each display name, keyed in first-seen order.
pub fn count_names(passwords: &[Password], memo: &CardMemo, locale: Locale) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for &password in passwords {
        let name = memo.display_name(password, locale);
        match positions.get(&name) {
            Some(&index) => counts[index].1 += 1,
            None => {
                positions.insert(name.clone(), counts.len());
                counts.push((name, 1));
            }
        }
    }

    counts
}

/// Resolved cards per coarse type, in `CardType::ALL` order. Unresolved
/// passwords count toward nothing.
pub fn count_card_types(passwords: &[Password], memo: &CardMemo) -> [(CardType, usize); 3] {
    CardType::ALL.map(|card_type| {
        let count = passwords
            .iter()
            .filter_map(|&password| memo.get(password))
            .filter(|card| card.card_type == card_type)
            .count();
        (card_type, count)
    })
}

/// Resolved monsters per extra deck type, in `ExtraType::ALL` order. Each card
/// counts toward its first matching type only.
pub fn count_extra_types(passwords: &[Password], memo: &CardMemo) -> [(ExtraType, usize); 4] {
    ExtraType::ALL.map(|extra_type| {
        let count = passwords
            .iter()
            .filter_map(|&password| memo.get(password))
            .filter(|card| card.extra_type() == Some(extra_type))
            .count();
        (extra_type, count)
    })
}

fn render_card_types(counts: &[(CardType, usize)], catalog: &Catalog) -> String {
    let parts: Vec<String> = counts
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|&(card_type, count)| catalog.card_type(card_type, count))
        .collect();
    catalog.join(&parts)
}

fn render_extra_types(counts: &[(ExtraType, usize)], catalog: &Catalog) -> String {
    let parts: Vec<String> = counts
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|&(extra_type, count)| format!("{} {}", count, catalog.extra_type(extra_type)))
        .collect();
    catalog.join(&parts)
}
