//! Localized strings and plural selection.
//!
//! The active locale is always passed explicitly; nothing here holds a
//! process-wide "current locale".

pub mod catalog;

pub use catalog::Catalog;

use crate::model::locale::Locale;

/// Placeholder replaced by the count in plural templates.
pub const COUNT_PLACEHOLDER: &str = "{n}";

/// Which of the two message forms a count selects in a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralForm {
    Singular,
    Plural,
}

/// Plural form for `count` under the locale's rules.
///
/// English-style languages use the singular for exactly one, French and
/// Brazilian Portuguese also for zero, and the CJK locales have a single form.
pub fn plural_form(count: usize, locale: Locale) -> PluralForm {
    let singular = match locale {
        Locale::En | Locale::De | Locale::Es | Locale::It => count == 1,
        Locale::Fr | Locale::Pt => count <= 1,
        Locale::Ja | Locale::Ko | Locale::ZhCn | Locale::ZhTw => false,
    };
    if singular {
        PluralForm::Singular
    } else {
        PluralForm::Plural
    }
}

/// Selects the singular or plural template for `count` and substitutes the
/// count for `{n}`.
pub fn pluralize(count: usize, locale: Locale, singular: &str, plural: &str) -> String {
    let template = match plural_form(count, locale) {
        PluralForm::Singular => singular,
        PluralForm::Plural => plural,
    };
    template.replace(COUNT_PLACEHOLDER, &count.to_string())
}
