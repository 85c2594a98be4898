use std::{fmt, str::FromStr};

/// Display locales the card database carries names for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    De,
    Es,
    Fr,
    It,
    Pt,
    Ja,
    Ko,
    ZhCn,
    ZhTw,
}

impl Locale {
    pub const ALL: [Locale; 10] = [
        Locale::En,
        Locale::De,
        Locale::Es,
        Locale::Fr,
        Locale::It,
        Locale::Pt,
        Locale::Ja,
        Locale::Ko,
        Locale::ZhCn,
        Locale::ZhTw,
    ];

    /// Key used for this locale in the card database's name mapping.
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
            Locale::Es => "es",
            Locale::Fr => "fr",
            Locale::It => "it",
            Locale::Pt => "pt",
            Locale::Ja => "ja",
            Locale::Ko => "ko",
            Locale::ZhCn => "zh-CN",
            Locale::ZhTw => "zh-TW",
        }
    }

    /// Maps a Discord locale code (`en-US`, `pt-BR`, `es-ES`, ...) onto a
    /// supported display locale.
    ///
    /// # Returns
    /// - `Some(Locale)` - The code names a supported language
    /// - `None` - Discord language without card database names
    pub fn from_discord(code: &str) -> Option<Self> {
        match code {
            "en-US" | "en-GB" | "en" => Some(Locale::En),
            "de" => Some(Locale::De),
            "es-ES" | "es-419" | "es" => Some(Locale::Es),
            "fr" => Some(Locale::Fr),
            "it" => Some(Locale::It),
            "pt-BR" | "pt" => Some(Locale::Pt),
            "ja" => Some(Locale::Ja),
            "ko" => Some(Locale::Ko),
            "zh-CN" => Some(Locale::ZhCn),
            "zh-TW" => Some(Locale::ZhTw),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.as_str() == s)
            .or_else(|| Locale::from_discord(s))
            .ok_or_else(|| format!("unsupported locale '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_discord_regional_codes() {
        assert_eq!(Locale::from_discord("en-GB"), Some(Locale::En));
        assert_eq!(Locale::from_discord("pt-BR"), Some(Locale::Pt));
        assert_eq!(Locale::from_discord("es-419"), Some(Locale::Es));
        assert_eq!(Locale::from_discord("zh-TW"), Some(Locale::ZhTw));
        assert_eq!(Locale::from_discord("nl"), None);
    }

    #[test]
    fn parses_database_keys_and_discord_codes() {
        assert_eq!("zh-CN".parse::<Locale>(), Ok(Locale::ZhCn));
        assert_eq!("en-US".parse::<Locale>(), Ok(Locale::En));
        assert!("klingon".parse::<Locale>().is_err());
    }
}
