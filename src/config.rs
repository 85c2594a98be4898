use dioxus_logger::tracing::Level;
use url::Url;

use crate::{
    error::{config::ConfigError, AppError},
    model::locale::Locale,
};

pub struct Config {
    pub discord_token: String,

    /// Base URL of the card search API, without a trailing slash.
    pub search_api: String,

    /// Guild to register commands on. Commands are registered globally when unset.
    pub guild_id: Option<u64>,

    pub default_locale: Locale,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `var` - Returns the value of the named variable, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset
    /// - `Err(ConfigError::InvalidEnvVar)` - A variable failed to parse
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &str| {
            var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let search_api = required("SEARCH_API")?;
        Url::parse(&search_api).map_err(|e| ConfigError::InvalidEnvVar {
            name: "SEARCH_API".to_string(),
            value: search_api.clone(),
            reason: e.to_string(),
        })?;

        let guild_id = match var("DISCORD_GUILD_ID") {
            Some(value) => Some(value.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar {
                    name: "DISCORD_GUILD_ID".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?),
            None => None,
        };

        let default_locale = match var("DEFAULT_LOCALE") {
            Some(value) => value
                .parse::<Locale>()
                .map_err(|reason| ConfigError::InvalidEnvVar {
                    name: "DEFAULT_LOCALE".to_string(),
                    value: value.clone(),
                    reason,
                })?,
            None => Locale::En,
        };

        let log_level = match var("LOG_LEVEL") {
            Some(value) => value
                .parse::<Level>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "LOG_LEVEL".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                })?,
            None => Level::INFO,
        };

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            search_api: search_api.trim_end_matches('/').to_string(),
            guild_id,
            default_locale,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    /// Tests loading a minimal configuration.
    ///
    /// Expected: Ok with defaults for optional variables
    #[test]
    fn loads_required_variables_with_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "token"),
            ("SEARCH_API", "https://api.example.com/"),
        ]))
        .unwrap();

        assert_eq!(config.discord_token, "token");
        assert_eq!(config.search_api, "https://api.example.com");
        assert_eq!(config.guild_id, None);
        assert_eq!(config.default_locale, Locale::En);
        assert_eq!(config.log_level, Level::INFO);
    }

    /// Tests loading every optional variable.
    ///
    /// Expected: Ok with parsed guild, locale and level
    #[test]
    fn parses_optional_variables() {
        let config = Config::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "token"),
            ("SEARCH_API", "https://api.example.com"),
            ("DISCORD_GUILD_ID", "123456789"),
            ("DEFAULT_LOCALE", "fr"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.guild_id, Some(123456789));
        assert_eq!(config.default_locale, Locale::Fr);
        assert_eq!(config.log_level, Level::DEBUG);
    }

    /// Tests that a missing token is reported by name.
    ///
    /// Expected: Err(MissingEnvVar("DISCORD_TOKEN"))
    #[test]
    fn reports_missing_token() {
        let result = Config::from_lookup(lookup(&[("SEARCH_API", "https://api.example.com")]));

        assert!(matches!(
            result,
            Err(ConfigError::MissingEnvVar(ref name)) if name == "DISCORD_TOKEN"
        ));
    }

    /// Tests that a search API value which is not a URL is rejected.
    ///
    /// Expected: Err(InvalidEnvVar) naming SEARCH_API
    #[test]
    fn rejects_invalid_search_api() {
        let result = Config::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "token"),
            ("SEARCH_API", "not a url"),
        ]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref name, .. }) if name == "SEARCH_API"
        ));
    }

    /// Tests that a non-numeric guild ID is rejected.
    ///
    /// Expected: Err(InvalidEnvVar) naming DISCORD_GUILD_ID
    #[test]
    fn rejects_non_numeric_guild_id() {
        let result = Config::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "token"),
            ("SEARCH_API", "https://api.example.com"),
            ("DISCORD_GUILD_ID", "general"),
        ]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref name, .. }) if name == "DISCORD_GUILD_ID"
        ));
    }
}
