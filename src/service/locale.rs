use crate::{command::interaction::InteractionHandle, model::locale::Locale};

/// Resolves the display locale for an invocation.
#[serenity::async_trait]
pub trait LocaleProvider: Send + Sync {
    async fn get(&self, interaction: &dyn InteractionHandle) -> Locale;
}

/// Picks the invoking user's client locale, then the guild's preferred
/// locale, then the configured default.
pub struct InteractionLocaleProvider {
    default: Locale,
}

impl InteractionLocaleProvider {
    pub fn new(default: Locale) -> Self {
        Self { default }
    }
}

#[serenity::async_trait]
impl LocaleProvider for InteractionLocaleProvider {
    async fn get(&self, interaction: &dyn InteractionHandle) -> Locale {
        Locale::from_discord(interaction.user_locale())
            .or_else(|| interaction.guild_locale().and_then(Locale::from_discord))
            .unwrap_or(self.default)
    }
}
