//! Card record factory for card lookup responses.

use serde_json::{json, Map, Value};

/// Factory for card lookup JSON records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::card::CardFactory;
///
/// let card = CardFactory::monster(89631139, "Blue-Eyes White Dragon")
///     .name("ja", "青眼の白龍")
///     .monster_type_line("Dragon / Normal")
///     .build();
/// ```
pub struct CardFactory {
    password: Option<u32>,
    card_type: &'static str,
    names: Map<String, Value>,
    monster_type_line: Option<String>,
}

impl CardFactory {
    fn new(password: u32, card_type: &'static str, english_name: &str) -> Self {
        let mut names = Map::new();
        names.insert("en".to_string(), Value::String(english_name.to_string()));
        Self {
            password: Some(password),
            card_type,
            names,
            monster_type_line: None,
        }
    }

    /// Creates a monster with the type line `Dragon / Effect`.
    ///
    /// # Arguments
    /// - `password` - Card password
    /// - `english_name` - Name under the `en` key
    pub fn monster(password: u32, english_name: &str) -> Self {
        let mut factory = Self::new(password, "Monster", english_name);
        factory.monster_type_line = Some("Dragon / Effect".to_string());
        factory
    }

    pub fn spell(password: u32, english_name: &str) -> Self {
        Self::new(password, "Spell", english_name)
    }

    pub fn trap(password: u32, english_name: &str) -> Self {
        Self::new(password, "Trap", english_name)
    }

    /// Sets the name for a locale key such as `fr` or `zh-CN`.
    pub fn name(mut self, locale: &str, name: &str) -> Self {
        self.names
            .insert(locale.to_string(), Value::String(name.to_string()));
        self
    }

    pub fn monster_type_line(mut self, line: &str) -> Self {
        self.monster_type_line = Some(line.to_string());
        self
    }

    /// Drops the password, as the service does for some incomplete records.
    pub fn without_password(mut self) -> Self {
        self.password = None;
        self
    }

    /// Builds the JSON record.
    ///
    /// # Returns
    /// - `Value` - Object with `password`, `name`, `card_type` and, for
    ///   monsters, `monster_type_line`
    pub fn build(self) -> Value {
        let mut card = json!({
            "password": self.password,
            "name": Value::Object(self.names),
            "card_type": self.card_type,
        });
        if let Some(line) = self.monster_type_line {
            card["monster_type_line"] = Value::String(line);
        }
        card
    }
}

/// Creates a monster record with defaults.
pub fn create_monster(password: u32, english_name: &str) -> Value {
    CardFactory::monster(password, english_name).build()
}
