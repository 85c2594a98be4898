use crate::{
    command::interaction::InteractionHandle,
    error::AppError,
    model::{command::CommandRecord, embed::DeckEmbed, locale::Locale},
    service::{locale::LocaleProvider, metrics::Metrics},
};
use std::{collections::HashMap, sync::Mutex};


/// A reply a command sent through the fake interaction.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Reply {
    Ephemeral(String),
    Deferred { ephemeral: bool },
    Edited(DeckEmbed),
    Failure(String),
}

/// Interaction double with configurable options that records every reply.
pub(crate) struct FakeInteraction {
    created_at: i64,
    user_locale: String,
    guild_locale: Option<String>,
    strings: HashMap<String, String>,
    bools: HashMap<String, bool>,
    gateway_ping: Option<u64>,
    fail_reports: bool,
    replies: Mutex<Vec<Reply>>,
}

impl FakeInteraction {
    pub(crate) fn new() -> Self {
        Self {
            created_at: chrono::Utc::now().timestamp_millis(),
            user_locale: "en-US".to_string(),
            guild_locale: None,
            strings: HashMap::new(),
            bools: HashMap::new(),
            gateway_ping: None,
            fail_reports: false,
            replies: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn user_locale(mut self, locale: &str) -> Self {
        self.user_locale = locale.to_string();
        self
    }

    pub(crate) fn guild_locale(mut self, locale: &str) -> Self {
        self.guild_locale = Some(locale.to_string());
        self
    }

    pub(crate) fn option(mut self, name: &str, value: &str) -> Self {
        self.strings.insert(name.to_string(), value.to_string());
        self
    }

    pub(crate) fn flag(mut self, name: &str, value: bool) -> Self {
        self.bools.insert(name.to_string(), value);
        self
    }

    pub(crate) fn created_at(mut self, millis: i64) -> Self {
        self.created_at = millis;
        self
    }

    pub(crate) fn gateway_ping(mut self, millis: u64) -> Self {
        self.gateway_ping = Some(millis);
        self
    }

    /// Makes `report_failure` itself fail, as when Discord is unreachable.
    pub(crate) fn failing_reports(mut self) -> Self {
        self.fail_reports = true;
        self
    }

    pub(crate) fn replies(&self) -> Vec<Reply> {
        self.replies.lock().unwrap().clone()
    }

    fn push(&self, reply: Reply) {
        self.replies.lock().unwrap().push(reply);
    }
}

#[serenity::async_trait]
impl InteractionHandle for FakeInteraction {
    fn created_at_millis(&self) -> i64 {
        self.created_at
    }

    fn user_locale(&self) -> &str {
        &self.user_locale
    }

    fn guild_locale(&self) -> Option<&str> {
        self.guild_locale.as_deref()
    }

    fn string_option(&self, name: &str) -> Option<String> {
        self.strings.get(name).cloned()
    }

    fn bool_option(&self, name: &str) -> Option<bool> {
        self.bools.get(name).copied()
    }

    fn record(&self) -> CommandRecord {
        CommandRecord {
            id: 1,
            command: "deck".to_string(),
            guild: Some(2),
            channel: 3,
            author: 4,
            locale: self.user_locale.clone(),
            options: self.strings.clone().into_iter().collect(),
            gateway_ping: self.gateway_ping,
        }
    }

    async fn reply_ephemeral(&self, content: &str) -> Result<(), AppError> {
        self.push(Reply::Ephemeral(content.to_string()));
        Ok(())
    }

    async fn defer(&self, ephemeral: bool) -> Result<(), AppError> {
        self.push(Reply::Deferred { ephemeral });
        Ok(())
    }

    async fn edit_reply(&self, embed: DeckEmbed) -> Result<(), AppError> {
        self.push(Reply::Edited(embed));
        Ok(())
    }

    async fn report_failure(&self, content: &str) -> Result<(), AppError> {
        if self.fail_reports {
            return Err(serenity::Error::Other("gateway unavailable").into());
        }
        self.push(Reply::Failure(content.to_string()));
        Ok(())
    }
}

/// Locale provider that ignores the interaction.
pub(crate) struct FixedLocale(pub(crate) Locale);

#[serenity::async_trait]
impl LocaleProvider for FixedLocale {
    async fn get(&self, _interaction: &dyn InteractionHandle) -> Locale {
        self.0
    }
}

/// Metrics sink that keeps every write.
#[derive(Default)]
pub(crate) struct RecordingMetrics {
    writes: Mutex<Vec<(CommandRecord, i64)>>,
}

impl RecordingMetrics {
    pub(crate) fn records(&self) -> Vec<CommandRecord> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .map(|(record, _)| record.clone())
            .collect()
    }

    pub(crate) fn latencies(&self) -> Vec<i64> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .map(|(_, latency)| *latency)
            .collect()
    }
}

impl Metrics for RecordingMetrics {
    fn write_command(&self, record: &CommandRecord, latency: i64) {
        self.writes.lock().unwrap().push((record.clone(), latency));
    }
}
