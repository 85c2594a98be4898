use crate::{
    error::{lookup::LookupError, AppError},
    i18n::Catalog,
    model::{
        card::{CardMemo, CardRecord},
        deck::{Deck, Password, Section},
        locale::Locale,
    },
    service::card::CardLookup,
};
use serde_json::Value;
use std::sync::Mutex;
use test_utils::{factory::card::CardFactory, ydke::encode_url};

mod paginate;

/// Card lookup double that records every request and answers from canned JSON.
pub(crate) struct RecordingLookup {
    response: Result<Vec<Value>, (u16, String)>,
    calls: Mutex<Vec<Vec<Password>>>,
}

impl RecordingLookup {
    /// Answers every request with `cards` (JSON objects or nulls).
    pub(crate) fn with_cards(cards: Vec<Value>) -> Self {
        Self {
            response: Ok(cards),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answers every request as the service does for a non-success status.
    pub(crate) fn failing(status: u16, message: &str) -> Self {
        Self {
            response: Err((status, message.to_string())),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Passwords of each request made so far.
    pub(crate) fn calls(&self) -> Vec<Vec<Password>> {
        self.calls.lock().unwrap().clone()
    }
}

#[serenity::async_trait]
impl CardLookup for RecordingLookup {
    async fn fetch(&self, passwords: &[Password]) -> Result<Vec<Option<CardRecord>>, AppError> {
        self.calls.lock().unwrap().push(passwords.to_vec());

        match &self.response {
            Ok(cards) => Ok(serde_json::from_value(Value::Array(cards.clone())).unwrap()),
            Err((status, message)) => Err(LookupError::Service {
                status: *status,
                message: message.clone(),
            }
            .into()),
        }
    }
}

/// Builds a memo straight from card JSON.
pub(crate) fn memo(cards: Vec<Value>) -> CardMemo {
    let records: Vec<Option<CardRecord>> =
        serde_json::from_value(Value::Array(cards)).unwrap();
    CardMemo::from_records(records)
}
