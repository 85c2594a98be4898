//! Card resolution through the card search API.
//!
//! `CardLookup` is the seam to the external service so the resolver and the
//! deck command can be exercised without network access. `YamlYugiClient` is
//! the production implementation backed by reqwest.

use dioxus_logger::tracing;
use serde::Deserialize;

use crate::{
    error::{lookup::LookupError, AppError},
    model::{
        card::{CardMemo, CardRecord},
        deck::{Deck, Password},
    },
};

/// Read-only access to card definitions by password.
#[serenity::async_trait]
pub trait CardLookup: Send + Sync {
    /// Fetches the records for `passwords` in a single request.
    ///
    /// # Returns
    /// - `Ok(Vec<Option<CardRecord>>)` - One entry per known or unknown card;
    ///   `None` marks a password the service does not know
    /// - `Err(AppError::LookupErr)` - Service answered with a non-success status
    /// - `Err(AppError::ReqwestErr)` - Transport failure or undecodable body
    async fn fetch(&self, passwords: &[Password]) -> Result<Vec<Option<CardRecord>>, AppError>;
}

/// Error body sent by the search API alongside non-success statuses.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for the search API's yaml-yugi multi-card endpoint.
#[derive(Clone)]
pub struct YamlYugiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl YamlYugiClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// - `http_client` - Shared reqwest client
    /// - `base_url` - Search API base URL without a trailing slash
    pub fn new(http_client: reqwest::Client, base_url: String) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// URL of the multi-card endpoint for the given passwords.
    pub fn multi_url(&self, passwords: &[Password]) -> String {
        let joined = passwords
            .iter()
            .map(Password::to_string)
            .collect::<Vec<_>>()
            .join(",");
        format!("{}/yaml-yugi/multi?password={}", self.base_url, joined)
    }
}

#[serenity::async_trait]
impl CardLookup for YamlYugiClient {
    async fn fetch(&self, passwords: &[Password]) -> Result<Vec<Option<CardRecord>>, AppError> {
        let response = self.http_client.get(self.multi_url(passwords)).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<Vec<Option<CardRecord>>>().await?);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(e) => {
                tracing::warn!("Card lookup returned {} without an error body: {}", status, e);
                status
                    .canonical_reason()
                    .unwrap_or("Card lookup failed")
                    .to_string()
            }
        };

        Err(LookupError::Service {
            status: status.as_u16(),
            message,
        }
        .into())
    }
}

/// Builds the password to card mapping for a deck.
pub struct CardResolver<'a> {
    lookup: &'a dyn CardLookup,
}

impl<'a> CardResolver<'a> {
    pub fn new(lookup: &'a dyn CardLookup) -> Self {
        Self { lookup }
    }

    /// Resolves every card of the deck with one lookup of the distinct
    /// passwords across all sections.
    ///
    /// # Returns
    /// - `Ok(CardMemo)` - Known cards; unknown passwords are simply absent
    /// - `Err(AppError)` - The lookup failed; not retried
    pub async fn resolve(&self, deck: &Deck) -> Result<CardMemo, AppError> {
        let passwords = deck.distinct_passwords();
        if passwords.is_empty() {
            return Ok(CardMemo::default());
        }

        let records = self.lookup.fetch(&passwords).await?;
        let memo = CardMemo::from_records(records);

        tracing::debug!(
            "Resolved {} of {} distinct passwords",
            memo.len(),
            passwords.len()
        );

        Ok(memo)
    }
}
