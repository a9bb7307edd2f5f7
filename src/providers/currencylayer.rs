use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::FetchError;
use crate::rate_provider::{RateProvider, RateQuote};

/// Client for a currencylayer-style live quote endpoint.
#[derive(Clone)]
pub struct CurrencylayerProvider {
    base_url: String,
    access_key: String,
}

impl CurrencylayerProvider {
    pub fn new(base_url: &str, access_key: &str) -> Self {
        CurrencylayerProvider {
            base_url: base_url.to_string(),
            access_key: access_key.to_string(),
        }
    }
}

// The endpoint also sends `terms`, `privacy` and (on errors) an `error`
// object; undeclared fields are ignored so new ones don't break parsing.
// On success=false the payload carries no timestamp or quotes.
#[derive(Debug, Deserialize)]
struct LiveRatesResponse {
    success: bool,
    #[serde(default)]
    timestamp: i64,
    #[serde(default)]
    quotes: HashMap<String, f64>,
}

#[async_trait]
impl RateProvider for CurrencylayerProvider {
    #[instrument(
        name = "LiveRateFetch",
        skip(self),
        fields(source = %source, target = %target)
    )]
    async fn fetch_rate(&self, source: &str, target: &str) -> Result<RateQuote, FetchError> {
        let url = format!(
            "{}/api/live/?access_key={}&currencies={}&source={}&format=1",
            self.base_url, self.access_key, target, source
        );
        debug!("Requesting live rate for {}{}", source, target);

        let client = reqwest::Client::builder()
            .user_agent("fxcalc/1.0")
            .build()?;
        let response = client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Api(response.status()));
        }

        let text = response.text().await?;
        let data: LiveRatesResponse = serde_json::from_str(&text)?;

        if !data.success {
            return Err(FetchError::Unsuccessful);
        }

        let pair = format!("{source}{target}");
        let rate = data
            .quotes
            .get(&pair)
            .copied()
            .filter(|r| *r > 0.0)
            .ok_or_else(|| FetchError::MissingRate { pair: pair.clone() })?;

        let fetched_at = Utc
            .timestamp_opt(data.timestamp, 0)
            .single()
            .unwrap_or_else(Utc::now);

        debug!(rate, timestamp = data.timestamp, "Fetched live rate for {pair}");

        Ok(RateQuote {
            source: source.to_string(),
            target: target.to_string(),
            rate,
            fetched_at,
        })
    }
}
