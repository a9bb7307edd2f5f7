//! Exchange rate quote abstractions.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::FetchError;

/// A single source→target exchange rate observed at a point in time.
///
/// Replaced wholesale on every successful fetch; never partially mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct RateQuote {
    pub source: String,
    pub target: String,
    pub rate: f64,
    pub fetched_at: DateTime<Utc>,
}

impl RateQuote {
    /// Concatenated pair key as the quote endpoint reports it, e.g. "USDKRW".
    pub fn pair(&self) -> String {
        format!("{}{}", self.source, self.target)
    }

    /// Fetch time formatted for the inquiry-time row.
    pub fn fetched_at_display(&self) -> String {
        self.fetched_at.format("%Y-%m-%d %H:%M").to_string()
    }
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_rate(&self, source: &str, target: &str) -> Result<RateQuote, FetchError>;
}
