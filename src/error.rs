//! Error types for rate fetching and conversion.

use thiserror::Error;

/// Failures raised while fetching a rate quote.
///
/// The screen collapses all of these into a single unavailable state
/// (rate 0.0, "Error"); the variants exist so diagnostics keep the cause.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("rate endpoint returned HTTP {0}")]
    Api(reqwest::StatusCode),

    #[error("rate endpoint reported success=false")]
    Unsuccessful,

    #[error("malformed rate response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("no usable rate for pair {pair}")]
    MissingRate { pair: String },
}

/// Failures raised by the conversion step. These block the calculation and
/// surface to the user; the displayed amount is never defaulted to zero.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConvertError {
    #[error("remittance amount is not a number")]
    InvalidAmount,

    #[error("remittance amount {0} must be greater than 0 and at most 10000")]
    OutOfRange(f64),

    #[error("no exchange rate available for the selected currency")]
    RateUnavailable,
}
