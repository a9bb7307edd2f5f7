//! Pure remittance conversion and validation.

use crate::error::ConvertError;
use crate::rate_provider::RateQuote;

/// Largest remittance amount accepted, in the source currency.
pub const MAX_REMITTANCE: f64 = 10_000.0;

/// Parses the amount field and checks it against the remittance limits.
///
/// An empty field is reported as [`ConvertError::InvalidAmount`], not as a
/// zero amount; "0" parses fine and then fails the range check instead.
pub fn parse_amount(amount_text: &str) -> Result<f64, ConvertError> {
    let trimmed = amount_text.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::InvalidAmount);
    }
    let amount: f64 = trimmed.parse().map_err(|_| ConvertError::InvalidAmount)?;
    // NaN fails the comparison and lands here as well.
    if !(amount > 0.0 && amount <= MAX_REMITTANCE) {
        return Err(ConvertError::OutOfRange(amount));
    }
    Ok(amount)
}

/// Converts the amount field into the quote's target currency.
///
/// Plain f64 multiplication, no currency-specific rounding. Idempotent and
/// side-effect free.
pub fn convert(amount_text: &str, quote: Option<&RateQuote>) -> Result<f64, ConvertError> {
    let amount = parse_amount(amount_text)?;
    let quote = quote.ok_or(ConvertError::RateUnavailable)?;
    if quote.rate <= 0.0 {
        return Err(ConvertError::RateUnavailable);
    }
    Ok(amount * quote.rate)
}
