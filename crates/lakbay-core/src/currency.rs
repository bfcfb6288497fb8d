//! Currency conversion applied at presentation time.
//!
//! Amounts are carried in the source currency (PHP) everywhere; conversion
//! happens only when a result is shown, using a caller-supplied rate. Never
//! persisted.

use crate::CoreError;

/// Converts a source-currency amount using the supplied rate.
#[must_use]
pub fn to_target_currency(amount: f64, rate: f64) -> f64 {
    amount * rate
}

/// Validates a caller-supplied exchange rate: must be finite and strictly
/// positive.
///
/// # Errors
///
/// Returns [`CoreError::InvalidExchangeRate`] otherwise.
pub fn validate_rate(rate: f64) -> Result<f64, CoreError> {
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(CoreError::InvalidExchangeRate(rate))
    }
}
