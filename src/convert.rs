//! Conversion with an explicit configuration.
//!
//! Every function takes the [`CurrencyConfig`] as an argument, so
//! concurrent conversions never race on shared state.

use crate::currency::{Amount, CurrencyConfig};
use crate::error::NumeralError;
use crate::presentation::Words;

/// Converts an already validated amount.
///
/// Emits a `warn` event when the unit nouns are not configured; the
/// phrase is still produced with blank noun slots.
pub fn amount_to_words(amount: Amount, config: &CurrencyConfig) -> Words {
    tracing::debug!(
        integer = amount.integer(),
        cents = amount.cents(),
        "converting amount to words"
    );
    if !config.has_unit_nouns() {
        tracing::warn!("currency unit nouns are not configured; output has blank noun slots");
    }
    Words::from_amount(amount, config)
}

/// Converts `value` to its sanitized written form.
///
/// # Errors
///
/// Returns a [`NumeralError`] when `value` is not finite, negative or
/// larger than [`MAX_INTEGER`](crate::MAX_INTEGER).
///
/// # Examples
///
/// ```rust
/// use numerales::{CurrencyConfig, to_words};
///
/// let config = CurrencyConfig::new("DOLAR", "DOLARES", "CENTAVO", "CENTAVOS");
/// assert_eq!(to_words(1.5, &config).unwrap(), "UN DOLAR CON CINCUENTA CENTAVOS");
/// assert!(to_words(-1.0, &config).is_err());
/// ```
pub fn to_words(value: f64, config: &CurrencyConfig) -> Result<String, NumeralError> {
    let amount = Amount::try_from(value)?;
    Ok(amount_to_words(amount, config).into_string())
}

/// Converts `value` and capitalizes the result.
///
/// # Errors
///
/// See [`to_words`].
///
/// # Examples
///
/// ```rust
/// use numerales::{CurrencyConfig, to_words_capitalized};
///
/// let config = CurrencyConfig::default().with_unit("HORA AL DÍA", "HORAS AL DÍA");
/// assert_eq!(to_words_capitalized(24.0, &config).unwrap(), "Veinticuatro horas al día");
/// ```
pub fn to_words_capitalized(value: f64, config: &CurrencyConfig) -> Result<String, NumeralError> {
    let amount = Amount::try_from(value)?;
    Ok(amount_to_words(amount, config).capitalize().into_string())
}

/// Converts `value` using the feminine `UNA` when the phrase is
/// `UN <unit singular>`.
///
/// # Errors
///
/// See [`to_words`].
///
/// # Examples
///
/// ```rust
/// use numerales::{CurrencyConfig, to_words_feminine};
///
/// let config = CurrencyConfig::default().with_unit("VEZ AL DIA", "VECES AL DIA");
/// assert_eq!(to_words_feminine(1.0, &config).unwrap(), "UNA VEZ AL DIA");
/// assert_eq!(to_words_feminine(2.0, &config).unwrap(), "DOS VECES AL DIA");
/// ```
pub fn to_words_feminine(value: f64, config: &CurrencyConfig) -> Result<String, NumeralError> {
    let amount = Amount::try_from(value)?;
    Ok(amount_to_words(amount, config).feminine().into_string())
}
