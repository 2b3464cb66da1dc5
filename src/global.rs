//! Process-wide currency configuration.
//!
//! This module keeps one [`CurrencyConfig`] behind a `parking_lot` lock for
//! callers that prefer configuring once and converting many times without
//! passing the configuration around.
//!
//! Setters take the write lock and conversions copy the configuration under
//! the read lock, so a conversion sees either the state before or after a
//! setter, never a torn mix of one call. Independent setter calls from
//! different threads follow last-writer-wins; configure before converting.
//!
//! # Examples
//!
//! ```rust
//! use numerales::global;
//!
//! global::configure("DOLAR", "DOLARES", "CENTAVO", "CENTAVOS");
//! assert_eq!(global::to_words(1.5).unwrap(), "UN DOLAR CON CINCUENTA CENTAVOS");
//!
//! global::clear_config();
//! assert_eq!(global::current_config(), numerales::CurrencyConfig::empty());
//! ```

use parking_lot::RwLock;

use crate::convert::amount_to_words;
use crate::currency::{Amount, CurrencyConfig};
use crate::error::NumeralError;
use crate::presentation::Words;

static CONFIG: RwLock<CurrencyConfig> = parking_lot::const_rwlock(CurrencyConfig::empty());

/// Replaces all four nouns at once.
pub fn configure(
    unit_singular: impl Into<String>,
    unit_plural: impl Into<String>,
    cents_singular: impl Into<String>,
    cents_plural: impl Into<String>,
) {
    let config = CurrencyConfig::new(unit_singular, unit_plural, cents_singular, cents_plural);
    tracing::debug!(?config, "replacing global currency configuration");
    *CONFIG.write() = config;
}

/// Replaces the whole global configuration with `config`.
pub fn set_config(config: CurrencyConfig) {
    tracing::debug!(?config, "replacing global currency configuration");
    *CONFIG.write() = config;
}

/// Sets the whole-unit noun used for one.
pub fn set_unit_singular(singular: impl Into<String>) {
    let singular = singular.into();
    tracing::debug!(%singular, "setting global unit singular");
    CONFIG.write().set_unit_singular(singular);
}

/// Sets the whole-unit noun used for every other count.
pub fn set_unit_plural(plural: impl Into<String>) {
    let plural = plural.into();
    tracing::debug!(%plural, "setting global unit plural");
    CONFIG.write().set_unit_plural(plural);
}

/// Sets the cents noun used for one.
pub fn set_cents_singular(singular: impl Into<String>) {
    let singular = singular.into();
    tracing::debug!(%singular, "setting global cents singular");
    CONFIG.write().set_cents_singular(singular);
}

/// Sets the cents noun used for every other count.
pub fn set_cents_plural(plural: impl Into<String>) {
    let plural = plural.into();
    tracing::debug!(%plural, "setting global cents plural");
    CONFIG.write().set_cents_plural(plural);
}

/// Resets every noun to the empty string.
pub fn clear_config() {
    tracing::debug!("clearing global currency configuration");
    *CONFIG.write() = CurrencyConfig::empty();
}

/// Returns a copy of the current configuration.
pub fn current_config() -> CurrencyConfig {
    CONFIG.read().clone()
}

/// Converts `value` with the current configuration, keeping the result
/// open to further presentation transforms.
///
/// # Errors
///
/// Returns a [`NumeralError`] when `value` is not finite, negative or
/// larger than [`MAX_INTEGER`](crate::MAX_INTEGER).
pub fn words(value: f64) -> Result<Words, NumeralError> {
    let amount = Amount::try_from(value)?;
    let config = current_config();
    Ok(amount_to_words(amount, &config))
}

/// Converts `value` to its sanitized written form.
///
/// # Errors
///
/// See [`words`].
pub fn to_words(value: f64) -> Result<String, NumeralError> {
    words(value).map(Words::into_string)
}

/// Converts `value` and capitalizes the result.
///
/// # Errors
///
/// See [`words`].
pub fn to_words_capitalized(value: f64) -> Result<String, NumeralError> {
    words(value).map(|words| words.capitalize().into_string())
}

/// Converts `value` using the feminine `UNA` when the phrase is
/// `UN <unit singular>`.
///
/// # Errors
///
/// See [`words`].
pub fn to_words_feminine(value: f64) -> Result<String, NumeralError> {
    words(value).map(|words| words.feminine().into_string())
}
