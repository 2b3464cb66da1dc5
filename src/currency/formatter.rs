//! Raw currency phrases.

use super::{Amount, CurrencyConfig};
use crate::numeral::millions;

/// Spells an amount followed by its unit noun and, when there are cents,
/// `CON` plus the cents and their noun.
///
/// The phrase is assembled by plain concatenation and is not trimmed: it
/// ends with a space when there are no cents, and an empty noun leaves a
/// double space behind. An integer part of zero yields `"CERO "` on its
/// own, without the cents.
///
/// # Examples
///
/// ```rust
/// use numerales::currency::{Amount, CurrencyConfig, format_currency};
///
/// let config = CurrencyConfig::new("DOLAR", "DOLARES", "CENTAVO", "CENTAVOS");
///
/// let amount = Amount::try_from(123.04).unwrap();
/// assert_eq!(
///     format_currency(amount, &config),
///     "CIENTO VEINTITRES DOLARES CON CUATRO CENTAVOS"
/// );
///
/// let amount = Amount::try_from(200.0).unwrap();
/// assert_eq!(format_currency(amount, &config), "DOSCIENTOS  DOLARES ");
///
/// let amount = Amount::try_from(0.75).unwrap();
/// assert_eq!(format_currency(amount, &config), "CERO ");
/// ```
pub fn format_currency(amount: Amount, config: &CurrencyConfig) -> String {
    let integer = amount.integer();
    let cents = amount.cents();

    if integer == 0 {
        return "CERO ".to_owned();
    }

    let cents_words = if cents > 0 {
        format!("CON {} {}", millions(cents), config.cents_noun(cents))
    } else {
        String::new()
    };

    format!(
        "{} {} {}",
        millions(integer),
        config.unit_noun(integer),
        cents_words
    )
}
