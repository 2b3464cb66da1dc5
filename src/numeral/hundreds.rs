//! Numbers below one thousand.

use super::tens;

const HUNDREDS: [&str; 8] = [
    "DOSCIENTOS",
    "TRESCIENTOS",
    "CUATROCIENTOS",
    "QUINIENTOS",
    "SEISCIENTOS",
    "SETECIENTOS",
    "OCHOCIENTOS",
    "NOVECIENTOS",
];

/// Names a number from 0 to 999.
///
/// An exact hundred is `CIEN`; with a remainder it becomes `CIENTO`.
/// From two hundred on the literal table word is followed by a space and
/// the [`tens`] remainder, and the space is kept even when the remainder is
/// empty.
///
/// # Panics
///
/// Panics if `number` is greater than 999.
///
/// # Examples
///
/// ```rust
/// use numerales::numeral::hundreds;
///
/// assert_eq!(hundreds(100), "CIEN");
/// assert_eq!(hundreds(101), "CIENTO UN");
/// assert_eq!(hundreds(515), "QUINIENTOS QUINCE");
/// assert_eq!(hundreds(200), "DOSCIENTOS ");
/// ```
pub fn hundreds(number: u32) -> String {
    assert!(number < 1_000, "hundreds expects 0..=999, got {number}");

    let hundred = number / 100;
    let rest = number % 100;

    match hundred {
        0 => tens(rest),
        1 if rest > 0 => format!("CIENTO {}", tens(rest)),
        1 => "CIEN".to_owned(),
        _ => format!("{} {}", HUNDREDS[(hundred - 2) as usize], tens(rest)),
    }
}
