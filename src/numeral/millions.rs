//! Top-level numeral entry point.

use super::scale::MILLION;
use super::thousands;

/// Names a number from 0 to 999 999 999.
///
/// One million is `UN MILLON`, larger multipliers are spelled through
/// [`hundreds`](super::hundreds) and followed by `MILLONES`. When the
/// sub-million remainder is zero the lowercase placeholder `de` takes its
/// place, ready for a noun (`UN MILLON de DOLARES`).
///
/// # Panics
///
/// Panics if `number` is greater than 999 999 999.
///
/// # Examples
///
/// ```rust
/// use numerales::numeral::millions;
///
/// assert_eq!(millions(1_000_000), "UN MILLON de");
/// assert_eq!(millions(1_000_001), "UN MILLON UN");
/// assert_eq!(millions(3_000_000), "TRES MILLONES de");
/// assert_eq!(millions(250), "DOSCIENTOS CINCUENTA");
/// ```
pub fn millions(number: u32) -> String {
    assert!(
        number < 1_000_000_000,
        "millions expects 0..=999999999, got {number}"
    );

    let (multiplier, rest) = MILLION.split(number);
    let section = MILLION.section(multiplier);
    let rest_words = thousands(rest);

    if section.is_empty() {
        return rest_words;
    }

    if rest_words.is_empty() {
        format!("{section} de")
    } else {
        format!("{section} {rest_words}")
    }
}
