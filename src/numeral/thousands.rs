//! Numbers below one million.

use super::hundreds;
use super::scale::THOUSAND;

/// Names a number from 0 to 999 999.
///
/// The thousands multiplier becomes a section word (`MIL`, `DOS MIL`,
/// `VEINTIUN MIL`, ...) followed by the [`hundreds`] remainder. An exact
/// thousand has no remainder and no joining space.
///
/// # Panics
///
/// Panics if `number` is greater than 999 999.
///
/// # Examples
///
/// ```rust
/// use numerales::numeral::thousands;
///
/// assert_eq!(thousands(1_000), "MIL");
/// assert_eq!(thousands(2_000), "DOS MIL");
/// assert_eq!(thousands(1_001), "MIL UN");
/// assert_eq!(thousands(999), "NOVECIENTOS NOVENTA Y NUEVE");
/// ```
pub fn thousands(number: u32) -> String {
    assert!(number < 1_000_000, "thousands expects 0..=999999, got {number}");

    let (multiplier, rest) = THOUSAND.split(number);
    let section = THOUSAND.section(multiplier);
    let rest_words = hundreds(rest);

    if section.is_empty() {
        rest_words
    } else if rest_words.is_empty() {
        section
    } else {
        format!("{section} {rest_words}")
    }
}
