//! Single digits.

const UNITS: [&str; 10] = [
    "", "UN", "DOS", "TRES", "CUATRO", "CINCO", "SEIS", "SIETE", "OCHO", "NUEVE",
];

/// Names a single digit.
///
/// Zero has no word of its own and yields the empty string, which callers
/// use to decide whether to emit anything at all. One is the apocopated
/// `UN` used in front of nouns.
///
/// # Panics
///
/// Panics if `digit` is greater than 9.
///
/// # Examples
///
/// ```rust
/// use numerales::numeral::units;
///
/// assert_eq!(units(0), "");
/// assert_eq!(units(1), "UN");
/// assert_eq!(units(5), "CINCO");
/// ```
pub const fn units(digit: u32) -> &'static str {
    UNITS[digit as usize]
}
