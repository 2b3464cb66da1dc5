//! Property-based tests for the numeral grammar.
//!
//! - Output vocabulary: uppercase ASCII words, with `de` only as the
//!   trailing placeholder of an exact million
//! - `CIENTO` appears exactly for 101 to 199 within a hundreds group
//! - The placeholder fires only when the sub-million remainder is zero
//! - Sanitization is a fixed point after one pass over a single double space
//! - The feminine form only changes amounts of exactly one unit

use numerales::numeral::{hundreds, millions, tens};
use numerales::presentation::sanitize;
use numerales::{Amount, CurrencyConfig, MAX_INTEGER, to_words, to_words_feminine};
use proptest::prelude::*;

fn is_uppercase_phrase(text: &str) -> bool {
    text.chars().all(|character| character.is_ascii_uppercase() || character == ' ')
}

proptest! {
    #[test]
    fn prop_millions_vocabulary(number in 0..=MAX_INTEGER) {
        let words = millions(number);
        let body = words.strip_suffix(" de").unwrap_or(&words);
        prop_assert!(is_uppercase_phrase(body), "{}", words);
    }

    #[test]
    fn prop_millions_non_empty_for_positive(number in 1..=MAX_INTEGER) {
        prop_assert!(!millions(number).trim().is_empty());
    }

    #[test]
    fn prop_placeholder_only_for_exact_millions(number in 0..=MAX_INTEGER) {
        let expected = number >= 1_000_000 && number % 1_000_000 == 0;
        prop_assert_eq!(millions(number).ends_with(" de"), expected);
    }

    #[test]
    fn prop_ciento_only_with_remainder(number in 0_u32..1_000) {
        let expected = (101..=199).contains(&number);
        prop_assert_eq!(hundreds(number).starts_with("CIENTO "), expected);
    }

    #[test]
    fn prop_twenties_are_fused(unit in 1_u32..10) {
        let words = tens(20 + unit);
        prop_assert!(words.starts_with("VEINTI"));
        prop_assert!(!words.contains(' '));
    }

    #[test]
    fn prop_sanitize_idempotent_for_one_double_space(
        left in "[A-Z]{1,12}",
        right in "[A-Z]{1,12}"
    ) {
        let text = format!("{left}  {right} ");
        let once = sanitize(&text);
        prop_assert_eq!(sanitize(&once), once.clone());
        prop_assert_eq!(once, format!("{left} {right}"));
    }

    #[test]
    fn prop_feminine_only_changes_one_unit(integer in 2..=MAX_INTEGER, cents in 0_u32..100) {
        let config = CurrencyConfig::new("VEZ", "VECES", "CENTAVO", "CENTAVOS");
        let value = f64::from(integer) + f64::from(cents) / 100.0;
        prop_assert_eq!(
            to_words_feminine(value, &config).unwrap(),
            to_words(value, &config).unwrap()
        );
    }

    #[test]
    fn prop_amount_decomposition(integer in 0_u32..1_000_000, cents in 0_u32..100) {
        let value = f64::from(integer) + f64::from(cents) / 100.0;
        prop_assert_eq!(Amount::try_from(value).unwrap(), Amount::new(integer, cents).unwrap());
    }

    #[test]
    fn prop_plural_noun_for_many(integer in 2..=MAX_INTEGER) {
        let config = CurrencyConfig::new("DOLAR", "DOLARES", "CENTAVO", "CENTAVOS");
        let words = to_words(f64::from(integer), &config).unwrap();
        prop_assert!(words.ends_with("DOLARES"), "{}", words);
    }
}
