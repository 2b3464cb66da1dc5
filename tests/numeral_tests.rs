//! Unit tests for the numeral tiers.
//!
//! - [`units`]: the leaf table
//! - [`tens`]: teens, fused twenties and `Y` compounds
//! - [`hundreds`]: `CIEN` versus `CIENTO`
//! - [`thousands`]: invariant `MIL`
//! - [`millions`]: `UN MILLON`, `MILLONES` and the `de` placeholder

use numerales::numeral::{hundreds, millions, tens, thousands, units};
use rstest::rstest;

// =============================================================================
// Units and Tens
// =============================================================================

#[rstest]
fn test_units_zero_is_empty() {
    assert_eq!(units(0), "");
    assert_eq!(units(5), "CINCO");
}

#[rstest]
fn test_tens_fuses_twenties_without_space() {
    assert_eq!(tens(21), "VEINTIUN");
    assert_eq!(tens(22), "VEINTIDOS");
    assert!(!tens(25).contains(' '));
}

#[rstest]
fn test_tens_joins_higher_decades_with_y() {
    assert_eq!(tens(30), "TREINTA");
    assert_eq!(tens(31), "TREINTA Y UN");
    assert_eq!(tens(95), "NOVENTA Y CINCO");
}

// =============================================================================
// Hundreds
// =============================================================================

#[rstest]
#[case(100, "CIEN")]
#[case(101, "CIENTO UN")]
#[case(110, "CIENTO DIEZ")]
#[case(121, "CIENTO VEINTIUN")]
#[case(250, "DOSCIENTOS CINCUENTA")]
#[case(999, "NOVECIENTOS NOVENTA Y NUEVE")]
fn test_hundreds(#[case] number: u32, #[case] expected: &str) {
    assert_eq!(hundreds(number), expected);
}

#[rstest]
fn test_hundreds_exact_multiple_keeps_space() {
    assert_eq!(hundreds(600), "SEISCIENTOS ");
}

// =============================================================================
// Thousands
// =============================================================================

#[rstest]
#[case(1_000, "MIL")]
#[case(2_000, "DOS MIL")]
#[case(1_999, "MIL NOVECIENTOS NOVENTA Y NUEVE")]
#[case(15_015, "QUINCE MIL QUINCE")]
#[case(31_000, "TREINTA Y UN MIL")]
fn test_thousands(#[case] number: u32, #[case] expected: &str) {
    assert_eq!(thousands(number), expected);
}

// =============================================================================
// Millions
// =============================================================================

#[rstest]
fn test_millions_exact_million_uses_placeholder() {
    assert_eq!(millions(1_000_000), "UN MILLON de");
}

#[rstest]
#[case(1_000_001, "UN MILLON UN")]
#[case(1_001_000, "UN MILLON MIL")]
#[case(7_000_000, "SIETE MILLONES de")]
#[case(12_345_678, "DOCE MILLONES TRESCIENTOS CUARENTA Y CINCO MIL SEISCIENTOS SETENTA Y OCHO")]
#[case(100_000_100, "CIEN MILLONES CIEN")]
fn test_millions(#[case] number: u32, #[case] expected: &str) {
    assert_eq!(millions(number), expected);
}

#[rstest]
fn test_millions_below_one_million_matches_thousands() {
    for number in [0, 9, 99, 999, 9_999, 99_999, 999_999] {
        assert_eq!(millions(number), thousands(number));
    }
}
