//! Numbers below one hundred.

use super::units;

const TEENS: [&str; 6] = ["DIEZ", "ONCE", "DOCE", "TRECE", "CATORCE", "QUINCE"];

const DECADES: [&str; 7] = [
    "TREINTA",
    "CUARENTA",
    "CINCUENTA",
    "SESENTA",
    "SETENTA",
    "OCHENTA",
    "NOVENTA",
];

/// Names a number from 0 to 99.
///
/// - 0 to 9 delegate to [`units`] (0 stays empty).
/// - 10 to 15 are irregular; 16 to 19 fuse as `DIECI` + unit.
/// - 20 is `VEINTE`; 21 to 29 fuse as `VEINTI` + unit.
/// - 30 and above join the decade and the unit with `" Y "`.
///
/// # Panics
///
/// Panics if `number` is greater than 99.
///
/// # Examples
///
/// ```rust
/// use numerales::numeral::tens;
///
/// assert_eq!(tens(15), "QUINCE");
/// assert_eq!(tens(17), "DIECISIETE");
/// assert_eq!(tens(23), "VEINTITRES");
/// assert_eq!(tens(30), "TREINTA");
/// assert_eq!(tens(31), "TREINTA Y UN");
/// ```
pub fn tens(number: u32) -> String {
    assert!(number < 100, "tens expects 0..=99, got {number}");

    let decade = number / 10;
    let unit = number % 10;

    match decade {
        0 => units(unit).to_owned(),
        1 if unit <= 5 => TEENS[unit as usize].to_owned(),
        1 => format!("DIECI{}", units(unit)),
        2 if unit == 0 => "VEINTE".to_owned(),
        2 => format!("VEINTI{}", units(unit)),
        _ => {
            let base = DECADES[(decade - 3) as usize];
            if unit > 0 {
                format!("{base} Y {}", units(unit))
            } else {
                base.to_owned()
            }
        }
    }
}
