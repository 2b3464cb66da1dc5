//! Validated decomposition of a numeric value into integer and cents.

use crate::error::NumeralError;

/// The largest integer part the numeral grammar can name.
pub const MAX_INTEGER: u32 = 999_999_999;

/// A non-negative amount split into an integer part and a cents part.
///
/// Invariants: `integer <= MAX_INTEGER` and `cents <= 99`.
///
/// # Examples
///
/// ```rust
/// use numerales::Amount;
///
/// let amount = Amount::try_from(123.04).unwrap();
/// assert_eq!(amount.integer(), 123);
/// assert_eq!(amount.cents(), 4);
///
/// assert!(Amount::try_from(f64::NAN).is_err());
/// assert!(Amount::try_from(1e9).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawAmount"))]
pub struct Amount {
    integer: u32,
    cents: u32,
}

impl Amount {
    /// Creates an amount from an already split integer and cents part.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::OutOfRange`] if `integer` exceeds
    /// [`MAX_INTEGER`] and [`NumeralError::CentsOutOfRange`] if `cents` is
    /// 100 or more.
    pub fn new(integer: u32, cents: u32) -> Result<Self, NumeralError> {
        if integer > MAX_INTEGER {
            return Err(NumeralError::OutOfRange {
                value: f64::from(integer),
            });
        }
        if cents > 99 {
            return Err(NumeralError::CentsOutOfRange { cents });
        }
        Ok(Self { integer, cents })
    }

    /// Returns the whole-unit part.
    pub const fn integer(&self) -> u32 {
        self.integer
    }

    /// Returns the cents part, `0..=99`.
    pub const fn cents(&self) -> u32 {
        self.cents
    }

    /// Decomposes a floating-point value.
    ///
    /// The integer part is `floor(value)` and the cents part is
    /// `round(value * 100) - floor(value) * 100`. Rounding that reaches a
    /// full hundred cents carries into the integer part, so `2.999` becomes
    /// three units and no cents.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::NotFinite`] for NaN and infinities,
    /// [`NumeralError::Negative`] for negative values and
    /// [`NumeralError::OutOfRange`] when the integer part exceeds
    /// [`MAX_INTEGER`].
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_f64(value: f64) -> Result<Self, NumeralError> {
        if !value.is_finite() {
            return Err(NumeralError::NotFinite { value });
        }
        if value < 0.0 {
            return Err(NumeralError::Negative { value });
        }

        let mut integer = value.floor();
        let mut cents = ((value * 100.0).round() - integer * 100.0).max(0.0);
        if cents >= 100.0 {
            integer += 1.0;
            cents -= 100.0;
        }

        if integer > f64::from(MAX_INTEGER) {
            return Err(NumeralError::OutOfRange { value });
        }

        // Both parts are whole, non-negative and range-checked above.
        Ok(Self {
            integer: integer as u32,
            cents: cents as u32,
        })
    }
}

impl TryFrom<f64> for Amount {
    type Error = NumeralError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl TryFrom<u32> for Amount {
    type Error = NumeralError;

    fn try_from(integer: u32) -> Result<Self, Self::Error> {
        Self::new(integer, 0)
    }
}

#[cfg(feature = "decimal")]
impl TryFrom<rust_decimal::Decimal> for Amount {
    type Error = NumeralError;

    /// Rounds half away from zero to two decimal places, then splits.
    fn try_from(value: rust_decimal::Decimal) -> Result<Self, Self::Error> {
        use rust_decimal::prelude::ToPrimitive;
        use rust_decimal::{Decimal, RoundingStrategy};

        let approximate = value.to_f64().unwrap_or(f64::NAN);
        if value.is_sign_negative() && !value.is_zero() {
            return Err(NumeralError::Negative { value: approximate });
        }

        let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let integer = rounded
            .trunc()
            .to_u32()
            .filter(|integer| *integer <= MAX_INTEGER)
            .ok_or(NumeralError::OutOfRange { value: approximate })?;
        let cents = (rounded.fract() * Decimal::ONE_HUNDRED)
            .to_u32()
            .unwrap_or_default();

        Self::new(integer, cents)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawAmount {
    integer: u32,
    #[serde(default)]
    cents: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawAmount> for Amount {
    type Error = NumeralError;

    fn try_from(raw: RawAmount) -> Result<Self, Self::Error> {
        Self::new(raw.integer, raw.cents)
    }
}
