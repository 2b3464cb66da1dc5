//! Error types for numeral conversion.
//!
//! Every failure is an invalid input: the naming logic itself is pure
//! arithmetic over validated values and cannot fail.

use thiserror::Error;

use crate::currency::MAX_INTEGER;

/// Represents an input that cannot be rendered as Spanish words.
///
/// # Examples
///
/// ```rust
/// use numerales::{Amount, NumeralError};
///
/// let error = Amount::try_from(-1.5).unwrap_err();
/// assert_eq!(error, NumeralError::Negative { value: -1.5 });
/// assert_eq!(error.to_string(), "value must not be negative, got -1.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NumeralError {
    /// The value is NaN or infinite.
    #[error("value must be finite, got {value}")]
    NotFinite {
        /// The rejected value.
        value: f64,
    },
    /// The value is strictly negative.
    #[error("value must not be negative, got {value}")]
    Negative {
        /// The rejected value.
        value: f64,
    },
    /// The integer part exceeds [`MAX_INTEGER`].
    #[error("value {value} exceeds the largest supported amount ({max})", max = MAX_INTEGER)]
    OutOfRange {
        /// The rejected value.
        value: f64,
    },
    /// An explicit cents part of 100 or more.
    #[error("cents must be below 100, got {cents}")]
    CentsOutOfRange {
        /// The rejected cents part.
        cents: u32,
    },
}

impl NumeralError {
    /// Returns `true` when the error describes an invalid input value.
    ///
    /// All current variants do; the method exists so callers can match on
    /// the category instead of on individual variants.
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::NotFinite { .. }
                | Self::Negative { .. }
                | Self::OutOfRange { .. }
                | Self::CentsOutOfRange { .. }
        )
    }
}
