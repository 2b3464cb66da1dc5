//! Section words for the thousand and million multipliers.

use super::hundreds;

/// A magnitude whose multiplier is spelled in front of a scale noun.
pub(super) struct Scale {
    divisor: u32,
    singular: &'static str,
    plural: &'static str,
}

/// `MIL` is invariant and takes no leading `UN`.
pub(super) const THOUSAND: Scale = Scale {
    divisor: 1_000,
    singular: "MIL",
    plural: "MIL",
};

pub(super) const MILLION: Scale = Scale {
    divisor: 1_000_000,
    singular: "UN MILLON",
    plural: "MILLONES",
};

impl Scale {
    /// Splits `number` into the multiplier of this scale and the remainder.
    pub(super) const fn split(&self, number: u32) -> (u32, u32) {
        (number / self.divisor, number % self.divisor)
    }

    /// The section word for a multiplier; empty when the multiplier is zero.
    ///
    /// An exact-hundred multiplier drops its trailing space (`TRESCIENTOS MIL`).
    pub(super) fn section(&self, multiplier: u32) -> String {
        match multiplier {
            0 => String::new(),
            1 => self.singular.to_owned(),
            _ => format!("{} {}", hundreds(multiplier).trim_end(), self.plural),
        }
    }
}
