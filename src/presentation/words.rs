//! The `Words` value type.

use std::borrow::Cow;
use std::fmt;

use super::{capitalize, feminize, normalize_whitespace, sanitize};
use crate::currency::{Amount, CurrencyConfig, format_currency};

/// The written form of an amount, ready for presentation transforms.
///
/// `Words` holds the trimmed currency phrase together with the unit
/// singular that was in effect when it was produced, so the feminine
/// form can be applied later without consulting any configuration.
/// Transforms consume the value and return a new one:
///
/// ```rust
/// use numerales::{Amount, CurrencyConfig, Words};
///
/// let config = CurrencyConfig::default().with_unit("VEZ AL DÍA", "VECES AL DÍA");
/// let words = Words::from_amount(Amount::try_from(1.0).unwrap(), &config);
///
/// assert_eq!(words.to_string(), "UN VEZ AL DÍA");
/// assert_eq!(words.feminine().capitalize().to_string(), "Una vez al día");
/// ```
///
/// Rendering through [`Display`](fmt::Display) or [`Words::into_string`]
/// applies [`sanitize`]; [`Words::normalized`] collapses every whitespace
/// run instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Words {
    text: String,
    unit_singular: String,
}

impl Words {
    /// Wraps a raw currency phrase, trimming its ends.
    pub fn new(raw: &str, unit_singular: impl Into<String>) -> Self {
        Self {
            text: raw.trim().to_owned(),
            unit_singular: unit_singular.into(),
        }
    }

    /// Formats `amount` with `config` and wraps the result.
    pub fn from_amount(amount: Amount, config: &CurrencyConfig) -> Self {
        let raw = format_currency(amount, config);
        Self::new(&raw, config.unit_singular())
    }

    /// The trimmed phrase before sanitization.
    pub fn raw(&self) -> &str {
        &self.text
    }

    /// Applies the feminine form when the phrase is `UN <unit singular>`.
    ///
    /// Matching is case sensitive, so apply it before [`Words::capitalize`].
    #[must_use]
    pub fn feminine(self) -> Self {
        if let Cow::Owned(text) = feminize(&self.text, &self.unit_singular) {
            Self { text, ..self }
        } else {
            self
        }
    }

    /// Lowercases the phrase and uppercases its first letter.
    #[must_use]
    pub fn capitalize(self) -> Self {
        Self {
            text: capitalize(&self.text),
            ..self
        }
    }

    /// Renders the phrase with every whitespace run collapsed.
    pub fn normalized(&self) -> String {
        normalize_whitespace(&self.text)
    }

    /// Renders the sanitized phrase.
    pub fn into_string(self) -> String {
        sanitize(&self.text)
    }
}

impl fmt::Display for Words {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&sanitize(&self.text))
    }
}

impl From<Words> for String {
    fn from(words: Words) -> Self {
        words.into_string()
    }
}
