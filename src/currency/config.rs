//! Unit and cents nouns used by the currency formatter.

/// The four nouns appended to a currency phrase.
///
/// All nouns default to the empty string; no validation is applied, so
/// any phrase works (`"VEZ AL DIA"` as well as `"PESO"`). The singular form
/// is chosen when the corresponding part is exactly one.
///
/// # Examples
///
/// ```rust
/// use numerales::CurrencyConfig;
///
/// let config = CurrencyConfig::default()
///     .with_unit("PESO", "PESOS")
///     .with_cents("CENTAVO", "CENTAVOS");
///
/// assert_eq!(config.unit_noun(1), "PESO");
/// assert_eq!(config.unit_noun(2), "PESOS");
/// assert_eq!(config.cents_noun(1), "CENTAVO");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CurrencyConfig {
    unit_singular: String,
    unit_plural: String,
    cents_singular: String,
    cents_plural: String,
}

static_assertions::assert_impl_all!(CurrencyConfig: Send, Sync);

impl CurrencyConfig {
    /// Creates a configuration with all four nouns.
    pub fn new(
        unit_singular: impl Into<String>,
        unit_plural: impl Into<String>,
        cents_singular: impl Into<String>,
        cents_plural: impl Into<String>,
    ) -> Self {
        Self {
            unit_singular: unit_singular.into(),
            unit_plural: unit_plural.into(),
            cents_singular: cents_singular.into(),
            cents_plural: cents_plural.into(),
        }
    }

    /// Creates a configuration with every noun empty.
    ///
    /// Usable in `const` and `static` initializers.
    pub const fn empty() -> Self {
        Self {
            unit_singular: String::new(),
            unit_plural: String::new(),
            cents_singular: String::new(),
            cents_plural: String::new(),
        }
    }

    /// Returns a copy with the whole-unit nouns replaced.
    #[must_use]
    pub fn with_unit(self, singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            unit_singular: singular.into(),
            unit_plural: plural.into(),
            ..self
        }
    }

    /// Returns a copy with the cents nouns replaced.
    #[must_use]
    pub fn with_cents(self, singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            cents_singular: singular.into(),
            cents_plural: plural.into(),
            ..self
        }
    }

    /// The whole-unit noun for one.
    pub fn unit_singular(&self) -> &str {
        &self.unit_singular
    }

    /// The whole-unit noun for every count other than one.
    pub fn unit_plural(&self) -> &str {
        &self.unit_plural
    }

    /// The cents noun for one.
    pub fn cents_singular(&self) -> &str {
        &self.cents_singular
    }

    /// The cents noun for every count other than one.
    pub fn cents_plural(&self) -> &str {
        &self.cents_plural
    }

    /// Picks the whole-unit noun matching `count`.
    pub fn unit_noun(&self, count: u32) -> &str {
        if count == 1 {
            &self.unit_singular
        } else {
            &self.unit_plural
        }
    }

    /// Picks the cents noun matching `count`.
    pub fn cents_noun(&self, count: u32) -> &str {
        if count == 1 {
            &self.cents_singular
        } else {
            &self.cents_plural
        }
    }

    /// Returns `true` when both whole-unit nouns are set.
    pub fn has_unit_nouns(&self) -> bool {
        !self.unit_singular.is_empty() && !self.unit_plural.is_empty()
    }

    pub(crate) fn set_unit_singular(&mut self, singular: String) {
        self.unit_singular = singular;
    }

    pub(crate) fn set_unit_plural(&mut self, plural: String) {
        self.unit_plural = plural;
    }

    pub(crate) fn set_cents_singular(&mut self, singular: String) {
        self.cents_singular = singular;
    }

    pub(crate) fn set_cents_plural(&mut self, plural: String) {
        self.cents_plural = plural;
    }
}
