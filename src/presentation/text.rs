//! Plain text transforms.

use std::borrow::Cow;

/// Trims the phrase and collapses its first double space.
///
/// Only one pair of spaces is replaced, so text with a single double space
/// comes out fully cleaned and is a fixed point afterwards. Use
/// [`normalize_whitespace`] to collapse every run.
///
/// # Examples
///
/// ```rust
/// use numerales::presentation::sanitize;
///
/// assert_eq!(sanitize("DOSCIENTOS  DOLARES "), "DOSCIENTOS DOLARES");
/// assert_eq!(sanitize("A  B  C"), "A B  C");
/// ```
pub fn sanitize(text: &str) -> String {
    text.trim().replacen("  ", " ", 1)
}

/// Trims the phrase and collapses every whitespace run to one space.
///
/// # Examples
///
/// ```rust
/// use numerales::presentation::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace(" A  B   C "), "A B C");
/// ```
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercases the phrase and uppercases its first character.
///
/// # Examples
///
/// ```rust
/// use numerales::presentation::capitalize;
///
/// assert_eq!(capitalize("VEINTICUATRO HORAS AL DÍA"), "Veinticuatro horas al día");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut chars = lower.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Switches a leading `UN <unit_singular>` to its feminine form.
///
/// The pattern must match as a whole prefix: the text is either exactly
/// `"UN " + unit_singular` or continues with a space after it. Compound
/// numerals such as `VEINTIUN` are never touched, and an empty noun
/// never matches.
///
/// # Examples
///
/// ```rust
/// use numerales::presentation::feminize;
///
/// assert_eq!(feminize("UN VEZ AL DIA", "VEZ AL DIA"), "UNA VEZ AL DIA");
/// assert_eq!(feminize("VEINTIUN VEZ AL DIA", "VEZ AL DIA"), "VEINTIUN VEZ AL DIA");
/// ```
pub fn feminize<'a>(text: &'a str, unit_singular: &str) -> Cow<'a, str> {
    if unit_singular.is_empty() {
        return Cow::Borrowed(text);
    }

    match text.strip_prefix("UN ") {
        Some(rest)
            if rest
                .strip_prefix(unit_singular)
                .is_some_and(|tail| tail.is_empty() || tail.starts_with(' ')) =>
        {
            Cow::Owned(format!("UNA {rest}"))
        }
        _ => Cow::Borrowed(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("CERO ", "CERO")]
    #[case("  UN DOLAR  ", "UN DOLAR")]
    #[case("DOSCIENTOS  DOLARES ", "DOSCIENTOS DOLARES")]
    #[case("NADA", "NADA")]
    fn test_sanitize(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(sanitize(text), expected);
    }

    #[rstest]
    fn test_sanitize_collapses_only_first_pair() {
        assert_eq!(sanitize("A  B  C"), "A B  C");
        assert_eq!(sanitize("A   B"), "A  B");
    }

    #[rstest]
    fn test_sanitize_is_idempotent_for_single_double_space() {
        let once = sanitize("DOSCIENTOS  DOLARES ");
        assert_eq!(sanitize(&once), once);
    }

    #[rstest]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("A  B  C"), "A B C");
        assert_eq!(normalize_whitespace("   "), "");
    }

    #[rstest]
    #[case("UN DOLAR", "Un dolar")]
    #[case("una vez al día", "Una vez al día")]
    #[case("ÁRBOL", "Árbol")]
    #[case("", "")]
    fn test_capitalize(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(capitalize(text), expected);
    }

    #[rstest]
    #[case("UN DOLAR", "DOLAR", "UNA DOLAR")]
    #[case("UN DOLAR CON DIEZ CENTAVOS", "DOLAR", "UNA DOLAR CON DIEZ CENTAVOS")]
    #[case("VEINTIUN DOLARES", "DOLAR", "VEINTIUN DOLARES")]
    #[case("UN DOLARES", "DOLAR", "UN DOLARES")]
    #[case("DOS DOLARES", "DOLAR", "DOS DOLARES")]
    #[case("UN DOLAR", "", "UN DOLAR")]
    #[case("UN MILLON de DOLARES", "DOLAR", "UN MILLON de DOLARES")]
    fn test_feminize(#[case] text: &str, #[case] unit: &str, #[case] expected: &str) {
        assert_eq!(feminize(text, unit), expected);
    }

    #[rstest]
    fn test_feminize_borrows_when_untouched() {
        assert!(matches!(feminize("DOS VECES", "VEZ"), Cow::Borrowed(_)));
    }
}
