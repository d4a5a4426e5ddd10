//! Character variety sections - one criterion per character class.

use super::SectionResult;
use crate::charset::CharClass;

fn missing(has_class: bool, name: &str) -> SectionResult {
    if has_class {
        None
    } else {
        Some(format!("Missing: {}", name))
    }
}

/// Checks for at least one lowercase letter.
pub fn lowercase_section(password: &str) -> SectionResult {
    missing(password.chars().any(|c| c.is_lowercase()), "lowercase")
}

/// Checks for at least one uppercase letter.
pub fn uppercase_section(password: &str) -> SectionResult {
    missing(password.chars().any(|c| c.is_uppercase()), "uppercase")
}

/// Checks for at least one digit.
///
/// Any Unicode numeric character counts, so Arabic-Indic and fullwidth
/// digits earn the point like ASCII ones.
pub fn digit_section(password: &str) -> SectionResult {
    missing(password.chars().any(|c| c.is_numeric()), "numbers")
}

/// Checks for at least one character of [`crate::SYMBOLS`].
///
/// Punctuation outside the symbol alphabet (`~`, `<`, ...) does not count.
pub fn symbol_section(password: &str) -> SectionResult {
    missing(
        password.chars().any(|c| CharClass::Symbols.contains(c)),
        "special characters",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variety_section_missing_uppercase() {
        let result = uppercase_section("lowercase123!");
        assert!(matches!(result, Some(ref reason) if reason.contains("uppercase")));
        assert_eq!(lowercase_section("lowercase123!"), None);
    }

    #[test]
    fn test_variety_section_missing_lowercase() {
        let result = lowercase_section("UPPERCASE123!");
        assert!(matches!(result, Some(ref reason) if reason.contains("lowercase")));
    }

    #[test]
    fn test_variety_section_missing_numbers() {
        let result = digit_section("NoNumbers!");
        assert!(matches!(result, Some(ref reason) if reason.contains("numbers")));
        assert_eq!(digit_section("n0"), None);
    }

    #[test]
    fn test_unicode_digits_count() {
        assert_eq!(digit_section("\u{0663}"), None);
        assert_eq!(digit_section("\u{FF15}"), None);
        assert_eq!(digit_section("x\u{00B2}"), None);
    }

    #[test]
    fn test_variety_section_missing_special() {
        let result = symbol_section("NoSpecial123");
        assert!(matches!(result, Some(ref reason) if reason.contains("special")));
    }

    #[test]
    fn test_symbol_section_only_symbol_alphabet() {
        assert!(symbol_section("tilde~angle<>").is_some());
        assert!(symbol_section("space here").is_some());
        assert_eq!(symbol_section("back\\slash"), None);
        assert_eq!(symbol_section("quote\"d"), None);
    }

    #[test]
    fn test_unicode_letters_count() {
        assert_eq!(lowercase_section("пароль"), None);
        assert_eq!(uppercase_section("ПАРОЛЬ"), None);
        assert!(uppercase_section("пароль").is_some());
    }

    #[test]
    fn test_variety_sections_empty() {
        assert!(lowercase_section("").is_some());
        assert!(uppercase_section("").is_some());
        assert!(digit_section("").is_some());
        assert!(symbol_section("").is_some());
    }
}
