//! Localized text for front ends.
//!
//! A plain lookup table. Neither the generator nor the rater depends on it.

use crate::strength::StrengthLabel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Russian,
    English,
}

/// Keys of the strings a front end shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    Title,
    Theme,
    Light,
    Dark,
    /// Template, `{v}` is the length.
    Length,
    Lower,
    Upper,
    Digits,
    Symbols,
    GenerateOne,
    GenerateMany,
    Copy,
    /// Template, `{s}` is the strength label.
    Strength,
    Update,
}

pub fn text(locale: Locale, key: TextKey) -> &'static str {
    match locale {
        Locale::Russian => russian(key),
        Locale::English => english(key),
    }
}

fn russian(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "Генератор паролей",
        TextKey::Theme => "Тема:",
        TextKey::Light => "Светлая",
        TextKey::Dark => "Тёмная",
        TextKey::Length => "Длина пароля: {v}",
        TextKey::Lower => "Строчные (a-z)",
        TextKey::Upper => "Заглавные (A-Z)",
        TextKey::Digits => "Цифры (0-9)",
        TextKey::Symbols => "Спецсимволы (!@#…)",
        TextKey::GenerateOne => "Сгенерировать один пароль",
        TextKey::GenerateMany => "Сгенерировать 10 паролей",
        TextKey::Copy => "Копировать пароль",
        TextKey::Strength => "Сложность: {s}",
        TextKey::Update => "Скачать обновление",
    }
}

fn english(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "Password Generator",
        TextKey::Theme => "Theme:",
        TextKey::Light => "Light",
        TextKey::Dark => "Dark",
        TextKey::Length => "Password length: {v}",
        TextKey::Lower => "Lowercase (a-z)",
        TextKey::Upper => "Uppercase (A-Z)",
        TextKey::Digits => "Digits (0-9)",
        TextKey::Symbols => "Symbols (!@#…)",
        TextKey::GenerateOne => "Generate one password",
        TextKey::GenerateMany => "Generate 10 passwords",
        TextKey::Copy => "Copy password",
        TextKey::Strength => "Strength: {s}",
        TextKey::Update => "Download update",
    }
}

impl StrengthLabel {
    pub fn localized(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Russian, StrengthLabel::VeryWeak) => "Очень слабый",
            (Locale::Russian, StrengthLabel::Weak) => "Слабый",
            (Locale::Russian, StrengthLabel::Medium) => "Средний",
            (Locale::Russian, StrengthLabel::Good) => "Хороший",
            (Locale::Russian, StrengthLabel::Strong) => "Сильный",
            (Locale::Russian, StrengthLabel::VeryStrong) => "Очень сильный",
            (Locale::English, StrengthLabel::VeryWeak) => "Very weak",
            (Locale::English, StrengthLabel::Weak) => "Weak",
            (Locale::English, StrengthLabel::Medium) => "Medium",
            (Locale::English, StrengthLabel::Good) => "Good",
            (Locale::English, StrengthLabel::Strong) => "Strong",
            (Locale::English, StrengthLabel::VeryStrong) => "Very strong",
        }
    }
}

pub fn format_length(locale: Locale, length: usize) -> String {
    text(locale, TextKey::Length).replace("{v}", &length.to_string())
}

pub fn format_strength(locale: Locale, label: StrengthLabel) -> String {
    text(locale, TextKey::Strength).replace("{s}", label.localized(locale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_length() {
        assert_eq!(format_length(Locale::Russian, 16), "Длина пароля: 16");
        assert_eq!(format_length(Locale::English, 8), "Password length: 8");
    }

    #[test]
    fn test_format_strength() {
        assert_eq!(
            format_strength(Locale::Russian, StrengthLabel::VeryStrong),
            "Сложность: Очень сильный"
        );
        assert_eq!(
            format_strength(Locale::English, StrengthLabel::Weak),
            "Strength: Weak"
        );
    }

    #[test]
    fn test_english_labels_match_display() {
        for label in StrengthLabel::ALL {
            assert_eq!(label.localized(Locale::English), label.to_string());
        }
    }

    #[test]
    fn test_default_locale() {
        assert_eq!(Locale::default(), Locale::Russian);
        assert_eq!(text(Locale::default(), TextKey::Theme), "Тема:");
    }
}
