//! Character classes and alphabets used by the generator and the rater.

/// Symbol alphabet. Its exact membership is part of the public contract.
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.?/\"'\\|";

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";

/// A character class.
///
/// Variants are declared in the order their alphabets are concatenated
/// into the combined alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    /// Returns `true` if `c` belongs to this class's alphabet.
    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }
}

/// Which character classes a password may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharsetSelection {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl CharsetSelection {
    /// All four classes enabled.
    pub const fn all() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
        }
    }

    /// No class enabled.
    pub const fn none() -> Self {
        Self {
            lowercase: false,
            uppercase: false,
            digits: false,
            symbols: false,
        }
    }

    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.lowercase,
            CharClass::Uppercase => self.uppercase,
            CharClass::Digits => self.digits,
            CharClass::Symbols => self.symbols,
        }
    }

    /// Enabled classes in combined-alphabet order.
    pub fn enabled(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL
            .into_iter()
            .filter(move |class| self.is_enabled(*class))
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled().count()
    }

    pub fn is_empty(&self) -> bool {
        self.enabled_count() == 0
    }

    /// Concatenation of the enabled alphabets, lowercase first, symbols last.
    pub fn combined_alphabet(&self) -> Vec<char> {
        self.enabled()
            .flat_map(|class| class.alphabet().chars())
            .collect()
    }
}
