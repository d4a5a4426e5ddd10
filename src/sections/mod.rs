//! Password strength criteria
//!
//! Each section checks one criterion. A satisfied criterion adds one
//! point to the score.

mod length;
mod variety;

pub use length::{length_section, MIN_STRONG_LENGTH};
pub use variety::{digit_section, lowercase_section, symbol_section, uppercase_section};

/// Result type for section evaluation functions.
/// - `Some(reason)` - criterion not met, with reason
/// - `None` - criterion met
pub type SectionResult = Option<String>;

/// Signature shared by all sections.
pub type Section = fn(&str) -> SectionResult;

/// All criteria, in scoring order.
pub const SECTIONS: [(&str, Section); 5] = [
    ("lowercase", lowercase_section),
    ("uppercase", uppercase_section),
    ("digit", digit_section),
    ("symbol", symbol_section),
    ("length", length_section),
];
