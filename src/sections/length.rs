//! Length section - checks password length.

use super::SectionResult;

/// Passwords at least this many characters long earn the length point.
pub const MIN_STRONG_LENGTH: usize = 14;

/// Checks if the password is long enough to earn the length point.
///
/// Length is counted in characters, not bytes.
///
/// # Returns
/// - `Some(reason)` if password is shorter than [`MIN_STRONG_LENGTH`]
/// - `None` otherwise
pub fn length_section(password: &str) -> SectionResult {
    if password.chars().count() < MIN_STRONG_LENGTH {
        return Some(format!(
            "Password should be at least {} characters",
            MIN_STRONG_LENGTH
        ));
    }
    None
}
