//! Strength score and label types.

use std::fmt;

/// Highest score a password can reach (one point per criterion).
pub const MAX_SCORE: u8 = 5;

/// Number of satisfied strength criteria, in `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StrengthScore(u8);

impl StrengthScore {
    /// Creates a score, saturating at [`MAX_SCORE`].
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_SCORE))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> StrengthLabel {
        StrengthLabel::from_score(*self)
    }
}

/// Ordered six-level strength scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Medium,
    Good,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    pub const ALL: [StrengthLabel; 6] = [
        StrengthLabel::VeryWeak,
        StrengthLabel::Weak,
        StrengthLabel::Medium,
        StrengthLabel::Good,
        StrengthLabel::Strong,
        StrengthLabel::VeryStrong,
    ];

    pub fn from_score(score: StrengthScore) -> Self {
        Self::ALL[score.value() as usize]
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StrengthLabel::VeryWeak => "Very weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very strong",
        };
        f.write_str(text)
    }
}

/// Result of rating a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthEvaluation {
    pub score: StrengthScore,
    /// Criteria the password did not meet.
    pub reasons: Vec<String>,
}

impl StrengthEvaluation {
    pub fn strength(&self) -> StrengthLabel {
        self.score.label()
    }
}
