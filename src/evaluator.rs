//! Password strength rater - runs every criterion and sums the score.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::SECTIONS;
use crate::strength::{StrengthEvaluation, StrengthLabel, StrengthScore};

/// Rates a password against the five strength criteria.
///
/// One point per satisfied criterion: lowercase letter, uppercase letter,
/// digit, symbol from [`crate::SYMBOLS`], length of at least 14 characters.
/// Every input, the empty string included, gets a defined score.
///
/// # Returns
/// A `StrengthEvaluation` with the score and the unmet criteria.
pub fn rate_password_strength(password: &SecretString) -> StrengthEvaluation {
    evaluate(password.expose_secret())
}

/// Rates a plain string and returns only the label.
pub fn rate_strength(password: &str) -> StrengthLabel {
    evaluate(password).strength()
}

fn evaluate(pwd: &str) -> StrengthEvaluation {
    let mut reasons = Vec::new();
    let mut score = 0u8;

    for (_section_name, section_fn) in SECTIONS {
        match section_fn(pwd) {
            Some(reason) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Strength criterion not met: {}", _section_name);
                reasons.push(reason);
            }
            None => score += 1,
        }
    }

    StrengthEvaluation {
        score: StrengthScore::new(score),
        reasons,
    }
}

/// Async version that sends the evaluation via channel.
///
/// Nothing is sent if `token` is cancelled before the rating runs, so a
/// caller rating text as it is typed can drop superseded requests.
#[cfg(feature = "async")]
pub async fn rate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthEvaluation>,
) {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("strength rating cancelled before start");
        return;
    }

    let evaluation = rate_password_strength(password);

    if let Err(e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength evaluation: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
