//! Password generator.

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use secrecy::SecretString;
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::charset::{CharClass, CharsetSelection};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    #[error("No character class selected")]
    EmptyAlphabet,
    #[error("Length {requested} too small: at least {minimum} needed for the selected classes")]
    LengthTooSmall { requested: usize, minimum: usize },
}

/// What to generate: a length and the classes to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRequest {
    pub length: usize,
    pub selection: CharsetSelection,
}

impl PasswordRequest {
    pub fn new(length: usize, selection: CharsetSelection) -> Self {
        Self { length, selection }
    }

    /// Builds a request from the four class flags.
    pub fn from_flags(
        length: usize,
        lowercase: bool,
        uppercase: bool,
        digits: bool,
        symbols: bool,
    ) -> Self {
        Self::new(
            length,
            CharsetSelection {
                lowercase,
                uppercase,
                digits,
                symbols,
            },
        )
    }

    /// Checks the request without touching the RNG.
    ///
    /// Returns the minimum length, i.e. the number of enabled classes.
    pub fn validate(&self) -> Result<usize, GenerationError> {
        let minimum = self.selection.enabled_count();
        if minimum == 0 {
            return Err(GenerationError::EmptyAlphabet);
        }
        if minimum > self.length {
            return Err(GenerationError::LengthTooSmall {
                requested: self.length,
                minimum,
            });
        }
        Ok(minimum)
    }
}

/// Generates a password using the thread-local CSPRNG.
///
/// The result has exactly `request.length` characters, contains at least
/// one character of every enabled class and nothing outside them.
///
/// # Errors
/// - [`GenerationError::EmptyAlphabet`] if no class is enabled
/// - [`GenerationError::LengthTooSmall`] if the length cannot hold one
///   character per enabled class
pub fn generate_password(request: &PasswordRequest) -> Result<SecretString, GenerationError> {
    generate_password_with(request, &mut rand::rng())
}

/// Same as [`generate_password`] with a caller-supplied CSPRNG.
pub fn generate_password_with<R>(
    request: &PasswordRequest,
    rng: &mut R,
) -> Result<SecretString, GenerationError>
where
    R: Rng + CryptoRng + ?Sized,
{
    let chars = generate_chars(request, rng).inspect_err(|_e| {
        #[cfg(feature = "tracing")]
        tracing::warn!("Password request rejected: {}", _e);
    })?;
    let password: String = chars.into_iter().collect();
    Ok(SecretString::new(password.into()))
}

fn generate_chars<R>(request: &PasswordRequest, rng: &mut R) -> Result<Vec<char>, GenerationError>
where
    R: Rng + CryptoRng + ?Sized,
{
    let required_count = request.validate()?;
    let alphabet = request.selection.combined_alphabet();

    let mut chars = Vec::with_capacity(request.length);

    // One character per enabled class, drawn from that class alone
    for class in request.selection.enabled() {
        chars.push(pick(&class_chars(class), rng));
    }

    chars.extend((required_count..request.length).map(|_| pick(&alphabet, rng)));

    chars.shuffle(rng);
    Ok(chars)
}

fn class_chars(class: CharClass) -> Vec<char> {
    class.alphabet().chars().collect()
}

#[inline]
fn pick<R>(alphabet: &[char], rng: &mut R) -> char
where
    R: Rng + ?Sized,
{
    alphabet[rng.random_range(0..alphabet.len())]
}

/// Generates `count` independent passwords and sends each one via channel.
///
/// Stops early when `token` is cancelled or the receiver is dropped. A
/// rejected request is sent once as an error and ends the batch, since
/// every further item would fail the same way.
///
/// # Returns
/// The number of passwords sent.
#[cfg(feature = "async")]
pub async fn generate_batch_tx(
    request: PasswordRequest,
    count: usize,
    token: CancellationToken,
    tx: mpsc::Sender<Result<SecretString, GenerationError>>,
) -> usize {
    #[cfg(feature = "tracing")]
    tracing::info!("batch generation of {} passwords is about to start...", count);

    let mut sent = 0;
    for _ in 0..count {
        if token.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::debug!("batch generation cancelled after {} passwords", sent);
            break;
        }

        let result = generate_password(&request);
        let failed = result.is_err();

        if let Err(_e) = tx.send(result).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send generated password: receiver dropped");
            break;
        }
        if failed {
            break;
        }
        sent += 1;
    }
    sent
}
