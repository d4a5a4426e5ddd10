//! Password generation and strength rating library
//!
//! This library generates random passwords from selected character
//! classes and rates password strength on a six-level scale.
//!
//! # Features
//!
//! - `async` (default): Enables batch generation over a channel with
//!   cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_GEN_LENGTH`: Default password length, `8..=32` (default: 16)
//! - `PWD_GEN_BATCH_SIZE`: Passwords per batch (default: 10)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_gen::{generate_password, rate_password_strength, CharsetSelection, PasswordRequest};
//!
//! let request = PasswordRequest::new(16, CharsetSelection::all());
//! let password = generate_password(&request).expect("valid request");
//!
//! let evaluation = rate_password_strength(&password);
//! println!("Score: {:?}", evaluation.score);
//! println!("Strength: {}", evaluation.strength());
//! ```

// Internal modules
mod charset;
mod config;
mod evaluator;
mod generator;
mod labels;
mod sections;
mod strength;

// Public API
pub use charset::{CharClass, CharsetSelection, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
pub use config::{
    clamp_length, ui_length_range, ConfigError, GeneratorConfig, DEFAULT_BATCH_SIZE,
    DEFAULT_LENGTH, MAX_UI_LENGTH, MIN_UI_LENGTH,
};
pub use evaluator::{rate_password_strength, rate_strength};
pub use generator::{generate_password, generate_password_with, GenerationError, PasswordRequest};
pub use labels::{format_length, format_strength, text, Locale, TextKey};
pub use sections::MIN_STRONG_LENGTH;
pub use strength::{StrengthEvaluation, StrengthLabel, StrengthScore, MAX_SCORE};

#[cfg(feature = "async")]
pub use evaluator::rate_password_strength_tx;

#[cfg(feature = "async")]
pub use generator::generate_batch_tx;
