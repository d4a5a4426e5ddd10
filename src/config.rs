//! Caller-side defaults
//!
//! Length range and batch size used by a front end, read from the
//! environment.

use std::env::VarError;
use std::ops::RangeInclusive;

use thiserror::Error;

use crate::charset::CharsetSelection;
use crate::generator::PasswordRequest;

pub const MIN_UI_LENGTH: usize = 8;
pub const MAX_UI_LENGTH: usize = 32;
pub const DEFAULT_LENGTH: usize = 16;
pub const DEFAULT_BATCH_SIZE: usize = 10;

pub const LENGTH_VAR: &str = "PWD_GEN_LENGTH";
pub const BATCH_SIZE_VAR: &str = "PWD_GEN_BATCH_SIZE";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: not a number: {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var}: {value} outside {min}..={max}")]
    OutOfRange {
        var: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
}

/// Length range a front end offers on its slider.
pub fn ui_length_range() -> RangeInclusive<usize> {
    MIN_UI_LENGTH..=MAX_UI_LENGTH
}

/// Clamps a length into [`ui_length_range`].
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_UI_LENGTH, MAX_UI_LENGTH)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub length: usize,
    pub selection: CharsetSelection,
    pub batch_size: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            selection: CharsetSelection::all(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl GeneratorConfig {
    /// Reads the defaults from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_GEN_LENGTH`: default length, within `8..=32` (default: 16)
    /// - `PWD_GEN_BATCH_SIZE`: passwords per batch, at least 1 (default: 10)
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but not a number, or out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(length) = read_var(LENGTH_VAR, MIN_UI_LENGTH, MAX_UI_LENGTH)? {
            config.length = length;
        }
        if let Some(batch_size) = read_var(BATCH_SIZE_VAR, 1, usize::MAX)? {
            config.batch_size = batch_size;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Generator config: length {}, batch size {}",
            config.length,
            config.batch_size
        );

        Ok(config)
    }

    pub fn request(&self) -> PasswordRequest {
        PasswordRequest::new(self.length, self.selection)
    }
}

fn read_var(var: &'static str, min: usize, max: usize) -> Result<Option<usize>, ConfigError> {
    let raw = match std::env::var(var) {
        Ok(raw) => raw,
        Err(VarError::NotPresent) => return Ok(None),
        Err(VarError::NotUnicode(os)) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Invalid value for {}: not unicode", var);
            return Err(ConfigError::InvalidNumber {
                var,
                value: os.to_string_lossy().into_owned(),
            });
        }
    };

    let value: usize = raw.trim().parse().map_err(|_| {
        #[cfg(feature = "tracing")]
        tracing::warn!("Invalid value for {}: {:?}", var, raw);
        ConfigError::InvalidNumber {
            var,
            value: raw.clone(),
        }
    })?;

    if !(min..=max).contains(&value) {
        return Err(ConfigError::OutOfRange {
            var,
            value,
            min,
            max,
        });
    }
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: only called from #[serial] tests
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: only called from #[serial] tests
        unsafe { std::env::remove_var(key); }
    }

    fn cleanup() {
        remove_env(LENGTH_VAR);
        remove_env(BATCH_SIZE_VAR);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        cleanup();
        let config = GeneratorConfig::from_env().unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.length, 16);
        assert_eq!(config.batch_size, 10);
        assert_eq!(config.selection, CharsetSelection::all());
    }

    #[test]
    #[serial]
    fn test_from_env_custom() {
        set_env(LENGTH_VAR, "24");
        set_env(BATCH_SIZE_VAR, " 3 ");

        let config = GeneratorConfig::from_env().unwrap();
        assert_eq!(config.length, 24);
        assert_eq!(config.batch_size, 3);

        cleanup();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_number() {
        set_env(LENGTH_VAR, "sixteen");

        let result = GeneratorConfig::from_env();
        assert_eq!(
            result,
            Err(ConfigError::InvalidNumber {
                var: LENGTH_VAR,
                value: "sixteen".to_string()
            })
        );

        cleanup();
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_from_env_not_unicode() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let garbled = OsString::from_vec(vec![b'1', 0xff, b'6']);
        // SAFETY: only called from #[serial] tests
        unsafe { std::env::set_var(LENGTH_VAR, &garbled); }

        let result = GeneratorConfig::from_env();
        assert_eq!(
            result,
            Err(ConfigError::InvalidNumber {
                var: LENGTH_VAR,
                value: "1\u{FFFD}6".to_string()
            })
        );

        cleanup();
    }

    #[test]
    #[serial]
    fn test_from_env_out_of_range() {
        set_env(LENGTH_VAR, "64");
        assert!(matches!(
            GeneratorConfig::from_env(),
            Err(ConfigError::OutOfRange { value: 64, .. })
        ));

        set_env(LENGTH_VAR, "16");
        set_env(BATCH_SIZE_VAR, "0");
        assert!(matches!(
            GeneratorConfig::from_env(),
            Err(ConfigError::OutOfRange { value: 0, min: 1, .. })
        ));

        cleanup();
    }

    #[test]
    fn test_clamp_length() {
        assert_eq!(clamp_length(0), 8);
        assert_eq!(clamp_length(20), 20);
        assert_eq!(clamp_length(100), 32);
        assert!(ui_length_range().contains(&DEFAULT_LENGTH));
    }

    #[test]
    fn test_request_from_config() {
        let request = GeneratorConfig::default().request();
        assert_eq!(request.length, 16);
        assert_eq!(request.validate(), Ok(4));
    }
}
