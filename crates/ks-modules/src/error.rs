//! Error types for the ks-modules crate.
//!
//! This module provides the [`ConfigError`] type for failures while loading,
//! saving, or interpreting configuration values.

use camino::Utf8PathBuf;

/// Errors that can occur while working with a [`ConfigManager`](crate::ConfigManager).
///
/// # Examples
///
/// ```
/// use ks_modules::ConfigError;
///
/// let error = ConfigError::invalid_value("processing.batch_size", "ten", "not a number");
/// assert!(error.to_string().contains("processing.batch_size"));
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("failed to access configuration file {path}: {source}")]
    Io {
        /// The path that could not be accessed.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A stored value could not be interpreted as the requested type.
    #[error("invalid value '{value}' for '{key}': {reason}")]
    InvalidValue {
        /// The configuration key.
        key: String,
        /// The raw stored value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ConfigError {
    /// Creates a new [`ConfigError::Io`] error.
    #[inline]
    pub fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a new [`ConfigError::InvalidValue`] error.
    #[inline]
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}
