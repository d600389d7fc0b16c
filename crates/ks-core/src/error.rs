//! Error types for the ks-core crate.
//!
//! This module provides the [`CoreError`] type covering the two failure
//! conditions of the core entity: argument validation and lifecycle state.

/// Errors that can occur when constructing or using a [`Core`](crate::Core).
///
/// # Examples
///
/// ```
/// use ks_core::{Core, CoreError};
///
/// let error = Core::new("   ").unwrap_err();
/// assert!(matches!(error, CoreError::InvalidName));
/// assert!(error.to_string().contains("cannot be empty"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// The supplied name was empty or contained only whitespace.
    #[error("core name cannot be empty")]
    InvalidName,

    /// `process` was called before `initialize`.
    #[error("core must be initialized before processing")]
    NotInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_name_display() {
        assert_eq!(CoreError::InvalidName.to_string(), "core name cannot be empty");
    }

    #[test]
    fn test_not_initialized_display() {
        let msg = CoreError::NotInitialized.to_string();
        assert!(msg.contains("initialized"));
        assert!(msg.contains("processing"));
    }
}
