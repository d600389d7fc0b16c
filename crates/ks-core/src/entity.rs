//! The [`Core`] entity.
//!
//! A `Core` carries a non-empty name and an initialized flag. Processing is
//! only allowed once the flag is set.

use tracing::debug;

use crate::error::CoreError;
use crate::utils::{string, validation};
use crate::version::PROJECT_NAME;

/// A named entity that uppercases input once initialized.
///
/// The name is validated on construction and on every [`set_name`](Self::set_name)
/// call: empty and whitespace-only names are rejected.
///
/// `Core` is not synchronized; mutation requires `&mut self`.
///
/// # Examples
///
/// ```
/// use ks_core::Core;
///
/// let mut core = Core::new("X")?;
/// assert!(!core.is_initialized());
///
/// assert!(core.initialize());
/// assert_eq!(core.process("y")?, "[X] Y");
/// # Ok::<(), ks_core::CoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Core {
    name: String,
    initialized: bool,
}

impl Core {
    /// Creates a new, uninitialized core with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidName`] if `name` is empty or whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        if validation::is_empty(&name) {
            return Err(CoreError::InvalidName);
        }

        Ok(Self {
            name,
            initialized: false,
        })
    }

    /// Returns the core's name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the core's name.
    ///
    /// The previous name is kept if validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidName`] if `name` is empty or whitespace-only.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), CoreError> {
        let name = name.into();
        if validation::is_empty(&name) {
            return Err(CoreError::InvalidName);
        }
        self.name = name;
        Ok(())
    }

    /// Marks the core as initialized.
    ///
    /// Always returns `true`. Calling it again is a no-op.
    pub fn initialize(&mut self) -> bool {
        if !self.initialized {
            debug!(name = %self.name, "Initializing core");
            self.initialized = true;
        }
        true
    }

    /// Returns `true` once [`initialize`](Self::initialize) has been called.
    #[inline]
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Resets the core to its uninitialized state.
    pub fn cleanup(&mut self) {
        if self.initialized {
            debug!(name = %self.name, "Cleaning up core");
            self.initialized = false;
        }
    }

    /// Uppercases `input` and prefixes it with the bracketed name.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotInitialized`] if the core has not been initialized.
    pub fn process(&self, input: &str) -> Result<String, CoreError> {
        if !self.initialized {
            return Err(CoreError::NotInitialized);
        }
        Ok(format!("[{}] {}", self.name, string::to_upper(input)))
    }
}

impl Default for Core {
    fn default() -> Self {
        Self {
            name: PROJECT_NAME.to_owned(),
            initialized: false,
        }
    }
}
