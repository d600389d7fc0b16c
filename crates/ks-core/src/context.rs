//! Caller-owned lifecycle context.
//!
//! A [`Context`] is the explicit replacement for a process-wide core
//! instance: whoever needs an initialized [`Core`] builds a context, passes
//! it where it is needed, and cleans it up when done.

use tracing::info;

use crate::entity::Core;
use crate::error::CoreError;
use crate::version::project_info;

/// An initialized [`Core`] owned by the caller.
///
/// # Examples
///
/// ```
/// use ks_core::Context;
///
/// let mut ctx = Context::initialize("App")?;
/// assert_eq!(ctx.core().process("ok")?, "[App] OK");
///
/// ctx.cleanup();
/// assert!(!ctx.is_active());
/// # Ok::<(), ks_core::CoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Context {
    core: Core,
}

impl Context {
    /// Validates `name`, builds a [`Core`], and initializes it.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidName`] if `name` is empty or whitespace-only.
    pub fn initialize(name: impl Into<String>) -> Result<Self, CoreError> {
        let mut core = Core::new(name)?;
        core.initialize();
        info!(name = core.name(), project = %project_info(), "Context initialized");
        Ok(Self { core })
    }

    /// Wraps an existing core, initializing it if necessary.
    #[must_use]
    pub fn from_core(mut core: Core) -> Self {
        core.initialize();
        Self { core }
    }

    /// Returns the wrapped core.
    #[inline]
    #[must_use]
    pub const fn core(&self) -> &Core {
        &self.core
    }

    /// Returns the wrapped core mutably.
    #[inline]
    pub fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    /// Returns `true` until [`cleanup`](Self::cleanup) is called.
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.core.is_initialized()
    }

    /// De-initializes the wrapped core.
    pub fn cleanup(&mut self) {
        if self.core.is_initialized() {
            info!(name = self.core.name(), "Context cleaned up");
        }
        self.core.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_rejects_blank_name() {
        assert!(matches!(
            Context::initialize(" "),
            Err(CoreError::InvalidName)
        ));
    }

    #[test]
    fn test_initialize_produces_ready_core() {
        let ctx = Context::initialize("Ready").unwrap();
        assert!(ctx.is_active());
        assert_eq!(ctx.core().process("go").unwrap(), "[Ready] GO");
    }

    #[test]
    fn test_from_core_initializes() {
        let ctx = Context::from_core(Core::default());
        assert!(ctx.is_active());
    }

    #[test]
    fn test_cleanup_twice_is_harmless() {
        let mut ctx = Context::initialize("Twice").unwrap();
        ctx.cleanup();
        ctx.cleanup();
        assert!(!ctx.is_active());
        assert_eq!(ctx.core().process("x"), Err(CoreError::NotInitialized));
    }

    #[test]
    fn test_core_mut_renames_active_core() {
        let mut ctx = Context::initialize("Before").unwrap();
        ctx.core_mut().set_name("Renamed").unwrap();
        assert!(ctx.is_active());
        assert_eq!(ctx.core().process("x").unwrap(), "[Renamed] X");

        assert_eq!(ctx.core_mut().set_name(""), Err(CoreError::InvalidName));
        assert_eq!(ctx.core().name(), "Renamed");
    }

    #[test]
    fn test_independent_contexts() {
        let mut first = Context::initialize("First").unwrap();
        let second = Context::initialize("Second").unwrap();
        first.cleanup();
        assert!(!first.is_active());
        assert!(second.is_active());
    }
}
