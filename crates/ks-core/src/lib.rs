//! Core entity, lifecycle context, and utilities for keystone.
//!
//! This crate is the bottom layer of the workspace. Everything else builds
//! on the pieces provided here:
//!
//! - [`Core`] - A named entity that must be initialized before it processes input
//! - [`Context`] - Caller-owned lifecycle handle wrapping an initialized [`Core`]
//! - [`utils`] - Stateless string transforms and validation checks
//! - [`Version`] and [`project_info`] - Build metadata
//! - [`CoreError`] - The error type shared by all of the above
//!
//! # Crate Dependencies
//!
//! ```text
//! ks-cli ──► ks-modules ──► ks-core
//! ```
//!
//! # Example
//!
//! ```
//! use ks_core::{Core, CoreError};
//!
//! let mut core = Core::new("Demo")?;
//! assert!(matches!(core.process("hi"), Err(CoreError::NotInitialized)));
//!
//! core.initialize();
//! assert_eq!(core.process("hi")?, "[Demo] HI");
//! # Ok::<(), CoreError>(())
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

mod context;
mod entity;
mod error;
pub mod utils;
mod version;

pub use context::Context;
pub use entity::Core;
pub use error::CoreError;
pub use version::{PROJECT_NAME, Version, project_info};
