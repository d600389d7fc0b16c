//! Stateless string and validation helpers.
//!
//! # Module Organization
//!
//! - [`string`] - Case conversion, split/join, trim, reverse
//! - [`validation`] - Blank, alphanumeric, and email format checks
//!
//! All functions are pure and allocate only for their return values.
//!
//! ```
//! use ks_core::utils::{string, validation};
//!
//! assert_eq!(string::split("a,b,c", ','), vec!["a", "b", "c"]);
//! assert_eq!(string::join(&["a", "b", "c"], ","), "a,b,c");
//! assert!(validation::is_valid_email("test@example.com"));
//! ```

pub mod string;
pub mod validation;
