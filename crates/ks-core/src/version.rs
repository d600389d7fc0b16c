//! Project name and version metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The project name reported by [`project_info`] and used by [`Core::default`](crate::Core).
pub const PROJECT_NAME: &str = "keystone";

/// A semantic version triple.
///
/// # Examples
///
/// ```
/// use ks_core::Version;
///
/// let version = Version::new(1, 2, 3);
/// assert_eq!(version.to_string(), "1.2.3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version {
    /// Major version.
    pub major: u32,
    /// Minor version.
    pub minor: u32,
    /// Patch version.
    pub patch: u32,
}

impl Version {
    /// Creates a version from its three components.
    #[inline]
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Returns the version of this crate as set in the workspace manifest.
    #[must_use]
    pub fn current() -> Self {
        Self {
            major: env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap_or(0),
            minor: env!("CARGO_PKG_VERSION_MINOR").parse().unwrap_or(0),
            patch: env!("CARGO_PKG_VERSION_PATCH").parse().unwrap_or(0),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Returns `"<project> v<version>"`.
///
/// # Examples
///
/// ```
/// let info = ks_core::project_info();
/// assert!(info.starts_with("keystone v"));
/// ```
#[must_use]
pub fn project_info() -> String {
    format!("{PROJECT_NAME} v{}", Version::current())
}
