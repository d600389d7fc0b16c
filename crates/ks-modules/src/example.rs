//! A minimal named module.

use ks_core::Version;
use ks_core::utils::string;
use tracing::debug;

/// A named module that reverses its input and counts how often it ran.
///
/// # Examples
///
/// ```
/// use ks_modules::ExampleModule;
///
/// let mut module = ExampleModule::new("Reverser");
/// assert_eq!(module.process_data("hello"), "[Reverser] Processed: olleh");
/// assert_eq!(module.process_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleModule {
    name: String,
    process_count: usize,
}

impl ExampleModule {
    /// Creates a module with a zero process count.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug!(module = %name, "Created module");
        Self {
            name,
            process_count: 0,
        }
    }

    /// Returns the module name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns how many times [`process_data`](Self::process_data) was called.
    #[inline]
    #[must_use]
    pub const fn process_count(&self) -> usize {
        self.process_count
    }

    /// Returns `"[<name>] Processed: <reversed input>"`.
    pub fn process_data(&mut self, input: &str) -> String {
        self.process_count += 1;
        debug!(module = %self.name, count = self.process_count, "Processing data");
        format!("[{}] Processed: {}", self.name, string::reverse(input))
    }

    /// Returns the module's name, process count, and core version as lines.
    #[must_use]
    pub fn statistics(&self) -> Vec<String> {
        vec![
            format!("Module Name: {}", self.name),
            format!("Process Count: {}", self.process_count),
            format!("Core Version: {}", Version::current()),
        ]
    }
}
