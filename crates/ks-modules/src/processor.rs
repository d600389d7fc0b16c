//! Mode-driven string processing.
//!
//! A [`DataProcessor`] applies one of the [`ProcessingMode`] transforms to a
//! single item or a batch, reading its batch limit from a shared
//! [`ConfigManager`](crate::ConfigManager). Failures never escape as errors:
//! they are reported through [`ProcessingResult::error_message`] and counted
//! in the processor's [`ProcessingStats`].

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use ks_core::utils::string;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::SharedConfig;
use crate::error::ConfigError;
use crate::stats::ProcessingStats;

/// Configuration key holding the maximum batch length.
const BATCH_SIZE_KEY: &str = "processing.batch_size";

/// Batch limit used when [`BATCH_SIZE_KEY`] is unset.
const DEFAULT_BATCH_SIZE: &str = "10";

/// Configuration key holding the default processing mode.
const MODE_KEY: &str = "processing.mode";

/// The transform applied to each input.
///
/// # Examples
///
/// ```
/// use ks_modules::ProcessingMode;
///
/// assert_eq!(ProcessingMode::Simple.apply("abc"), "[SIMPLE] ABC");
/// assert_eq!(ProcessingMode::Advanced.apply("AbC"), "[ADVANCED] cba");
/// assert_eq!(ProcessingMode::Batch.apply("  abc \n"), "[BATCH] abc");
///
/// let mode: ProcessingMode = "Advanced".parse().unwrap();
/// assert_eq!(mode, ProcessingMode::Advanced);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingMode {
    /// Uppercase, prefixed with `[SIMPLE] `.
    #[default]
    Simple,
    /// Reversed and lowercased, prefixed with `[ADVANCED] `.
    Advanced,
    /// Whitespace-trimmed, prefixed with `[BATCH] `.
    Batch,
}

impl ProcessingMode {
    /// All modes, in declaration order.
    pub const ALL: [Self; 3] = [Self::Simple, Self::Advanced, Self::Batch];

    /// Transforms `input` according to this mode.
    #[must_use]
    pub fn apply(self, input: &str) -> String {
        match self {
            Self::Simple => format!("[SIMPLE] {}", string::to_upper(input)),
            Self::Advanced => {
                format!("[ADVANCED] {}", string::to_lower(&string::reverse(input)))
            }
            Self::Batch => format!("[BATCH] {}", string::trim(input)),
        }
    }

    /// Returns the lowercase name used in configuration files.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Advanced => "advanced",
            Self::Batch => "batch",
        }
    }
}

impl fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ProcessingMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "advanced" => Ok(Self::Advanced),
            "batch" => Ok(Self::Batch),
            _ => Err(ConfigError::invalid_value(
                MODE_KEY,
                s,
                "expected one of: simple, advanced, batch",
            )),
        }
    }
}

/// Outcome of a single processing call.
///
/// Returned by value and not retained by the processor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProcessingResult {
    /// Whether the call succeeded.
    pub success: bool,
    /// The transformed output (joined with `", "` for batches).
    pub result: String,
    /// Why the call failed; empty on success.
    pub error_message: String,
    /// Number of inputs that were transformed.
    pub processed_items: usize,
}

impl ProcessingResult {
    /// Creates a successful result.
    #[must_use]
    pub fn ok(result: String, processed_items: usize) -> Self {
        Self {
            success: true,
            result,
            error_message: String::new(),
            processed_items,
        }
    }

    /// Creates a failed result with the given message.
    #[must_use]
    pub fn failed(error_message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: String::new(),
            error_message: error_message.into(),
            processed_items: 0,
        }
    }
}

/// Applies [`ProcessingMode`] transforms and tracks success/failure counts.
///
/// The processor holds a [`SharedConfig`] handle; the same manager can be
/// read and updated by other owners, and the processor sees their changes on
/// its next call.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use ks_modules::{ConfigManager, DataProcessor, ProcessingMode};
///
/// let config = ConfigManager::shared();
/// config.write().set_value("processing.batch_size", "2");
///
/// let mut processor = DataProcessor::new(Arc::clone(&config));
/// let result = processor.process_batch(&["a", "b", "c"], ProcessingMode::Simple);
/// assert!(!result.success);
/// assert_eq!(result.error_message, "Batch size exceeds configured limit of 2");
/// ```
#[derive(Debug)]
pub struct DataProcessor {
    config: SharedConfig,
    stats: ProcessingStats,
}

impl DataProcessor {
    /// Creates a processor reading its settings from `config`.
    #[must_use]
    pub fn new(config: SharedConfig) -> Self {
        Self {
            config,
            stats: ProcessingStats::new(),
        }
    }

    /// Returns a new handle to the shared configuration.
    #[must_use]
    pub fn config(&self) -> SharedConfig {
        Arc::clone(&self.config)
    }

    /// Transforms a single non-empty input.
    ///
    /// An empty input yields a failed result and increments the failure
    /// counter.
    pub fn process_item(&mut self, input: &str, mode: ProcessingMode) -> ProcessingResult {
        if input.is_empty() {
            self.stats.record_failure();
            debug!(%mode, "Rejected empty input");
            return ProcessingResult::failed("Input cannot be empty");
        }

        let output = mode.apply(input);
        self.stats.record_success(1);
        debug!(%mode, "Processed item");
        ProcessingResult::ok(output, 1)
    }

    /// Transforms every non-empty input and joins the outputs with `", "`.
    ///
    /// Fails if `processing.batch_size` is not a non-negative integer or if
    /// `inputs` is longer than it. Empty inputs are skipped and not counted.
    pub fn process_batch<S: AsRef<str>>(
        &mut self,
        inputs: &[S],
        mode: ProcessingMode,
    ) -> ProcessingResult {
        let limit = match self.batch_size() {
            Ok(limit) => limit,
            Err(e) => {
                self.stats.record_failure();
                warn!(error = %e, "Invalid batch size configuration");
                return ProcessingResult::failed(e.to_string());
            }
        };

        if inputs.len() > limit {
            self.stats.record_failure();
            warn!(len = inputs.len(), limit, "Batch rejected");
            return ProcessingResult::failed(format!(
                "Batch size exceeds configured limit of {limit}"
            ));
        }

        let outputs: Vec<String> = inputs
            .iter()
            .map(|input| input.as_ref())
            .filter(|input| !input.is_empty())
            .map(|input| mode.apply(input))
            .collect();

        let count = outputs.len();
        self.stats.record_success(count as u64);
        debug!(%mode, count, skipped = inputs.len() - count, "Processed batch");
        ProcessingResult::ok(string::join(&outputs, ", "), count)
    }

    /// Stores `value` under `processing.<key>` in the shared configuration.
    pub fn set_processing_config(&self, key: &str, value: impl Into<String>) {
        self.config.write().set_value(format!("processing.{key}"), value);
    }

    /// Returns the mode named by `processing.mode`, or
    /// [`ProcessingMode::Simple`] if it is unset or unrecognized.
    #[must_use]
    pub fn default_mode(&self) -> ProcessingMode {
        self.config
            .read()
            .get(MODE_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    /// Returns the configured batch limit.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the stored value is not a
    /// non-negative integer.
    pub fn batch_size(&self) -> Result<usize, ConfigError> {
        self.config
            .read()
            .get_parsed(BATCH_SIZE_KEY, DEFAULT_BATCH_SIZE)
    }

    /// Returns a snapshot of the counters.
    #[inline]
    #[must_use]
    pub const fn statistics(&self) -> ProcessingStats {
        self.stats
    }

    /// Returns the counters formatted as a multi-line report.
    #[must_use]
    pub fn statistics_report(&self) -> String {
        self.stats.to_string()
    }

    /// Resets all counters to zero.
    pub fn reset_statistics(&mut self) {
        self.stats.reset();
    }
}
