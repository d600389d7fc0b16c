//! Demonstration modules built on top of `ks-core`.
//!
//! This crate shows how components depend on each other inside the
//! workspace. It provides:
//!
//! - [`ConfigManager`]: In-memory `key=value` settings with flat-file load/save
//! - [`DataProcessor`]: Mode-driven string transforms reading limits from a shared [`ConfigManager`]
//! - [`ProcessingStats`]: Running success/failure counters for a processor
//! - [`ExampleModule`]: A minimal named module with a process counter
//!
//! # Example
//!
//! ```
//! use ks_modules::{ConfigManager, DataProcessor, ProcessingMode};
//!
//! let config = ConfigManager::shared();
//! let mut processor = DataProcessor::new(config);
//!
//! let result = processor.process_item("hello", ProcessingMode::Simple);
//! assert!(result.success);
//! assert_eq!(result.result, "[SIMPLE] HELLO");
//!
//! let batch = processor.process_batch(&["a", "", "b"], ProcessingMode::Batch);
//! assert_eq!(batch.result, "[BATCH] a, [BATCH] b");
//! assert_eq!(batch.processed_items, 2);
//! ```
//!
//! # Architecture
//!
//! ```text
//! DataProcessor
//!     │
//!     ├── SharedConfig (Arc<RwLock<ConfigManager>>, shared with other owners)
//!     │
//!     └── ProcessingStats (plain counters)
//!
//! ExampleModule ──► ks_core::Version
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

mod config;
mod error;
mod example;
mod processor;
mod stats;

pub use config::{ConfigManager, SharedConfig, parse_entries};
pub use error::ConfigError;
pub use example::ExampleModule;
pub use processor::{DataProcessor, ProcessingMode, ProcessingResult};
pub use stats::ProcessingStats;
