//! Processing statistics.
//!
//! [`ProcessingStats`] holds the running counters of a
//! [`DataProcessor`](crate::DataProcessor). It is `Copy`, so callers get a
//! point-in-time snapshot from [`DataProcessor::statistics`](crate::DataProcessor::statistics).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Counters for a data processor.
///
/// # Examples
///
/// ```
/// use ks_modules::ProcessingStats;
///
/// let stats = ProcessingStats {
///     total_processed: 5,
///     successful_operations: 2,
///     failed_operations: 1,
/// };
///
/// assert!((stats.success_rate().unwrap() - 66.67).abs() < 0.01);
/// assert_eq!(ProcessingStats::default().success_rate(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProcessingStats {
    /// Number of items transformed (a batch counts each transformed item).
    pub total_processed: u64,
    /// Number of calls that succeeded.
    pub successful_operations: u64,
    /// Number of calls that failed.
    pub failed_operations: u64,
}

impl ProcessingStats {
    /// Creates a new [`ProcessingStats`] with all counters at zero.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful call that transformed `items` inputs.
    #[inline]
    pub fn record_success(&mut self, items: u64) {
        self.successful_operations += 1;
        self.total_processed += items;
    }

    /// Records a failed call.
    #[inline]
    pub fn record_failure(&mut self) {
        self.failed_operations += 1;
    }

    /// Returns the total number of calls made.
    #[inline]
    #[must_use]
    pub const fn operations(&self) -> u64 {
        self.successful_operations + self.failed_operations
    }

    /// Returns the percentage of calls that succeeded.
    ///
    /// Calculated as `successful / (successful + failed) * 100`. Returns
    /// `None` when no calls have been made.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Acceptable for statistics display
    pub fn success_rate(&self) -> Option<f64> {
        let operations = self.operations();
        if operations == 0 {
            return None;
        }

        Some(self.successful_operations as f64 / operations as f64 * 100.0)
    }

    /// Resets all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for ProcessingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Processing Statistics:")?;
        writeln!(f, "  Total Processed: {}", self.total_processed)?;
        writeln!(f, "  Successful Operations: {}", self.successful_operations)?;
        writeln!(f, "  Failed Operations: {}", self.failed_operations)?;
        match self.success_rate() {
            Some(rate) => write!(f, "  Success Rate: {}%", format_percent(rate)),
            None => write!(f, "  Success Rate: N/A"),
        }
    }
}

/// Formats with at most two decimals, dropping trailing zeros.
fn format_percent(rate: f64) -> String {
    let fixed = format!("{rate:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_reset() {
        let mut stats = ProcessingStats::new();
        stats.record_success(3);
        stats.record_success(1);
        stats.record_failure();

        assert_eq!(stats.total_processed, 4);
        assert_eq!(stats.successful_operations, 2);
        assert_eq!(stats.failed_operations, 1);
        assert_eq!(stats.operations(), 3);

        stats.reset();
        assert_eq!(stats, ProcessingStats::default());
    }

    #[test]
    fn test_success_rate() {
        let mut stats = ProcessingStats::new();
        assert_eq!(stats.success_rate(), None);

        stats.record_failure();
        assert_eq!(stats.success_rate(), Some(0.0));

        stats.record_success(1);
        assert_eq!(stats.success_rate(), Some(50.0));
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(100.0), "100");
        assert_eq!(format_percent(50.0), "50");
        assert_eq!(format_percent(66.666_666), "66.67");
        assert_eq!(format_percent(12.5), "12.5");
        assert_eq!(format_percent(0.0), "0");
    }

    #[test]
    fn test_display_without_operations() {
        insta::assert_snapshot!(ProcessingStats::default().to_string(), @r"
        Processing Statistics:
          Total Processed: 0
          Successful Operations: 0
          Failed Operations: 0
          Success Rate: N/A
        ");
    }

    #[test]
    fn test_display_with_operations() {
        let stats = ProcessingStats {
            total_processed: 7,
            successful_operations: 2,
            failed_operations: 1,
        };
        insta::assert_snapshot!(stats.to_string(), @r"
        Processing Statistics:
          Total Processed: 7
          Successful Operations: 2
          Failed Operations: 1
          Success Rate: 66.67%
        ");
    }
}
