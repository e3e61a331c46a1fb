//! Aggregate statistics for batch report parsing
//!
//! Tracks how many reports parsed cleanly across a batch run and keeps the
//! diagnostic messages for the ones that did not.

use serde::{Deserialize, Serialize};

/// Statistics for a batch of parsed reports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchStats {
    /// Total number of reports processed
    pub reports_processed: usize,

    /// Reports that parsed without a terminal error
    pub reports_ok: usize,

    /// Reports that ended with a terminal error
    pub reports_with_errors: usize,

    /// Files that could not be read at all
    pub files_failed: usize,

    /// Diagnostic messages for failed reports and files
    pub errors: Vec<String>,
}

impl BatchStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            reports_processed: 0,
            reports_ok: 0,
            reports_with_errors: 0,
            files_failed: 0,
            errors: Vec::new(),
        }
    }

    /// Record one parsed report
    pub fn record_report(&mut self, ok: bool) {
        self.reports_processed += 1;
        if ok {
            self.reports_ok += 1;
        } else {
            self.reports_with_errors += 1;
        }
    }

    /// Record a file that could not be read
    pub fn record_failed_file(&mut self, message: impl Into<String>) {
        self.files_failed += 1;
        self.errors.push(message.into());
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.reports_processed == 0 {
            0.0
        } else {
            (self.reports_ok as f64 / self.reports_processed as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }
}

impl Default for BatchStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_rate() {
        let mut stats = BatchStats::new();
        assert_eq!(stats.success_rate(), 0.0);
        for _ in 0..9 {
            stats.record_report(true);
        }
        stats.record_report(false);
        assert!((stats.success_rate() - 90.0).abs() < 0.001);
        assert!(!stats.is_successful());
        stats.record_report(true);
        assert!(stats.is_successful());
    }

    #[test]
    fn test_failed_files_tracked_separately() {
        let mut stats = BatchStats::new();
        stats.record_failed_file("unreadable");
        assert_eq!(stats.files_failed, 1);
        assert_eq!(stats.reports_processed, 0);
        assert_eq!(stats.errors.len(), 1);
    }
}
