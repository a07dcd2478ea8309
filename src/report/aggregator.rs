//! Run report aggregation.
//!
//! [`RunReport`] owns every result produced during one invocation. Results
//! are appended in check order; grouping by service preserves first-seen
//! order so the rendered report is deterministic even when probes complete
//! out of order. Counts and the readiness verdict are derived once at the
//! end and never persisted; each run is independent.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::result::{Status, ValidationResult};
use crate::sanitize::SecretMasker;

/// Derived counts for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub success: usize,
    pub warning: usize,
    pub error: usize,
}

/// All results of one validation run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// When the run started.
    pub started_at: DateTime<Utc>,
    results: Vec<ValidationResult>,
}

impl RunReport {
    /// Create an empty report stamped with the current time.
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            results: Vec::new(),
        }
    }

    /// Append one result.
    pub fn push(&mut self, result: ValidationResult) {
        self.results.push(result);
    }

    /// Append a batch of results, preserving their order.
    pub fn extend(&mut self, results: impl IntoIterator<Item = ValidationResult>) {
        self.results.extend(results);
    }

    /// All results in check order.
    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    /// Results grouped by service, groups in first-seen order.
    pub fn grouped(&self) -> Vec<(&str, Vec<&ValidationResult>)> {
        let mut groups: Vec<(&str, Vec<&ValidationResult>)> = Vec::new();
        for result in &self.results {
            match groups.iter_mut().find(|(name, _)| *name == result.service) {
                Some((_, members)) => members.push(result),
                None => groups.push((result.service.as_str(), vec![result])),
            }
        }
        groups
    }

    /// Compute total/success/warning/error counts.
    pub fn summary(&self) -> Summary {
        let mut summary = Summary {
            total: self.results.len(),
            success: 0,
            warning: 0,
            error: 0,
        };
        for result in &self.results {
            match result.status {
                Status::Success => summary.success += 1,
                Status::Warning => summary.warning += 1,
                Status::Error => summary.error += 1,
            }
        }
        summary
    }

    /// Readiness verdict: ready iff no Error was recorded.
    ///
    /// Warnings never block: a deployment gate must not fail on optional
    /// configuration or transient capacity findings.
    pub fn is_ready(&self) -> bool {
        self.summary().error == 0
    }

    /// Process exit code for this run: 0 when ready, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_ready() {
            0
        } else {
            1
        }
    }

    /// Return a copy of this report with every message and details field
    /// run through the masker. Applied once before rendering so no output
    /// path can leak a configured secret.
    pub fn masked(&self, masker: &SecretMasker) -> Self {
        Self {
            started_at: self.started_at,
            results: self
                .results
                .iter()
                .map(|r| {
                    let mut masked = r.clone();
                    masked.message = masker.mask(&r.message);
                    masked.details = r.details.as_deref().map(|d| masker.mask(d));
                    masked
                })
                .collect(),
        }
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> RunReport {
        let mut report = RunReport::new();
        report.push(ValidationResult::success("Environment", "OAUTH_CLIENT_ID set"));
        report.push(ValidationResult::error("Environment", "missing DATABASE_URL"));
        report.push(ValidationResult::success("Database", "reachable").with_latency(12));
        report.push(ValidationResult::warning("Features", "no optional features enabled"));
        report
    }

    #[test]
    fn summary_counts_each_status() {
        let summary = sample_report().summary();

        assert_eq!(summary.total, 4);
        assert_eq!(summary.success, 2);
        assert_eq!(summary.warning, 1);
        assert_eq!(summary.error, 1);
    }

    #[test]
    fn grouping_preserves_first_seen_order() {
        let report = sample_report();
        let groups = report.grouped();
        let names: Vec<&str> = groups.iter().map(|(name, _)| *name).collect();

        assert_eq!(names, vec!["Environment", "Database", "Features"]);
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn grouping_merges_interleaved_services() {
        let mut report = RunReport::new();
        report.push(ValidationResult::success("A", "first"));
        report.push(ValidationResult::success("B", "second"));
        report.push(ValidationResult::success("A", "third"));

        let groups = report.grouped();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "A");
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn error_blocks_readiness() {
        let report = sample_report();
        assert!(!report.is_ready());
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn warnings_alone_do_not_block() {
        let mut report = RunReport::new();
        report.push(ValidationResult::success("Database", "reachable"));
        report.push(ValidationResult::warning("Features", "no optional features enabled"));

        assert!(report.is_ready());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn empty_report_is_ready() {
        let report = RunReport::new();
        assert!(report.is_ready());
        assert_eq!(report.summary().total, 0);
    }

    #[test]
    fn masked_replaces_secrets_in_messages_and_details() {
        let mut masker = SecretMasker::new();
        masker.add_secret("sk-live-abc123");

        let mut report = RunReport::new();
        report.push(
            ValidationResult::error("OpenAI", "rejected key sk-live-abc123")
                .with_details("key sk-live-abc123 returned 401"),
        );

        let masked = report.masked(&masker);
        let result = &masked.results()[0];
        assert!(!result.message.contains("sk-live-abc123"));
        assert!(!result.details.as_deref().unwrap().contains("sk-live-abc123"));
    }

    #[test]
    fn masked_preserves_order_and_counts() {
        let masker = SecretMasker::new();
        let report = sample_report();
        let masked = report.masked(&masker);

        assert_eq!(masked.results().len(), report.results().len());
        assert_eq!(masked.summary(), report.summary());
    }
}
