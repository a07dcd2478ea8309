//! Feature flag audit.
//!
//! Optional boolean capabilities are reported, never enforced: a run with
//! zero enabled features gets a Warning nudging toward useful defaults, and
//! anything else is a Success stating the count. The flag audit cannot
//! produce an Error.

use crate::config::ConfigSource;
use crate::report::ValidationResult;

/// Service name used for the feature audit result.
pub const SERVICE: &str = "Features";

/// Known capability flags, in display order.
pub const FLAGS: &[&str] = &[
    "ENABLE_RAG",
    "ENABLE_GRAPH_MEMORY",
    "ENABLE_EMAIL_INGEST",
    "ENABLE_WEB_SEARCH",
];

/// Values accepted as affirmative, case insensitive.
const AFFIRMATIVE: &[&str] = &["1", "true", "yes", "on"];

/// Reports which optional capabilities are enabled.
pub struct FeatureFlagAuditor;

impl FeatureFlagAuditor {
    /// Inspect all known flags and produce the single audit result.
    pub fn audit(source: &ConfigSource) -> ValidationResult {
        let enabled: Vec<&str> = FLAGS
            .iter()
            .copied()
            .filter(|flag| is_enabled(source, flag))
            .collect();

        if enabled.is_empty() {
            ValidationResult::warning(SERVICE, "no optional features enabled").with_details(
                format!("Consider enabling {} for richer behavior", FLAGS[0]),
            )
        } else {
            ValidationResult::success(
                SERVICE,
                format!("{} of {} features enabled", enabled.len(), FLAGS.len()),
            )
            .with_details(enabled.join(", "))
        }
    }
}

/// Whether a flag is set to an affirmative value.
fn is_enabled(source: &ConfigSource, flag: &str) -> bool {
    source
        .get(flag)
        .map(|value| AFFIRMATIVE.contains(&value.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
