//! Check result types.
//!
//! Every check (an environment rule, a service probe, the feature audit)
//! produces exactly one [`ValidationResult`]. Results carry a service name
//! for grouping, a [`Status`], a short message, and optionally a measured
//! round-trip latency (network probes only) and remediation details.

use serde::Serialize;

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Check passed.
    Success,
    /// Non-fatal finding: optional key unset, rate limit, degraded probe.
    Warning,
    /// Hard failure: missing configuration, unreachable service, bad credentials.
    Error,
}

impl Status {
    /// Whether this status blocks readiness.
    pub fn is_blocking(self) -> bool {
        matches!(self, Status::Error)
    }
}

/// The result of one check.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    /// Subsystem this check belongs to (e.g. "Environment", "Database").
    pub service: String,
    /// Outcome of the check.
    pub status: Status,
    /// Short human-readable outcome.
    pub message: String,
    /// Measured round-trip latency, present only for network probes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    /// Remediation or context text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ValidationResult {
    /// Create a result with the given status.
    pub fn new(service: impl Into<String>, status: Status, message: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            status,
            message: message.into(),
            latency_ms: None,
            details: None,
        }
    }

    /// Create a Success result.
    pub fn success(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(service, Status::Success, message)
    }

    /// Create a Warning result.
    pub fn warning(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(service, Status::Warning, message)
    }

    /// Create an Error result.
    pub fn error(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(service, Status::Error, message)
    }

    /// Attach a measured round-trip latency.
    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = Some(latency_ms);
        self
    }

    /// Attach remediation or context text.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
