//! Shared probe outcome constructors.
//!
//! All probes build their results through this module so status handling
//! stays consistent: one classifier maps HTTP status ranges to statuses,
//! one constructor covers transport failures, one covers missing
//! parameters. No probe carries its own status-code conditionals.

use std::time::Instant;

use reqwest::blocking::RequestBuilder;
use reqwest::StatusCode;

use crate::report::ValidationResult;
use crate::sanitize::{classify_transport, FailureClass};

/// Classify an HTTP response status into a result.
///
/// - 2xx → Success with the measured latency
/// - 401/403 → Error: the service rejected the configured credentials
/// - 429 → Warning: capacity, not misconfiguration
/// - anything else → Error carrying only the numeric status
pub fn classify_response(service: &str, status: StatusCode, latency_ms: u64) -> ValidationResult {
    if status.is_success() {
        ValidationResult::success(service, "reachable").with_latency(latency_ms)
    } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        ValidationResult::error(service, "invalid credentials")
            .with_details("The service rejected the configured credentials")
    } else if status == StatusCode::TOO_MANY_REQUESTS {
        ValidationResult::warning(service, "rate limited")
            .with_details("Quota or rate limit hit; credentials are likely valid")
    } else {
        ValidationResult::error(service, format!("unexpected status {}", status.as_u16()))
    }
}

/// Result for a transport-level failure, carrying only the failure class.
pub fn transport_failure(service: &str, class: FailureClass) -> ValidationResult {
    ValidationResult::error(service, class.describe())
}

/// Send a prepared request and classify whatever comes back.
///
/// Measures round-trip latency, maps response statuses through
/// [`classify_response`], and reduces transport errors to their failure
/// class. Never panics and never returns an `Err`: every outcome is a
/// result.
pub fn send_classified(service: &str, request: RequestBuilder) -> ValidationResult {
    let started = Instant::now();
    match request.send() {
        Ok(response) => classify_response(
            service,
            response.status(),
            started.elapsed().as_millis() as u64,
        ),
        Err(err) => transport_failure(service, classify_transport(&err)),
    }
}

/// Result for a probe whose required parameters are absent.
///
/// No network call is attempted; the environment audit reports the
/// per-key findings, this records that the probe could not run.
pub fn missing_parameters(service: &str, keys: &[&str]) -> ValidationResult {
    ValidationResult::error(service, "not configured, probe skipped")
        .with_details(format!("Requires {}", keys.join(", ")))
}
