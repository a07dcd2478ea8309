//! HTTP client for service probes.
//!
//! Thin wrapper over a blocking reqwest client with a bounded timeout, so
//! one unreachable dependency cannot stall the run past its budget.

use reqwest::blocking::{Client, RequestBuilder};
use std::time::Duration;

/// Default per-probe HTTP timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

/// Issues bounded HTTP requests for probes.
#[derive(Debug, Clone)]
pub struct ProbeClient {
    client: Client,
    timeout: Duration,
}

impl ProbeClient {
    /// Create a client with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent("preflight")
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            timeout,
        }
    }

    /// The configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Start a GET request.
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.client.get(url)
    }
}

impl Default for ProbeClient {
    fn default() -> Self {
        Self::new()
    }
}
