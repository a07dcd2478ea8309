//! Mail transport probe.
//!
//! Mail is optional, so an unconfigured transport reports a Warning rather
//! than an Error. The probe is still registered so every run produces the
//! same set of checks. When `SMTP_HOST` is set, reachability is measured
//! with a TCP connect like the database probe; SMTP auth is left to the
//! application.

use std::net::{TcpStream, ToSocketAddrs};
use std::time::Instant;

use super::database::CONNECT_TIMEOUT;
use super::Probe;
use super::outcome::transport_failure;
use crate::config::ConfigSource;
use crate::report::ValidationResult;
use crate::sanitize::{classify_io, FailureClass};

/// Service name for mail transport results.
pub const SERVICE: &str = "Mail";

/// Default submission port when `SMTP_PORT` is unset.
const DEFAULT_PORT: u16 = 587;

/// Optional SMTP reachability probe.
pub struct MailProbe {
    host: Option<String>,
    port: u16,
}

impl MailProbe {
    /// Build the probe from the configuration source.
    pub fn from_source(source: &ConfigSource) -> Self {
        Self {
            host: source.get("SMTP_HOST").map(String::from),
            port: source
                .get("SMTP_PORT")
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    /// Build against an explicit host and port. Used by tests.
    pub fn with_target(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: Some(host.into()),
            port,
        }
    }
}

impl Probe for MailProbe {
    fn service(&self) -> &'static str {
        SERVICE
    }

    fn run(&self) -> ValidationResult {
        let Some(host) = &self.host else {
            return ValidationResult::warning(SERVICE, "not configured, probe skipped")
                .with_details("Set SMTP_HOST to enable outbound mail");
        };

        let addr = match (host.as_str(), self.port).to_socket_addrs() {
            Ok(mut addrs) => match addrs.next() {
                Some(addr) => addr,
                None => return transport_failure(SERVICE, FailureClass::Dns),
            },
            Err(_) => return transport_failure(SERVICE, FailureClass::Dns),
        };

        let started = Instant::now();
        match TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT) {
            Ok(_) => ValidationResult::success(SERVICE, "reachable")
                .with_latency(started.elapsed().as_millis() as u64),
            Err(err) => transport_failure(SERVICE, classify_io(&err)),
        }
    }
}
