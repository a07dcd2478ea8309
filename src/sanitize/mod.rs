//! Failure sanitization and secret masking.
//!
//! Probe failures must never surface raw upstream error text: reqwest and
//! IO errors routinely embed the URL they were talking to, which for this
//! tool means hostnames, ports, and credential-bearing connection strings.
//! Instead of echoing, transport failures are reduced to a small
//! failure-class vocabulary, and every configured secret value is masked
//! out of any message before display.

use std::collections::HashMap;
use std::io;

/// Class of a transport-level failure, safe to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Hostname did not resolve.
    Dns,
    /// Connection actively refused.
    Refused,
    /// Connect or response deadline exceeded.
    TimedOut,
    /// TLS negotiation failed.
    Tls,
    /// Any other transport failure.
    Transport,
}

impl FailureClass {
    /// Short display form used in probe messages.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Dns => "DNS resolution failed",
            Self::Refused => "connection refused",
            Self::TimedOut => "timed out",
            Self::Tls => "TLS negotiation failed",
            Self::Transport => "network transport failure",
        }
    }
}

/// Classify a reqwest transport error without exposing its text.
///
/// The error's debug representation is inspected for classification only;
/// it is never included in the returned class.
pub fn classify_transport(err: &reqwest::Error) -> FailureClass {
    if err.is_timeout() {
        return FailureClass::TimedOut;
    }
    let text = format!("{err:?}").to_lowercase();
    if text.contains("dns") || text.contains("resolve") {
        FailureClass::Dns
    } else if text.contains("certificate") || text.contains("tls") || text.contains("handshake") {
        FailureClass::Tls
    } else if err.is_connect() {
        FailureClass::Refused
    } else {
        FailureClass::Transport
    }
}

/// Classify an IO error from a raw TCP probe.
pub fn classify_io(err: &io::Error) -> FailureClass {
    match err.kind() {
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => FailureClass::TimedOut,
        io::ErrorKind::ConnectionRefused => FailureClass::Refused,
        _ => FailureClass::Transport,
    }
}

/// Masks configured secret values in report text.
///
/// # Example
///
/// ```
/// use preflight::sanitize::SecretMasker;
///
/// let mut masker = SecretMasker::new();
/// masker.add_secret("super-secret-value");
///
/// let output = masker.mask("upstream said: super-secret-value rejected");
/// assert!(!output.contains("super-secret-value"));
/// ```
pub struct SecretMasker {
    /// Map of secret values to their masked representation.
    secrets: HashMap<String, String>,
    /// The mask string to use.
    mask: String,
}

impl SecretMasker {
    /// Create a new masker with the default mask string.
    pub fn new() -> Self {
        Self {
            secrets: HashMap::new(),
            mask: "[REDACTED]".to_string(),
        }
    }

    /// Register a secret value to be masked. Empty strings are ignored.
    pub fn add_secret(&mut self, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.secrets.insert(value, self.mask.clone());
        }
    }

    /// Register multiple secret values.
    pub fn add_secrets(&mut self, values: impl IntoIterator<Item = impl Into<String>>) {
        for value in values {
            self.add_secret(value);
        }
    }

    /// Mask any registered secret values in the given string.
    pub fn mask(&self, input: &str) -> String {
        let mut result = input.to_string();
        for (secret, mask) in &self.secrets {
            result = result.replace(secret, mask);
        }
        result
    }

    /// Number of registered secrets.
    pub fn secret_count(&self) -> usize {
        self.secrets.len()
    }
}

impl Default for SecretMasker {
    fn default() -> Self {
        Self::new()
    }
}
