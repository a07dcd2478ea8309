//! Error types for preflight operations.
//!
//! This module defines [`PreflightError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PreflightError` for infrastructure failures that abort the run
//!   (an unreadable env file, a broken output stream)
//! - Probe and audit failures are never errors at this level; they are
//!   converted into `ValidationResult`s and reported
//! - Use `anyhow::Error` (via `PreflightError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for preflight operations.
#[derive(Debug, Error)]
pub enum PreflightError {
    /// Environment file not found at the given location.
    #[error("Environment file not found: {path}")]
    EnvFileNotFound { path: PathBuf },

    /// Failed to parse an environment file.
    #[error("Failed to parse env file at {path}: {message}")]
    EnvFileParseError { path: PathBuf, message: String },

    /// Failed to write the report to the output stream.
    #[error("Failed to write report: {0}")]
    ReportWriteError(#[source] std::io::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for preflight operations.
pub type Result<T> = std::result::Result<T, PreflightError>;
