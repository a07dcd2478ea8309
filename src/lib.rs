//! Preflight - Environment and service readiness checker.
//!
//! Preflight verifies a deployment's configuration and external service
//! connectivity in one stateless pass: it audits environment variables
//! against a static rule catalog, probes each external dependency with a
//! single bounded network call, reports which optional capabilities are
//! enabled, and renders a grouped report whose exit code gates automated
//! deployments (0 when no Error was recorded, 1 otherwise; warnings never
//! block).
//!
//! # Modules
//!
//! - [`audit`] - Environment and feature-flag audits
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration source and env file parsing
//! - [`error`] - Error types and result aliases
//! - [`probes`] - Bounded service probes and the concurrent runner
//! - [`report`] - Result aggregation and rendering
//! - [`rules`] - Static configuration rule catalog
//! - [`sanitize`] - Failure sanitization and secret masking
//! - [`ui`] - Terminal styling and status glyphs
//!
//! # Example
//!
//! ```
//! use preflight::audit::EnvironmentAuditor;
//! use preflight::config::ConfigSource;
//! use preflight::rules::RuleRegistry;
//!
//! let registry = RuleRegistry::builtin();
//! let source = ConfigSource::from_map(Default::default());
//! let results = EnvironmentAuditor::new(&registry).audit(&source);
//! // One result per registered rule, even with nothing configured.
//! assert_eq!(results.len(), registry.rules().len());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod probes;
pub mod report;
pub mod rules;
pub mod sanitize;
pub mod ui;

pub use error::{PreflightError, Result};
