//! Configuration loading.
//!
//! The checker reads configuration from the process environment, optionally
//! layered over an env file supplied with `--env-file`.

pub mod env_file;
pub mod source;

pub use env_file::EnvFileParser;
pub use source::ConfigSource;
