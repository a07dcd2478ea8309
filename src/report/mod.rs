//! Result aggregation and rendering.
//!
//! - [`result`] - `Status` and `ValidationResult` types
//! - [`aggregator`] - `RunReport`: ordering, grouping, counts, verdict
//! - [`render`] - Human and JSON formatters

pub mod aggregator;
pub mod render;
pub mod result;

pub use aggregator::{RunReport, Summary};
pub use render::{HumanFormatter, JsonFormatter, ReportFormatter};
pub use result::{Status, ValidationResult};
