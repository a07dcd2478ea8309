//! Terminal output styling.

pub mod icons;
pub mod theme;

pub use icons::StatusGlyph;
pub use theme::{should_use_colors, PreflightTheme};
