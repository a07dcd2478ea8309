//! Unified status vocabulary for report output.
//!
//! `StatusGlyph` gives each check status a single canonical icon and
//! color, used identically in every display context: unicode glyphs on a
//! TTY, bracketed text when piped or color is disabled.

use super::theme::PreflightTheme;
use crate::report::Status;

/// Canonical status glyphs used across all preflight output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusGlyph {
    /// Check passed.
    Success,
    /// Non-fatal finding.
    Warning,
    /// Hard failure.
    Error,
}

impl StatusGlyph {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Error => "✗",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Success => "[ok]",
            Self::Warning => "[warn]",
            Self::Error => "[FAIL]",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &PreflightTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
            Self::Error => theme.error.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &PreflightTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }

    /// Format a status line for non-TTY: bracketed + message.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.bracketed(), msg)
    }
}

impl From<Status> for StatusGlyph {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => Self::Success,
            Status::Warning => Self::Warning,
            Status::Error => Self::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_are_distinct() {
        let icons = [
            StatusGlyph::Success.icon(),
            StatusGlyph::Warning.icon(),
            StatusGlyph::Error.icon(),
        ];
        let mut unique = icons.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), icons.len());
    }

    #[test]
    fn bracketed_labels_are_distinct() {
        let labels = [
            StatusGlyph::Success.bracketed(),
            StatusGlyph::Warning.bracketed(),
            StatusGlyph::Error.bracketed(),
        ];
        let mut unique = labels.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), labels.len());
    }

    #[test]
    fn format_includes_icon_and_message() {
        let theme = PreflightTheme::plain();
        let line = StatusGlyph::Success.format(&theme, "Database reachable");
        assert!(line.contains("✓"));
        assert!(line.contains("Database reachable"));
    }

    #[test]
    fn format_plain_uses_brackets() {
        assert_eq!(
            StatusGlyph::Error.format_plain("invalid credentials"),
            "[FAIL] invalid credentials"
        );
    }

    #[test]
    fn converts_from_status() {
        assert_eq!(StatusGlyph::from(Status::Success), StatusGlyph::Success);
        assert_eq!(StatusGlyph::from(Status::Warning), StatusGlyph::Warning);
        assert_eq!(StatusGlyph::from(Status::Error), StatusGlyph::Error);
    }
}
