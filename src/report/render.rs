//! Report formatters.
//!
//! The full report is always rendered, pass or fail: the run never aborts
//! early, and operators need the complete picture to fix several findings
//! in one pass. Human output groups lines by service with status glyphs; a
//! JSON formatter serves the `--json` flag. The machine-readable contract
//! for deployment gates remains the exit code, not the printed text.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::aggregator::{RunReport, Summary};
use super::result::ValidationResult;
use crate::ui::{PreflightTheme, StatusGlyph};

/// Formats a run report to a writer.
pub trait ReportFormatter {
    /// Render the report.
    fn format<W: Write>(&self, report: &RunReport, writer: &mut W) -> std::io::Result<()>;
}

/// Human-readable grouped output.
pub struct HumanFormatter {
    theme: PreflightTheme,
    /// Bracketed labels instead of unicode glyphs (non-TTY, --no-color).
    plain: bool,
    /// Only the summary and verdict lines.
    quiet: bool,
}

impl HumanFormatter {
    /// Create a formatter.
    pub fn new(theme: PreflightTheme, plain: bool, quiet: bool) -> Self {
        Self {
            theme,
            plain,
            quiet,
        }
    }

    fn status_line(&self, result: &ValidationResult) -> String {
        let glyph = StatusGlyph::from(result.status);
        let mut message = result.message.clone();
        if let Some(latency) = result.latency_ms {
            message.push_str(&format!(
                " {}",
                self.theme.duration.apply_to(format!("({latency}ms)"))
            ));
        }
        if self.plain {
            glyph.format_plain(&message)
        } else {
            glyph.format(&self.theme, &message)
        }
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &RunReport, writer: &mut W) -> std::io::Result<()> {
        if !self.quiet {
            for (service, results) in report.grouped() {
                writeln!(writer, "{}", self.theme.format_header(service))?;
                for result in results {
                    writeln!(writer, "  {}", self.status_line(result))?;
                    if let Some(details) = &result.details {
                        writeln!(writer, "    {}", self.theme.dim.apply_to(details))?;
                    }
                }
                writeln!(writer)?;
            }
        }

        let summary = report.summary();
        writeln!(
            writer,
            "{} passed, {} warnings, {} failed ({} checks)",
            summary.success, summary.warning, summary.error, summary.total
        )?;

        let verdict = if report.is_ready() {
            self.theme
                .success
                .apply_to("Ready for deployment")
                .to_string()
        } else {
            self.theme
                .error
                .apply_to("Not ready for deployment")
                .to_string()
        };
        writeln!(writer, "{verdict}")?;

        Ok(())
    }
}

/// Machine-readable JSON output.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonReport<'a> {
    started_at: DateTime<Utc>,
    results: &'a [ValidationResult],
    summary: Summary,
    ready: bool,
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &RunReport, writer: &mut W) -> std::io::Result<()> {
        let json = JsonReport {
            started_at: report.started_at,
            results: report.results(),
            summary: report.summary(),
            ready: report.is_ready(),
        };
        serde_json::to_writer_pretty(&mut *writer, &json)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> RunReport {
        let mut report = RunReport::new();
        report.push(ValidationResult::success("Environment", "OAUTH_CLIENT_ID set"));
        report.push(
            ValidationResult::error("Environment", "missing required variable DATABASE_URL")
                .with_details("Set DATABASE_URL (relational database connection string)"),
        );
        report.push(ValidationResult::success("Database", "reachable").with_latency(12));
        report.push(ValidationResult::warning("Features", "no optional features enabled"));
        report
    }

    fn render_human(report: &RunReport, plain: bool, quiet: bool) -> String {
        let formatter = HumanFormatter::new(PreflightTheme::plain(), plain, quiet);
        let mut buffer = Vec::new();
        formatter.format(report, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn groups_by_service_with_headers() {
        let output = render_human(&sample_report(), false, false);

        let env_pos = output.find("Environment").unwrap();
        let db_pos = output.find("Database").unwrap();
        assert!(env_pos < db_pos);
    }

    #[test]
    fn plain_mode_uses_bracketed_labels() {
        let output = render_human(&sample_report(), true, false);

        assert!(output.contains("[ok] OAUTH_CLIENT_ID set"));
        assert!(output.contains("[FAIL] missing required variable DATABASE_URL"));
        assert!(output.contains("[warn] no optional features enabled"));
    }

    #[test]
    fn glyph_mode_uses_unicode() {
        let output = render_human(&sample_report(), false, false);

        assert!(output.contains("✓"));
        assert!(output.contains("✗"));
    }

    #[test]
    fn latency_is_shown_for_probes() {
        let output = render_human(&sample_report(), true, false);
        assert!(output.contains("(12ms)"));
    }

    #[test]
    fn details_are_indented_below_the_line() {
        let output = render_human(&sample_report(), true, false);
        assert!(output.contains("    Set DATABASE_URL"));
    }

    #[test]
    fn summary_counts_and_verdict() {
        let output = render_human(&sample_report(), true, false);

        assert!(output.contains("2 passed, 1 warnings, 1 failed (4 checks)"));
        assert!(output.contains("Not ready for deployment"));
    }

    #[test]
    fn ready_verdict_without_errors() {
        let mut report = RunReport::new();
        report.push(ValidationResult::success("Database", "reachable"));
        report.push(ValidationResult::warning("Features", "no optional features enabled"));

        let output = render_human(&report, true, false);
        assert!(output.contains("Ready for deployment"));
    }

    #[test]
    fn quiet_mode_prints_only_summary_and_verdict() {
        let output = render_human(&sample_report(), true, true);

        assert!(!output.contains("[ok]"));
        assert!(output.contains("4 checks"));
        assert!(output.contains("Not ready"));
    }

    #[test]
    fn json_output_parses_and_carries_statuses() {
        let formatter = JsonFormatter;
        let mut buffer = Vec::new();
        formatter.format(&sample_report(), &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["ready"], false);
        assert_eq!(value["summary"]["error"], 1);
        let results = value["results"].as_array().unwrap();
        assert_eq!(results.len(), 4);
        assert_eq!(results[0]["status"], "success");
        assert_eq!(results[1]["status"], "error");
        assert_eq!(results[3]["status"], "warning");
    }

    #[test]
    fn json_probe_results_carry_latency() {
        let formatter = JsonFormatter;
        let mut buffer = Vec::new();
        formatter.format(&sample_report(), &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["results"][2]["latency_ms"], 12);
        assert!(value["results"][0].get("latency_ms").is_none());
    }
}
