//! Non-interactive renderings of dashboard views.
//!
//! Every format consumes the same [`ReportSection`]s, built from the view
//! controller, so a report always shows exactly what the TUI would:
//! - Summary: aligned plain text for terminals and pipes
//! - JSON: structured data with tool metadata
//! - Markdown: tables for documentation

pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata, ReportSection};

use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),

    #[error("Nothing to report")]
    Empty,
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report for the given sections
    fn generate(
        &self,
        sections: &[ReportSection],
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_report(
        &self,
        sections: &[ReportSection],
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate(sections, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator with color control.
///
/// `Auto` and `Tui` fall back to the summary; the caller decides whether a
/// terminal UI is started instead.
#[must_use]
pub fn create_reporter(format: ReportFormat, use_color: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Tui | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

/// Render a text bar of `width` cells for `value` out of `max`.
pub(crate) fn text_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 && value.is_finite() && value > 0.0 {
        ((value / max).min(1.0) * width as f64).round() as usize
    } else {
        0
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StudyCatalog;
    use crate::view::Dashboard;

    #[test]
    fn test_text_bar() {
        assert_eq!(text_bar(0.5, 1.0, 4), "██░░");
        assert_eq!(text_bar(2.0, 1.0, 3), "███");
        assert_eq!(text_bar(-1.0, 1.0, 2), "░░");
        assert_eq!(text_bar(1.0, 0.0, 2), "░░");
    }

    #[test]
    fn test_create_reporter_formats() {
        assert_eq!(create_reporter(ReportFormat::Auto, true).format(), ReportFormat::Summary);
        assert_eq!(create_reporter(ReportFormat::Json, true).format(), ReportFormat::Json);
        assert_eq!(
            create_reporter(ReportFormat::Markdown, false).format(),
            ReportFormat::Markdown
        );
    }

    #[test]
    fn test_write_report_to_buffer() {
        let catalog = StudyCatalog::builtin();
        let dashboard = Dashboard::new(&catalog);
        let sections = ReportSection::collect(&dashboard, false);

        let mut buf = Vec::new();
        SummaryReporter::new()
            .no_color()
            .write_report(&sections, &ReportConfig::default(), &mut buf)
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Overview"));
    }

    #[test]
    fn test_collect_unknown_selection() {
        let catalog = StudyCatalog::builtin();
        let mut dashboard = Dashboard::new(&catalog);
        dashboard.select_tab("forecast");

        let sections = ReportSection::collect(&dashboard, false);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].id, "forecast");
        assert!(sections[0].content.is_not_found());

        let sections = ReportSection::collect(&dashboard, true);
        assert_eq!(sections.len(), 7);
    }
}
