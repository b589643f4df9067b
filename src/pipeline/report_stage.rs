//! Report output stage.

use crate::error::DashboardError;
use crate::reports::{create_reporter, ReportConfig, ReportFormat, ReportMetadata, ReportSection};
use crate::view::Dashboard;
use anyhow::Result;

use super::{write_output, OutputTarget};

/// What to report and how.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Already resolved; `Auto` and `Tui` render as the summary
    pub format: ReportFormat,
    /// Every tab instead of the selected one
    pub all: bool,
    pub use_color: bool,
}

/// Render the dashboard's selected tab (or every tab) as a report string.
pub fn render_report(dashboard: &Dashboard<'_>, request: &ReportRequest) -> Result<String> {
    let sections = ReportSection::collect(dashboard, request.all);
    let catalog = dashboard.catalog();

    let config = ReportConfig {
        title: Some(catalog.notes.title.clone()),
        metadata: ReportMetadata {
            data_source: Some(format!(
                "{} ({})",
                catalog.dataset.source, catalog.dataset.period
            )),
            selected_tab: (!request.all).then(|| dashboard.selection().id().to_string()),
        },
    };

    tracing::debug!(
        format = %request.format,
        sections = sections.len(),
        "Generating report"
    );

    let reporter = create_reporter(request.format, request.use_color);
    let report = reporter
        .generate(&sections, &config)
        .map_err(|e| DashboardError::report(format!("{} report", reporter.format()), e))?;
    Ok(report)
}

/// Render and write a report to `target`.
pub fn output_report(
    dashboard: &Dashboard<'_>,
    request: &ReportRequest,
    target: &OutputTarget,
    quiet: bool,
) -> Result<()> {
    let report = render_report(dashboard, request)?;
    write_output(&report, target, quiet)
}
