//! View command handler.
//!
//! Implements the `view` subcommand: open the dashboard on a tab, either
//! interactively or as a one-shot report.

use crate::config::{AppConfig, TuiPreferences, Validatable, DEFAULT_THEME};
use crate::model::{StudyCatalog, TabId};
use crate::pipeline::{
    auto_detect_format, exit_codes, output_report, should_use_color, OutputTarget, ReportRequest,
};
use crate::reports::ReportFormat;
use crate::tui::{run_dashboard_tui, set_theme, DashboardApp, Theme};
use crate::view::Dashboard;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Per-invocation options that are not part of the config file.
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    pub output_file: Option<PathBuf>,
    /// Report every tab instead of the selected one
    pub all: bool,
    pub no_color: bool,
    pub quiet: bool,
}

/// Run the view command
pub fn run_view(config: &AppConfig, options: &ViewOptions) -> Result<i32> {
    for problem in config.validate() {
        tracing::warn!("Config: {problem}");
    }

    let catalog = StudyCatalog::builtin();
    catalog
        .validate()
        .context("built-in study catalog is malformed")?;

    let mut dashboard = Dashboard::new(&catalog);
    if let Some(tab) = &config.view.initial_tab {
        if TabId::from_id(tab).is_none() {
            tracing::warn!("Unknown tab '{tab}', showing the not-found view");
        }
        dashboard.select_tab(tab);
    }

    let target = OutputTarget::from_option(options.output_file.clone());
    let format = auto_detect_format(config.view.output, &target);

    if format == ReportFormat::Tui {
        set_theme(Theme::from_name(&resolve_theme(
            &config.tui.theme,
            &TuiPreferences::load(),
        )));

        let mut app = DashboardApp::new(dashboard)
            .with_icons(config.tui.show_icons)
            .with_mouse(config.tui.mouse_enabled)
            .with_charts(config.charts);
        run_dashboard_tui(&mut app, config.tui.tick_rate_ms)
            .context("terminal dashboard failed")?;
    } else {
        let request = ReportRequest {
            format,
            all: options.all,
            use_color: should_use_color(options.no_color) && target.is_terminal(),
        };
        output_report(&dashboard, &request, &target, options.quiet)?;
    }

    Ok(exit_codes::SUCCESS)
}

/// Pick the startup theme.
///
/// A theme set in the config file wins; otherwise the theme last chosen
/// with `T` in the dashboard is restored.
#[must_use]
pub fn resolve_theme(configured: &str, prefs: &TuiPreferences) -> String {
    if configured == DEFAULT_THEME {
        prefs.theme.clone()
    } else {
        configured.to_string()
    }
}
