//! Report type definitions.

use crate::model::TabDescriptor;
use crate::view::{Dashboard, ViewBlock};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for the `view` command
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: TUI if TTY, summary otherwise
    #[default]
    Auto,
    /// Interactive TUI display
    Tui,
    /// Aligned plain-text summary
    Summary,
    /// Structured JSON output
    Json,
    /// Human-readable Markdown
    #[value(alias = "md")]
    #[serde(alias = "md")]
    Markdown,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Tui => write!(f, "tui"),
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// One tab's worth of report content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection {
    /// Selected identifier, which may name no tab
    pub id: String,
    pub name: String,
    pub icon: String,
    pub content: ViewBlock,
}

impl ReportSection {
    fn new(descriptor: Option<&TabDescriptor>, id: &str, content: ViewBlock) -> Self {
        match descriptor {
            Some(d) => Self {
                id: d.id.as_str().to_string(),
                name: d.name.clone(),
                icon: d.icon.clone(),
                content,
            },
            None => Self {
                id: id.to_string(),
                name: "Not found".to_string(),
                icon: "❓".to_string(),
                content,
            },
        }
    }

    /// Sections for the current selection, or for every tab when `all`.
    #[must_use]
    pub fn collect(dashboard: &Dashboard<'_>, all: bool) -> Vec<Self> {
        let catalog = dashboard.catalog();
        if all {
            return catalog
                .tabs
                .iter()
                .zip(dashboard.render_all())
                .map(|(d, block)| Self::new(Some(d), d.id.as_str(), block))
                .collect();
        }

        let block = dashboard.render_active_view();
        let descriptor = block.tab().and_then(|tab| catalog.tab(tab));
        vec![Self::new(descriptor, dashboard.selection().id(), block)]
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report; defaults to the study title
    pub title: Option<String>,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Where the displayed results came from
    pub data_source: Option<String>,
    /// The identifier that was selected, when a single tab is reported
    pub selected_tab: Option<String>,
}
