//! **A terminal dashboard for a weather-prediction model benchmark study.**
//!
//! `wxbench` presents the results of a study that trained Random Forest,
//! Gradient Boosting and Support Vector Regression models on daily weather
//! station data, with and without lagged features. Every number is a fixed
//! value from the study; the library organizes those values into tabs,
//! derives aggregates and rankings from them, and renders them either as an
//! interactive ratatui dashboard or as summary, JSON or Markdown reports.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the data contracts and the immutable [`StudyCatalog`]
//!   holding every table the dashboard shows.
//! - **[`analysis`]**: pure derivations over the catalog: category
//!   filters, means, best models, rankings and the effect of lag features.
//! - **[`chart`]**: the chart adapter turning records into [`chart::ChartSpec`]s
//!   with 4-decimal metric and 1-decimal percentage labels.
//! - **[`view`]**: the [`Dashboard`] controller. Selecting a tab never
//!   fails; an unknown identifier renders a not-found block.
//! - **[`tui`]** and **[`reports`]**: the two ways a [`view::ViewBlock`] reaches the user.
//!
//! ## Getting Started
//!
//! ```
//! use wxbench::{Dashboard, StudyCatalog};
//! use wxbench::view::ViewBlock;
//!
//! let catalog = StudyCatalog::builtin();
//! let mut dashboard = Dashboard::new(&catalog);
//!
//! dashboard.select_tab("models-with-lag");
//! assert!(matches!(dashboard.render_active_view(), ViewBlock::ModelsWithLag(_)));
//!
//! dashboard.select_tab("forecast");
//! assert!(dashboard.render_active_view().is_not_found());
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `wxbench` library crate. For the
//! command-line tool, see the project's README or run `wxbench --help`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: usize/f64/u16/u64 casts are pervasive in TUI layout math
    // and bar scaling; all values are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // TUI render functions are inherently long; splitting hurts readability
    clippy::too_many_lines,
    clippy::struct_excessive_bools,
    clippy::similar_names
)]

pub mod analysis;
pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod tui;
pub mod view;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ChartConfig, TuiConfig, ViewConfig};
pub use config::{ConfigError, Validatable};
pub use error::{DashboardError, Result};
pub use model::{LagCategory, MetricField, ModelResult, StudyCatalog, TabId};
pub use reports::{ReportFormat, ReportGenerator, ReportSection};
pub use view::{Dashboard, Selection};
