//! Unified error types for wxbench.
//!
//! Selecting a tab can never fail, so the hierarchy only covers the
//! places where something outside the controller can go wrong: a
//! malformed catalog, a failing reporter, or a report file that cannot be
//! written.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for wxbench operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DashboardError {
    /// The study catalog failed its well-formedness checks
    #[error("Invalid study catalog: {context}")]
    Catalog {
        context: String,
        #[source]
        source: CatalogErrorKind,
    },

    /// A reporter could not render the requested sections
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: crate::reports::ReportError,
    },

    /// Writing a report to a file failed
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Specific catalog error kinds
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CatalogErrorKind {
    #[error("table '{0}' is empty")]
    EmptyTable(&'static str),

    #[error("no model results in category '{0}'")]
    EmptyCategory(&'static str),

    #[error("importance of '{feature}' is {value}, expected 0.0-1.0")]
    ImportanceOutOfRange { feature: String, value: f64 },

    #[error("importances in '{table}' are not sorted descending at '{feature}'")]
    ImportanceNotSorted { table: &'static str, feature: String },

    #[error("importances in '{table}' sum to {sum:.4}, expected at most 1.0")]
    ImportanceSumExceeded { table: &'static str, sum: f64 },

    #[error("correlation {var_a} <-> {var_b} is {value}, expected -1.0-1.0")]
    CorrelationOutOfRange {
        var_a: String,
        var_b: String,
        value: f64,
    },

    #[error("expected {expected} tabs, found {found}")]
    TabCount { expected: usize, found: usize },

    #[error("duplicate tab identifier '{0}'")]
    DuplicateTab(String),

    #[error("model '{model}' has color '{color}', expected #RRGGBB")]
    InvalidColor { model: String, color: String },

    #[error("model '{model}' has a non-finite or negative metric")]
    InvalidMetric { model: String },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for wxbench operations
pub type Result<T> = std::result::Result<T, DashboardError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl DashboardError {
    /// Create a catalog error with context
    pub fn catalog(context: impl Into<String>, source: CatalogErrorKind) -> Self {
        Self::Catalog {
            context: context.into(),
            source,
        }
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: crate::reports::ReportError) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error for the file at `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
