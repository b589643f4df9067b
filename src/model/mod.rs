//! Data contracts for the benchmark study.
//!
//! Every record here is an immutable literal owned by a [`StudyCatalog`].
//! The catalog is built once at startup and handed to the view controller
//! by reference; nothing in this module is mutated after construction.

mod catalog;
mod tabs;

pub use catalog::{MethodNote, NoteSection, StudyCatalog, StudyNotes};
pub use tabs::{TabDescriptor, TabId};

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Model results
// ============================================================================

/// Whether a model was trained with lagged inputs (values from 1-7 days back).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LagCategory {
    WithoutLag,
    WithLag,
}

impl LagCategory {
    /// Both categories, in display order.
    pub const ALL: [Self; 2] = [Self::WithoutLag, Self::WithLag];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WithoutLag => "Without lag features",
            Self::WithLag => "With lag features",
        }
    }

    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::WithoutLag => "No Lag",
            Self::WithLag => "Lag",
        }
    }
}

impl fmt::Display for LagCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Regression algorithm family of a benchmark entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    RandomForest,
    GradientBoosting,
    Svr,
}

impl Algorithm {
    pub const ALL: [Self; 3] = [Self::RandomForest, Self::GradientBoosting, Self::Svr];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RandomForest => "Random Forest",
            Self::GradientBoosting => "Gradient Boosting",
            Self::Svr => "SVR",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Numeric field of a [`ModelResult`] that a chart or ranking can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricField {
    R2,
    Rmse,
    Mae,
}

impl MetricField {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::R2 => "R² Score",
            Self::Rmse => "RMSE",
            Self::Mae => "MAE",
        }
    }

    /// R² improves upwards, the error metrics downwards.
    #[must_use]
    pub const fn higher_is_better(self) -> bool {
        matches!(self, Self::R2)
    }
}

/// One benchmark entry: an algorithm variant and its accuracy metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResult {
    pub name: String,
    pub algorithm: Algorithm,
    pub rmse: f64,
    pub mae: f64,
    pub r2: f64,
    pub category: LagCategory,
    /// Display color as `#RRGGBB`
    pub color: String,
}

impl ModelResult {
    #[must_use]
    pub fn new(
        algorithm: Algorithm,
        category: LagCategory,
        rmse: f64,
        mae: f64,
        r2: f64,
        color: &str,
    ) -> Self {
        Self {
            name: format!("{} ({})", algorithm.name(), category.short_label()),
            algorithm,
            rmse,
            mae,
            r2,
            category,
            color: color.to_string(),
        }
    }

    #[must_use]
    pub const fn metric(&self, field: MetricField) -> f64 {
        match field {
            MetricField::R2 => self.r2,
            MetricField::Rmse => self.rmse,
            MetricField::Mae => self.mae,
        }
    }
}

// ============================================================================
// Feature importance and correlation
// ============================================================================

/// Contribution score of one input variable, in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
}

impl FeatureImportance {
    #[must_use]
    pub fn new(feature: &str, importance: f64) -> Self {
        Self {
            feature: feature.to_string(),
            importance,
        }
    }
}

/// Pearson correlation between two weather variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPair {
    pub var_a: String,
    pub var_b: String,
    pub coefficient: f64,
}

impl CorrelationPair {
    #[must_use]
    pub fn new(var_a: &str, var_b: &str, coefficient: f64) -> Self {
        Self {
            var_a: var_a.to_string(),
            var_b: var_b.to_string(),
            coefficient,
        }
    }

    #[must_use]
    pub fn strength(&self) -> CorrelationStrength {
        CorrelationStrength::from_coefficient(self.coefficient)
    }
}

/// Strength bucket of a correlation coefficient, by absolute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationStrength {
    Strong,
    Moderate,
    Weak,
}

impl CorrelationStrength {
    #[must_use]
    pub fn from_coefficient(coefficient: f64) -> Self {
        let magnitude = coefficient.abs();
        if magnitude > 0.7 {
            Self::Strong
        } else if magnitude > 0.4 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
        }
    }
}

// ============================================================================
// Interpretability
// ============================================================================

/// Qualitative SHAP importance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapLevel {
    Highest,
    High,
    Medium,
}

impl ShapLevel {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Highest => "Highest",
            Self::High => "High",
            Self::Medium => "Medium",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapRank {
    pub feature: String,
    pub level: ShapLevel,
}

/// A single held-out prediction shown as a worked example.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionExample {
    pub actual_celsius: f64,
    pub predicted_celsius: f64,
}

impl PredictionExample {
    #[must_use]
    pub fn abs_error(&self) -> f64 {
        (self.predicted_celsius - self.actual_celsius).abs()
    }
}

// ============================================================================
// Dataset facts and published summary
// ============================================================================

/// Facts about the weather-station dataset the models were trained on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub source: String,
    pub records: usize,
    pub period: String,
    pub original_features: usize,
    pub lag_features: usize,
    pub lag_days: Vec<u32>,
    /// Train share in percent; the rest is the test split
    pub train_percent: u8,
    pub random_seed: u64,
    pub missing_values: String,
    pub normalization: String,
    pub cross_validation: String,
}

impl DatasetStats {
    #[must_use]
    pub const fn test_percent(&self) -> u8 {
        100 - self.train_percent
    }
}

/// Category means as printed by the study write-up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PublishedMeans {
    pub r2: f64,
    pub rmse: f64,
}

/// The write-up's summary figures, kept to detect drift from the table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PublishedSummary {
    pub without_lag: PublishedMeans,
    pub with_lag: PublishedMeans,
}

impl PublishedSummary {
    #[must_use]
    pub const fn for_category(&self, category: LagCategory) -> PublishedMeans {
        match category {
            LagCategory::WithoutLag => self.without_lag,
            LagCategory::WithLag => self.with_lag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_name_includes_category() {
        let m = ModelResult::new(
            Algorithm::Svr,
            LagCategory::WithLag,
            3.5256,
            2.7268,
            0.0983,
            "#D55E00",
        );
        assert_eq!(m.name, "SVR (Lag)");
        assert_eq!(m.metric(MetricField::Mae), 2.7268);
    }

    #[test]
    fn test_correlation_strength_thresholds() {
        assert_eq!(
            CorrelationStrength::from_coefficient(0.95),
            CorrelationStrength::Strong
        );
        assert_eq!(
            CorrelationStrength::from_coefficient(-0.71),
            CorrelationStrength::Strong
        );
        // Thresholds are strict
        assert_eq!(
            CorrelationStrength::from_coefficient(0.7),
            CorrelationStrength::Moderate
        );
        assert_eq!(
            CorrelationStrength::from_coefficient(0.4),
            CorrelationStrength::Weak
        );
        assert_eq!(
            CorrelationStrength::from_coefficient(-0.15),
            CorrelationStrength::Weak
        );
    }

    #[test]
    fn test_prediction_error() {
        let example = PredictionExample {
            actual_celsius: 33.20,
            predicted_celsius: 33.65,
        };
        assert!((example.abs_error() - 0.45).abs() < 1e-9);
    }

    #[test]
    fn test_category_serde_names() {
        let json = serde_json::to_string(&LagCategory::WithoutLag).unwrap();
        assert_eq!(json, "\"without-lag\"");
    }
}
