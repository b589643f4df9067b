//! Chart adapter: turns catalog records into bar-chart input.
//!
//! A [`ChartSpec`] is backend independent. The TUI draws it with ratatui's
//! `BarChart`, the reports print the same bars as text. The adapter only
//! selects the plotted field, picks colors and formats values.

use crate::model::{FeatureImportance, MetricField, ModelResult};
use serde::{Deserialize, Serialize};

/// Series fill for the without-lag models chart.
pub const WITHOUT_LAG_FILL: &str = "#3B82F6";
/// Series fill for the with-lag models chart.
pub const WITH_LAG_FILL: &str = "#8B5CF6";
/// Legend fill of the comparison R² chart.
pub const COMPARISON_R2_FILL: &str = "#3B82F6";
/// Legend fill of the comparison RMSE chart.
pub const COMPARISON_RMSE_FILL: &str = "#EF4444";
/// Fill for feature-importance bars.
pub const IMPORTANCE_FILL: &str = "#10B981";

/// Format an accuracy metric with four decimals.
#[must_use]
pub fn format_metric(value: f64) -> String {
    format!("{value:.4}")
}

/// Format an importance fraction as a percentage with one decimal.
#[must_use]
pub fn format_importance(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// How bar colors are chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "mode", content = "color")]
pub enum SeriesColor {
    /// Every bar uses its record's own color
    PerRecord,
    /// Every bar uses the same fill
    Fill(String),
}

/// How bar values are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueFormat {
    Metric,
    Percent,
}

impl ValueFormat {
    #[must_use]
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Metric => format_metric(value),
            Self::Percent => format_importance(value),
        }
    }
}

/// A single bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub label: String,
    pub value: f64,
    /// Value formatted for display
    pub text: String,
    /// `#RRGGBB`
    pub color: String,
}

/// Everything a bar-chart renderer needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend: String,
    /// Color shown in the legend
    pub legend_color: String,
    pub format: ValueFormat,
    pub bars: Vec<ChartBar>,
}

impl ChartSpec {
    /// Plot `field` of each model, one bar per record, in input order.
    pub fn from_models<'a>(
        title: &str,
        models: impl IntoIterator<Item = &'a ModelResult>,
        field: MetricField,
        color: &SeriesColor,
    ) -> Self {
        let bars: Vec<ChartBar> = models
            .into_iter()
            .map(|model| {
                let value = model.metric(field);
                ChartBar {
                    label: model.name.clone(),
                    value,
                    text: format_metric(value),
                    color: match color {
                        SeriesColor::PerRecord => model.color.clone(),
                        SeriesColor::Fill(fill) => fill.clone(),
                    },
                }
            })
            .collect();
        let legend_color = match color {
            SeriesColor::PerRecord => bars.first().map(|b| b.color.clone()).unwrap_or_default(),
            SeriesColor::Fill(fill) => fill.clone(),
        };

        Self {
            title: title.to_string(),
            x_label: "Model".to_string(),
            y_label: field.label().to_string(),
            legend: field.label().to_string(),
            legend_color,
            format: ValueFormat::Metric,
            bars,
        }
    }

    /// Like [`from_models`](Self::from_models) but per-record colored with
    /// an explicit legend fill.
    pub fn from_models_with_legend<'a>(
        title: &str,
        models: impl IntoIterator<Item = &'a ModelResult>,
        field: MetricField,
        legend_fill: &str,
    ) -> Self {
        let mut spec = Self::from_models(title, models, field, &SeriesColor::PerRecord);
        spec.legend_color = legend_fill.to_string();
        spec
    }

    /// Plot feature importances as percentages.
    #[must_use]
    pub fn from_importances(title: &str, rows: &[FeatureImportance], fill: &str) -> Self {
        Self {
            title: title.to_string(),
            x_label: "Importance".to_string(),
            y_label: "Feature".to_string(),
            legend: "Importance".to_string(),
            legend_color: fill.to_string(),
            format: ValueFormat::Percent,
            bars: rows
                .iter()
                .map(|row| ChartBar {
                    label: row.feature.clone(),
                    value: row.importance,
                    text: format_importance(row.importance),
                    color: fill.to_string(),
                })
                .collect(),
        }
    }

    /// Non-empty and every value finite.
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        !self.bars.is_empty() && self.bars.iter().all(|b| b.value.is_finite())
    }

    /// Largest bar value, 0.0 for an empty chart.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::filter_by_category;
    use crate::model::{LagCategory, StudyCatalog};

    #[test]
    fn test_formats() {
        assert_eq!(format_metric(0.9121), "0.9121");
        assert_eq!(format_metric(1.0), "1.0000");
        assert_eq!(format_importance(0.5894), "58.9%");
        assert_eq!(format_importance(0.0110), "1.1%");
    }

    #[test]
    fn test_fill_colors_every_bar() {
        let catalog = StudyCatalog::builtin();
        let models = filter_by_category(&catalog.models, LagCategory::WithLag);
        let spec = ChartSpec::from_models(
            "R²",
            models,
            MetricField::R2,
            &SeriesColor::Fill(WITH_LAG_FILL.to_string()),
        );

        assert_eq!(spec.bars.len(), 3);
        assert!(spec.bars.iter().all(|b| b.color == WITH_LAG_FILL));
        assert_eq!(spec.legend_color, WITH_LAG_FILL);
        assert_eq!(spec.bars[0].text, "0.8786");
        assert!(spec.is_renderable());
    }

    #[test]
    fn test_per_record_colors() {
        let catalog = StudyCatalog::builtin();
        let spec = ChartSpec::from_models_with_legend(
            "RMSE",
            &catalog.models,
            MetricField::Rmse,
            COMPARISON_RMSE_FILL,
        );

        let colors: Vec<&str> = spec.bars.iter().map(|b| b.color.as_str()).collect();
        let expected: Vec<&str> = catalog.models.iter().map(|m| m.color.as_str()).collect();
        assert_eq!(colors, expected);
        assert_eq!(spec.legend_color, COMPARISON_RMSE_FILL);
        assert_eq!(spec.y_label, "RMSE");
        assert!((spec.max_value() - 3.5487).abs() < 1e-9);
    }

    #[test]
    fn test_importances_keep_order() {
        let catalog = StudyCatalog::builtin();
        let spec = ChartSpec::from_importances(
            "Top features",
            &catalog.importance_with_lag,
            IMPORTANCE_FILL,
        );
        assert_eq!(spec.format, ValueFormat::Percent);
        assert_eq!(spec.bars[0].label, "temp_maxima_lag_1");
        assert_eq!(spec.bars[0].text, "58.9%");
    }

    #[test]
    fn test_empty_is_not_renderable() {
        let spec = ChartSpec::from_importances("empty", &[], IMPORTANCE_FILL);
        assert!(!spec.is_renderable());
        assert_eq!(spec.max_value(), 0.0);

        let spec = ChartSpec::from_importances(
            "nan",
            &[FeatureImportance::new("x", f64::NAN)],
            IMPORTANCE_FILL,
        );
        assert!(!spec.is_renderable());
    }
}
