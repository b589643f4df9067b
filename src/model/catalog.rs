//! The built-in study catalog and its well-formedness checks.

use super::{
    Algorithm, CorrelationPair, DatasetStats, FeatureImportance, LagCategory, ModelResult,
    PredictionExample, PublishedMeans, PublishedSummary, ShapLevel, ShapRank, TabDescriptor,
    TabId,
};
use crate::error::{CatalogErrorKind, DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Tolerance for the importance-sum check; the no-lag table sums to 1.0.
const IMPORTANCE_SUM_EPSILON: f64 = 1e-9;

/// A heading with bullet items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSection {
    pub heading: String,
    pub items: Vec<String>,
}

impl NoteSection {
    fn new(heading: &str, items: &[&str]) -> Self {
        Self {
            heading: heading.to_string(),
            items: strings(items),
        }
    }
}

/// An interpretability method and what it explains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodNote {
    pub name: String,
    pub description: String,
}

/// Fixed narrative text shown alongside the tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyNotes {
    pub title: String,
    pub subtitle: String,
    pub analysis_structure: Vec<NoteSection>,
    pub correlation_insights: Vec<String>,
    pub conclusions_without_lag: Vec<String>,
    pub conclusions_with_lag: Vec<String>,
    pub lag_caveats: Vec<String>,
    pub verdict: String,
    pub methods: Vec<MethodNote>,
    pub findings: Vec<String>,
    pub next_steps: Vec<String>,
}

/// Every table the dashboard displays.
///
/// Built once with [`StudyCatalog::builtin`] and only ever read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyCatalog {
    pub models: Vec<ModelResult>,
    pub importance_without_lag: Vec<FeatureImportance>,
    pub importance_with_lag: Vec<FeatureImportance>,
    pub correlations: Vec<CorrelationPair>,
    pub tabs: Vec<TabDescriptor>,
    pub shap_ranking: Vec<ShapRank>,
    pub prediction_example: PredictionExample,
    pub dataset: DatasetStats,
    pub published: PublishedSummary,
    pub notes: StudyNotes,
}

impl StudyCatalog {
    /// The results of the INMET station study.
    #[must_use]
    pub fn builtin() -> Self {
        use Algorithm::{GradientBoosting, RandomForest, Svr};
        use LagCategory::{WithLag, WithoutLag};

        let models = vec![
            ModelResult::new(RandomForest, WithoutLag, 1.1567, 0.8492, 0.9121, "#A1C9F4"),
            ModelResult::new(GradientBoosting, WithoutLag, 1.2518, 0.9228, 0.8970, "#B5E384"),
            ModelResult::new(Svr, WithoutLag, 3.5487, 2.7225, 0.1724, "#FFACAC"),
            ModelResult::new(RandomForest, WithLag, 1.2936, 0.9328, 0.8786, "#0072B2"),
            ModelResult::new(GradientBoosting, WithLag, 1.2680, 0.9474, 0.8834, "#009E73"),
            ModelResult::new(Svr, WithLag, 3.5256, 2.7268, 0.0983, "#D55E00"),
        ];

        let importance_without_lag = vec![
            FeatureImportance::new("pressao_atm_media", 0.3130),
            FeatureImportance::new("umidade_relativa_minima", 0.3063),
            FeatureImportance::new("temp_orvalho_media", 0.2050),
            FeatureImportance::new("umidade_relativa_media", 0.1522),
            FeatureImportance::new("umidade_relativa_maxima", 0.0125),
            FeatureImportance::new("vento_vel_media", 0.0110),
        ];

        let importance_with_lag = vec![
            FeatureImportance::new("temp_maxima_lag_1", 0.5894),
            FeatureImportance::new("umidade_relativa_minima", 0.1610),
            FeatureImportance::new("temp_orvalho_media", 0.0633),
            FeatureImportance::new("pressao_atm_media", 0.0362),
            FeatureImportance::new("umidade_relativa_media", 0.0311),
        ];

        let correlations = vec![
            CorrelationPair::new("temp_media", "temp_maxima", 0.95),
            CorrelationPair::new("temp_media", "temp_minima", 0.92),
            CorrelationPair::new("umidade_relativa", "precipitacao", 0.35),
            CorrelationPair::new("pressao_atm", "temp_media", -0.15),
            CorrelationPair::new("vento_vel", "precipitacao", 0.08),
        ];

        let tabs = vec![
            TabDescriptor::new(TabId::Overview, "Overview", "📊", '1'),
            TabDescriptor::new(TabId::Correlation, "Correlations", "🔗", '2'),
            TabDescriptor::new(TabId::ModelsWithoutLag, "Models without Lag", "🤖", '3'),
            TabDescriptor::new(TabId::ModelsWithLag, "Models with Lag", "🔄", '4'),
            TabDescriptor::new(TabId::Comparison, "Final Comparison", "⚖️", '5'),
            TabDescriptor::new(TabId::Interpretability, "Interpretability", "🔍", '6'),
            TabDescriptor::new(TabId::Data, "Data", "📋", '7'),
        ];

        let shap_ranking = vec![
            ShapRank {
                feature: "temp_maxima_lag_1".to_string(),
                level: ShapLevel::Highest,
            },
            ShapRank {
                feature: "umidade_relativa_minima".to_string(),
                level: ShapLevel::High,
            },
            ShapRank {
                feature: "temp_orvalho_media".to_string(),
                level: ShapLevel::Medium,
            },
        ];

        let dataset = DatasetStats {
            source: "INMET automatic station A707".to_string(),
            records: 4018,
            period: "2014-2025".to_string(),
            original_features: 10,
            lag_features: 26,
            lag_days: vec![1, 2, 3, 7],
            train_percent: 80,
            random_seed: 42,
            missing_values: "Linear interpolation".to_string(),
            normalization: "Not applied".to_string(),
            cross_validation: "Not applied".to_string(),
        };

        let published = PublishedSummary {
            without_lag: PublishedMeans {
                r2: 0.727,
                rmse: 2.106,
            },
            with_lag: PublishedMeans {
                r2: 0.620,
                rmse: 2.096,
            },
        };

        Self {
            models,
            importance_without_lag,
            importance_with_lag,
            correlations,
            tabs,
            shap_ranking,
            prediction_example: PredictionExample {
                actual_celsius: 33.20,
                predicted_celsius: 33.65,
            },
            dataset,
            published,
            notes: builtin_notes(),
        }
    }

    /// Importance table for a category, sorted descending.
    #[must_use]
    pub fn importances(&self, category: LagCategory) -> &[FeatureImportance] {
        match category {
            LagCategory::WithoutLag => &self.importance_without_lag,
            LagCategory::WithLag => &self.importance_with_lag,
        }
    }

    #[must_use]
    pub fn tab(&self, id: TabId) -> Option<&TabDescriptor> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// Check that every table is well formed.
    ///
    /// The built-in catalog always passes; this guards hand-edited
    /// catalogs and keeps the chart adapter's non-empty precondition honest.
    pub fn validate(&self) -> Result<()> {
        let fail = |kind: CatalogErrorKind| Err(DashboardError::catalog("validation", kind));

        if self.models.is_empty() {
            return fail(CatalogErrorKind::EmptyTable("models"));
        }
        for category in LagCategory::ALL {
            if !self.models.iter().any(|m| m.category == category) {
                return fail(CatalogErrorKind::EmptyCategory(category.label()));
            }
        }
        for model in &self.models {
            let metrics_ok = [model.rmse, model.mae]
                .iter()
                .all(|v| v.is_finite() && *v >= 0.0)
                && model.r2.is_finite();
            if !metrics_ok {
                return fail(CatalogErrorKind::InvalidMetric {
                    model: model.name.clone(),
                });
            }
            if !is_hex_color(&model.color) {
                return fail(CatalogErrorKind::InvalidColor {
                    model: model.name.clone(),
                    color: model.color.clone(),
                });
            }
        }

        for (table, rows) in [
            ("importance_without_lag", &self.importance_without_lag),
            ("importance_with_lag", &self.importance_with_lag),
        ] {
            validate_importances(table, rows).map_err(|k| DashboardError::catalog("validation", k))?;
        }

        if self.correlations.is_empty() {
            return fail(CatalogErrorKind::EmptyTable("correlations"));
        }
        if let Some(pair) = self
            .correlations
            .iter()
            .find(|p| !(-1.0..=1.0).contains(&p.coefficient))
        {
            return fail(CatalogErrorKind::CorrelationOutOfRange {
                var_a: pair.var_a.clone(),
                var_b: pair.var_b.clone(),
                value: pair.coefficient,
            });
        }

        if self.tabs.len() != TabId::ALL.len() {
            return fail(CatalogErrorKind::TabCount {
                expected: TabId::ALL.len(),
                found: self.tabs.len(),
            });
        }
        let mut seen = HashSet::new();
        for tab in &self.tabs {
            if !seen.insert(tab.id) {
                return fail(CatalogErrorKind::DuplicateTab(tab.id.as_str().to_string()));
            }
        }

        tracing::debug!(
            models = self.models.len(),
            tabs = self.tabs.len(),
            "study catalog validated"
        );
        Ok(())
    }
}

impl Default for StudyCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_importances(
    table: &'static str,
    rows: &[FeatureImportance],
) -> std::result::Result<(), CatalogErrorKind> {
    if rows.is_empty() {
        return Err(CatalogErrorKind::EmptyTable(table));
    }
    if let Some(row) = rows
        .iter()
        .find(|r| !(0.0..=1.0).contains(&r.importance))
    {
        return Err(CatalogErrorKind::ImportanceOutOfRange {
            feature: row.feature.clone(),
            value: row.importance,
        });
    }
    if let Some(pair) = rows.windows(2).find(|w| w[1].importance > w[0].importance) {
        return Err(CatalogErrorKind::ImportanceNotSorted {
            table,
            feature: pair[1].feature.clone(),
        });
    }
    let sum: f64 = rows.iter().map(|r| r.importance).sum();
    if sum > 1.0 + IMPORTANCE_SUM_EPSILON {
        return Err(CatalogErrorKind::ImportanceSumExceeded { table, sum });
    }
    Ok(())
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn builtin_notes() -> StudyNotes {
    StudyNotes {
        title: "Comparative Analysis of Weather Prediction Models".to_string(),
        subtitle: "Machine-learning models with and without lag features for daily temperature forecasting"
            .to_string(),
        analysis_structure: vec![
            NoteSection::new(
                "1. Data preparation",
                &[
                    "Load INMET station records",
                    "Handle missing values",
                    "Linear interpolation",
                ],
            ),
            NoteSection::new(
                "2. Dataset construction",
                &[
                    "Dataset without lag features",
                    "Dataset with lag features (1, 2, 3, 7 days)",
                    "Train/test split (80/20)",
                ],
            ),
            NoteSection::new(
                "3. Models evaluated",
                &["Random Forest", "Gradient Boosting", "Support Vector Regression"],
            ),
            NoteSection::new(
                "4. Interpretability",
                &["SHAP analysis", "LIME explanations", "Feature importance"],
            ),
        ],
        correlation_insights: strings(&[
            "Mean temperature and maximum temperature: strong positive correlation",
            "Mean temperature and minimum temperature: strong positive correlation",
            "Humidity and precipitation: moderate correlation",
            "Pressure and temperature: weak negative correlation",
        ]),
        conclusions_without_lag: strings(&[
            "Random Forest had the best overall performance",
            "Atmospheric pressure and minimum relative humidity are the most important features",
            "SVR performed markedly worse than the tree ensembles",
        ]),
        conclusions_with_lag: strings(&[
            "temp_maxima_lag_1 is by far the most important feature",
            "Gradient Boosting performed best among the lag models",
            "Lags of 1-3 days matter more than the 7-day lag",
            "Performance was slightly worse than the models without lag",
        ]),
        lag_caveats: strings(&[
            "The weather variables already carry enough temporal information",
            "A 1-7 day lag window may not suit maximum-temperature forecasting",
            "Overfitting from the much larger feature count",
            "Natural temporal correlation is already captured by the original features",
            "Lag features need more elaborate feature engineering",
        ]),
        verdict: "For this dataset and task, Random Forest without lag features is the most \
                  efficient approach: better accuracy at lower computational cost."
            .to_string(),
        methods: vec![
            MethodNote {
                name: "SHAP (SHapley Additive exPlanations)".to_string(),
                description: "Per-feature contribution to individual predictions".to_string(),
            },
            MethodNote {
                name: "LIME (Local Interpretable Model-agnostic Explanations)".to_string(),
                description: "Local explanations for individual predictions".to_string(),
            },
            MethodNote {
                name: "Feature Importance".to_string(),
                description: "Global importance of each feature in the Random Forest".to_string(),
            },
        ],
        findings: strings(&[
            "Random Forest without lag is the best model",
            "Lag features did not improve performance",
            "The previous day's temperature is highly predictive",
            "SVR was consistently the weakest model",
        ]),
        next_steps: strings(&[
            "Try different lag windows",
            "Apply more advanced feature engineering",
            "Use cross-validation",
            "Explore other algorithms (XGBoost, LSTM)",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let catalog = StudyCatalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.models.len(), 6);
        assert_eq!(catalog.correlations.len(), 5);
        assert_eq!(catalog.tabs.len(), 7);
    }

    #[test]
    fn test_tabs_follow_routing_order() {
        let catalog = StudyCatalog::builtin();
        let ids: Vec<TabId> = catalog.tabs.iter().map(|t| t.id).collect();
        assert_eq!(ids, TabId::ALL.to_vec());
    }

    #[test]
    fn test_rejects_unsorted_importances() {
        let mut catalog = StudyCatalog::builtin();
        catalog.importance_with_lag.swap(0, 1);
        let err = catalog.validate().unwrap_err();
        assert!(matches!(
            err,
            DashboardError::Catalog {
                source: CatalogErrorKind::ImportanceNotSorted { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_missing_category() {
        let mut catalog = StudyCatalog::builtin();
        catalog.models.retain(|m| m.category == LagCategory::WithoutLag);
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("catalog"));
    }

    #[test]
    fn test_rejects_duplicate_tab() {
        let mut catalog = StudyCatalog::builtin();
        catalog.tabs[6].id = TabId::Overview;
        assert!(matches!(
            catalog.validate(),
            Err(DashboardError::Catalog {
                source: CatalogErrorKind::DuplicateTab(_),
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_bad_color() {
        let mut catalog = StudyCatalog::builtin();
        catalog.models[2].color = "salmon".to_string();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_correlation() {
        let mut catalog = StudyCatalog::builtin();
        catalog.correlations[0].coefficient = 1.5;
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_hex_color() {
        assert!(is_hex_color("#A1C9F4"));
        assert!(!is_hex_color("A1C9F4"));
        assert!(!is_hex_color("#A1C9F"));
        assert!(!is_hex_color("#GGGGGG"));
    }
}
