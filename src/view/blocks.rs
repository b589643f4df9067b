//! View blocks: one tagged variant per tab, each owning only what it renders.

use crate::analysis::{
    self, CategoryAggregate, FeatureAgreement, LagEffect, MethodConsistency, RankedModel,
    SummaryDrift, DRIFT_TOLERANCE,
};
use crate::chart::{
    ChartSpec, SeriesColor, COMPARISON_R2_FILL, COMPARISON_RMSE_FILL, IMPORTANCE_FILL,
    WITHOUT_LAG_FILL, WITH_LAG_FILL,
};
use crate::model::{
    CorrelationStrength, DatasetStats, FeatureImportance, LagCategory, MethodNote, MetricField,
    ModelResult, NoteSection, PredictionExample, ShapRank, StudyCatalog, TabId,
};
use serde::Serialize;

/// The rendered content of one tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum ViewBlock {
    Overview(OverviewView),
    Correlation(CorrelationView),
    ModelsWithoutLag(CategoryView),
    ModelsWithLag(CategoryView),
    Comparison(ComparisonView),
    Interpretability(InterpretabilityView),
    Data(DataView),
    /// Fallback for an identifier that names no tab
    NotFound { id: String },
}

impl ViewBlock {
    /// Build the block for `tab` from the catalog.
    #[must_use]
    pub fn for_tab(catalog: &StudyCatalog, tab: TabId) -> Self {
        match tab {
            TabId::Overview => Self::Overview(OverviewView::build(catalog)),
            TabId::Correlation => Self::Correlation(CorrelationView::build(catalog)),
            TabId::ModelsWithoutLag => {
                Self::ModelsWithoutLag(CategoryView::build(catalog, LagCategory::WithoutLag))
            }
            TabId::ModelsWithLag => {
                Self::ModelsWithLag(CategoryView::build(catalog, LagCategory::WithLag))
            }
            TabId::Comparison => Self::Comparison(ComparisonView::build(catalog)),
            TabId::Interpretability => {
                Self::Interpretability(InterpretabilityView::build(catalog))
            }
            TabId::Data => Self::Data(DataView::build(catalog)),
        }
    }

    /// The tab this block belongs to, `None` for the fallback.
    #[must_use]
    pub const fn tab(&self) -> Option<TabId> {
        match self {
            Self::Overview(_) => Some(TabId::Overview),
            Self::Correlation(_) => Some(TabId::Correlation),
            Self::ModelsWithoutLag(_) => Some(TabId::ModelsWithoutLag),
            Self::ModelsWithLag(_) => Some(TabId::ModelsWithLag),
            Self::Comparison(_) => Some(TabId::Comparison),
            Self::Interpretability(_) => Some(TabId::Interpretability),
            Self::Data(_) => Some(TabId::Data),
            Self::NotFound { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Every chart the block displays, in display order.
    #[must_use]
    pub fn charts(&self) -> Vec<&ChartSpec> {
        match self {
            Self::ModelsWithoutLag(v) | Self::ModelsWithLag(v) => {
                vec![&v.chart, &v.importance_chart]
            }
            Self::Comparison(v) => vec![&v.r2_chart, &v.rmse_chart],
            _ => Vec::new(),
        }
    }
}

// ============================================================================
// Per-tab content
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewView {
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<NoteSection>,
    pub model_count: usize,
    pub record_count: usize,
    pub best_model: Option<String>,
    pub best_r2: Option<f64>,
    pub lowest_rmse_model: Option<String>,
    pub lowest_rmse: Option<f64>,
    /// Lagged features added for the with-lag models
    pub lag_feature_count: usize,
}

impl OverviewView {
    fn build(catalog: &StudyCatalog) -> Self {
        let best = analysis::best_by(&catalog.models, MetricField::R2);
        let lowest_rmse = analysis::best_by(&catalog.models, MetricField::Rmse);
        Self {
            title: catalog.notes.title.clone(),
            subtitle: catalog.notes.subtitle.clone(),
            sections: catalog.notes.analysis_structure.clone(),
            model_count: catalog.models.len(),
            record_count: catalog.dataset.records,
            best_model: best.map(|m| m.name.clone()),
            best_r2: best.map(|m| m.r2),
            lowest_rmse_model: lowest_rmse.map(|m| m.name.clone()),
            lowest_rmse: lowest_rmse.map(|m| m.rmse),
            lag_feature_count: catalog.dataset.lag_features,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationRow {
    pub var_a: String,
    pub var_b: String,
    pub coefficient: f64,
    pub strength: CorrelationStrength,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationView {
    pub pairs: Vec<CorrelationRow>,
    pub insights: Vec<String>,
}

impl CorrelationView {
    fn build(catalog: &StudyCatalog) -> Self {
        Self {
            pairs: catalog
                .correlations
                .iter()
                .map(|p| CorrelationRow {
                    var_a: p.var_a.clone(),
                    var_b: p.var_b.clone(),
                    coefficient: p.coefficient,
                    strength: p.strength(),
                })
                .collect(),
            insights: catalog.notes.correlation_insights.clone(),
        }
    }
}

/// Models of one lag category with their chart and importances.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryView {
    pub category: LagCategory,
    pub models: Vec<ModelResult>,
    pub chart: ChartSpec,
    pub importances: Vec<FeatureImportance>,
    pub importance_chart: ChartSpec,
    pub aggregate: Option<CategoryAggregate>,
    pub best_model: Option<String>,
    pub lowest_rmse_model: Option<String>,
    pub conclusions: Vec<String>,
    /// Only populated for the with-lag view
    pub caveats: Vec<String>,
}

impl CategoryView {
    fn build(catalog: &StudyCatalog, category: LagCategory) -> Self {
        let models = analysis::filter_by_category(&catalog.models, category);
        let (fill, conclusions, caveats) = match category {
            LagCategory::WithoutLag => (
                WITHOUT_LAG_FILL,
                catalog.notes.conclusions_without_lag.clone(),
                Vec::new(),
            ),
            LagCategory::WithLag => (
                WITH_LAG_FILL,
                catalog.notes.conclusions_with_lag.clone(),
                catalog.notes.lag_caveats.clone(),
            ),
        };
        let importances = catalog.importances(category).to_vec();

        Self {
            category,
            chart: ChartSpec::from_models(
                &format!("R² Score - {}", category.label()),
                models.iter().copied(),
                MetricField::R2,
                &SeriesColor::Fill(fill.to_string()),
            ),
            importance_chart: ChartSpec::from_importances(
                "Feature importance (Random Forest)",
                &importances,
                IMPORTANCE_FILL,
            ),
            importances,
            aggregate: analysis::aggregate(&catalog.models, category),
            best_model: analysis::best_in_category(&catalog.models, category, MetricField::R2)
                .map(|m| m.name.clone()),
            lowest_rmse_model: analysis::best_in_category(
                &catalog.models,
                category,
                MetricField::Rmse,
            )
            .map(|m| m.name.clone()),
            models: models.into_iter().cloned().collect(),
            conclusions,
            caveats,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonView {
    pub r2_chart: ChartSpec,
    pub rmse_chart: ChartSpec,
    pub aggregates: Vec<CategoryAggregate>,
    pub ranking: Vec<RankedModel>,
    pub lag_effects: Vec<LagEffect>,
    /// Published means that disagree with the recomputed ones
    pub drift: Vec<SummaryDrift>,
    pub verdict: String,
}

impl ComparisonView {
    fn build(catalog: &StudyCatalog) -> Self {
        let aggregates = analysis::aggregate_all(&catalog.models);
        Self {
            r2_chart: ChartSpec::from_models_with_legend(
                "R² comparison",
                &catalog.models,
                MetricField::R2,
                COMPARISON_R2_FILL,
            ),
            rmse_chart: ChartSpec::from_models_with_legend(
                "RMSE comparison",
                &catalog.models,
                MetricField::Rmse,
                COMPARISON_RMSE_FILL,
            ),
            drift: analysis::summary_drift(&catalog.published, &aggregates, DRIFT_TOLERANCE),
            aggregates,
            ranking: analysis::rank_by(&catalog.models, MetricField::R2),
            lag_effects: analysis::lag_effects(&catalog.models),
            verdict: catalog.notes.verdict.clone(),
        }
    }

    #[must_use]
    pub fn aggregate(&self, category: LagCategory) -> Option<&CategoryAggregate> {
        self.aggregates.iter().find(|a| a.category == category)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpretabilityView {
    pub methods: Vec<MethodNote>,
    pub shap_ranking: Vec<ShapRank>,
    /// Random Forest (with lag) importances, as many as the SHAP ranking
    pub rf_top: Vec<FeatureImportance>,
    pub prediction: PredictionExample,
    pub consistency: MethodConsistency,
    pub agreement: Vec<FeatureAgreement>,
}

impl InterpretabilityView {
    fn build(catalog: &StudyCatalog) -> Self {
        Self {
            methods: catalog.notes.methods.clone(),
            shap_ranking: catalog.shap_ranking.clone(),
            rf_top: catalog
                .importance_with_lag
                .iter()
                .take(catalog.shap_ranking.len())
                .cloned()
                .collect(),
            prediction: catalog.prediction_example,
            consistency: analysis::method_consistency(
                &catalog.shap_ranking,
                &catalog.importance_with_lag,
            ),
            agreement: analysis::feature_agreement(
                &catalog.shap_ranking,
                &catalog.importance_with_lag,
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataView {
    pub dataset: DatasetStats,
    pub models: Vec<ModelResult>,
    pub importance_without_lag: Vec<FeatureImportance>,
    pub importance_with_lag: Vec<FeatureImportance>,
    pub findings: Vec<String>,
    pub next_steps: Vec<String>,
}

impl DataView {
    fn build(catalog: &StudyCatalog) -> Self {
        Self {
            dataset: catalog.dataset.clone(),
            models: catalog.models.clone(),
            importance_without_lag: catalog.importance_without_lag.clone(),
            importance_with_lag: catalog.importance_with_lag.clone(),
            findings: catalog.notes.findings.clone(),
            next_steps: catalog.notes.next_steps.clone(),
        }
    }
}
