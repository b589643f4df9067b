//! Pure derivations over the study catalog.
//!
//! Everything here is recomputed from the [`ModelResult`] table at render
//! time, so the displayed aggregates can never drift from the records
//! they summarize. Functions take slices and return owned summaries.

use crate::model::{
    Algorithm, FeatureImportance, LagCategory, MetricField, ModelResult, PublishedSummary,
    ShapRank,
};
use serde::{Deserialize, Serialize};

/// Default tolerance when comparing published figures with derived ones.
pub const DRIFT_TOLERANCE: f64 = 0.001;

/// Records of one category, in their original relative order.
#[must_use]
pub fn filter_by_category(models: &[ModelResult], category: LagCategory) -> Vec<&ModelResult> {
    models.iter().filter(|m| m.category == category).collect()
}

/// Arithmetic mean, `None` for an empty input.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Descriptive aggregates of one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    pub category: LagCategory,
    pub count: usize,
    pub mean_r2: f64,
    pub mean_rmse: f64,
    pub mean_mae: f64,
}

impl CategoryAggregate {
    #[must_use]
    pub const fn metric(&self, field: MetricField) -> f64 {
        match field {
            MetricField::R2 => self.mean_r2,
            MetricField::Rmse => self.mean_rmse,
            MetricField::Mae => self.mean_mae,
        }
    }
}

/// Mean R², RMSE and MAE over exactly the records of `category`.
#[must_use]
pub fn aggregate(models: &[ModelResult], category: LagCategory) -> Option<CategoryAggregate> {
    let subset = filter_by_category(models, category);
    Some(CategoryAggregate {
        category,
        count: subset.len(),
        mean_r2: mean(subset.iter().map(|m| m.r2))?,
        mean_rmse: mean(subset.iter().map(|m| m.rmse))?,
        mean_mae: mean(subset.iter().map(|m| m.mae))?,
    })
}

/// Aggregates for every non-empty category, in category order.
#[must_use]
pub fn aggregate_all(models: &[ModelResult]) -> Vec<CategoryAggregate> {
    LagCategory::ALL
        .into_iter()
        .filter_map(|c| aggregate(models, c))
        .collect()
}

/// The best record for `field`; the first one wins on ties.
pub fn best_by<'a>(
    models: impl IntoIterator<Item = &'a ModelResult>,
    field: MetricField,
) -> Option<&'a ModelResult> {
    models.into_iter().min_by(|a, b| {
        let (a, b) = (a.metric(field), b.metric(field));
        if field.higher_is_better() {
            b.total_cmp(&a)
        } else {
            a.total_cmp(&b)
        }
    })
}

/// Best record of one category for `field`.
#[must_use]
pub fn best_in_category(
    models: &[ModelResult],
    category: LagCategory,
    field: MetricField,
) -> Option<&ModelResult> {
    best_by(filter_by_category(models, category), field)
}

/// A row of the performance ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedModel {
    /// 1-based position
    pub position: usize,
    pub name: String,
    pub category: LagCategory,
    pub r2: f64,
    pub rmse: f64,
}

/// All records ordered best-first by `field`. Ties keep table order.
#[must_use]
pub fn rank_by(models: &[ModelResult], field: MetricField) -> Vec<RankedModel> {
    let mut sorted: Vec<&ModelResult> = models.iter().collect();
    sorted.sort_by(|a, b| {
        let (a, b) = (a.metric(field), b.metric(field));
        if field.higher_is_better() {
            b.total_cmp(&a)
        } else {
            a.total_cmp(&b)
        }
    });
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, m)| RankedModel {
            position: i + 1,
            name: m.name.clone(),
            category: m.category,
            r2: m.r2,
            rmse: m.rmse,
        })
        .collect()
}

/// How adding lag features changed one algorithm.
///
/// Positive percentages are improvements: lower RMSE, higher R².
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LagEffect {
    pub algorithm: Algorithm,
    pub r2_without: f64,
    pub r2_with: f64,
    pub rmse_without: f64,
    pub rmse_with: f64,
    pub rmse_improvement_pct: f64,
    pub r2_improvement_pct: f64,
}

/// Lag effect for every algorithm present in both categories.
#[must_use]
pub fn lag_effects(models: &[ModelResult]) -> Vec<LagEffect> {
    Algorithm::ALL
        .into_iter()
        .filter_map(|algorithm| {
            let find = |category| {
                models
                    .iter()
                    .find(|m| m.algorithm == algorithm && m.category == category)
            };
            let without = find(LagCategory::WithoutLag)?;
            let with = find(LagCategory::WithLag)?;
            Some(LagEffect {
                algorithm,
                r2_without: without.r2,
                r2_with: with.r2,
                rmse_without: without.rmse,
                rmse_with: with.rmse,
                rmse_improvement_pct: percent_change(without.rmse, with.rmse, true),
                r2_improvement_pct: percent_change(without.r2, with.r2, false),
            })
        })
        .collect()
}

fn percent_change(base: f64, new: f64, lower_is_better: bool) -> f64 {
    if base == 0.0 {
        return 0.0;
    }
    let delta = if lower_is_better { base - new } else { new - base };
    delta / base * 100.0
}

/// A published figure that disagrees with the value derived from the table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryDrift {
    pub category: LagCategory,
    pub field: MetricField,
    pub published: f64,
    pub derived: f64,
}

impl SummaryDrift {
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.published - self.derived
    }
}

/// Compare the published category means against the derived aggregates.
#[must_use]
pub fn summary_drift(
    published: &PublishedSummary,
    aggregates: &[CategoryAggregate],
    tolerance: f64,
) -> Vec<SummaryDrift> {
    let mut drift = Vec::new();
    for agg in aggregates {
        let printed = published.for_category(agg.category);
        for (field, value) in [(MetricField::R2, printed.r2), (MetricField::Rmse, printed.rmse)] {
            let derived = agg.metric(field);
            if (value - derived).abs() > tolerance {
                drift.push(SummaryDrift {
                    category: agg.category,
                    field,
                    published: value,
                    derived,
                });
            }
        }
    }
    drift
}

/// Agreement between the SHAP ranking and the tree importances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodConsistency {
    pub matched: usize,
    pub total: usize,
}

/// Count SHAP-ranked features that also appear in the top-k importances,
/// where k is the length of the SHAP ranking.
#[must_use]
pub fn method_consistency(shap: &[ShapRank], importances: &[FeatureImportance]) -> MethodConsistency {
    let top: Vec<&str> = importances
        .iter()
        .take(shap.len())
        .map(|f| f.feature.as_str())
        .collect();
    MethodConsistency {
        matched: shap
            .iter()
            .filter(|s| top.contains(&s.feature.as_str()))
            .count(),
        total: shap.len(),
    }
}

/// Where one SHAP-ranked feature sits in the tree importances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureAgreement {
    pub feature: String,
    /// 1-based SHAP position
    pub shap_position: usize,
    /// 1-based importance position, `None` when the feature is absent
    pub importance_position: Option<usize>,
}

impl FeatureAgreement {
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.importance_position == Some(self.shap_position)
    }

    /// One line for lists: "`temp_media`: #2 in both methods".
    #[must_use]
    pub fn describe(&self) -> String {
        match self.importance_position {
            Some(_) if self.is_exact() => {
                format!("{}: #{} in both methods", self.feature, self.shap_position)
            }
            Some(pos) => format!(
                "{}: #{} by SHAP, #{} by Random Forest",
                self.feature, self.shap_position, pos
            ),
            None => format!(
                "{}: #{} by SHAP, absent from the Random Forest importances",
                self.feature, self.shap_position
            ),
        }
    }
}

/// Position of every SHAP-ranked feature in `importances`, in SHAP order.
#[must_use]
pub fn feature_agreement(
    shap: &[ShapRank],
    importances: &[FeatureImportance],
) -> Vec<FeatureAgreement> {
    shap.iter()
        .enumerate()
        .map(|(i, s)| FeatureAgreement {
            feature: s.feature.clone(),
            shap_position: i + 1,
            importance_position: importances
                .iter()
                .position(|f| f.feature == s.feature)
                .map(|p| p + 1),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StudyCatalog;

    fn models() -> Vec<ModelResult> {
        StudyCatalog::builtin().models
    }

    #[test]
    fn test_filter_preserves_order() {
        let models = models();
        let names: Vec<&str> = filter_by_category(&models, LagCategory::WithLag)
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(
            names,
            ["Random Forest (Lag)", "Gradient Boosting (Lag)", "SVR (Lag)"]
        );
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(std::iter::empty()), None);
        assert_eq!(mean([1.0, 2.0, 3.0]), Some(2.0));
    }

    #[test]
    fn test_aggregate_without_lag() {
        let agg = aggregate(&models(), LagCategory::WithoutLag).unwrap();
        assert_eq!(agg.count, 3);
        assert!((agg.mean_r2 - 0.6605).abs() < 1e-4);
        assert!((agg.mean_rmse - 1.985_733).abs() < 1e-4);
        assert!((agg.mean_mae - 1.498_167).abs() < 1e-4);
    }

    #[test]
    fn test_aggregate_empty_category() {
        let models: Vec<ModelResult> = models()
            .into_iter()
            .filter(|m| m.category == LagCategory::WithLag)
            .collect();
        assert!(aggregate(&models, LagCategory::WithoutLag).is_none());
        assert_eq!(aggregate_all(&models).len(), 1);
    }

    #[test]
    fn test_best_by_direction() {
        let models = models();
        assert_eq!(
            best_by(&models, MetricField::R2).unwrap().name,
            "Random Forest (No Lag)"
        );
        assert_eq!(
            best_by(&models, MetricField::Rmse).unwrap().name,
            "Random Forest (No Lag)"
        );
        assert_eq!(
            best_in_category(&models, LagCategory::WithLag, MetricField::R2)
                .unwrap()
                .name,
            "Gradient Boosting (Lag)"
        );
    }

    #[test]
    fn test_best_by_first_wins_ties() {
        let mut models = models();
        models[1].r2 = models[0].r2;
        assert_eq!(
            best_by(&models, MetricField::R2).unwrap().name,
            "Random Forest (No Lag)"
        );
    }

    #[test]
    fn test_rank_by_r2() {
        let ranking = rank_by(&models(), MetricField::R2);
        let names: Vec<&str> = ranking.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Random Forest (No Lag)",
                "Gradient Boosting (No Lag)",
                "Gradient Boosting (Lag)",
                "Random Forest (Lag)",
                "SVR (No Lag)",
                "SVR (Lag)",
            ]
        );
        assert_eq!(ranking[0].position, 1);
        assert_eq!(ranking[5].position, 6);
    }

    #[test]
    fn test_lag_effects() {
        let effects = lag_effects(&models());
        assert_eq!(effects.len(), 3);

        let rf = effects[0];
        assert_eq!(rf.algorithm, Algorithm::RandomForest);
        assert!((rf.rmse_improvement_pct - -11.835).abs() < 0.01);
        assert!((rf.r2_improvement_pct - -3.673).abs() < 0.01);

        let svr = effects[2];
        assert!(svr.rmse_improvement_pct > 0.0);
        assert!(svr.r2_improvement_pct < -40.0);
    }

    #[test]
    fn test_lag_effects_skip_unpaired() {
        let mut models = models();
        models.retain(|m| !(m.algorithm == Algorithm::Svr && m.category == LagCategory::WithLag));
        assert_eq!(lag_effects(&models).len(), 2);
    }

    #[test]
    fn test_summary_drift_flags_published_literals() {
        let catalog = StudyCatalog::builtin();
        let aggregates = aggregate_all(&catalog.models);
        let drift = summary_drift(&catalog.published, &aggregates, DRIFT_TOLERANCE);

        // With-lag R² (0.620) agrees; the other three printed figures do not.
        assert_eq!(drift.len(), 3);
        assert!(!drift
            .iter()
            .any(|d| d.category == LagCategory::WithLag && d.field == MetricField::R2));
        let r2 = drift
            .iter()
            .find(|d| d.category == LagCategory::WithoutLag && d.field == MetricField::R2)
            .unwrap();
        assert!((r2.delta() - 0.0665).abs() < 1e-3);
    }

    #[test]
    fn test_method_consistency() {
        let catalog = StudyCatalog::builtin();
        let consistency = method_consistency(&catalog.shap_ranking, &catalog.importance_with_lag);
        assert_eq!(consistency, MethodConsistency { matched: 3, total: 3 });

        let consistency =
            method_consistency(&catalog.shap_ranking, &catalog.importance_without_lag);
        // temp_maxima_lag_1 only exists with lag features
        assert_eq!(consistency.matched, 2);
    }

    #[test]
    fn test_feature_agreement_with_lag() {
        let catalog = StudyCatalog::builtin();
        let agreement = feature_agreement(&catalog.shap_ranking, &catalog.importance_with_lag);

        assert_eq!(agreement.len(), catalog.shap_ranking.len());
        assert!(agreement.iter().all(FeatureAgreement::is_exact));
        assert_eq!(
            agreement[0].describe(),
            format!("{}: #1 in both methods", catalog.shap_ranking[0].feature)
        );
    }

    #[test]
    fn test_feature_agreement_without_lag_marks_absent() {
        let catalog = StudyCatalog::builtin();
        let agreement = feature_agreement(&catalog.shap_ranking, &catalog.importance_without_lag);

        let lag = agreement
            .iter()
            .find(|a| a.feature == "temp_maxima_lag_1")
            .unwrap();
        assert_eq!(lag.importance_position, None);
        assert!(lag.describe().contains("absent"));
    }
}
