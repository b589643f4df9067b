//! Markdown report generator.

use super::escape::{escape_markdown_list, escape_markdown_table};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, ReportSection};
use crate::analysis::FeatureAgreement;
use crate::chart::{format_importance, format_metric, ChartSpec};
use crate::model::{FeatureImportance, ModelResult};
use crate::view::{
    CategoryView, ComparisonView, CorrelationView, DataView, InterpretabilityView, OverviewView,
    ViewBlock,
};
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter {
    /// Include the bar chart tables
    include_charts: bool,
}

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_charts: true,
        }
    }

    /// Omit chart tables; data tables are still written
    #[must_use]
    pub const fn without_charts(mut self) -> Self {
        self.include_charts = false;
        self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn bullets(md: &mut String, items: &[String]) -> std::fmt::Result {
    for item in items {
        writeln!(md, "- {}", escape_markdown_list(item))?;
    }
    writeln!(md)
}

fn model_table(md: &mut String, models: &[ModelResult]) -> std::fmt::Result {
    writeln!(md, "| Model | RMSE | MAE | R² |")?;
    writeln!(md, "|-------|-----:|----:|---:|")?;
    for m in models {
        writeln!(
            md,
            "| {} | {} | {} | {} |",
            escape_markdown_table(&m.name),
            format_metric(m.rmse),
            format_metric(m.mae),
            format_metric(m.r2)
        )?;
    }
    writeln!(md)
}

fn importance_table(md: &mut String, rows: &[FeatureImportance]) -> std::fmt::Result {
    writeln!(md, "| Feature | Importance |")?;
    writeln!(md, "|---------|-----------:|")?;
    for row in rows {
        writeln!(
            md,
            "| {} | {} |",
            escape_markdown_table(&row.feature),
            format_importance(row.importance)
        )?;
    }
    writeln!(md)
}

impl MarkdownReporter {
    fn chart(&self, md: &mut String, spec: &ChartSpec) -> std::fmt::Result {
        if !self.include_charts {
            return Ok(());
        }
        writeln!(md, "#### {}\n", escape_markdown_list(&spec.title))?;
        writeln!(md, "| {} | {} |", spec.x_label, spec.y_label)?;
        writeln!(md, "|---|---:|")?;
        for bar in &spec.bars {
            writeln!(md, "| {} | {} |", escape_markdown_table(&bar.label), bar.text)?;
        }
        writeln!(md)
    }

    fn overview(&self, md: &mut String, view: &OverviewView) -> std::fmt::Result {
        writeln!(md, "*{}*\n", escape_markdown_list(&view.subtitle))?;
        writeln!(md, "- **Models:** {}", view.model_count)?;
        writeln!(md, "- **Records:** {}", view.record_count)?;
        if let (Some(name), Some(r2)) = (&view.best_model, view.best_r2) {
            writeln!(md, "- **Best model:** {name} (R² {})", format_metric(r2))?;
        }
        if let (Some(name), Some(rmse)) = (&view.lowest_rmse_model, view.lowest_rmse) {
            writeln!(md, "- **Lowest RMSE:** {name} ({})", format_metric(rmse))?;
        }
        writeln!(md, "- **Lag features tested:** {}", view.lag_feature_count)?;
        writeln!(md)?;
        for section in &view.sections {
            writeln!(md, "### {}\n", escape_markdown_list(&section.heading))?;
            bullets(md, &section.items)?;
        }
        Ok(())
    }

    fn correlation(&self, md: &mut String, view: &CorrelationView) -> std::fmt::Result {
        writeln!(md, "| Variable A | Variable B | Coefficient | Strength |")?;
        writeln!(md, "|------------|------------|------------:|----------|")?;
        for pair in &view.pairs {
            writeln!(
                md,
                "| {} | {} | {:.3} | {} |",
                escape_markdown_table(&pair.var_a),
                escape_markdown_table(&pair.var_b),
                pair.coefficient,
                pair.strength.label()
            )?;
        }
        writeln!(md)?;
        writeln!(md, "### Insights\n")?;
        bullets(md, &view.insights)
    }

    fn category(&self, md: &mut String, view: &CategoryView) -> std::fmt::Result {
        model_table(md, &view.models)?;
        if let Some(agg) = &view.aggregate {
            writeln!(
                md,
                "Mean over {} models: R² {}, RMSE {}, MAE {}\n",
                agg.count,
                format_metric(agg.mean_r2),
                format_metric(agg.mean_rmse),
                format_metric(agg.mean_mae)
            )?;
        }
        if let Some(best) = &view.best_model {
            writeln!(md, "- **Best R²:** {best}")?;
        }
        if let Some(lowest) = &view.lowest_rmse_model {
            writeln!(md, "- **Lowest RMSE:** {lowest}")?;
        }
        writeln!(md)?;
        self.chart(md, &view.chart)?;
        writeln!(md, "### Feature importance\n")?;
        importance_table(md, &view.importances)?;
        writeln!(md, "### Conclusions\n")?;
        bullets(md, &view.conclusions)?;
        if !view.caveats.is_empty() {
            writeln!(md, "### Caveats\n")?;
            bullets(md, &view.caveats)?;
        }
        Ok(())
    }

    fn comparison(&self, md: &mut String, view: &ComparisonView) -> std::fmt::Result {
        self.chart(md, &view.r2_chart)?;
        self.chart(md, &view.rmse_chart)?;

        writeln!(md, "### Category means\n")?;
        writeln!(md, "| Category | Models | R² | RMSE | MAE |")?;
        writeln!(md, "|----------|-------:|---:|-----:|----:|")?;
        for agg in &view.aggregates {
            writeln!(
                md,
                "| {} | {} | {} | {} | {} |",
                agg.category.label(),
                agg.count,
                format_metric(agg.mean_r2),
                format_metric(agg.mean_rmse),
                format_metric(agg.mean_mae)
            )?;
        }
        writeln!(md)?;
        for drift in &view.drift {
            writeln!(
                md,
                "> Published {} mean {} is {}; the table gives {}.",
                drift.category.short_label(),
                drift.field.label(),
                format_metric(drift.published),
                format_metric(drift.derived)
            )?;
        }
        if !view.drift.is_empty() {
            writeln!(md)?;
        }

        writeln!(md, "### Ranking\n")?;
        writeln!(md, "| # | Model | R² | RMSE |")?;
        writeln!(md, "|--:|-------|---:|-----:|")?;
        for r in &view.ranking {
            writeln!(
                md,
                "| {} | {} | {} | {} |",
                r.position,
                escape_markdown_table(&r.name),
                format_metric(r.r2),
                format_metric(r.rmse)
            )?;
        }
        writeln!(md)?;

        writeln!(md, "### Lag effect\n")?;
        writeln!(md, "| Algorithm | RMSE change | R² change |")?;
        writeln!(md, "|-----------|------------:|----------:|")?;
        for e in &view.lag_effects {
            writeln!(
                md,
                "| {} | {:+.1}% | {:+.1}% |",
                e.algorithm.name(),
                e.rmse_improvement_pct,
                e.r2_improvement_pct
            )?;
        }
        writeln!(md)?;
        writeln!(md, "**Verdict:** {}\n", escape_markdown_list(&view.verdict))
    }

    fn interpretability(&self, md: &mut String, view: &InterpretabilityView) -> std::fmt::Result {
        for method in &view.methods {
            writeln!(
                md,
                "- **{}**: {}",
                escape_markdown_list(&method.name),
                escape_markdown_list(&method.description)
            )?;
        }
        writeln!(md)?;
        writeln!(md, "### SHAP ranking\n")?;
        for (i, rank) in view.shap_ranking.iter().enumerate() {
            writeln!(md, "{}. `{}` ({})", i + 1, rank.feature, rank.level.label())?;
        }
        writeln!(md)?;
        writeln!(md, "### Top features (Random Forest)\n")?;
        importance_table(md, &view.rf_top)?;
        writeln!(md, "### Method consistency\n")?;
        writeln!(
            md,
            "{} of {} features agree with the Random Forest importance ranking.\n",
            view.consistency.matched, view.consistency.total
        )?;
        let agreement: Vec<String> = view.agreement.iter().map(FeatureAgreement::describe).collect();
        bullets(md, &agreement)?;
        writeln!(md, "### Prediction example\n")?;
        writeln!(
            md,
            "Actual {:.2} °C, predicted {:.2} °C, error {:.2} °C.\n",
            view.prediction.actual_celsius,
            view.prediction.predicted_celsius,
            view.prediction.abs_error()
        )
    }

    fn data(&self, md: &mut String, view: &DataView) -> std::fmt::Result {
        let d = &view.dataset;
        let lag_days: Vec<String> = d.lag_days.iter().map(ToString::to_string).collect();
        writeln!(md, "| Property | Value |")?;
        writeln!(md, "|----------|-------|")?;
        writeln!(md, "| Source | {} |", escape_markdown_table(&d.source))?;
        writeln!(md, "| Records | {} |", d.records)?;
        writeln!(md, "| Period | {} |", d.period)?;
        writeln!(md, "| Original features | {} |", d.original_features)?;
        writeln!(md, "| Lag features | {} |", d.lag_features)?;
        writeln!(md, "| Lag days | {} |", lag_days.join(", "))?;
        writeln!(md, "| Train/test split | {}/{} |", d.train_percent, d.test_percent())?;
        writeln!(md, "| Random seed | {} |", d.random_seed)?;
        writeln!(md, "| Missing values | {} |", escape_markdown_table(&d.missing_values))?;
        writeln!(md, "| Normalization | {} |", escape_markdown_table(&d.normalization))?;
        writeln!(md, "| Cross-validation | {} |", escape_markdown_table(&d.cross_validation))?;
        writeln!(md)?;
        writeln!(md, "### Results\n")?;
        model_table(md, &view.models)?;
        writeln!(md, "### Importance without lag\n")?;
        importance_table(md, &view.importance_without_lag)?;
        writeln!(md, "### Importance with lag\n")?;
        importance_table(md, &view.importance_with_lag)?;
        writeln!(md, "### Findings\n")?;
        bullets(md, &view.findings)?;
        writeln!(md, "### Next steps\n")?;
        bullets(md, &view.next_steps)
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(
        &self,
        sections: &[ReportSection],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        if sections.is_empty() {
            return Err(ReportError::Empty);
        }

        let mut md = String::new();
        if let Some(title) = &config.title {
            writeln!(md, "# {}\n", escape_markdown_list(title))?;
        }
        if let Some(source) = &config.metadata.data_source {
            writeln!(md, "**Data source:** {}\n", escape_markdown_list(source))?;
        }

        for section in sections {
            writeln!(md, "## {} {}\n", section.icon, section.name)?;
            match &section.content {
                ViewBlock::Overview(v) => self.overview(&mut md, v)?,
                ViewBlock::Correlation(v) => self.correlation(&mut md, v)?,
                ViewBlock::ModelsWithoutLag(v) | ViewBlock::ModelsWithLag(v) => {
                    self.category(&mut md, v)?;
                }
                ViewBlock::Comparison(v) => self.comparison(&mut md, v)?,
                ViewBlock::Interpretability(v) => self.interpretability(&mut md, v)?,
                ViewBlock::Data(v) => self.data(&mut md, v)?,
                ViewBlock::NotFound { id } => {
                    writeln!(md, "Content not found: `{}`\n", escape_markdown_table(id))?;
                }
            }
        }

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StudyCatalog;
    use crate::view::Dashboard;

    fn render_all(reporter: &MarkdownReporter) -> String {
        let catalog = StudyCatalog::builtin();
        let dashboard = Dashboard::new(&catalog);
        let sections = ReportSection::collect(&dashboard, true);
        let config = ReportConfig {
            title: Some(catalog.notes.title.clone()),
            ..ReportConfig::default()
        };
        reporter.generate(&sections, &config).unwrap()
    }

    #[test]
    fn test_every_tab_has_a_heading() {
        let md = render_all(&MarkdownReporter::new());
        let catalog = StudyCatalog::builtin();
        for tab in &catalog.tabs {
            assert!(md.contains(&format!("## {} {}", tab.icon, tab.name)), "{}", tab.name);
        }
    }

    #[test]
    fn test_model_rows_use_four_decimals() {
        let md = render_all(&MarkdownReporter::new());
        assert!(md.contains("| Random Forest (No Lag) | 1.1567 | 0.8492 | 0.9121 |"));
        assert!(md.contains("| temp_maxima_lag_1 | 58.9% |"));
    }

    #[test]
    fn test_without_charts() {
        let with = render_all(&MarkdownReporter::new());
        let without = render_all(&MarkdownReporter::new().without_charts());
        assert!(with.contains("#### R² comparison"));
        assert!(!without.contains("#### R² comparison"));
        assert!(without.contains("### Ranking"));
    }

    #[test]
    fn test_not_found() {
        let catalog = StudyCatalog::builtin();
        let mut dashboard = Dashboard::new(&catalog);
        dashboard.select_tab("x|y");
        let sections = ReportSection::collect(&dashboard, false);
        let md = MarkdownReporter::new()
            .generate(&sections, &ReportConfig::default())
            .unwrap();
        assert!(md.contains("Content not found: `x\\|y`"));
    }

    fn section_of<'a>(md: &'a str, heading: &str) -> &'a str {
        let start = md.find(heading).unwrap();
        let rest = &md[start + heading.len()..];
        rest.find("\n## ").map_or(rest, |end| &rest[..end])
    }

    #[test]
    fn test_overview_bullets() {
        let md = render_all(&MarkdownReporter::new());
        let overview = section_of(&md, "## 📊 Overview");
        assert!(overview.contains("- **Lowest RMSE:** Random Forest (No Lag) (1.1567)"));
        assert!(overview.contains("- **Lag features tested:** 26"));
    }

    #[test]
    fn test_correlations_use_three_decimals() {
        let md = render_all(&MarkdownReporter::new());
        assert!(md.contains("| temp_media | temp_maxima | 0.950 | strong |"));
        assert!(md.contains("| -0.150 |"));
    }

    #[test]
    fn test_findings_on_data_tab() {
        let md = render_all(&MarkdownReporter::new());
        let interpretability = section_of(&md, "## 🔍 Interpretability");
        let data = section_of(&md, "## 📋 Data");

        assert!(interpretability.contains("### Top features (Random Forest)"));
        assert!(interpretability.contains("| temp_maxima_lag_1 | 58.9% |"));
        assert!(interpretability.contains("#1 in both methods"));
        assert!(!interpretability.contains("### Findings"));

        assert!(data.contains("### Findings"));
        assert!(data.contains("Lag features did not improve performance"));
        assert!(data.contains("### Next steps"));
    }
}
