//! Summary report generator for shell output.
//!
//! Prints each section as aligned plain text, with bars drawn from
//! block characters so charts survive a pipe.

use super::{text_bar, ReportConfig, ReportError, ReportFormat, ReportGenerator, ReportSection};
use crate::analysis::FeatureAgreement;
use crate::chart::{format_importance, format_metric, ChartSpec};
use crate::model::{FeatureImportance, ModelResult};
use crate::view::{
    CategoryView, ComparisonView, CorrelationView, DataView, InterpretabilityView, OverviewView,
    ViewBlock,
};

const BAR_WIDTH: usize = 24;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn heading(&self, lines: &mut Vec<String>, text: &str) {
        lines.push(String::new());
        lines.push(self.color(text, "bold"));
    }

    fn bullets(&self, lines: &mut Vec<String>, items: &[String]) {
        for item in items {
            lines.push(format!("  {} {item}", self.color("•", "cyan")));
        }
    }

    fn chart(&self, lines: &mut Vec<String>, spec: &ChartSpec) {
        self.heading(lines, &spec.title);
        let max = spec.max_value();
        let width = spec.bars.iter().map(|b| b.label.len()).max().unwrap_or(0);
        for bar in &spec.bars {
            lines.push(format!(
                "  {:width$}  {} {}",
                bar.label,
                self.color(&text_bar(bar.value, max, BAR_WIDTH), "cyan"),
                bar.text,
            ));
        }
        lines.push(format!("  {}", self.color(&format!("■ {}", spec.legend), "dim")));
    }

    fn model_table(&self, lines: &mut Vec<String>, models: &[ModelResult]) {
        lines.push(self.color(
            &format!("  {:<28} {:>8} {:>8} {:>8}", "Model", "RMSE", "MAE", "R²"),
            "dim",
        ));
        for m in models {
            lines.push(format!(
                "  {:<28} {:>8} {:>8} {:>8}",
                m.name,
                format_metric(m.rmse),
                format_metric(m.mae),
                format_metric(m.r2),
            ));
        }
    }

    fn importance_table(&self, lines: &mut Vec<String>, rows: &[FeatureImportance]) {
        for row in rows {
            lines.push(format!(
                "  {:<28} {:>7}",
                row.feature,
                format_importance(row.importance)
            ));
        }
    }

    fn overview(&self, lines: &mut Vec<String>, view: &OverviewView) {
        lines.push(view.subtitle.clone());
        lines.push(format!(
            "{}  {}    {}  {}",
            self.color("Models:", "cyan"),
            view.model_count,
            self.color("Records:", "cyan"),
            view.record_count,
        ));
        if let (Some(name), Some(r2)) = (&view.best_model, view.best_r2) {
            lines.push(format!(
                "{}  {name} (R² {})",
                self.color("Best:", "cyan"),
                self.color(&format_metric(r2), "green"),
            ));
        }
        if let (Some(name), Some(rmse)) = (&view.lowest_rmse_model, view.lowest_rmse) {
            lines.push(format!(
                "{}  {name} ({})",
                self.color("Lowest RMSE:", "cyan"),
                self.color(&format_metric(rmse), "green"),
            ));
        }
        lines.push(format!(
            "{}  {} tested with lag",
            self.color("Lag features:", "cyan"),
            view.lag_feature_count,
        ));
        for section in &view.sections {
            self.heading(lines, &section.heading);
            self.bullets(lines, &section.items);
        }
    }

    fn correlation(&self, lines: &mut Vec<String>, view: &CorrelationView) {
        for pair in &view.pairs {
            let strength = pair.strength.label();
            let color = match strength {
                "strong" => "green",
                "moderate" => "yellow",
                _ => "dim",
            };
            lines.push(format!(
                "  {:<18} ↔ {:<18} {:>6.3}  {}",
                pair.var_a,
                pair.var_b,
                pair.coefficient,
                self.color(strength, color),
            ));
        }
        self.heading(lines, "Insights");
        self.bullets(lines, &view.insights);
    }

    fn category(&self, lines: &mut Vec<String>, view: &CategoryView) {
        lines.push(self.color(view.category.label(), "dim"));
        lines.push(String::new());
        self.model_table(lines, &view.models);
        if let Some(agg) = &view.aggregate {
            lines.push(format!(
                "  {} {:>8} {:>8} {:>8}",
                self.color(&format!("{:<28}", "Mean"), "dim"),
                format_metric(agg.mean_rmse),
                format_metric(agg.mean_mae),
                format_metric(agg.mean_r2),
            ));
        }
        if let Some(best) = &view.best_model {
            lines.push(format!("{}  {best}", self.color("Best:", "cyan")));
        }
        if let Some(lowest) = &view.lowest_rmse_model {
            lines.push(format!("{}  {lowest}", self.color("Lowest RMSE:", "cyan")));
        }
        self.chart(lines, &view.chart);
        self.chart(lines, &view.importance_chart);
        self.heading(lines, "Conclusions");
        self.bullets(lines, &view.conclusions);
        if !view.caveats.is_empty() {
            self.heading(lines, "Caveats");
            self.bullets(lines, &view.caveats);
        }
    }

    fn comparison(&self, lines: &mut Vec<String>, view: &ComparisonView) {
        self.chart(lines, &view.r2_chart);
        self.chart(lines, &view.rmse_chart);

        self.heading(lines, "Category means");
        for agg in &view.aggregates {
            lines.push(format!(
                "  {:<22} R² {}  RMSE {}  MAE {}",
                agg.category.label(),
                format_metric(agg.mean_r2),
                format_metric(agg.mean_rmse),
                format_metric(agg.mean_mae),
            ));
        }
        for drift in &view.drift {
            lines.push(format!(
                "  {} published {} mean {} differs from table ({})",
                self.color("!", "yellow"),
                drift.category.short_label(),
                drift.field.label(),
                format_metric(drift.derived),
            ));
        }

        self.heading(lines, "Ranking by R²");
        for ranked in &view.ranking {
            lines.push(format!(
                "  {:>2}. {:<28} R² {}  RMSE {}",
                ranked.position,
                ranked.name,
                format_metric(ranked.r2),
                format_metric(ranked.rmse),
            ));
        }

        self.heading(lines, "Lag effect");
        for effect in &view.lag_effects {
            let color = if effect.rmse_improvement_pct >= 0.0 {
                "green"
            } else {
                "red"
            };
            lines.push(format!(
                "  {:<20} RMSE {}  R² {:+.1}%",
                effect.algorithm.name(),
                self.color(&format!("{:+.1}%", effect.rmse_improvement_pct), color),
                effect.r2_improvement_pct,
            ));
        }

        self.heading(lines, "Verdict");
        lines.push(format!("  {}", view.verdict));
    }

    fn interpretability(&self, lines: &mut Vec<String>, view: &InterpretabilityView) {
        for method in &view.methods {
            lines.push(format!(
                "  {}  {}",
                self.color(&method.name, "cyan"),
                method.description
            ));
        }

        self.heading(lines, "SHAP ranking");
        for (i, rank) in view.shap_ranking.iter().enumerate() {
            lines.push(format!("  {}. {:<28} {}", i + 1, rank.feature, rank.level.label()));
        }

        self.heading(lines, "Top features (Random Forest)");
        self.importance_table(lines, &view.rf_top);

        self.heading(lines, "Method consistency");
        lines.push(format!(
            "  {} of {} agree with the Random Forest ranking",
            view.consistency.matched, view.consistency.total
        ));
        let agreement: Vec<String> = view.agreement.iter().map(FeatureAgreement::describe).collect();
        self.bullets(lines, &agreement);

        self.heading(lines, "Prediction example");
        lines.push(format!(
            "  actual {:.2} °C  predicted {:.2} °C  error {:.2} °C",
            view.prediction.actual_celsius,
            view.prediction.predicted_celsius,
            view.prediction.abs_error(),
        ));
    }

    fn data(&self, lines: &mut Vec<String>, view: &DataView) {
        let d = &view.dataset;
        let lag_days: Vec<String> = d.lag_days.iter().map(ToString::to_string).collect();
        let facts = [
            ("Source", d.source.clone()),
            ("Records", d.records.to_string()),
            ("Period", d.period.clone()),
            ("Features", format!("{} original, {} lag", d.original_features, d.lag_features)),
            ("Lag days", lag_days.join(", ")),
            ("Split", format!("{}/{} (seed {})", d.train_percent, d.test_percent(), d.random_seed)),
            ("Missing values", d.missing_values.clone()),
            ("Normalization", d.normalization.clone()),
            ("Cross-validation", d.cross_validation.clone()),
        ];
        for (label, value) in facts {
            lines.push(format!(
                "  {} {value}",
                self.color(&format!("{:<18}", format!("{label}:")), "cyan")
            ));
        }

        self.heading(lines, "Results");
        self.model_table(lines, &view.models);
        self.heading(lines, "Importance without lag");
        self.importance_table(lines, &view.importance_without_lag);
        self.heading(lines, "Importance with lag");
        self.importance_table(lines, &view.importance_with_lag);

        self.heading(lines, "Findings");
        self.bullets(lines, &view.findings);
        self.heading(lines, "Next steps");
        self.bullets(lines, &view.next_steps);
    }

    fn section(&self, lines: &mut Vec<String>, section: &ReportSection) {
        lines.push(self.color(&format!("{} {}", section.icon, section.name), "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        match &section.content {
            ViewBlock::Overview(v) => self.overview(lines, v),
            ViewBlock::Correlation(v) => self.correlation(lines, v),
            ViewBlock::ModelsWithoutLag(v) | ViewBlock::ModelsWithLag(v) => {
                self.category(lines, v);
            }
            ViewBlock::Comparison(v) => self.comparison(lines, v),
            ViewBlock::Interpretability(v) => self.interpretability(lines, v),
            ViewBlock::Data(v) => self.data(lines, v),
            ViewBlock::NotFound { id } => {
                lines.push(format!("Content not found: '{id}'"));
            }
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(
        &self,
        sections: &[ReportSection],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        if sections.is_empty() {
            return Err(ReportError::Empty);
        }

        let mut lines = Vec::new();
        if let Some(title) = &config.title {
            lines.push(self.color(title, "bold"));
            lines.push(String::new());
        }

        for (i, section) in sections.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            self.section(&mut lines, section);
        }

        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
