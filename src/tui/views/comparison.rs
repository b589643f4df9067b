//! Final comparison tab - all six models side by side.

use crate::chart::format_metric;
use crate::config::ChartConfig;
use crate::tui::theme::{category_badge, colors};
use crate::tui::widgets::{chart_bar_chart, field_line, render_detail_panel};
use crate::view::ComparisonView;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

pub fn render_comparison(frame: &mut Frame, area: Rect, view: &ComparisonView, charts: ChartConfig) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let chart_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    // Six bars have to fit in half the width.
    let bar_width = charts.bar_width.min(7);
    for (spec, chart_area) in [&view.r2_chart, &view.rmse_chart].into_iter().zip(chart_row.iter()) {
        if spec.is_renderable() {
            frame.render_widget(chart_bar_chart(spec, bar_width, charts.bar_gap.min(1)), *chart_area);
        }
    }

    let detail_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    render_ranking(frame, detail_row[0], view);
    render_summary(frame, detail_row[1], view);
}

fn render_ranking(frame: &mut Frame, area: Rect, view: &ComparisonView) {
    let scheme = colors();
    let rows: Vec<Row> = view
        .ranking
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(format!("{:>2}", r.position)),
                Cell::from(r.name.clone()),
                Cell::from(category_badge(r.category)),
                Cell::from(format_metric(r.r2)),
                Cell::from(format_metric(r.rmse)),
            ])
        })
        .collect();

    let header = Row::new(vec!["#", "Model", "", "R²", "RMSE"])
        .style(Style::default().fg(scheme.accent).bold());
    let widths = [
        Constraint::Length(3),
        Constraint::Min(24),
        Constraint::Length(8),
        Constraint::Length(7),
        Constraint::Length(7),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(" Ranking by R² ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(scheme.primary)),
    );
    frame.render_widget(table, area);
}

fn render_summary(frame: &mut Frame, area: Rect, view: &ComparisonView) {
    let scheme = colors();
    let mut lines: Vec<Line<'static>> = Vec::new();

    for agg in &view.aggregates {
        lines.push(field_line(
            agg.category.label(),
            format!(
                "R² {}  RMSE {}",
                format_metric(agg.mean_r2),
                format_metric(agg.mean_rmse)
            ),
        ));
    }
    for drift in &view.drift {
        lines.push(Line::styled(
            format!(
                "  ! published {} {} {} (table {})",
                drift.category.short_label(),
                drift.field.label(),
                format_metric(drift.published),
                format_metric(drift.derived)
            ),
            Style::default().fg(scheme.warning),
        ));
    }

    lines.push(Line::from(""));
    for effect in &view.lag_effects {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<18}", effect.algorithm.name()),
                Style::default().fg(scheme.text_muted),
            ),
            Span::styled(
                format!("RMSE {:+.1}%", effect.rmse_improvement_pct),
                Style::default().fg(scheme.delta_color(effect.rmse_improvement_pct)),
            ),
            Span::raw("  "),
            Span::styled(
                format!("R² {:+.1}%", effect.r2_improvement_pct),
                Style::default().fg(scheme.delta_color(effect.r2_improvement_pct)),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(
        view.verdict.clone(),
        Style::default().fg(scheme.text).bold(),
    ));

    render_detail_panel(frame, area, "Lag effect", lines, scheme.border);
}
