//! Data tab - dataset facts and the raw result tables.

use crate::chart::{format_importance, format_metric};
use crate::model::FeatureImportance;
use crate::tui::theme::{category_badge, colors};
use crate::tui::widgets::{bullet_line, field_line, render_detail_panel};
use crate::view::DataView;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

pub fn render_data(frame: &mut Frame, area: Rect, view: &DataView) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(13), Constraint::Min(6)])
        .split(columns[0]);
    render_dataset(frame, left[0], view);
    render_findings(frame, left[1], view);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(view.models.len() as u16 + 3),
            Constraint::Min(4),
        ])
        .split(columns[1]);
    render_results(frame, right[0], view);

    let importance = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(right[1]);
    render_importance_table(frame, importance[0], "Without lag", &view.importance_without_lag);
    render_importance_table(frame, importance[1], "With lag", &view.importance_with_lag);
}

fn render_dataset(frame: &mut Frame, area: Rect, view: &DataView) {
    let d = &view.dataset;
    let lag_days: Vec<String> = d.lag_days.iter().map(ToString::to_string).collect();
    let lines = vec![
        field_line("Source", d.source.clone()),
        field_line("Records", d.records.to_string()),
        field_line("Period", d.period.clone()),
        field_line("Original features", d.original_features.to_string()),
        field_line("Lag features", d.lag_features.to_string()),
        field_line("Lag days", lag_days.join(", ")),
        field_line(
            "Train/test",
            format!("{}/{}", d.train_percent, d.test_percent()),
        ),
        field_line("Random seed", d.random_seed.to_string()),
        field_line("Missing values", d.missing_values.clone()),
        field_line("Normalization", d.normalization.clone()),
        field_line("Cross-validation", d.cross_validation.clone()),
    ];
    render_detail_panel(frame, area, "Dataset", lines, colors().secondary);
}

fn render_findings(frame: &mut Frame, area: Rect, view: &DataView) {
    let scheme = colors();
    let mut lines: Vec<Line<'static>> = view
        .findings
        .iter()
        .map(|text| bullet_line(text, scheme.success))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Next steps",
        Style::default().fg(scheme.primary).bold(),
    ));
    lines.extend(view.next_steps.iter().map(|text| bullet_line(text, scheme.accent)));

    render_detail_panel(frame, area, "Findings", lines, scheme.border);
}

fn render_results(frame: &mut Frame, area: Rect, view: &DataView) {
    let scheme = colors();
    let rows: Vec<Row> = view
        .models
        .iter()
        .map(|m| {
            Row::new(vec![
                Cell::from(Span::styled(
                    "■",
                    Style::default().fg(scheme.record_color(&m.color)),
                )),
                Cell::from(m.name.clone()),
                Cell::from(category_badge(m.category)),
                Cell::from(format_metric(m.rmse)),
                Cell::from(format_metric(m.mae)),
                Cell::from(format_metric(m.r2)),
            ])
        })
        .collect();

    let header = Row::new(vec!["", "Model", "", "RMSE", "MAE", "R²"])
        .style(Style::default().fg(scheme.accent).bold());
    let widths = [
        Constraint::Length(1),
        Constraint::Min(24),
        Constraint::Length(8),
        Constraint::Length(7),
        Constraint::Length(7),
        Constraint::Length(7),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(format!(" Results ({}) ", view.models.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(scheme.primary)),
    );
    frame.render_widget(table, area);
}

fn render_importance_table(frame: &mut Frame, area: Rect, title: &str, rows: &[FeatureImportance]) {
    let scheme = colors();
    let table_rows: Vec<Row> = rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.feature.clone()),
                Cell::from(format_importance(row.importance)),
            ])
        })
        .collect();

    let header = Row::new(vec!["Feature", "Share"]).style(Style::default().fg(scheme.accent).bold());
    let table = Table::new(table_rows, [Constraint::Min(16), Constraint::Length(6)])
        .header(header)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border)),
        );
    frame.render_widget(table, area);
}
