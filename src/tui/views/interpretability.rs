//! Interpretability tab - explanation methods, SHAP ranking against the
//! Random Forest importances, and a worked prediction.

use crate::chart::format_importance;
use crate::tui::theme::colors;
use crate::tui::widgets::{bullet_line, field_line, render_detail_panel, HorizontalBar};
use crate::view::InterpretabilityView;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};

pub fn render_interpretability(frame: &mut Frame, area: Rect, view: &InterpretabilityView) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[0]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(view.rf_top.len() as u16 + 2),
            Constraint::Min(4),
            Constraint::Length(5),
        ])
        .split(columns[1]);

    render_methods(frame, left[0], view);
    render_shap(frame, left[1], view);
    render_rf_top(frame, right[0], view);
    render_consistency(frame, right[1], view);
    render_prediction(frame, right[2], view);
}

fn render_methods(frame: &mut Frame, area: Rect, view: &InterpretabilityView) {
    let scheme = colors();
    let mut lines = Vec::new();
    for method in &view.methods {
        lines.push(Line::styled(
            method.name.clone(),
            Style::default().fg(scheme.primary).bold(),
        ));
        lines.push(Line::styled(
            format!("  {}", method.description),
            Style::default().fg(scheme.text),
        ));
    }
    render_detail_panel(frame, area, "Methods", lines, scheme.border);
}

fn render_shap(frame: &mut Frame, area: Rect, view: &InterpretabilityView) {
    let scheme = colors();
    let lines: Vec<Line<'static>> = view
        .shap_ranking
        .iter()
        .enumerate()
        .map(|(i, rank)| {
            Line::from(vec![
                Span::styled(format!("{}. ", i + 1), Style::default().fg(scheme.muted)),
                Span::styled(
                    format!("{:<26}", rank.feature),
                    Style::default().fg(scheme.text),
                ),
                Span::styled(
                    rank.level.label().to_string(),
                    Style::default().fg(scheme.accent).bold(),
                ),
            ])
        })
        .collect();

    render_detail_panel(frame, area, "SHAP ranking", lines, scheme.border);
}

fn render_rf_top(frame: &mut Frame, area: Rect, view: &InterpretabilityView) {
    let scheme = colors();
    let block = Block::default()
        .title(" Top features (Random Forest) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(scheme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let max = view.rf_top.first().map_or(0.0, |f| f.importance);
    for (i, row) in view.rf_top.iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.bottom() {
            break;
        }
        let bar = HorizontalBar::new(row.feature.clone(), row.importance, max)
            .text(format_importance(row.importance))
            .color(scheme.with_lag);
        frame.render_widget(bar, Rect::new(inner.x, y, inner.width, 1));
    }
}

fn render_consistency(frame: &mut Frame, area: Rect, view: &InterpretabilityView) {
    let scheme = colors();
    let consistency = &view.consistency;
    let color = if consistency.matched == consistency.total {
        scheme.success
    } else {
        scheme.warning
    };
    let mut lines = vec![Line::styled(
        format!(
            "{}/{} match the Random Forest top {}",
            consistency.matched, consistency.total, consistency.total
        ),
        Style::default().fg(color).bold(),
    )];
    lines.extend(view.agreement.iter().map(|a| {
        let bullet = if a.is_exact() { scheme.success } else { scheme.warning };
        bullet_line(&a.describe(), bullet)
    }));

    render_detail_panel(frame, area, "Method consistency", lines, scheme.border);
}

fn render_prediction(frame: &mut Frame, area: Rect, view: &InterpretabilityView) {
    let scheme = colors();
    let p = &view.prediction;
    let lines = vec![
        field_line("Actual", format!("{:.2} °C", p.actual_celsius)),
        field_line("Predicted", format!("{:.2} °C", p.predicted_celsius)),
        field_line("Error", format!("{:.2} °C", p.abs_error())),
    ];
    render_detail_panel(frame, area, "Prediction example", lines, scheme.success);
}
