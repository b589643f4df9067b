//! Model tabs - one lag category's results, chart and feature importances.

use crate::chart::{format_importance, format_metric};
use crate::config::ChartConfig;
use crate::tui::theme::{category_badge, colors};
use crate::tui::widgets::{bullet_line, chart_bar_chart, render_detail_panel, HorizontalBar};
use crate::view::CategoryView;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

pub fn render_category(frame: &mut Frame, area: Rect, view: &CategoryView, charts: ChartConfig) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(8)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[0]);
    render_results_table(frame, top[0], view);
    render_importances(frame, top[1], view);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);
    if view.chart.is_renderable() {
        frame.render_widget(
            chart_bar_chart(&view.chart, charts.bar_width, charts.bar_gap),
            bottom[0],
        );
    }
    render_notes(frame, bottom[1], view);
}

fn render_results_table(frame: &mut Frame, area: Rect, view: &CategoryView) {
    let scheme = colors();
    let best = view.best_model.as_deref();

    let mut rows: Vec<Row> = view
        .models
        .iter()
        .map(|m| {
            let name_style = if Some(m.name.as_str()) == best {
                Style::default().fg(scheme.success).bold()
            } else {
                Style::default().fg(scheme.text)
            };
            Row::new(vec![
                Cell::from(Span::styled(m.name.clone(), name_style)),
                Cell::from(format_metric(m.rmse)),
                Cell::from(format_metric(m.mae)),
                Cell::from(format_metric(m.r2)),
            ])
        })
        .collect();

    if let Some(agg) = &view.aggregate {
        rows.push(
            Row::new(vec![
                Cell::from("Mean"),
                Cell::from(format_metric(agg.mean_rmse)),
                Cell::from(format_metric(agg.mean_mae)),
                Cell::from(format_metric(agg.mean_r2)),
            ])
            .style(Style::default().fg(scheme.text_muted).italic()),
        );
    }

    let header = Row::new(vec!["Model", "RMSE", "MAE", "R²"])
        .style(Style::default().fg(scheme.accent).bold());
    let widths = [
        Constraint::Min(26),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(8),
    ];

    let title = Line::from(vec![
        Span::raw(" "),
        category_badge(view.category),
        Span::raw(format!(" {} ", view.category.label())),
    ]);
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(scheme.category_color(view.category))),
    );
    frame.render_widget(table, area);
}

fn render_importances(frame: &mut Frame, area: Rect, view: &CategoryView) {
    let scheme = colors();
    let block = Block::default()
        .title(format!(" {} ", view.importance_chart.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(scheme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let max = view.importance_chart.max_value();
    let color = scheme.record_color(&view.importance_chart.legend_color);
    for (i, row) in view.importances.iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.bottom() {
            break;
        }
        let bar = HorizontalBar::new(row.feature.clone(), row.importance, max)
            .text(format_importance(row.importance))
            .color(color);
        frame.render_widget(bar, Rect::new(inner.x, y, inner.width, 1));
    }
}

fn render_notes(frame: &mut Frame, area: Rect, view: &CategoryView) {
    let scheme = colors();
    let mut lines: Vec<Line<'static>> = view
        .conclusions
        .iter()
        .map(|text| bullet_line(text, scheme.success))
        .collect();

    if !view.caveats.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            "Caveats",
            Style::default().fg(scheme.warning).bold(),
        ));
        lines.extend(view.caveats.iter().map(|text| bullet_line(text, scheme.warning)));
    }

    render_detail_panel(frame, area, "Conclusions", lines, scheme.border);
}
