//! Correlations tab - pairwise coefficients and what they mean.

use crate::tui::theme::{colors, strength_badge};
use crate::tui::widgets::{bullet_line, render_detail_panel, HorizontalBar};
use crate::view::CorrelationView;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

pub fn render_correlation(frame: &mut Frame, area: Rect, view: &CorrelationView) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(view.pairs.len() as u16 + 3),
            Constraint::Min(3),
        ])
        .split(chunks[0]);

    render_pair_table(frame, left[0], view);
    render_magnitude_bars(frame, left[1], view);

    let insights = view
        .insights
        .iter()
        .map(|text| bullet_line(text, colors().accent))
        .collect();
    render_detail_panel(frame, chunks[1], "Insights", insights, colors().border);
}

fn render_pair_table(frame: &mut Frame, area: Rect, view: &CorrelationView) {
    let scheme = colors();
    let rows: Vec<Row> = view
        .pairs
        .iter()
        .map(|pair| {
            Row::new(vec![
                Cell::from(pair.var_a.clone()),
                Cell::from(pair.var_b.clone()),
                Cell::from(Span::styled(
                    format!("{:>6.3}", pair.coefficient),
                    Style::default().fg(scheme.correlation_color(pair.strength)).bold(),
                )),
                Cell::from(strength_badge(pair.strength)),
            ])
        })
        .collect();

    let header = Row::new(vec!["Variable A", "Variable B", "r", "Strength"])
        .style(Style::default().fg(scheme.accent).bold());

    let widths = [
        Constraint::Min(16),
        Constraint::Min(16),
        Constraint::Length(7),
        Constraint::Length(11),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(format!(" Correlations ({}) ", view.pairs.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(scheme.primary)),
    );
    frame.render_widget(table, area);
}

fn render_magnitude_bars(frame: &mut Frame, area: Rect, view: &CorrelationView) {
    let scheme = colors();
    let block = Block::default()
        .title(" |r| ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(scheme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (i, pair) in view.pairs.iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.bottom() {
            break;
        }
        let row = Rect::new(inner.x, y, inner.width, 1);
        let bar = HorizontalBar::new(
            format!("{} ↔ {}", pair.var_a, pair.var_b),
            pair.coefficient.abs(),
            1.0,
        )
        .text(format!("{:.3}", pair.coefficient))
        .label_width(34)
        .color(scheme.correlation_color(pair.strength));
        frame.render_widget(bar, row);
    }
}
