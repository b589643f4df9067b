//! Overview tab - study title, headline numbers and analysis structure.

use crate::chart::format_metric;
use crate::tui::theme::colors;
use crate::tui::widgets::bullet_line;
use crate::view::OverviewView;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render_overview(frame: &mut Frame, area: Rect, view: &OverviewView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Subtitle
            Constraint::Length(6), // Summary cards
            Constraint::Min(4),    // Analysis structure
        ])
        .split(area);

    let subtitle = Paragraph::new(Line::styled(
        view.subtitle.clone(),
        Style::default().fg(colors().text_muted).italic(),
    ))
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(colors().border)));
    frame.render_widget(subtitle, chunks[0]);

    render_summary_cards(frame, chunks[1], view);
    render_sections(frame, chunks[2], view);
}

fn render_summary_cards(frame: &mut Frame, area: Rect, view: &OverviewView) {
    let scheme = colors();
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    let best = view.best_model.clone().unwrap_or_else(|| "-".to_string());
    let best_r2 = view.best_r2.map_or_else(|| "-".to_string(), format_metric);
    let lowest = view.lowest_rmse_model.clone().unwrap_or_else(|| "-".to_string());
    let lowest_rmse = view.lowest_rmse.map_or_else(|| "-".to_string(), format_metric);
    let data = [
        ("Models", view.model_count.to_string(), "benchmark entries".to_string(), scheme.primary),
        ("Best R²", best_r2, best, scheme.success),
        ("Lowest RMSE", lowest_rmse, lowest, scheme.accent),
        ("Lag features", view.lag_feature_count.to_string(), "tested with lag".to_string(), scheme.secondary),
    ];

    for ((title, value, caption, color), card_area) in data.into_iter().zip(cards.iter()) {
        let content = vec![
            Line::from(Span::styled(value, Style::default().fg(color).bold())),
            Line::styled(caption, Style::default().fg(scheme.muted)),
        ];
        let card = Paragraph::new(content)
            .block(
                Block::default()
                    .title(format!(" {title} "))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
            .alignment(Alignment::Center);
        frame.render_widget(card, *card_area);
    }
}

fn render_sections(frame: &mut Frame, area: Rect, view: &OverviewView) {
    let scheme = colors();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            view.sections
                .iter()
                .map(|_| Constraint::Ratio(1, view.sections.len().max(1) as u32))
                .collect::<Vec<_>>(),
        )
        .split(area);

    for (section, column) in view.sections.iter().zip(columns.iter()) {
        let lines: Vec<Line> = section
            .items
            .iter()
            .map(|item| bullet_line(item, scheme.accent))
            .collect();
        let panel = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(format!(" {} ", section.heading))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(scheme.border)),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(panel, *column);
    }
}
