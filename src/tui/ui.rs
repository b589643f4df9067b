//! Terminal setup and the top-level render function.

use super::app::DashboardApp;
use super::events::{handle_key_event, handle_mouse_event, Event, EventHandler};
use super::views;
use crate::analysis;
use crate::chart::format_metric;
use crate::model::MetricField;
use crate::tui::theme::{colors, render_footer_hints, FooterHints};
use crate::tui::widgets::{self, check_terminal_size, render_size_warning, MIN_HEIGHT, MIN_WIDTH};
use crate::view::Selection;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
};
use std::io::{self, stdout, Write};
use std::sync::Once;

/// Run the dashboard until the user quits.
pub fn run_dashboard_tui(app: &mut DashboardApp<'_>, tick_rate_ms: u64) -> io::Result<()> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = stdout();
    if app.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(tick_rate_ms);
    let result = event_loop(&mut terminal, app, &events);

    // Restore the terminal even when the loop failed
    let restored = restore_terminal(terminal.backend_mut());
    result.and(restored)
}

/// Leave raw mode, the alternate screen and mouse capture.
///
/// Every step runs even when an earlier one fails; the first error wins.
fn restore_terminal(out: &mut impl Write) -> io::Result<()> {
    first_error([
        disable_raw_mode(),
        execute!(out, LeaveAlternateScreen, DisableMouseCapture),
        execute!(out, Show),
    ])
}

fn first_error<const N: usize>(results: [io::Result<()>; N]) -> io::Result<()> {
    results.into_iter().find(Result::is_err).unwrap_or(Ok(()))
}

/// Restore the terminal before the panic message is printed.
fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal(&mut io::stdout());
            previous(info);
        }));
    });
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut DashboardApp<'_>,
    events: &EventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            Event::Resize(_, _) | Event::Tick => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Main render function.
pub fn render(frame: &mut Frame, app: &DashboardApp<'_>) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Tabs
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_tabs(frame, chunks[1], app);
    views::render_block(frame, chunks[2], &app.active_view(), app.charts);
    render_status_bar(frame, chunks[3], app);
    render_footer(frame, chunks[4], app);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &DashboardApp<'_>) {
    let scheme = colors();
    let catalog = app.dashboard().catalog();

    let header_line = Line::from(vec![
        Span::styled("wxbench", Style::default().fg(scheme.primary).bold()),
        Span::styled(" │ ", Style::default().fg(scheme.muted)),
        Span::styled(
            catalog.notes.title.clone(),
            Style::default().fg(scheme.text).bold(),
        ),
        Span::styled(" │ ", Style::default().fg(scheme.muted)),
        Span::styled(
            format!("{} {}", catalog.dataset.source, catalog.dataset.period),
            Style::default().fg(scheme.text_muted),
        ),
    ]);

    frame.render_widget(Paragraph::new(header_line), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &DashboardApp<'_>) {
    let scheme = colors();
    let active = app.dashboard().active_index();

    let titles: Vec<Line> = app
        .dashboard()
        .tabs()
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let style = if Some(i) == active {
                Style::default().fg(scheme.accent).bold()
            } else {
                Style::default().fg(scheme.text_muted)
            };
            let key_style = if Some(i) == active {
                style
            } else {
                Style::default().fg(scheme.muted)
            };
            let title = if app.show_icons {
                format!(" {} {} ", tab.icon, tab.name)
            } else {
                format!(" {} ", tab.name)
            };
            Line::from(vec![
                Span::styled(format!("[{}]", tab.shortcut), key_style),
                Span::styled(title, style),
            ])
        })
        .collect();

    // Tabs always highlights something; with no active tab the style is muted.
    let highlight = if active.is_some() {
        Style::default().fg(scheme.accent)
    } else {
        Style::default().fg(scheme.text_muted)
    };

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(scheme.border)),
        )
        .highlight_style(highlight)
        .select(active.unwrap_or(0))
        .divider(Span::styled(" │ ", Style::default().fg(scheme.muted)));

    frame.render_widget(tabs, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &DashboardApp<'_>) {
    let scheme = colors();
    let catalog = app.dashboard().catalog();

    let (tab_label, tab_color) = match app.dashboard().selection() {
        Selection::Tab(tab) => (tab.as_str().to_string(), scheme.primary),
        Selection::Unknown(id) => (format!("{id} (not found)"), scheme.warning),
    };

    let mut spans = vec![
        Span::styled(" Tab: ", Style::default().fg(scheme.text_muted)),
        Span::styled(tab_label, Style::default().fg(tab_color).bold()),
        Span::styled(" │ ", Style::default().fg(scheme.muted)),
        Span::styled("Models: ", Style::default().fg(scheme.text_muted)),
        Span::styled(
            catalog.models.len().to_string(),
            Style::default().fg(scheme.primary).bold(),
        ),
    ];

    if let Some(best) = analysis::best_by(&catalog.models, MetricField::R2) {
        spans.push(Span::styled(" │ ", Style::default().fg(scheme.muted)));
        spans.push(Span::styled("Best: ", Style::default().fg(scheme.text_muted)));
        spans.push(Span::styled(
            format!("{} (R² {})", best.name, format_metric(best.r2)),
            Style::default().fg(scheme.success),
        ));
    }

    let status =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(scheme.background_alt));
    frame.render_widget(status, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &DashboardApp<'_>) {
    let scheme = colors();

    if let Some(msg) = &app.status_message {
        let status_line = Line::from(vec![
            Span::styled("ℹ ", Style::default().fg(scheme.accent)),
            Span::styled(msg.clone(), Style::default().fg(scheme.accent).bold()),
        ]);
        frame.render_widget(
            Paragraph::new(status_line).alignment(Alignment::Center),
            area,
        );
        return;
    }

    let hints = FooterHints::for_tab(app.active_tab());
    let footer = Paragraph::new(Line::from(render_footer_hints(&hints)))
        .alignment(Alignment::Center)
        .style(Style::default().fg(scheme.text_muted));
    frame.render_widget(footer, area);
}

fn help_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<15}"), Style::default().fg(colors().accent)),
        Span::styled(description.to_string(), Style::default().fg(colors().text)),
    ])
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let popup_area = widgets::centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::styled(
            "━━━ Dashboard Help ━━━",
            Style::default().fg(scheme.accent).bold(),
        ),
        Line::from(""),
        Line::styled("Navigation", Style::default().fg(scheme.primary).bold()),
        help_line("1-7", "Jump to tab"),
        help_line("Tab / → / l", "Next tab"),
        help_line("S-Tab / ← / h", "Previous tab"),
        help_line("Mouse wheel", "Cycle tabs"),
        Line::from(""),
        Line::styled("Display", Style::default().fg(scheme.primary).bold()),
        help_line("i", "Toggle tab icons"),
        help_line("T", "Cycle theme (dark/light/high-contrast)"),
        help_line("?", "Toggle this help"),
        help_line("q / Esc", "Quit / Close overlay"),
        Line::from(""),
        Line::styled("Press Esc to close", Style::default().fg(scheme.text_muted)),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .title_style(Style::default().fg(scheme.accent).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.accent)),
        )
        .style(Style::default().fg(scheme.text));

    frame.render_widget(help, popup_area);
}
