//! Event handling for the dashboard.

use super::app::DashboardApp;
use crate::config::{TuiPreferences, DEFAULT_TICK_RATE_MS};
use crate::tui::theme::toggle_theme;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
    MouseEventKind,
};
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Terminal events.
#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

/// Event handler.
///
/// Polls crossterm on a background thread and forwards events over a
/// channel, emitting `Tick` whenever a poll interval passes quietly.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
    _tx: mpsc::Sender<Event>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        let tick_rate = Duration::from_millis(tick_rate_ms.max(1));

        let event_tx = tx.clone();
        thread::spawn(move || loop {
            let forwarded = if event::poll(tick_rate).unwrap_or(false) {
                match event::read() {
                    Ok(CrosstermEvent::Key(key)) => event_tx.send(Event::Key(key)),
                    Ok(CrosstermEvent::Mouse(mouse)) => event_tx.send(Event::Mouse(mouse)),
                    Ok(CrosstermEvent::Resize(w, h)) => event_tx.send(Event::Resize(w, h)),
                    _ => Ok(()),
                }
            } else {
                event_tx.send(Event::Tick)
            };
            if forwarded.is_err() {
                break;
            }
        });

        Self { rx, _tx: tx }
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx.recv().map_err(io::Error::other)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_RATE_MS)
    }
}

/// Handle key events for the dashboard.
pub fn handle_key_event(app: &mut DashboardApp<'_>, key: KeyEvent) {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return;
    }

    app.clear_status_message();

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.has_overlay() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') => app.close_overlays(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('T') => {
            // Cycle theme (dark -> light -> high-contrast) and save preference
            let theme_name = toggle_theme();
            let mut prefs = TuiPreferences::load();
            prefs.theme = theme_name.to_string();
            if let Err(e) = prefs.save() {
                tracing::debug!("Failed to save preferences: {e}");
            }
            app.set_status_message(format!("Theme: {theme_name}"));
        }
        KeyCode::Char('i') => app.toggle_icons(),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => app.prev_tab(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.prev_tab(),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.next_tab(),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if !app.select_shortcut(c) {
                app.set_status_message(format!("No tab on key {c}"));
            }
        }
        _ => {}
    }
}

/// Handle mouse events: the wheel cycles tabs, any click closes overlays.
pub fn handle_mouse_event(app: &mut DashboardApp<'_>, mouse: MouseEvent) {
    if !app.mouse_enabled {
        return;
    }

    if app.has_overlay() {
        if let MouseEventKind::Down(_) = mouse.kind {
            app.close_overlays();
        }
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollDown => app.next_tab(),
        MouseEventKind::ScrollUp => app.prev_tab(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StudyCatalog, TabId};
    use crate::view::Dashboard;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn scroll(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_digit_and_arrow_navigation() {
        let catalog = StudyCatalog::builtin();
        let mut app = DashboardApp::new(Dashboard::new(&catalog));

        handle_key_event(&mut app, key(KeyCode::Char('7')));
        assert_eq!(app.active_tab(), Some(TabId::Data));
        handle_key_event(&mut app, key(KeyCode::Right));
        assert_eq!(app.active_tab(), Some(TabId::Overview));
        handle_key_event(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.active_tab(), Some(TabId::Data));
        handle_key_event(&mut app, key(KeyCode::Char('h')));
        assert_eq!(app.active_tab(), Some(TabId::Interpretability));
    }

    #[test]
    fn test_unbound_digit_sets_status() {
        let catalog = StudyCatalog::builtin();
        let mut app = DashboardApp::new(Dashboard::new(&catalog));

        handle_key_event(&mut app, key(KeyCode::Char('9')));
        assert_eq!(app.active_tab(), Some(TabId::Overview));
        assert_eq!(app.status_message.as_deref(), Some("No tab on key 9"));
    }

    #[test]
    fn test_escape_closes_help_before_quitting() {
        let catalog = StudyCatalog::builtin();
        let mut app = DashboardApp::new(Dashboard::new(&catalog));

        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(!app.show_help);
        assert!(!app.should_quit());
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn test_keys_ignored_under_help() {
        let catalog = StudyCatalog::builtin();
        let mut app = DashboardApp::new(Dashboard::new(&catalog));

        app.toggle_help();
        handle_key_event(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.active_tab(), Some(TabId::Overview));
    }

    #[test]
    fn test_ctrl_c_quits_from_overlay() {
        let catalog = StudyCatalog::builtin();
        let mut app = DashboardApp::new(Dashboard::new(&catalog));

        app.toggle_help();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit());
    }

    #[test]
    fn test_mouse_wheel_cycles_tabs() {
        let catalog = StudyCatalog::builtin();
        let mut app = DashboardApp::new(Dashboard::new(&catalog));

        handle_mouse_event(&mut app, scroll(MouseEventKind::ScrollDown));
        assert_eq!(app.active_tab(), Some(TabId::Correlation));
        handle_mouse_event(&mut app, scroll(MouseEventKind::ScrollUp));
        handle_mouse_event(&mut app, scroll(MouseEventKind::ScrollUp));
        assert_eq!(app.active_tab(), Some(TabId::Data));
    }

    #[test]
    fn test_mouse_disabled() {
        let catalog = StudyCatalog::builtin();
        let mut app = DashboardApp::new(Dashboard::new(&catalog)).with_mouse(false);

        handle_mouse_event(&mut app, scroll(MouseEventKind::ScrollDown));
        assert_eq!(app.active_tab(), Some(TabId::Overview));
    }
}
