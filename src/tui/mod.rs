//! Interactive terminal dashboard using ratatui.
//!
//! [`DashboardApp`] wraps the tab controller with terminal-only state
//! (help overlay, icons, status line). `ui` draws it, `events` maps
//! keys and mouse input onto it, and `views` holds one renderer per
//! view block.

mod app;
mod events;
pub mod theme;
mod ui;
pub(crate) mod views;
pub(crate) mod widgets;

pub use theme::{
    ColorScheme, FooterHints, Styles, Theme, colors, current_theme_name, set_theme, toggle_theme,
};

pub use app::DashboardApp;
pub use events::{Event, EventHandler};
pub use ui::run_dashboard_tui;
