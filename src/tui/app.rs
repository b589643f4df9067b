//! `DashboardApp` - interactive state wrapped around the view controller.

use crate::config::ChartConfig;
use crate::model::TabId;
use crate::view::{Dashboard, ViewBlock};

/// Main application state for the interactive dashboard.
pub struct DashboardApp<'a> {
    /// Tab selection and view derivation
    pub(crate) dashboard: Dashboard<'a>,

    /// Show help overlay
    pub(crate) show_help: bool,

    /// Show tab icons in the tab bar
    pub(crate) show_icons: bool,

    /// Whether mouse events are handled
    pub(crate) mouse_enabled: bool,

    /// Bar geometry for charts
    pub(crate) charts: ChartConfig,

    /// Status message to display temporarily
    pub(crate) status_message: Option<String>,

    /// Should quit
    pub(crate) should_quit: bool,
}

impl<'a> DashboardApp<'a> {
    #[must_use]
    pub fn new(dashboard: Dashboard<'a>) -> Self {
        Self {
            dashboard,
            show_help: false,
            show_icons: true,
            mouse_enabled: true,
            charts: ChartConfig::default(),
            status_message: None,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn with_icons(mut self, show: bool) -> Self {
        self.show_icons = show;
        self
    }

    #[must_use]
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_charts(mut self, charts: ChartConfig) -> Self {
        self.charts = charts;
        self
    }

    #[must_use]
    pub const fn dashboard(&self) -> &Dashboard<'a> {
        &self.dashboard
    }

    #[must_use]
    pub const fn active_tab(&self) -> Option<TabId> {
        self.dashboard.active_tab()
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Content of the selected tab.
    #[must_use]
    pub fn active_view(&self) -> ViewBlock {
        self.dashboard.render_active_view()
    }

    pub fn select_tab(&mut self, id: &str) {
        self.dashboard.select_tab(id);
    }

    /// Select the tab bound to a shortcut key. Returns `false` if none is.
    pub fn select_shortcut(&mut self, key: char) -> bool {
        let index = self
            .dashboard
            .tabs()
            .iter()
            .position(|t| t.shortcut == key);
        index.is_some_and(|i| self.dashboard.select_index(i))
    }

    pub fn next_tab(&mut self) {
        self.dashboard.next_tab();
    }

    pub fn prev_tab(&mut self) {
        self.dashboard.prev_tab();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn toggle_icons(&mut self) {
        self.show_icons = !self.show_icons;
        self.set_status_message(if self.show_icons {
            "Icons shown"
        } else {
            "Icons hidden"
        });
    }

    #[must_use]
    pub const fn has_overlay(&self) -> bool {
        self.show_help
    }

    pub fn close_overlays(&mut self) {
        self.show_help = false;
    }

    pub fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }
}
