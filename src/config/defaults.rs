//! Default values shared by the config types and the example config.

/// Theme used when neither config nor preferences name one.
pub const DEFAULT_THEME: &str = "dark";

/// Event loop tick interval in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 100;

/// Width of one bar in the TUI bar charts.
pub const DEFAULT_BAR_WIDTH: u16 = 9;

/// Gap between bars in the TUI bar charts.
pub const DEFAULT_BAR_GAP: u16 = 2;

/// Theme names accepted by `tui.theme`.
pub const THEME_NAMES: &[&str] = &["dark", "light", "high-contrast"];
