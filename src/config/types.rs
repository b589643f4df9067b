//! Configuration types for the dashboard.

use super::defaults::{DEFAULT_BAR_GAP, DEFAULT_BAR_WIDTH, DEFAULT_THEME, DEFAULT_TICK_RATE_MS};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// File values are loaded first; CLI arguments are merged over them with
/// [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// TUI-specific configuration
    pub tui: TuiConfig,
    /// What to show and how to output it
    pub view: ViewConfig,
    /// Bar chart geometry
    pub charts: ChartConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.config.tui.theme = theme.into();
        self
    }

    pub const fn mouse_enabled(mut self, enabled: bool) -> Self {
        self.config.tui.mouse_enabled = enabled;
        self
    }

    pub const fn show_icons(mut self, show: bool) -> Self {
        self.config.tui.show_icons = show;
        self
    }

    pub fn initial_tab(mut self, tab: Option<String>) -> Self {
        self.config.view.initial_tab = tab;
        self
    }

    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.view.output = format;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sections
// ============================================================================

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Show tab icons in the tab bar
    pub show_icons: bool,
    /// Event loop tick interval in milliseconds
    #[schemars(range(min = 1))]
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            mouse_enabled: true,
            show_icons: true,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

/// View selection and output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ViewConfig {
    /// Tab identifier to open first; the first tab when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_tab: Option<String>,
    /// Output format
    pub output: ReportFormat,
}

/// Bar chart geometry, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ChartConfig {
    #[schemars(range(min = 1))]
    pub bar_width: u16,
    pub bar_gap: u16,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            bar_width: DEFAULT_BAR_WIDTH,
            bar_gap: DEFAULT_BAR_GAP,
        }
    }
}

// ============================================================================
// TUI Preferences (persisted)
// ============================================================================

/// TUI preferences that persist across sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiPreferences {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
}

impl Default for TuiPreferences {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl TuiPreferences {
    /// Get the path to the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("wxbench").join("preferences.json"))
    }

    /// Load preferences from disk, or return defaults if not found.
    #[must_use]
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save preferences to disk.
    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(self)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            std::fs::write(path, json)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .theme("light")
            .mouse_enabled(false)
            .initial_tab(Some("data".to_string()))
            .output_format(ReportFormat::Json)
            .build();

        assert_eq!(config.tui.theme, "light");
        assert!(!config.tui.mouse_enabled);
        assert!(config.tui.show_icons);
        assert_eq!(config.view.initial_tab.as_deref(), Some("data"));
        assert_eq!(config.view.output, ReportFormat::Json);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("charts:\n  bar_gap: 3\n").unwrap();
        assert_eq!(config.charts.bar_gap, 3);
        assert_eq!(config.charts.bar_width, DEFAULT_BAR_WIDTH);
        assert_eq!(config.tui, TuiConfig::default());
    }

    #[test]
    fn test_preferences_roundtrip_json() {
        let prefs: TuiPreferences = serde_json::from_str(r#"{"theme":"light"}"#).unwrap();
        assert_eq!(prefs.theme, "light");
    }
}
