//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".wxbench.yaml",
    ".wxbench.yml",
    "wxbench.yaml",
    "wxbench.yml",
];

/// Directories searched for a config file, in order.
///
/// 1. Current directory
/// 2. Git repository root (if in a repo)
/// 3. User config directory (~/.config/wxbench/)
/// 4. Home directory
#[must_use]
pub fn config_search_dirs() -> Vec<PathBuf> {
    let mut found = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        found.push(cwd);
    }
    if let Some(git_root) = find_git_root() {
        if !found.contains(&git_root) {
            found.push(git_root);
        }
    }
    if let Some(config_dir) = dirs::config_dir() {
        found.push(config_dir.join("wxbench"));
    }
    if let Some(home) = dirs::home_dir() {
        found.push(home);
    }
    found
}

/// Discover a config file by searching standard locations.
///
/// An explicit path wins if it exists; otherwise each of
/// [`config_search_dirs`] is tried in order.
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    config_search_dirs()
        .iter()
        .find_map(|dir| find_config_in_dir(dir))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    // An empty file deserializes as unit, not as an empty mapping.
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml::from_str(&content)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from the defaults count as set, so CLI
    /// overrides built from `AppConfig::default()` leave file values alone.
    pub fn merge(&mut self, other: &Self) {
        let defaults = Self::default();

        if other.tui.theme != defaults.tui.theme {
            self.tui.theme.clone_from(&other.tui.theme);
        }
        if !other.tui.mouse_enabled {
            self.tui.mouse_enabled = false;
        }
        if !other.tui.show_icons {
            self.tui.show_icons = false;
        }
        if other.tui.tick_rate_ms != defaults.tui.tick_rate_ms {
            self.tui.tick_rate_ms = other.tui.tick_rate_ms;
        }

        if other.view.initial_tab.is_some() {
            self.view.initial_tab.clone_from(&other.view.initial_tab);
        }
        if other.view.output != ReportFormat::Auto {
            self.view.output = other.view.output;
        }

        if other.charts != defaults.charts {
            self.charts = other.charts;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content from the defaults.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# wxbench configuration
# Place this file at .wxbench.yaml in your project root or ~/.config/wxbench/

{}",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# wxbench configuration file
# ===========================
#
# Place it at:
#   - .wxbench.yaml in your project root
#   - ~/.config/wxbench/wxbench.yaml for global config
#
# CLI arguments always override file settings.

# Terminal UI
tui:
  # Theme: dark, light, high-contrast
  theme: dark
  mouse_enabled: true
  # Show tab icons in the tab bar
  show_icons: true
  # Event loop tick interval in milliseconds
  tick_rate_ms: 100

# View selection and output
view:
  # Tab to open first: overview, correlation, models-without-lag,
  # models-with-lag, comparison, interpretability, data
  # initial_tab: comparison
  # Format: auto, tui, summary, json, markdown
  output: auto

# Bar charts (terminal cells)
charts:
  bar_width: 9
  bar_gap: 2
"
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TuiConfig, ViewConfig};
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".wxbench.yaml");
        std::fs::write(&config_path, "tui:\n  theme: light\n").unwrap();

        assert_eq!(find_config_in_dir(tmp.path()), Some(config_path));
    }

    #[test]
    fn test_find_config_prefers_dotfile() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("wxbench.yml"), "").unwrap();
        std::fs::write(tmp.path().join(".wxbench.yml"), "").unwrap();

        assert_eq!(
            find_config_in_dir(tmp.path()),
            Some(tmp.path().join(".wxbench.yml"))
        );
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        let yaml = r"
tui:
  theme: high-contrast
  mouse_enabled: false
view:
  initial_tab: data
  output: markdown
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.tui.theme, "high-contrast");
        assert!(!config.tui.mouse_enabled);
        assert_eq!(config.view.initial_tab.as_deref(), Some("data"));
        assert_eq!(config.view.output, ReportFormat::Markdown);
    }

    #[test]
    fn test_load_empty_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("empty.yaml");
        std::fs::write(&config_path, "\n").unwrap();

        assert_eq!(load_config_file(&config_path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_parse_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("bad.yaml");
        std::fs::write(&config_path, "tui: [not, a, mapping]\n").unwrap();

        let result = load_config_file(&config_path);
        assert!(matches!(result, Err(ConfigFileError::Parse(_))));
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig {
            tui: TuiConfig {
                theme: "light".to_string(),
                ..TuiConfig::default()
            },
            view: ViewConfig {
                initial_tab: Some("data".to_string()),
                output: ReportFormat::Json,
            },
            ..AppConfig::default()
        };
        let overrides = AppConfig {
            view: ViewConfig {
                initial_tab: Some("comparison".to_string()),
                ..ViewConfig::default()
            },
            ..AppConfig::default()
        };

        base.merge(&overrides);

        assert_eq!(base.tui.theme, "light");
        assert_eq!(base.view.initial_tab.as_deref(), Some("comparison"));
        assert_eq!(base.view.output, ReportFormat::Json);
    }

    #[test]
    fn test_generated_examples_parse() {
        let example: AppConfig = serde_yaml::from_str(&generate_example_config()).unwrap();
        assert_eq!(example, AppConfig::default());

        let full: AppConfig = serde_yaml::from_str(&generate_full_example_config()).unwrap();
        assert_eq!(full, AppConfig::default());
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        std::fs::write(&config_path, "tui:\n  theme: light\n").unwrap();

        assert_eq!(discover_config_file(Some(&config_path)), Some(config_path));
    }
}
