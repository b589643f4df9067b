//! Configuration module.
//!
//! - Type-safe configuration structures with defaults
//! - Validation of every configuration value
//! - YAML config file loading and discovery
//! - CLI argument merging
//! - Persisted TUI preferences
//!
//! # Configuration File
//!
//! Place a `.wxbench.yaml` file in your project root or `~/.config/wxbench/`:
//!
//! ```yaml
//! tui:
//!   theme: light
//! view:
//!   initial_tab: comparison
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_BAR_GAP, DEFAULT_BAR_WIDTH, DEFAULT_THEME, DEFAULT_TICK_RATE_MS, THEME_NAMES,
};
pub use types::{AppConfig, AppConfigBuilder, ChartConfig, TuiConfig, TuiPreferences, ViewConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    config_search_dirs, discover_config_file, generate_example_config,
    generate_full_example_config, load_config_file, load_or_default, ConfigFileError,
    CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.wxbench.yaml` files.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
