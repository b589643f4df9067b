//! Configuration validation.

use super::defaults::THEME_NAMES;
use super::types::{AppConfig, ChartConfig, TuiConfig, ViewConfig};
use crate::model::TabId;

/// One invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: String) -> Self {
        Self {
            field: field.to_string(),
            message,
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.tui.validate());
        errors.extend(self.view.validate());
        errors.extend(self.charts.validate());
        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !THEME_NAMES.contains(&self.theme.as_str()) {
            errors.push(ConfigError::new(
                "tui.theme",
                format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    THEME_NAMES.join(", ")
                ),
            ));
        }

        if self.tick_rate_ms == 0 {
            errors.push(ConfigError::new(
                "tui.tick_rate_ms",
                "Tick rate must be at least 1 ms".to_string(),
            ));
        }

        errors
    }
}

impl Validatable for ViewConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        // An unknown tab still renders (as the not-found view), but in a
        // config file it is almost certainly a typo.
        if let Some(tab) = &self.initial_tab {
            if TabId::from_id(tab).is_none() {
                let valid: Vec<&str> = TabId::ALL.iter().map(|t| t.as_str()).collect();
                errors.push(ConfigError::new(
                    "view.initial_tab",
                    format!("Unknown tab '{tab}'. Valid options: {}", valid.join(", ")),
                ));
            }
        }

        errors
    }
}

impl Validatable for ChartConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.bar_width == 0 {
            errors.push(ConfigError::new(
                "charts.bar_width",
                "Bar width must be at least 1".to_string(),
            ));
        }
        errors
    }
}
