//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs, one per subcommand.

mod config;
mod tabs;
mod view;

pub use config::{run_config_init, run_config_path, run_config_schema, run_config_show};
pub use tabs::run_tabs;
pub use view::{resolve_theme, run_view, ViewOptions};

pub use crate::config::AppConfig;
