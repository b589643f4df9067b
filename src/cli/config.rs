//! Config command handlers: `config show|path|init` and `config-schema`.

use crate::config::{
    config_search_dirs, discover_config_file, generate_full_example_config,
    generate_json_schema, load_or_default, Validatable, CONFIG_FILE_NAMES,
};
use crate::pipeline::exit_codes;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Print the effective configuration as YAML.
pub fn run_config_show(explicit: Option<&Path>, out: &mut dyn Write) -> Result<i32> {
    let (config, loaded_from) = load_or_default(explicit);
    match &loaded_from {
        Some(path) => writeln!(out, "# Loaded from: {}", path.display())?,
        None => writeln!(out, "# No config file found; showing defaults")?,
    }
    for problem in config.validate() {
        writeln!(out, "# warning: {problem}")?;
    }
    let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
    write!(out, "{yaml}")?;
    Ok(exit_codes::SUCCESS)
}

/// Print the search paths, recognized names and the active file.
pub fn run_config_path(explicit: Option<&Path>, out: &mut dyn Write) -> Result<i32> {
    writeln!(out, "Config file search paths (in order):")?;
    if let Some(path) = explicit {
        writeln!(out, "  {} (--config)", path.display())?;
    }
    for dir in config_search_dirs() {
        writeln!(out, "  {}", dir.display())?;
    }
    writeln!(out)?;
    writeln!(out, "Recognized file names:")?;
    for name in CONFIG_FILE_NAMES {
        writeln!(out, "  {name}")?;
    }
    writeln!(out)?;
    match discover_config_file(explicit) {
        Some(path) => writeln!(out, "Active config file: {}", path.display())?,
        None => writeln!(out, "No config file found.")?,
    }
    Ok(exit_codes::SUCCESS)
}

/// Write an example `.wxbench.yaml` into `dir`, refusing to overwrite.
pub fn run_config_init(dir: &Path) -> Result<i32> {
    let target = dir.join(".wxbench.yaml");
    if target.exists() {
        anyhow::bail!(
            "{} already exists. Remove it first to re-initialize.",
            target.display()
        );
    }
    std::fs::write(&target, generate_full_example_config())
        .with_context(|| format!("failed to write {}", target.display()))?;
    tracing::info!("Created {}", target.display());
    Ok(exit_codes::SUCCESS)
}

/// Print the config JSON schema, or write it to `output`.
pub fn run_config_schema(output: Option<&Path>, out: &mut dyn Write) -> Result<i32> {
    let schema = generate_json_schema().context("failed to generate config schema")?;
    match output {
        Some(path) => {
            std::fs::write(path, &schema)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Schema written to {}", path.display());
        }
        None => writeln!(out, "{schema}")?,
    }
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_file;

    #[test]
    fn test_config_show_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.yaml");
        std::fs::write(&path, "tui:\n  theme: light\n").unwrap();

        let mut out = Vec::new();
        run_config_show(Some(&path), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("# Loaded from:"));
        assert!(text.contains("theme: light"));
    }

    #[test]
    fn test_config_show_reports_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "view:\n  initial_tab: forecast\n").unwrap();

        let mut out = Vec::new();
        run_config_show(Some(&path), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("# warning: view.initial_tab"));
    }

    #[test]
    fn test_config_init_writes_loadable_file() {
        let dir = tempfile::tempdir().unwrap();
        run_config_init(dir.path()).unwrap();

        let written = dir.path().join(".wxbench.yaml");
        assert!(load_config_file(&written).is_ok());
        assert!(run_config_init(dir.path()).is_err());
    }

    #[test]
    fn test_config_path_lists_names() {
        let mut out = Vec::new();
        run_config_path(None, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(".wxbench.yaml"));
        assert!(text.contains("Recognized file names:"));
    }

    #[test]
    fn test_config_schema_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");
        let mut out = Vec::new();

        run_config_schema(Some(&path), &mut out).unwrap();
        assert!(out.is_empty());
        let schema: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert!(schema["properties"].get("tui").is_some());
    }
}
