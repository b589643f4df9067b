//! Config file integration tests.

use std::fs;
use wxbench::config::{
    discover_config_file, load_config_file, AppConfig, ConfigFileError, Validatable,
};
use wxbench::reports::ReportFormat;

#[test]
fn partial_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".wxbench.yaml");
    fs::write(&path, "view:\n  initial_tab: data\n  output: markdown\n").unwrap();

    let config = load_config_file(&path).unwrap();
    assert_eq!(config.view.initial_tab.as_deref(), Some("data"));
    assert_eq!(config.view.output, ReportFormat::Markdown);
    assert_eq!(config.tui, AppConfig::default().tui);
    assert!(config.is_valid());
}

#[test]
fn md_alias_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wxbench.yml");
    fs::write(&path, "view:\n  output: md\n").unwrap();

    assert_eq!(
        load_config_file(&path).unwrap().view.output,
        ReportFormat::Markdown
    );
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".wxbench.yaml");
    fs::write(&path, "tui: [not, a, mapping\n").unwrap();

    assert!(matches!(
        load_config_file(&path),
        Err(ConfigFileError::Parse(_))
    ));
}

#[test]
fn invalid_values_are_reported_per_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".wxbench.yaml");
    fs::write(
        &path,
        "tui:\n  theme: solarized\n  tick_rate_ms: 0\ncharts:\n  bar_width: 0\n",
    )
    .unwrap();

    let errors = load_config_file(&path).unwrap().validate();
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert!(fields.contains(&"tui.theme"));
    assert!(fields.contains(&"tui.tick_rate_ms"));
    assert!(fields.contains(&"charts.bar_width"));
}

#[test]
fn explicit_path_wins_discovery() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("elsewhere.yaml");
    fs::write(&path, "tui:\n  theme: light\n").unwrap();

    assert_eq!(discover_config_file(Some(&path)), Some(path.clone()));
}

#[test]
fn cli_overrides_merge_over_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".wxbench.yaml");
    fs::write(&path, "tui:\n  theme: light\nview:\n  initial_tab: data\n").unwrap();

    let overrides = AppConfig::builder()
        .initial_tab(Some("comparison".to_string()))
        .mouse_enabled(false)
        .build();
    let (config, loaded_from) = AppConfig::from_file_with_overrides(Some(&path), &overrides);

    assert_eq!(loaded_from, Some(path));
    assert_eq!(config.tui.theme, "light");
    assert!(!config.tui.mouse_enabled);
    assert_eq!(config.view.initial_tab.as_deref(), Some("comparison"));
}
