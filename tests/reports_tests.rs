//! Report output integration tests.
//!
//! Every report format is built from the same view blocks the dashboard
//! renders, so these check that the numbers survive each rendering.

use wxbench::model::StudyCatalog;
use wxbench::pipeline::{render_report, ReportRequest};
use wxbench::reports::{
    create_reporter, JsonReporter, MarkdownReporter, ReportConfig, ReportFormat, ReportGenerator,
    ReportSection,
};
use wxbench::view::Dashboard;

fn report(tab: &str, format: ReportFormat, all: bool) -> String {
    let catalog = StudyCatalog::builtin();
    let mut dashboard = Dashboard::new(&catalog);
    dashboard.select_tab(tab);
    render_report(
        &dashboard,
        &ReportRequest {
            format,
            all,
            use_color: false,
        },
    )
    .unwrap()
}

#[test]
fn summary_metrics_use_four_decimals() {
    let text = report("models-without-lag", ReportFormat::Summary, false);
    assert!(text.contains("0.9121"));
    assert!(text.contains("1.1567"));
    assert!(text.contains("0.1724"));
    assert!(!text.contains('\u{1b}'));
}

#[test]
fn summary_importances_use_one_decimal_percent() {
    let text = report("models-with-lag", ReportFormat::Summary, false);
    assert!(text.contains("58.9%"));
}

#[test]
fn summary_fallback_names_the_identifier() {
    let text = report("forecast", ReportFormat::Summary, false);
    assert!(text.contains("Content not found: 'forecast'"));
}

#[test]
fn markdown_all_tabs_has_every_heading() {
    let catalog = StudyCatalog::builtin();
    let text = report("overview", ReportFormat::Markdown, true);
    for tab in &catalog.tabs {
        assert!(
            text.contains(&format!("## {} {}", tab.icon, tab.name)),
            "missing heading for {}",
            tab.id.as_str()
        );
    }
}

#[test]
fn markdown_without_charts_is_shorter() {
    let catalog = StudyCatalog::builtin();
    let mut dashboard = Dashboard::new(&catalog);
    dashboard.select_tab("comparison");
    let sections = ReportSection::collect(&dashboard, false);
    let config = ReportConfig::default();

    let with = MarkdownReporter::new().generate(&sections, &config).unwrap();
    let without = MarkdownReporter::new()
        .without_charts()
        .generate(&sections, &config)
        .unwrap();
    assert!(without.len() < with.len());
}

#[test]
fn json_all_tabs_in_descriptor_order() {
    let text = report("overview", ReportFormat::Json, true);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let ids: Vec<&str> = value["sections"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|s| s["id"].as_str())
        .collect();

    assert_eq!(
        ids,
        [
            "overview",
            "correlation",
            "models-without-lag",
            "models-with-lag",
            "comparison",
            "interpretability",
            "data"
        ]
    );
    assert_eq!(value["metadata"]["tool"]["name"], "wxbench");
}

#[test]
fn json_compact_is_single_line() {
    let catalog = StudyCatalog::builtin();
    let dashboard = Dashboard::new(&catalog);
    let sections = ReportSection::collect(&dashboard, false);

    let text = JsonReporter::new()
        .pretty(false)
        .generate(&sections, &ReportConfig::default())
        .unwrap();
    assert_eq!(text.lines().count(), 1);
}

#[test]
fn reporters_advertise_their_format() {
    assert_eq!(create_reporter(ReportFormat::Auto, false).format(), ReportFormat::Summary);
    assert_eq!(create_reporter(ReportFormat::Json, false).format(), ReportFormat::Json);
    assert_eq!(
        create_reporter(ReportFormat::Markdown, true).format(),
        ReportFormat::Markdown
    );
}

#[test]
fn write_report_matches_generate() {
    let catalog = StudyCatalog::builtin();
    let dashboard = Dashboard::new(&catalog);
    let sections = ReportSection::collect(&dashboard, true);
    let config = ReportConfig::default();
    let reporter = MarkdownReporter::new();

    let mut buf = Vec::new();
    reporter.write_report(&sections, &config, &mut buf).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        reporter.generate(&sections, &config).unwrap()
    );
}
