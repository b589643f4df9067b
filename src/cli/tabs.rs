//! Tabs command handler: list the tab registry.

use crate::model::StudyCatalog;
use crate::pipeline::exit_codes;
use anyhow::Result;
use std::io::Write;

/// Print one line per tab: shortcut, identifier and display name.
pub fn run_tabs(out: &mut dyn Write) -> Result<i32> {
    let catalog = StudyCatalog::builtin();
    let id_width = catalog
        .tabs
        .iter()
        .map(|t| t.id.as_str().len())
        .max()
        .unwrap_or(0);

    for tab in &catalog.tabs {
        writeln!(
            out,
            "{}  {:<id_width$}  {}",
            tab.shortcut,
            tab.id.as_str(),
            tab.name
        )?;
    }
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tabs_lists_registry_in_order() {
        let mut out = Vec::new();
        run_tabs(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("1  overview"));
        assert!(lines[2].starts_with("3  models-without-lag"));
        assert!(lines[6].starts_with("7  data"));
    }
}
