//! Markdown escaping for report text.
//!
//! Notes and feature names are embedded verbatim in tables and lists, so
//! characters with Markdown meaning are escaped before they are written.

/// Escape a string for a Markdown table cell.
///
/// Pipes would split the cell and newlines would end the row.
pub fn escape_markdown_table(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => result.push_str("\\|"),
            '\n' => result.push(' '),
            '\r' => {}
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for use in Markdown list items.
pub fn escape_markdown_list(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' => result.push_str("\\*"),
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            '<' => result.push_str("\\<"),
            '>' => result.push_str("\\>"),
            '\n' => result.push_str("; "),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markdown_table() {
        assert_eq!(escape_markdown_table("temp_media"), "temp_media");
        assert_eq!(escape_markdown_table("a | b"), "a \\| b");
        assert_eq!(escape_markdown_table("line1\nline2"), "line1 line2");
        assert_eq!(escape_markdown_table("[x]"), "\\[x\\]");
    }

    #[test]
    fn test_escape_markdown_list() {
        assert_eq!(escape_markdown_list("RMSE < 1.3"), "RMSE \\< 1.3");
        assert_eq!(escape_markdown_list("a\r\nb"), "a; b");
        assert_eq!(escape_markdown_list("*bold*"), "\\*bold\\*");
    }
}
