//! Source snippets shown under a diagnostic header.

/// One source line with a caret marker under the offending columns.
///
/// # Examples
///
/// ```
/// use gqlc_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("{ hero }", 1, 3, 7);
/// assert_eq!(snippet.format(), "  |\n1 | { hero }\n  |   ^^^^");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the marker starts (1-based)
    pub start_column: usize,
    /// Column where the marker ends, exclusive (1-based)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
        }
    }

    /// Format the snippet for display
    ///
    /// A zero-width range still gets a single caret. Tabs before the marker
    /// are repeated in the indent so the caret lines up however wide the
    /// terminal draws them; other control characters print as spaces.
    pub fn format(&self) -> String {
        let number = self.line_number.to_string();
        let gutter = " ".repeat(number.len());
        let line: String = self.line.chars().map(printable).collect();
        let indent: String = line
            .chars()
            .chain(std::iter::repeat(' '))
            .take(self.start_column.saturating_sub(1))
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        let carets = "^".repeat(self.end_column.saturating_sub(self.start_column).max(1));

        format!("{gutter} |\n{number} | {line}\n{gutter} | {indent}{carets}")
    }
}

fn printable(c: char) -> char {
    if c == '\t' || !c.is_control() {
        c
    } else {
        ' '
    }
}
