//! Diagnostic module - Problem reporting for callers of the scanner.
//!
//! The scanner reports problems as plain values; this module turns such a
//! value into a [`Diagnostic`] a human can read, and renders it against the
//! [`SourceFile`] it came from.
//!
//! # Examples
//!
//! ```
//! use gqlc_util::diagnostic::{Diagnostic, DiagnosticCode};
//! use gqlc_util::span::{Position, SourceFile};
//!
//! let file = SourceFile::new("query.graphql", "{ a: \"x }");
//! let at = Position::at(9, 0, 9);
//! let diag = Diagnostic::error("unterminated string", at, at)
//!     .with_code(DiagnosticCode::new("L", 3));
//!
//! let text = diag.render(&file);
//! assert!(text.starts_with("error[L0003]: unterminated string"));
//! assert!(text.contains("--> query.graphql:1:10"));
//! ```

mod codes;
mod snippet;

pub use codes::DiagnosticCode;
pub use snippet::SourceSnippet;

use std::fmt;

use crate::span::{Position, SourceFile};

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// A problem that makes the input invalid
    Error,
    /// Additional context attached to another diagnostic
    Note,
}

impl Level {
    /// Returns the canonical name for this level
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Note => "note",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Main diagnostic message
    pub message: String,
    /// Where the problem starts
    pub start: Position,
    /// Where the problem ends (equal to `start` for point diagnostics)
    pub end: Position,
    /// Additional notes for context
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, start: Position, end: Position) -> Self {
        Self {
            level,
            code: None,
            message: message.into(),
            start,
            end,
            notes: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, start: Position, end: Position) -> Self {
        Self::new(Level::Error, message, start, end)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// The `error[L0001]: message` header line
    pub fn header(&self) -> String {
        match self.code {
            Some(code) => format!("{}[{}]: {}", self.level, code, self.message),
            None => format!("{}: {}", self.level, self.message),
        }
    }

    /// Build the snippet for this diagnostic, if its line exists in `file`
    pub fn snippet(&self, file: &SourceFile) -> Option<SourceSnippet> {
        let line = file.line(self.start.line()).ok()?;
        let end_col = if self.end.line() == self.start.line() {
            self.end.col()
        } else {
            line.chars().count()
        };
        Some(SourceSnippet::new(
            line,
            self.start.line() + 1,
            self.start.col() + 1,
            end_col + 1,
        ))
    }

    /// Render the diagnostic in the familiar compiler layout
    ///
    /// ```text
    /// error[L0001]: unknown character '%'
    ///  --> query.graphql:1:3
    ///   |
    /// 1 | { % }
    ///   |   ^
    /// ```
    pub fn render(&self, file: &SourceFile) -> String {
        let mut out = self.header();
        out.push('\n');
        out.push_str(&format!(" --> {}:{}\n", file.name(), self.start));
        if let Some(snippet) = self.snippet(file) {
            out.push_str(&snippet.format());
            out.push('\n');
        }
        for note in &self.notes {
            out.push_str(&format!("  = {}: {note}\n", Level::Note));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.header(), self.start)
    }
}
