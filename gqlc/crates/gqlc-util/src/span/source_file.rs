//! Source file line index.
//!
//! [`SourceFile`] maps the character-based [`Position`]s produced by the
//! scanner back to byte offsets and source lines, which is what diagnostics
//! need to print a snippet.

use std::sync::Arc;

use super::Position;
use crate::error::{SourceError, SourceResult};

/// A named source text with precomputed line starts.
///
/// Lines are split on `\n` only, matching how [`Position::advance_line`]
/// counts them.
///
/// # Examples
///
/// ```
/// use gqlc_util::span::SourceFile;
///
/// let file = SourceFile::new("query.graphql", "{\n  hero\n}");
/// assert_eq!(file.name(), "query.graphql");
/// assert_eq!(file.line_count(), 3);
/// assert_eq!(file.line(1).unwrap(), "  hero");
/// ```
#[derive(Clone)]
pub struct SourceFile {
    name: String,
    content: Arc<str>,
    /// Byte offset of the first character of every line
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a source file and index its lines
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect()
    }

    /// Display name of the file
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full text of the file
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of lines (a trailing `\n` opens one more, empty line)
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Text of a zero-based line, without its line terminator
    pub fn line(&self, line: usize) -> SourceResult<&str> {
        let start = *self.line_starts.get(line).ok_or(SourceError::InvalidLine {
            line,
            max_lines: self.line_count(),
        })?;
        let end = self
            .line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.content.len());
        Ok(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Byte offset of a position
    ///
    /// A column one past the last character of a line resolves to the
    /// offset of that line's terminator (or to the end of the file).
    ///
    /// # Examples
    ///
    /// ```
    /// use gqlc_util::span::{Position, SourceFile};
    ///
    /// let file = SourceFile::new("q", "é\nab");
    /// assert_eq!(file.byte_offset(Position::at(3, 1, 1)).unwrap(), 4);
    /// ```
    pub fn byte_offset(&self, pos: Position) -> SourceResult<usize> {
        let out_of_bounds = SourceError::OutOfBounds {
            index: pos.index(),
            len: self.content.chars().count(),
        };
        let line_start = *self
            .line_starts
            .get(pos.line())
            .ok_or_else(|| out_of_bounds.clone())?;
        let line_end = self
            .line_starts
            .get(pos.line() + 1)
            .map_or(self.content.len(), |next| next - 1);
        let line = &self.content[line_start..line_end];

        match line.char_indices().nth(pos.col()) {
            Some((offset, _)) => Ok(line_start + offset),
            None if pos.col() == line.chars().count() => Ok(line_end),
            None => Err(out_of_bounds),
        }
    }

    /// Text between two positions
    ///
    /// # Examples
    ///
    /// ```
    /// use gqlc_util::span::{Position, SourceFile};
    ///
    /// let file = SourceFile::new("q", "{ hero }");
    /// let text = file.extract(Position::at(2, 0, 2), Position::at(6, 0, 6)).unwrap();
    /// assert_eq!(text, "hero");
    /// ```
    pub fn extract(&self, start: Position, end: Position) -> SourceResult<&str> {
        if start > end {
            return Err(SourceError::InvalidRange {
                start: start.index(),
                end: end.index(),
            });
        }
        let from = self.byte_offset(start)?;
        let to = self.byte_offset(end)?;
        Ok(&self.content[from..to])
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}
