//! Span module - Source location tracking.
//!
//! This module provides the [`Position`] tracker advanced by the scanner for
//! every consumed character, and the [`Span`] wrapper that pairs a token or
//! an error with the positions it covers.
//!
//! # Examples
//!
//! ```
//! use gqlc_util::span::{Position, Span};
//!
//! let start = Position::new();
//! let mut end = start;
//! end.advance_column();
//!
//! let span = Span::new(start, end, '!');
//! assert_eq!(span.len(), 1);
//! ```

mod source_file;

pub use source_file::SourceFile;

use std::fmt;

/// A location in the source text.
///
/// All three fields are zero-based:
/// - `index` counts the characters consumed so far
/// - `line` counts the `\n` characters consumed so far
/// - `col` counts the characters consumed since the last `\n`
///
/// The only way to move a position forward is [`advance_line`] or
/// [`advance_column`], so a position never decreases.
///
/// [`advance_line`]: Position::advance_line
/// [`advance_column`]: Position::advance_column
///
/// # Examples
///
/// ```
/// use gqlc_util::span::Position;
///
/// let mut pos = Position::new();
/// pos.advance_column();
/// pos.advance_column();
/// pos.advance_line();
/// assert_eq!((pos.index(), pos.line(), pos.col()), (3, 1, 0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    index: usize,
    line: usize,
    col: usize,
}

static_assertions::assert_impl_all!(Position: Send, Sync, Copy);

impl Position {
    /// The position before any character has been consumed
    pub const ORIGIN: Position = Position {
        index: 0,
        line: 0,
        col: 0,
    };

    /// Create a position at the start of the source
    #[inline]
    pub const fn new() -> Self {
        Self::ORIGIN
    }

    /// Create a position from raw coordinates
    ///
    /// Intended for building expected values; a scanner only ever moves a
    /// position through [`advance_line`](Position::advance_line) and
    /// [`advance_column`](Position::advance_column).
    #[inline]
    pub const fn at(index: usize, line: usize, col: usize) -> Self {
        Self { index, line, col }
    }

    /// Record the consumption of a `\n`
    #[inline]
    pub fn advance_line(&mut self) {
        self.index += 1;
        self.line += 1;
        self.col = 0;
    }

    /// Record the consumption of any character other than `\n`
    #[inline]
    pub fn advance_column(&mut self) {
        self.index += 1;
        self.col += 1;
    }

    /// Characters consumed so far
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Zero-based line number
    #[inline]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Zero-based column, in characters
    #[inline]
    pub const fn col(&self) -> usize {
        self.col
    }
}

/// Renders as one-based `line:col`, the form editors expect.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

/// A value pinned to a region of the source.
///
/// `end` is exclusive: it is the position just past the last consumed
/// character. Errors and the end-of-file token use zero-width spans
/// (`start == end`).
///
/// # Examples
///
/// ```
/// use gqlc_util::span::{Position, Span};
///
/// let at = Position::at(4, 0, 4);
/// let span = Span::point(at, "unterminated");
/// assert!(span.is_empty());
/// assert_eq!(span.map(str::len).item, 12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span<T> {
    /// First position covered
    pub start: Position,
    /// Position just past the last character covered
    pub end: Position,
    /// The spanned value
    pub item: T,
}

impl<T> Span<T> {
    /// Create a span covering `start..end`
    #[inline]
    pub fn new(start: Position, end: Position, item: T) -> Self {
        debug_assert!(start <= end, "span ends before it starts");
        Self { start, end, item }
    }

    /// Create a zero-width span at a single position
    #[inline]
    pub fn point(at: Position, item: T) -> Self {
        Self {
            start: at,
            end: at,
            item,
        }
    }

    /// Returns true if the span covers no characters
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of characters covered
    #[inline]
    pub fn len(&self) -> usize {
        self.end.index - self.start.index
    }

    /// Check if a position falls inside the span (end excluded)
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Transform the spanned value, keeping the positions
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Span<U> {
        Span {
            start: self.start,
            end: self.end,
            item: f(self.item),
        }
    }

    /// Borrow the spanned value
    #[inline]
    pub fn as_ref(&self) -> Span<&T> {
        Span {
            start: self.start,
            end: self.end,
            item: &self.item,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Span<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.start, self.item)
    }
}

impl<T: std::error::Error + 'static> std::error::Error for Span<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.item)
    }
}
