//! Character cursor for traversing source text.
//!
//! The [`Cursor`] hands out the characters of a source string one at a time,
//! together with their byte offsets. It never moves backwards and it knows
//! nothing about lines or columns: the scanner advances its
//! [`Position`](gqlc_util::Position) next to every [`Cursor::next`] call.

use std::iter::FusedIterator;
use std::str::CharIndices;

/// A forward-only cursor over the characters of a source string.
///
/// # Example
///
/// ```
/// use gqlc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("{é}");
/// assert_eq!(cursor.peek(), Some((0, '{')));
/// assert_eq!(cursor.next(), Some((0, '{')));
/// assert_eq!(cursor.peek_nth(1), Some((3, '}')));
/// assert_eq!(cursor.next(), Some((1, 'é')));
/// assert_eq!(cursor.next(), Some((3, '}')));
/// assert_eq!(cursor.next(), None);
/// assert_eq!(cursor.peek(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'src> {
    /// The source text being traversed.
    source: &'src str,

    /// Characters not consumed yet.
    chars: CharIndices<'src>,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor positioned before the first character.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices(),
        }
    }

    /// Returns the next character and its byte offset without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<(usize, char)> {
        self.chars.clone().next()
    }

    /// Looks `n` characters past [`peek`](Cursor::peek) without consuming.
    ///
    /// `peek_nth(0)` is the same as `peek()`.
    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<(usize, char)> {
        self.chars.clone().nth(n)
    }

    /// Byte offset of the next unread character (source length at the end).
    #[inline]
    pub fn offset(&self) -> usize {
        self.source.len() - self.chars.as_str().len()
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    /// The unread remainder of the source.
    #[inline]
    pub fn remaining(&self) -> &'src str {
        self.chars.as_str()
    }

    /// The whole source text.
    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Source text between two byte offsets previously reported by this
    /// cursor. Offsets that do not fall on character boundaries give `""`.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'src str {
        self.source.get(start..end).unwrap_or_default()
    }
}

impl Iterator for Cursor<'_> {
    type Item = (usize, char);

    /// Consumes the next character, returning it with its byte offset.
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.chars.next()
    }
}

impl FusedIterator for Cursor<'_> {}
