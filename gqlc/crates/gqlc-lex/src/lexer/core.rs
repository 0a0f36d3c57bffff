//! Core scanner implementation.
//!
//! This module contains the [`Scanner`] struct, the position-tracking
//! [`ScanState`] every sub-scan reads through, and the top-level dispatch.

use std::iter::FusedIterator;

use gqlc_util::{Position, Span};

use crate::chars::{is_digit, is_name_start};
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::options::{ResumePolicy, ScanOptions};
use crate::token::Token;

/// One step of a scan: a spanned token, or a spanned error.
pub type LexResult<'src> = Result<Span<Token<'src>>, Span<LexError>>;

/// Cursor and position, advanced together.
///
/// `pos` always describes the characters the cursor has consumed, because
/// [`bump`](ScanState::bump) is the only way either of them moves.
#[derive(Clone, Debug)]
pub(super) struct ScanState<'src> {
    cursor: Cursor<'src>,
    pos: Position,
}

impl<'src> ScanState<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            pos: Position::new(),
        }
    }

    /// Position of the next unread character.
    #[inline]
    pub(super) fn pos(&self) -> Position {
        self.pos
    }

    #[inline]
    pub(super) fn peek(&self) -> Option<char> {
        self.cursor.peek().map(|(_, c)| c)
    }

    #[inline]
    pub(super) fn peek_nth(&self, n: usize) -> Option<char> {
        self.cursor.peek_nth(n).map(|(_, c)| c)
    }

    /// Consume one character, moving the position past it.
    #[inline]
    pub(super) fn bump(&mut self) -> Option<char> {
        let (_, c) = self.cursor.next()?;
        if c == '\n' {
            self.pos.advance_line();
        } else {
            self.pos.advance_column();
        }
        Some(c)
    }

    /// Consume characters while `predicate` holds.
    pub(super) fn bump_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&predicate) {
            self.bump();
        }
    }

    /// Byte offset of the next unread character.
    #[inline]
    pub(super) fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// Source text from `begin` up to the next unread character.
    #[inline]
    pub(super) fn slice_from(&self, begin: usize) -> &'src str {
        self.cursor.slice(begin, self.cursor.offset())
    }

    /// Source text between two byte offsets.
    #[inline]
    pub(super) fn slice(&self, begin: usize, end: usize) -> &'src str {
        self.cursor.slice(begin, end)
    }
}

/// Scanner for GraphQL-style query documents.
///
/// The scanner turns source text into spanned tokens on demand. Each call to
/// [`next_token`](Scanner::next_token) (or [`Iterator::next`]) yields:
/// - `Some(Ok(token))` for each token, ending with [`Token::Eof`]
/// - `Some(Err(error))` when the input is not lexically valid
/// - `None` once the stream is over
///
/// After [`Token::Eof`] the scanner is exhausted. After an error, what
/// happens depends on the [`ResumePolicy`] in its [`ScanOptions`].
///
/// # Example
///
/// ```
/// use gqlc_lex::{Scalar, Scanner, Token};
///
/// let mut scanner = Scanner::new("{ hero(id: 2) }");
/// let tokens: Vec<Token> = scanner
///     .by_ref()
///     .map(|result| result.map(|span| span.item))
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(tokens[1], Token::Name("hero"));
/// assert_eq!(tokens[5], Token::Scalar(Scalar::Integer(2)));
/// assert_eq!(tokens.last(), Some(&Token::Eof));
/// assert!(scanner.next().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct Scanner<'src> {
    /// Cursor and position.
    pub(super) state: ScanState<'src>,

    options: ScanOptions,

    /// Set once [`Token::Eof`] has been produced.
    reached_end: bool,

    /// Set after an error under [`ResumePolicy::Halt`].
    halted: bool,

    /// The last error left its offending character unread.
    skip_pending: bool,

    /// A control character stopped a comment before its line break.
    pub(super) comment_interrupted: bool,

    /// Tokens produced so far, for tracing.
    produced: usize,
}

static_assertions::assert_impl_all!(Scanner<'static>: Send, Sync);

impl<'src> Scanner<'src> {
    /// Creates a scanner with default options.
    pub fn new(source: &'src str) -> Self {
        Self::with_options(source, ScanOptions::default())
    }

    /// Creates a scanner with the given options.
    pub fn with_options(source: &'src str, options: ScanOptions) -> Self {
        Self {
            state: ScanState::new(source),
            options,
            reached_end: false,
            halted: false,
            skip_pending: false,
            comment_interrupted: false,
            produced: 0,
        }
    }

    /// Position of the next unread character.
    pub fn position(&self) -> Position {
        self.state.pos()
    }

    /// The options this scanner was built with.
    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// Returns true once the scanner will only yield `None`.
    pub fn is_finished(&self) -> bool {
        self.reached_end || self.halted
    }

    /// Returns the next token, error, or `None` when the stream is over.
    pub fn next_token(&mut self) -> Option<LexResult<'src>> {
        if self.is_finished() {
            return None;
        }
        let in_comment = std::mem::take(&mut self.comment_interrupted);
        if std::mem::take(&mut self.skip_pending) {
            self.state.bump();
            if in_comment {
                self.skip_comment_rest();
            }
        }

        self.skip_ignored();

        let result = self.scan_token();
        match &result {
            Ok(token) => {
                self.produced += 1;
                if token.item.is_eof() {
                    self.reached_end = true;
                    tracing::trace!(
                        tokens = self.produced,
                        at = %token.start,
                        "reached end of input"
                    );
                }
            },
            Err(error) => self.recover(error),
        }
        Some(result)
    }

    /// Dispatch on the lookahead character.
    fn scan_token(&mut self) -> LexResult<'src> {
        let start = self.state.pos();
        let Some(c) = self.state.peek() else {
            return Ok(Span::point(start, Token::Eof));
        };

        if let Some(token) = Token::punctuator(c) {
            self.state.bump();
            return Ok(Span::new(start, self.state.pos(), token));
        }

        match c {
            '.' => self.scan_ellipsis(),
            '"' => self.scan_string(),
            '-' => self.scan_number(),
            c if is_digit(c) => self.scan_number(),
            c if is_name_start(c) => Ok(self.scan_name()),
            c => Err(Span::point(start, LexError::UnknownCharacter(c))),
        }
    }

    fn recover(&mut self, error: &Span<LexError>) {
        tracing::debug!(
            error = %error.item,
            line = error.start.line() + 1,
            col = error.start.col() + 1,
            index = error.start.index(),
            "lexical error"
        );

        match self.options.resume {
            ResumePolicy::Halt => self.halted = true,
            ResumePolicy::Skip => {
                // only an unknown character can fail without consuming anything
                self.skip_pending = matches!(error.item, LexError::UnknownCharacter(_))
                    && error.start == self.state.pos();
            },
        }
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = LexResult<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl FusedIterator for Scanner<'_> {}

/// Scans a whole source, stopping at the first error.
///
/// On success the tokens end with [`Token::Eof`].
///
/// # Example
///
/// ```
/// use gqlc_lex::{tokenize, LexError, Token};
///
/// let tokens = tokenize("...").unwrap();
/// assert_eq!(tokens[0].item, Token::Ellipsis);
/// assert_eq!(tokens[1].item, Token::Eof);
///
/// let error = tokenize("..").unwrap_err();
/// assert_eq!(error.item, LexError::UnexpectedEndOfFile);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Span<Token<'_>>>, Span<LexError>> {
    Scanner::new(source).collect()
}
