//! String literal lexing.
//!
//! A string is a single line between double quotes. Escapes are validated
//! but not decoded: the token carries the raw text between the quotes.

use gqlc_util::{Position, Span};

use super::core::{LexResult, Scanner};
use crate::chars::{is_line_break, is_source_char};
use crate::error::LexError;
use crate::token::{Scalar, Token};

impl<'src> Scanner<'src> {
    /// Scans a string literal starting at the opening quote.
    pub(super) fn scan_string(&mut self) -> LexResult<'src> {
        let start = self.state.pos();
        self.state.bump();
        let body = self.state.offset();
        // position of the backslash of a pending escape
        let mut escape: Option<Position> = None;

        loop {
            let before = self.state.pos();
            let end = self.state.offset();
            let Some(c) = self.state.bump() else {
                return Err(Span::point(self.state.pos(), LexError::UnterminatedString));
            };

            if let Some(backslash) = escape.take() {
                match c {
                    'b' | 'f' | 'n' | 'r' | 't' | '/' | '"' | '\\' => {},
                    'u' => self.check_unicode_escape(backslash)?,
                    _ => {
                        return Err(Span::point(
                            before,
                            LexError::UnknownEscapeSequence(format!("\\{c}")),
                        ))
                    },
                }
                continue;
            }

            match c {
                '\\' => escape = Some(before),
                '"' => {
                    let raw = self.state.slice(body, end);
                    let token = Token::Scalar(Scalar::String(raw));
                    return Ok(Span::new(start, self.state.pos(), token));
                },
                c if is_line_break(c) => {
                    return Err(Span::point(before, LexError::UnterminatedString));
                },
                c if !is_source_char(c) => {
                    return Err(Span::point(before, LexError::UnknownCharacterInString(c)));
                },
                _ => {},
            }
        }
    }

    /// Validates the four hex digits after `\u`.
    ///
    /// `anchor` is the position of the backslash. Up to four ASCII
    /// alphanumerics are read so the error can quote what was written; any
    /// hex value is accepted, surrogates included.
    fn check_unicode_escape(&mut self, anchor: Position) -> Result<(), Span<LexError>> {
        let begin = self.state.offset();
        for _ in 0..4 {
            match self.state.peek() {
                Some(c) if c.is_ascii_alphanumeric() => {
                    self.state.bump();
                },
                _ => break,
            }
        }

        let digits = self.state.slice_from(begin);
        if digits.len() == 4 && u32::from_str_radix(digits, 16).is_ok() {
            Ok(())
        } else {
            Err(Span::point(
                anchor,
                LexError::UnknownEscapeSequence(format!("\\u{digits}")),
            ))
        }
    }
}
