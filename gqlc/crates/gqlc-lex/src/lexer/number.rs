//! Number literal lexing.
//!
//! Grammar: `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`.
//! A literal with a fraction or an exponent is a float; anything else is a
//! 64-bit signed integer.

use gqlc_util::Span;

use super::core::{LexResult, Scanner};
use crate::chars::is_digit;
use crate::error::LexError;
use crate::token::{Scalar, Token};

impl<'src> Scanner<'src> {
    /// Scans an integer or float literal.
    ///
    /// Errors are zero-width and sit at the character that broke the
    /// grammar, which is left unread. An integer that does not fit in `i64`
    /// is reported at the first digit that overflows it.
    pub(super) fn scan_number(&mut self) -> LexResult<'src> {
        let start = self.state.pos();
        let begin = self.state.offset();
        let Some(lead) = self.state.peek() else {
            return Err(self.expected_digit());
        };
        let negative = lead == '-';
        let mut is_float = false;
        let mut value: i64 = 0;
        let mut overflow = None;

        if negative {
            self.state.bump();
        }

        match self.state.peek() {
            Some('0') => {
                self.state.bump();
                if let Some(c) = self.state.peek().filter(|c| is_digit(*c)) {
                    return Err(Span::point(self.state.pos(), LexError::UnexpectedCharacter(c)));
                }
            },
            Some(c) if is_digit(c) => {
                while let Some(c) = self.state.peek().filter(|c| is_digit(*c)) {
                    if overflow.is_none() {
                        match push_digit(value, c, negative) {
                            Some(next) => value = next,
                            None => {
                                overflow = Some(Span::point(
                                    self.state.pos(),
                                    LexError::UnexpectedCharacter(c),
                                ));
                            },
                        }
                    }
                    self.state.bump();
                }
            },
            _ => return Err(self.expected_digit()),
        }

        if self.state.peek() == Some('.') {
            is_float = true;
            self.state.bump();
            self.require_digits()?;
        }

        if let Some('e' | 'E') = self.state.peek() {
            is_float = true;
            self.state.bump();
            if let Some('+' | '-') = self.state.peek() {
                self.state.bump();
            }
            self.require_digits()?;
        }

        let scalar = if is_float {
            let text = self.state.slice_from(begin);
            // the grammar above is a subset of what `f64` parses
            match text.parse() {
                Ok(float) => Scalar::Float(float),
                Err(_) => {
                    debug_assert!(false, "float literal {text:?} rejected by f64");
                    return Err(Span::point(start, LexError::UnexpectedCharacter(lead)));
                },
            }
        } else if let Some(error) = overflow {
            return Err(error);
        } else {
            Scalar::Integer(value)
        };

        Ok(Span::new(start, self.state.pos(), Token::Scalar(scalar)))
    }

    /// Consumes one or more digits.
    fn require_digits(&mut self) -> Result<(), Span<LexError>> {
        match self.state.peek() {
            Some(c) if is_digit(c) => {
                self.state.bump_while(is_digit);
                Ok(())
            },
            _ => Err(self.expected_digit()),
        }
    }

    fn expected_digit(&self) -> Span<LexError> {
        let error = match self.state.peek() {
            Some(c) => LexError::UnexpectedCharacter(c),
            None => LexError::UnexpectedEndOfFile,
        };
        Span::point(self.state.pos(), error)
    }
}

/// Appends a decimal digit to a running integer, or `None` on overflow.
///
/// Negative literals accumulate downwards so `i64::MIN` fits.
fn push_digit(value: i64, digit: char, negative: bool) -> Option<i64> {
    let digit = i64::from(digit.to_digit(10)?);
    let shifted = value.checked_mul(10)?;
    if negative {
        shifted.checked_sub(digit)
    } else {
        shifted.checked_add(digit)
    }
}
