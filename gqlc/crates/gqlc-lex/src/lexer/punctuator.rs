//! Multi-character punctuators.
//!
//! The single-character punctuators are mapped by [`Token::punctuator`] in the
//! dispatch; only the spread needs a scan of its own.

use gqlc_util::Span;

use super::core::{LexResult, Scanner};
use crate::chars::is_digit;
use crate::error::LexError;
use crate::token::Token;

impl<'src> Scanner<'src> {
    /// Scans `...`.
    ///
    /// A dot followed by a digit looks like a float missing its leading
    /// zero; it is rejected as an unknown character before anything is
    /// consumed.
    pub(super) fn scan_ellipsis(&mut self) -> LexResult<'src> {
        let start = self.state.pos();

        if self.state.peek_nth(1).is_some_and(is_digit) {
            return Err(Span::point(start, LexError::UnknownCharacter('.')));
        }

        for _ in 0..3 {
            match self.state.peek() {
                Some('.') => {
                    self.state.bump();
                },
                Some(_) => return Err(Span::point(start, LexError::UnexpectedCharacter('.'))),
                None => return Err(Span::point(self.state.pos(), LexError::UnexpectedEndOfFile)),
            }
        }

        Ok(Span::new(start, self.state.pos(), Token::Ellipsis))
    }
}

#[cfg(test)]
mod tests {
    use crate::{tokenize, LexError, ResumePolicy, ScanOptions, Scanner, Token};
    use gqlc_util::{Position, Span};

    #[test]
    fn test_ellipsis() {
        let tokens = tokenize(" ...").unwrap();
        assert_eq!(
            tokens[0],
            Span::new(Position::at(1, 0, 1), Position::at(4, 0, 4), Token::Ellipsis)
        );
    }

    #[test]
    fn test_two_dots_at_end() {
        let error = tokenize("..").unwrap_err();
        assert_eq!(error, Span::point(Position::at(2, 0, 2), LexError::UnexpectedEndOfFile));
    }

    #[test]
    fn test_broken_ellipsis_points_at_start() {
        let error = tokenize("a ..b").unwrap_err();
        assert_eq!(error, Span::point(Position::at(2, 0, 2), LexError::UnexpectedCharacter('.')));
    }

    #[test]
    fn test_dot_before_digit() {
        let error = tokenize(".5").unwrap_err();
        assert_eq!(error, Span::point(Position::new(), LexError::UnknownCharacter('.')));
    }

    #[test]
    fn test_four_dots() {
        // the fourth dot starts a new spread that runs out of input
        let error = tokenize("....").unwrap_err();
        assert_eq!(error, Span::point(Position::at(4, 0, 4), LexError::UnexpectedEndOfFile));
    }

    #[test]
    fn test_dot_before_digit_skips_under_skip() {
        let options = ScanOptions::default().with_resume(ResumePolicy::Skip);
        let items: Vec<_> = Scanner::with_options(".5", options)
            .map(|r| r.map(|s| s.item).map_err(|e| e.item))
            .collect();
        assert_eq!(
            items,
            vec![
                Err(LexError::UnknownCharacter('.')),
                Ok(Token::Scalar(crate::Scalar::Integer(5))),
                Ok(Token::Eof),
            ]
        );
    }
}
