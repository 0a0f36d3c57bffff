//! Name lexing.

use gqlc_util::Span;

use super::core::Scanner;
use crate::chars::is_name_continue;
use crate::token::Token;

impl<'src> Scanner<'src> {
    /// Scans a name. The dispatch has already checked the first character.
    pub(super) fn scan_name(&mut self) -> Span<Token<'src>> {
        let start = self.state.pos();
        let begin = self.state.offset();
        self.state.bump();
        self.state.bump_while(is_name_continue);
        Span::new(start, self.state.pos(), Token::Name(self.state.slice_from(begin)))
    }
}

#[cfg(test)]
mod tests {
    use crate::{tokenize, Token};
    use gqlc_util::Position;

    #[test]
    fn test_names() {
        for name in ["a", "_", "__typename", "Query2", "snake_case_Name"] {
            let tokens = tokenize(name).unwrap();
            assert_eq!(tokens[0].item, Token::Name(name));
            assert_eq!(tokens[0].len(), name.len());
        }
    }

    #[test]
    fn test_name_stops_at_non_name_char() {
        let tokens = tokenize("foo-bar").unwrap();
        assert_eq!(tokens[0].item, Token::Name("foo"));
        assert_eq!(tokens[0].end, Position::at(3, 0, 3));
        // "-b" is not a number
        assert!(tokenize("foo -bar").is_err());
    }

    #[test]
    fn test_non_ascii_letter_is_unknown() {
        let error = tokenize("café").unwrap_err();
        assert_eq!(error.start, Position::at(3, 0, 3));
    }
}
