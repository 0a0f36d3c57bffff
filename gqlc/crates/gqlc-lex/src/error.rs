//! Lexical errors.
//!
//! Every error the scanner produces is one [`LexError`] wrapped in a
//! zero-width [`Span`] that marks where scanning could not continue.

use gqlc_util::{Diagnostic, DiagnosticCode, Span};
use thiserror::Error;

/// A reason the scanner stopped on an input.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LexError {
    /// A character that cannot start any token.
    #[error("unknown character '{}'", .0.escape_debug())]
    UnknownCharacter(char),

    /// A character that does not fit the token being scanned.
    #[error("unexpected character '{}'", .0.escape_debug())]
    UnexpectedCharacter(char),

    /// Input ended, or a line broke, before the closing quote.
    #[error("unterminated string")]
    UnterminatedString,

    /// A control character inside a string literal.
    #[error("unknown character in string '{}'", .0.escape_debug())]
    UnknownCharacterInString(char),

    /// An escape that is not one of `\" \\ \/ \b \f \n \r \t \uXXXX`.
    #[error("unknown escape sequence '{0}'")]
    UnknownEscapeSequence(String),

    /// Input ended in the middle of a token.
    #[error("unexpected end of file")]
    UnexpectedEndOfFile,
}

impl LexError {
    /// Stable diagnostic code, `L0001` through `L0006`.
    pub fn code(&self) -> DiagnosticCode {
        let number = match self {
            LexError::UnknownCharacter(_) => 1,
            LexError::UnexpectedCharacter(_) => 2,
            LexError::UnterminatedString => 3,
            LexError::UnknownCharacterInString(_) => 4,
            LexError::UnknownEscapeSequence(_) => 5,
            LexError::UnexpectedEndOfFile => 6,
        };
        DiagnosticCode::new("L", number)
    }

    /// Variant name, for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            LexError::UnknownCharacter(_) => "UnknownCharacter",
            LexError::UnexpectedCharacter(_) => "UnexpectedCharacter",
            LexError::UnterminatedString => "UnterminatedString",
            LexError::UnknownCharacterInString(_) => "UnknownCharacterInString",
            LexError::UnknownEscapeSequence(_) => "UnknownEscapeSequence",
            LexError::UnexpectedEndOfFile => "UnexpectedEndOfFile",
        }
    }

    fn note(&self) -> Option<&'static str> {
        match self {
            LexError::UnknownCharacter('.') => Some("a spread is written as three dots: `...`"),
            LexError::UnknownCharacter(c) if !crate::chars::is_source_char(*c) => {
                Some("control characters other than tab, CR and LF are not allowed")
            },
            LexError::UnterminatedString => Some("strings must close on the line they open"),
            LexError::UnknownEscapeSequence(_) => {
                Some("valid escapes are \\\" \\\\ \\/ \\b \\f \\n \\r \\t and \\uXXXX")
            },
            LexError::UnknownCharacterInString(_) => {
                Some("write control characters in strings as \\uXXXX escapes")
            },
            _ => None,
        }
    }
}

/// Builds a renderable diagnostic for a spanned scan error.
///
/// # Example
///
/// ```
/// use gqlc_lex::{to_diagnostic, tokenize};
/// use gqlc_util::SourceFile;
///
/// let source = "{ % }";
/// let error = tokenize(source).unwrap_err();
/// let text = to_diagnostic(&error).render(&SourceFile::new("q.graphql", source));
/// assert!(text.starts_with("error[L0001]: unknown character '%'"));
/// ```
pub fn to_diagnostic(error: &Span<LexError>) -> Diagnostic {
    let diagnostic = Diagnostic::error(error.item.to_string(), error.start, error.end)
        .with_code(error.item.code());
    match error.item.note() {
        Some(note) => diagnostic.with_note(note),
        None => diagnostic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqlc_util::Position;

    #[test]
    fn test_messages() {
        assert_eq!(LexError::UnknownCharacter('%').to_string(), "unknown character '%'");
        assert_eq!(
            LexError::UnknownCharacter('\u{7}').to_string(),
            "unknown character '\\u{7}'"
        );
        assert_eq!(LexError::UnterminatedString.to_string(), "unterminated string");
        assert_eq!(
            LexError::UnknownEscapeSequence("\\x".into()).to_string(),
            "unknown escape sequence '\\x'"
        );
    }

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            LexError::UnknownCharacter('a'),
            LexError::UnexpectedCharacter('a'),
            LexError::UnterminatedString,
            LexError::UnknownCharacterInString('a'),
            LexError::UnknownEscapeSequence(String::new()),
            LexError::UnexpectedEndOfFile,
        ];
        let codes: Vec<String> = errors.iter().map(|e| e.code().to_string()).collect();
        assert_eq!(codes, ["L0001", "L0002", "L0003", "L0004", "L0005", "L0006"]);
    }

    #[test]
    fn test_diagnostic_carries_span_and_note() {
        let at = Position::at(3, 0, 3);
        let diag = to_diagnostic(&Span::point(at, LexError::UnterminatedString));
        assert_eq!(diag.start, at);
        assert_eq!(diag.end, at);
        assert_eq!(diag.code, Some(DiagnosticCode::new("L", 3)));
        assert_eq!(diag.notes.len(), 1);
    }

    #[test]
    fn test_diagnostic_without_note() {
        let at = Position::new();
        let diag = to_diagnostic(&Span::point(at, LexError::UnexpectedEndOfFile));
        assert!(diag.notes.is_empty());
        assert_eq!(diag.header(), "error[L0006]: unexpected end of file");
    }
}
