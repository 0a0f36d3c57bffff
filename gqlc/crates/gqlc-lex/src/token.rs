//! Token definitions.
//!
//! A [`Token`] is either one of the fixed punctuators, a [`Token::Name`], or
//! a [`Token::Scalar`] literal. Tokens borrow their text from the source, so
//! a token stream lives as long as the document it was scanned from.

use std::fmt;

/// A literal value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Scalar<'src> {
    /// Integer literal, e.g. `-42`
    Integer(i64),
    /// Float literal, e.g. `1.5e3`
    Float(f64),
    /// String literal body between the quotes, escapes left as written
    String(&'src str),
}

/// A lexical token.
///
/// # Example
///
/// ```
/// use gqlc_lex::{Scalar, Token};
///
/// assert_eq!(Token::punctuator('$'), Some(Token::Dollar));
/// assert_eq!(Token::punctuator('.'), None);
/// assert_eq!(Token::Scalar(Scalar::Float(1.0)).to_string(), "1.0");
/// assert_eq!(Token::Name("hero").to_string(), "hero");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Token<'src> {
    /// `!`
    Bang,
    /// `$`
    Dollar,
    /// `(`
    ParenL,
    /// `)`
    ParenR,
    /// `[`
    BracketL,
    /// `]`
    BracketR,
    /// `{`
    BraceL,
    /// `}`
    BraceR,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `@`
    At,
    /// `|`
    Pipe,
    /// `&`
    Amp,
    /// `...`
    Ellipsis,
    /// End of input
    Eof,
    /// Name matching `[_A-Za-z][_0-9A-Za-z]*`
    Name(&'src str),
    /// Literal value
    Scalar(Scalar<'src>),
}

impl Token<'static> {
    /// Maps a single-character punctuator to its token.
    pub fn punctuator(c: char) -> Option<Self> {
        let token = match c {
            '!' => Token::Bang,
            '$' => Token::Dollar,
            '(' => Token::ParenL,
            ')' => Token::ParenR,
            '[' => Token::BracketL,
            ']' => Token::BracketR,
            '{' => Token::BraceL,
            '}' => Token::BraceR,
            ':' => Token::Colon,
            '=' => Token::Equals,
            '@' => Token::At,
            '|' => Token::Pipe,
            '&' => Token::Amp,
            _ => return None,
        };
        Some(token)
    }
}

impl<'src> Token<'src> {
    /// Short name of the token kind, stable for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Bang => "Bang",
            Token::Dollar => "Dollar",
            Token::ParenL => "ParenL",
            Token::ParenR => "ParenR",
            Token::BracketL => "BracketL",
            Token::BracketR => "BracketR",
            Token::BraceL => "BraceL",
            Token::BraceR => "BraceR",
            Token::Colon => "Colon",
            Token::Equals => "Equals",
            Token::At => "At",
            Token::Pipe => "Pipe",
            Token::Amp => "Amp",
            Token::Ellipsis => "Ellipsis",
            Token::Eof => "Eof",
            Token::Name(_) => "Name",
            Token::Scalar(Scalar::Integer(_)) => "Int",
            Token::Scalar(Scalar::Float(_)) => "Float",
            Token::Scalar(Scalar::String(_)) => "String",
        }
    }

    /// Returns true for the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Integer(value) => write!(f, "{value}"),
            // Debug keeps the fraction, so the text still lexes as a float
            Scalar::Float(value) => write!(f, "{value:?}"),
            Scalar::String(raw) => write!(f, "\"{raw}\""),
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Token::Bang => "!",
            Token::Dollar => "$",
            Token::ParenL => "(",
            Token::ParenR => ")",
            Token::BracketL => "[",
            Token::BracketR => "]",
            Token::BraceL => "{",
            Token::BraceR => "}",
            Token::Colon => ":",
            Token::Equals => "=",
            Token::At => "@",
            Token::Pipe => "|",
            Token::Amp => "&",
            Token::Ellipsis => "...",
            Token::Eof => "<EOF>",
            Token::Name(name) => name,
            Token::Scalar(value) => return value.fmt(f),
        };
        f.write_str(text)
    }
}
