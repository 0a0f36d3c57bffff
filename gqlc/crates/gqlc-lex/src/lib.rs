//! gqlc-lex - Lexical Scanner for GraphQL-style Query Documents
//!
//! This crate turns the text of a query document into a stream of spanned
//! tokens. It is the first stage of a query front end: a parser pulls tokens
//! from a [`Scanner`] one at a time and gets a precise position for every
//! token and every error.
//!
//! # Example Usage
//!
//! ```
//! use gqlc_lex::{Scanner, Token};
//!
//! let source = "{ hero { name } }";
//!
//! // Iterate through spanned tokens
//! for result in Scanner::new(source) {
//!     let span = result.unwrap();
//!     println!("{}-{}\t{}", span.start, span.end, span.item);
//! }
//!
//! // Or pull them one at a time
//! let mut scanner = Scanner::new(source);
//! let first = scanner.next_token().unwrap().unwrap();
//! assert_eq!(first.item, Token::BraceL);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - The scanner
//! - [`error`] - Lexical errors and their diagnostics
//! - [`options`] - Scanner configuration
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classes of the grammar
//!
//! # Token Categories
//!
//! ## Punctuators
//!
//! `!` `$` `(` `)` `[` `]` `{` `}` `:` `=` `@` `|` `&` and the spread `...`
//!
//! ## Names
//!
//! Pattern: `[_A-Za-z][_0-9A-Za-z]*`. There are no keywords at this level.
//!
//! ## Literals
//!
//! - **Integer**: `0`, `-42` (64-bit signed, no leading zeros)
//! - **Float**: `1.5`, `-1.123e+4`, `2E10`
//! - **String**: `"hello"`, `"tab\tA"` (single line, kept raw)
//!
//! ## Ignored
//!
//! Spaces, tabs, line terminators, commas and `#` comments.
//!
//! ## Special
//!
//! - **EOF**: End of input, produced exactly once

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod options;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{to_diagnostic, LexError};
pub use lexer::{tokenize, LexResult, Scanner};
pub use options::{ParsePolicyError, ResumePolicy, ScanOptions};
pub use token::{Scalar, Token};
