//! Lexer module.
//!
//! The scanner is split by token family:
//! - `core` - Scanner struct, position tracking and dispatch
//! - `comment` - Whitespace, comma and comment skipping
//! - `punctuator` - The `...` spread
//! - `number` - Integer and float literals
//! - `string` - String literals and escape validation
//! - `name` - Names

mod comment;
mod core;
mod name;
mod number;
mod punctuator;
mod string;

pub use core::{tokenize, LexResult, Scanner};
