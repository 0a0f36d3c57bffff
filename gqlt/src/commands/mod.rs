//! Command modules for the gqlt CLI.
//!
//! Each subcommand is implemented in its own file and implements the
//! [`traits::Command`] trait.

pub mod common;
pub mod traits;

pub mod check;
pub mod tokens;

// Re-export command types
pub use check::{CheckArgs, CheckCommand};
pub use tokens::{TokensArgs, TokensCommand};
