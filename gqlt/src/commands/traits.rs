//! Command trait for the gqlt CLI.
//!
//! Every command scans one document that `main` has already read, so the
//! trait takes the document and the two output streams instead of touching
//! the process environment. Tests drive commands with in-memory buffers.

use std::io::Write;

use gqlc_util::SourceFile;

use crate::commands::common::Outcome;
use crate::error::Result;

/// Standard command trait that all gqlt commands implement.
pub trait Command {
    /// Get the command name, as used in log events.
    fn name(&self) -> &'static str;

    /// Execute the command on one document.
    ///
    /// Results go to `out`, diagnostics go to `err`. Lexical errors are
    /// reported there and give [`Outcome::LexErrors`]; `Err` is reserved for
    /// failures to write the output.
    fn execute(&self, file: &SourceFile, out: &mut dyn Write, err: &mut dyn Write)
        -> Result<Outcome>;
}
