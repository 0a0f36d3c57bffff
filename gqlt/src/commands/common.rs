//! Common types and utilities for gqlt commands.
//!
//! This module provides the input reading, output format and exit status
//! shared by every command.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use gqlc_lex::{to_diagnostic, LexError};
use gqlc_util::{SourceFile, Span};
use serde::Deserialize;

use crate::error::{GqltError, Result};

/// Name shown in diagnostics for a document read from stdin.
pub const STDIN_NAME: &str = "<stdin>";

// ============================================================================
// Output Format
// ============================================================================

/// Supported formats for token listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `start-end<TAB>token` line per token
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

// ============================================================================
// Outcome
// ============================================================================

/// How a command finished when it could read its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The document is lexically valid.
    Clean,
    /// At least one lexical error was reported.
    LexErrors,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Clean => ExitCode::SUCCESS,
            Outcome::LexErrors => ExitCode::FAILURE,
        }
    }
}

// ============================================================================
// Input
// ============================================================================

/// Returns true when the path argument means "read stdin".
pub fn is_stdin(path: Option<&Path>) -> bool {
    path.map_or(true, |p| p == Path::new("-"))
}

/// Read the input document, from stdin when no path (or `-`) is given.
pub fn read_source(path: Option<&Path>) -> Result<SourceFile> {
    match path {
        Some(path) if !is_stdin(Some(path)) => {
            let content = std::fs::read_to_string(path).map_err(|source| GqltError::ReadInput {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(SourceFile::new(path.display().to_string(), content))
        },
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .map_err(|source| GqltError::ReadInput {
                    path: PathBuf::from(STDIN_NAME),
                    source,
                })?;
            Ok(SourceFile::new(STDIN_NAME, content))
        },
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Render a lexical error against the document it came from.
pub fn render_error(file: &SourceFile, error: &Span<LexError>) -> String {
    to_diagnostic(error).render(file)
}
