//! Scanner configuration.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// What the scanner does after reporting an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ResumePolicy {
    /// Stop: the error is the last item the scanner yields.
    #[default]
    Halt,
    /// Keep scanning after the error.
    ///
    /// When the offending character was not consumed, it is skipped first so
    /// the scanner always makes progress.
    Skip,
}

impl ResumePolicy {
    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(&self) -> &'static str {
        match self {
            ResumePolicy::Halt => "halt",
            ResumePolicy::Skip => "skip",
        }
    }
}

impl fmt::Display for ResumePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown resume policy name.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown resume policy '{0}' (expected 'halt' or 'skip')")]
pub struct ParsePolicyError(String);

impl FromStr for ResumePolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "halt" => Ok(ResumePolicy::Halt),
            "skip" => Ok(ResumePolicy::Skip),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

/// Options for a [`Scanner`](crate::Scanner).
///
/// # Example
///
/// ```
/// use gqlc_lex::{ResumePolicy, ScanOptions, Scanner};
///
/// let options = ScanOptions::default().with_resume(ResumePolicy::Skip);
/// let results: Vec<_> = Scanner::with_options("% a", options).collect();
/// assert_eq!(results.len(), 3);
/// assert!(results[0].is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct ScanOptions {
    /// Behaviour after an error
    pub resume: ResumePolicy,
}

impl ScanOptions {
    /// Set the resume policy
    pub fn with_resume(mut self, resume: ResumePolicy) -> Self {
        self.resume = resume;
        self
    }
}
