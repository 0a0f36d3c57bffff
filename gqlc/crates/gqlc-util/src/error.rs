//! Error types for gqlc-util.

use thiserror::Error;

/// Error type for source file lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The end of a range lies before its start
    #[error("Invalid range: start {start} > end {end}")]
    InvalidRange {
        /// Character index of the range start
        start: usize,
        /// Character index of the range end
        end: usize,
    },

    /// A position points past the end of the file
    #[error("Position out of bounds: index {index}, file has {len} characters")]
    OutOfBounds {
        /// Character index of the position
        index: usize,
        /// Number of characters in the file
        len: usize,
    },

    /// A line number past the last line of the file
    #[error("Invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLine {
        /// The zero-based line asked for
        line: usize,
        /// Number of lines in the file
        max_lines: usize,
    },
}

/// Result type alias for source file operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;
