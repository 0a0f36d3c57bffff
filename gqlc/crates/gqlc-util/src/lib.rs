//! gqlc-util - Foundation types shared by the gqlc crates.
//!
//! This crate holds the pieces of the scanner that do not depend on the
//! token grammar:
//!
//! - [`span`] - [`Position`] tracking and the [`Span`] wrapper that pins a
//!   token or an error to its start/end positions, plus [`SourceFile`] for
//!   mapping positions back to source lines.
//! - [`diagnostic`] - [`Diagnostic`] values and their rustc-style rendering.
//! - [`error`] - Error types for the fallible helpers in this crate.
//!
//! # Example
//!
//! ```
//! use gqlc_util::{Position, Span};
//!
//! let mut pos = Position::new();
//! pos.advance_column();
//! pos.advance_line();
//!
//! let span = Span::point(pos, "eof");
//! assert_eq!(span.start, Position::at(2, 1, 0));
//! assert!(span.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticCode, Level, SourceSnippet};
pub use error::{SourceError, SourceResult};
pub use span::{Position, SourceFile, Span};
