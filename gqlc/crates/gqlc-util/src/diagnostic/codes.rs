//! Diagnostic codes for categorizing reported problems.
//!
//! # Examples
//!
//! ```
//! use gqlc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::new("L", 4);
//! assert_eq!(code.prefix(), "L");
//! assert_eq!(code.number(), 4);
//! assert_eq!(code.to_string(), "L0004");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Codes render as `{prefix}{number:04}`, e.g. `L0001`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    prefix: &'static str,
    number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// The code prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// The numeric part of the code
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({self})")
    }
}
