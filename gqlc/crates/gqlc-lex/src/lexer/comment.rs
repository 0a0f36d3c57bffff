//! Ignored input.
//!
//! Whitespace, line terminators, commas and `#` comments separate tokens and
//! never produce one.

use super::core::Scanner;
use crate::chars::{is_control, is_ignored, is_line_break};

impl<'src> Scanner<'src> {
    /// Skips everything up to the start of the next token.
    pub(super) fn skip_ignored(&mut self) {
        loop {
            match self.state.peek() {
                Some(c) if is_ignored(c) => {
                    self.state.bump();
                },
                Some('#') => self.skip_comment(),
                _ => return,
            }
        }
    }

    /// Skips a `#` comment and the line break that ends it.
    ///
    /// A control character also ends the comment; it is left unread so the
    /// dispatch reports it, and the scanner remembers it was inside a comment
    /// so skip recovery can finish the line.
    fn skip_comment(&mut self) {
        self.state.bump();
        self.skip_comment_rest();
    }

    /// Skips comment text up to and including its line break.
    pub(super) fn skip_comment_rest(&mut self) {
        while let Some(c) = self.state.peek() {
            if is_control(c) {
                self.comment_interrupted = true;
                return;
            }
            self.state.bump();
            if is_line_break(c) {
                return;
            }
        }
    }
}
