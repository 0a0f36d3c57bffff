//! Check command implementation.
//!
//! Scans one document, prints a diagnostic for each lexical error and a one
//! line summary. Under [`ResumePolicy::Skip`] every error of the document is
//! reported; under [`ResumePolicy::Halt`] only the first.

use std::io::Write;

use gqlc_lex::{ResumePolicy, ScanOptions, Scanner};
use gqlc_util::SourceFile;

use crate::commands::common::{render_error, Outcome};
use crate::commands::traits::Command;
use crate::error::Result;

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// What to do after the first error.
    pub resume: ResumePolicy,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new CheckCommand.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }
}

impl Command for CheckCommand {
    fn name(&self) -> &'static str {
        "check"
    }

    fn execute(
        &self,
        file: &SourceFile,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<Outcome> {
        let options = ScanOptions::default().with_resume(self.args.resume);
        let mut tokens = 0usize;
        let mut errors = 0usize;

        for result in Scanner::with_options(file.content(), options) {
            match result {
                Ok(span) if span.item.is_eof() => {},
                Ok(_) => tokens += 1,
                Err(error) => {
                    errors += 1;
                    writeln!(err, "{}", render_error(file, &error))?;
                },
            }
        }

        tracing::debug!(
            command = self.name(),
            file = file.name(),
            resume = %self.args.resume,
            tokens,
            errors,
            "checked document"
        );

        if errors == 0 {
            writeln!(out, "{}: ok ({} tokens)", file.name(), tokens)?;
            Ok(Outcome::Clean)
        } else {
            let plural = if errors == 1 { "" } else { "s" };
            writeln!(out, "{}: {} lexical error{}", file.name(), errors, plural)?;
            Ok(Outcome::LexErrors)
        }
    }
}
