//! Tokens command implementation.
//!
//! Lists the tokens of one document with their spans, as plain text or as
//! JSON lines. Scanning stops at the first lexical error.

use std::io::Write;

use gqlc_lex::{Scalar, Scanner, Token};
use gqlc_util::{Position, SourceFile, Span};
use serde::Serialize;

use crate::commands::common::{render_error, Outcome, OutputFormat};
use crate::commands::traits::Command;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Listing format.
    pub format: OutputFormat,
    /// List the end-of-input token too.
    pub show_eof: bool,
}

/// One line of JSON output.
///
/// `text` is the token as the scanner understood it, `source` the exact
/// characters it was read from (`1e3` prints as `1000.0` but reads `1e3`).
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    text: String,
    source: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Scalar<'a>>,
    start: Position,
    end: Position,
}

impl<'a> TokenRecord<'a> {
    fn new(file: &'a SourceFile, span: &Span<Token<'a>>) -> Result<Self> {
        let value = match span.item {
            Token::Scalar(scalar) => Some(scalar),
            _ => None,
        };
        Ok(Self {
            kind: span.item.kind(),
            text: span.item.to_string(),
            source: file.extract(span.start, span.end)?,
            value,
            start: span.start,
            end: span.end,
        })
    }
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    /// Create a new TokensCommand.
    pub fn new(args: TokensArgs) -> Self {
        Self { args }
    }

    fn write_token<'a>(
        &self,
        file: &'a SourceFile,
        out: &mut dyn Write,
        span: &Span<Token<'a>>,
    ) -> Result<()> {
        match self.args.format {
            OutputFormat::Text => writeln!(out, "{}-{}\t{}", span.start, span.end, span.item)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &TokenRecord::new(file, span)?)?;
                writeln!(out)?;
            },
        }
        Ok(())
    }
}

impl Command for TokensCommand {
    fn name(&self) -> &'static str {
        "tokens"
    }

    fn execute(
        &self,
        file: &SourceFile,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<Outcome> {
        let mut count = 0usize;

        for result in Scanner::new(file.content()) {
            match result {
                Ok(span) => {
                    if span.item.is_eof() && !self.args.show_eof {
                        continue;
                    }
                    self.write_token(file, out, &span)?;
                    count += 1;
                },
                Err(error) => {
                    write!(err, "{}", render_error(file, &error))?;
                    return Ok(Outcome::LexErrors);
                },
            }
        }

        tracing::debug!(command = self.name(), file = file.name(), tokens = count, "listed tokens");
        Ok(Outcome::Clean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str, args: TokensArgs) -> (Outcome, String, String) {
        let file = SourceFile::new("q.graphql", source);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let outcome = TokensCommand::new(args).execute(&file, &mut out, &mut err).unwrap();
        (
            outcome,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_text_listing() {
        let (outcome, out, err) = run("{ hero }", TokensArgs::default());
        assert_eq!(outcome, Outcome::Clean);
        assert_eq!(out, "1:1-1:2\t{\n1:3-1:7\thero\n1:8-1:9\t}\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_text_listing_with_eof() {
        let args = TokensArgs {
            show_eof: true,
            ..TokensArgs::default()
        };
        let (_, out, _) = run("a", args);
        assert_eq!(out, "1:1-1:2\ta\n1:2-1:2\t<EOF>\n");
    }

    #[test]
    fn test_scalars_print_like_source() {
        let (_, out, _) = run("1 2.5 \"s\"", TokensArgs::default());
        let texts: Vec<&str> = out.lines().map(|l| l.split('\t').nth(1).unwrap()).collect();
        assert_eq!(texts, ["1", "2.5", "\"s\""]);
    }

    #[test]
    fn test_json_listing() {
        let args = TokensArgs {
            format: OutputFormat::Json,
            ..TokensArgs::default()
        };
        let (_, out, _) = run("id: 42", args);
        let records: Vec<serde_json::Value> =
            out.lines().map(|l| serde_json::from_str(l).unwrap()).collect();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["kind"], "Name");
        assert_eq!(records[0]["text"], "id");
        assert!(records[0].get("value").is_none());
        assert_eq!(records[1]["source"], ":");
        assert_eq!(records[2]["kind"], "Int");
        assert_eq!(records[2]["value"]["Integer"], 42);
        assert_eq!(records[2]["start"]["index"], 4);
        assert_eq!(records[2]["end"]["col"], 6);
    }

    #[test]
    fn test_json_source_is_raw_text() {
        let args = TokensArgs {
            format: OutputFormat::Json,
            show_eof: true,
        };
        let (_, out, _) = run("{\n\t1e3 \"é\\n\" ... }", args);
        let records: Vec<serde_json::Value> =
            out.lines().map(|l| serde_json::from_str(l).unwrap()).collect();

        assert_eq!(records[1]["text"], "1000.0");
        assert_eq!(records[1]["source"], "1e3");
        assert_eq!(records[2]["source"], "\"é\\n\"");
        assert_eq!(records[3]["source"], "...");
        assert_eq!(records[5]["kind"], "Eof");
        assert_eq!(records[5]["source"], "");
    }

    #[test]
    fn test_stops_at_first_error() {
        let (outcome, out, err) = run("a % b ?", TokensArgs::default());
        assert_eq!(outcome, Outcome::LexErrors);
        assert_eq!(out, "1:1-1:2\ta\n");
        assert!(err.starts_with("error[L0001]: unknown character '%'"));
        assert_eq!(err.matches("error[").count(), 1);
    }
}
