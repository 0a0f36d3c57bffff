//! gqlt CLI - Command-line front end for the gqlc query scanner.
//!
//! This is the main entry point for the gqlt CLI application.
//! It uses clap for argument parsing, reads the input document and
//! dispatches to the selected command.

mod commands;
mod config;
mod error;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use gqlc_lex::ResumePolicy;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::{read_source, OutputFormat};
use commands::traits::Command;
use commands::{CheckArgs, CheckCommand, TokensArgs, TokensCommand};
use config::Config;
use error::{GqltError, Result};

/// gqlt - Inspect GraphQL-style query documents at the token level
///
/// gqlt lists the tokens of a document or checks it for lexical errors,
/// reporting each problem with its exact line and column.
#[derive(Parser, Debug)]
#[command(name = "gqlt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect GraphQL-style query documents at the token level", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "GQLT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "GQLT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "GQLT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the gqlt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the tokens of a document
    ///
    /// Prints one token per line with its start and end position. Stops at
    /// the first lexical error.
    Tokens(TokensCommandArgs),

    /// Check a document for lexical errors
    ///
    /// Prints a diagnostic for each error and a summary line. Exits with
    /// status 1 when any error was found.
    Check(CheckCommandArgs),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommandArgs {
    /// Input document (default: stdin, also `-`)
    file: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Also list the end-of-input token
    #[arg(long)]
    eof: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommandArgs {
    /// Input document (default: stdin, also `-`)
    file: Option<PathBuf>,

    /// What to do after an error: halt or skip (default: from config, else halt)
    #[arg(short, long)]
    resume: Option<ResumePolicy>,
}

/// Main entry point for the gqlt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler. Lexical errors give
/// exit status 1; so do failures to read the input or the configuration.
fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.no_color)?;

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Execute the selected command
    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with token listings. `RUST_LOG`
/// overrides the level picked by `--verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| GqltError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<ExitCode> {
    match command {
        Commands::Tokens(args) => {
            let tokens_args = TokensArgs {
                format: args.format.unwrap_or(config.output.format),
                show_eof: args.eof || config.output.show_eof,
            };
            run(&TokensCommand::new(tokens_args), args.file)
        },
        Commands::Check(args) => {
            let check_args = CheckArgs {
                resume: args.resume.unwrap_or(config.scan.resume),
            };
            run(&CheckCommand::new(check_args), args.file)
        },
    }
}

/// Read the input and run one command against stdout and stderr.
fn run(command: &dyn Command, file: Option<PathBuf>) -> Result<ExitCode> {
    let source = read_source(file.as_deref())?;
    tracing::debug!(command = command.name(), file = source.name(), "scanning");

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let outcome = command.execute(&source, &mut out, &mut err)?;
    out.flush()?;
    err.flush()?;
    Ok(outcome.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_tokens() {
        let cli = Cli::parse_from(["gqlt", "tokens"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.file, None);
            assert_eq!(args.format, None);
            assert!(!args.eof);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_with_options() {
        let cli = Cli::parse_from(["gqlt", "tokens", "q.graphql", "--format", "json", "--eof"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.file, Some(PathBuf::from("q.graphql")));
            assert_eq!(args.format, Some(OutputFormat::Json));
            assert!(args.eof);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_check_with_resume() {
        let cli = Cli::parse_from(["gqlt", "check", "-", "--resume", "skip"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.file, Some(PathBuf::from("-")));
            assert_eq!(args.resume, Some(ResumePolicy::Skip));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_rejects_unknown_resume_policy() {
        let result = Cli::try_parse_from(["gqlt", "check", "--resume", "retry"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "gqlt",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/gqlt.toml",
            "check",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/gqlt.toml")));
    }

    #[test]
    fn test_cli_flags_override_config() {
        let config = Config::from_toml("[output]\nformat = \"json\"\n").unwrap();
        let cli = Cli::parse_from(["gqlt", "tokens", "--format", "text"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.format.unwrap_or(config.output.format), OutputFormat::Text);
        } else {
            panic!("Expected Tokens command");
        }
    }
}
