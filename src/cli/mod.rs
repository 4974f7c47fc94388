//! CLI module for the TINY scanner/parser
//!
//! ## Commands
//!
//! - `scan <file>` - Tokenize a source file into the `lexeme,KIND` token format
//! - `parse <file>` - Parse a source file (or a token file with `--tokens`) and print the parse record
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tiny_syntax::parser::{DEFAULT_MAX_DEPTH, ParserConfig};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Scanner and parser for the TINY teaching language
#[derive(Parser, Debug)]
#[command(name = "tiny")]
#[command(version = VERSION)]
#[command(about = "Scanner and parser for the TINY teaching language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// How `parse` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed `{status, root, errors}` record
    Json,
    /// Single-line `{status, root, errors}` record
    Compact,
    /// Indented tree dump followed by the diagnostics
    Tree,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Tokenize a source file into `lexeme,KIND` lines
    Scan {
        /// Source file to scan
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Write tokens here instead of stdout
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
    },

    /// Parse a source file and print the parse record
    Parse {
        /// Source file (or token file with --tokens)
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Treat FILE as a token file produced by `tiny scan`
        #[arg(long)]
        tokens: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Write the result here instead of stdout
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
        /// Maximum nesting depth of blocks and parenthesised expressions
        #[arg(long, value_name = "N", env = "TINY_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH, value_parser = parse_max_depth)]
        max_depth: usize,
    },
}

fn parse_max_depth(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("max depth must be at least 1".to_string()),
        Ok(depth) => Ok(depth),
        Err(e) => Err(format!("invalid max depth '{value}': {e}")),
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Scan { file, output } => commands::scan_file(&file.to_string_lossy(), output.as_deref()),
        Command::Parse {
            file,
            tokens,
            format,
            output,
            max_depth,
        } => {
            let options = commands::ParseOptions {
                from_tokens: tokens,
                format,
                config: ParserConfig::with_max_depth(max_depth),
            };
            commands::parse_file(&file.to_string_lossy(), &options, output.as_deref())
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_scan() {
        let cli = Cli::try_parse_from(["tiny", "scan", "prog.tny", "-o", "prog.tokens"]).unwrap();
        if let Command::Scan { file, output } = cli.command {
            assert_eq!(file, PathBuf::from("prog.tny"));
            assert_eq!(output, Some(PathBuf::from("prog.tokens")));
        } else {
            panic!("Expected Scan command");
        }
    }

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::try_parse_from(["tiny", "parse", "prog.tny"]).unwrap();
        if let Command::Parse {
            tokens,
            format,
            output,
            ..
        } = cli.command
        {
            assert!(!tokens);
            assert_eq!(format, OutputFormat::Json);
            assert!(output.is_none());
        } else {
            panic!("Expected Parse command");
        }
    }

    #[test]
    fn test_cli_parse_flags() {
        let cli = Cli::try_parse_from([
            "tiny",
            "parse",
            "prog.tokens",
            "--tokens",
            "--format",
            "tree",
            "--max-depth",
            "16",
        ])
        .unwrap();
        if let Command::Parse {
            tokens,
            format,
            max_depth,
            ..
        } = cli.command
        {
            assert!(tokens);
            assert_eq!(format, OutputFormat::Tree);
            assert_eq!(max_depth, 16);
        } else {
            panic!("Expected Parse command");
        }
    }

    #[test]
    fn test_cli_parse_compact_format() {
        let cli = Cli::try_parse_from(["tiny", "parse", "prog.tny", "--format", "compact"]).unwrap();
        if let Command::Parse { format, .. } = cli.command {
            assert_eq!(format, OutputFormat::Compact);
        } else {
            panic!("Expected Parse command");
        }
    }

    #[test]
    fn test_cli_rejects_zero_depth() {
        assert!(Cli::try_parse_from(["tiny", "parse", "prog.tny", "--max-depth", "0"]).is_err());
        assert!(Cli::try_parse_from(["tiny", "parse", "prog.tny", "--max-depth", "deep"]).is_err());
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["tiny"]).is_err());
    }

    #[test]
    fn test_parse_max_depth() {
        assert_eq!(parse_max_depth("128"), Ok(128));
        assert!(parse_max_depth("0").is_err());
    }
}
