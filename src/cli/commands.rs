//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use miette::{NamedSource, Report};
use tiny_syntax::diagnostics::LexError;
use tiny_syntax::interchange::{ParseRecord, RecordError, write_tokens};
use tiny_syntax::lexer;
use tiny_syntax::parser::{ParseResult, ParserConfig};

use super::{CliError, CliResult, ExitCode, OutputFormat};
use crate::pipeline;

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// while scanning.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Options for the `parse` command.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Input is a `lexeme,KIND` token file rather than source text.
    pub from_tokens: bool,
    pub format: OutputFormat,
    pub config: ParserConfig,
}

/// Read a source (or token) file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be accessed or read
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Tokenize a source file and write the token format.
///
/// Tokens are written even when lexical errors occur; the errors go to stderr and the command
/// exits with failure.
pub fn scan_file(file_path: &str, output: Option<&Path>) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let scanned = lexer::scan(&source);

    emit(output, &write_tokens(scanned.tokens()))?;

    if scanned.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        eprint!("{}", render_lex_errors(file_path, &source, &scanned.errors));
        Ok(ExitCode::FAILURE)
    }
}

/// Parse a source or token file and print the result.
///
/// Exits with success only when the parse is accepted and scanning reported nothing.
pub fn parse_file(file_path: &str, options: &ParseOptions, output: Option<&Path>) -> CliResult<ExitCode> {
    let text = read_source(file_path)?;

    let (result, clean_input) = if options.from_tokens {
        let parsed = pipeline::parse_token_text(&text, options.config);
        for skipped in &parsed.skipped {
            eprintln!("warning: {file_path}: {skipped}");
        }
        (parsed.result, true)
    } else {
        let parsed = pipeline::parse_source(&text, options.config);
        eprint!("{}", render_lex_errors(file_path, &text, &parsed.lex_errors));
        (parsed.result, parsed.lex_errors.is_empty())
    };

    let rendered = match options.format {
        OutputFormat::Json => render_record(&result, ParseRecord::to_json_pretty)?,
        OutputFormat::Compact => render_record(&result, ParseRecord::to_json)?,
        OutputFormat::Tree => render_tree(&result),
    };
    emit(output, &rendered)?;

    if result.is_accepted() && clean_input {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Render lexical errors as miette reports with the offending source line.
pub fn render_lex_errors(file_path: &str, source: &str, errors: &[LexError]) -> String {
    let mut out = String::new();
    for error in errors {
        let report = Report::new(error.clone()).with_source_code(NamedSource::new(file_path, source.to_string()));
        let _ = writeln!(out, "{report:?}");
    }
    out
}

fn render_record(
    result: &ParseResult,
    to_text: fn(&ParseRecord) -> Result<String, RecordError>,
) -> CliResult<String> {
    let mut json = to_text(&ParseRecord::from_result(result))
        .map_err(|e| CliError::failure(format!("Error serializing parse record: {}", e)))?;
    json.push('\n');
    Ok(json)
}

/// Tree view: status line, indented tree, then one line per diagnostic.
pub fn render_tree(result: &ParseResult) -> String {
    let mut out = format!("status: {}\n", result.status);
    match &result.program {
        Some(program) => out.push_str(&program.to_string()),
        None => out.push_str("<no tree>\n"),
    }
    for message in result.error_messages() {
        let _ = writeln!(out, "error: {message}");
    }
    out
}

fn emit(output: Option<&Path>, text: &str) -> CliResult<()> {
    match output {
        Some(path) => fs::write(path, text)
            .map_err(|e| CliError::failure(format!("Error writing '{}': {}", path.display(), e))),
        None => {
            print!("{text}");
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_render_tree_accepted() {
        let parsed = pipeline::parse_source("read x; write x", ParserConfig::default());
        assert_eq!(
            render_tree(&parsed.result),
            "status: Accepted\n[read x]\n[write]\n  (id x)\n"
        );
    }

    #[test]
    fn test_render_tree_lists_errors() {
        let parsed = pipeline::parse_source("write 1 2", ParserConfig::default());
        let tree = render_tree(&parsed.result);
        assert!(tree.starts_with("status: Rejected\n"));
        assert!(tree.ends_with("error: unexpected trailing tokens at token 2\n"));
    }

    #[test]
    fn test_render_tree_without_program() {
        let tree = render_tree(&ParseResult::no_tokens());
        assert_eq!(tree, "status: Error\n<no tree>\nerror: failed to load tokens or empty file\n");
    }

    #[test]
    fn test_render_lex_errors_mentions_character() {
        let source = "x := 1 # 2";
        let scanned = lexer::scan(source);
        let rendered = render_lex_errors("prog.tny", source, &scanned.errors);
        assert!(rendered.contains("unrecognized character"));
    }

    #[test]
    fn test_render_record_compact_is_one_line() {
        let parsed = pipeline::parse_source("read x; write x", ParserConfig::default());
        let json = render_record(&parsed.result, ParseRecord::to_json).unwrap();
        assert!(json.starts_with("{\"status\":\"Accepted\""));
        assert_eq!(json.lines().count(), 1);
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source("definitely/not/here.tny").unwrap_err();
        assert!(err.message.contains("Cannot access file"));
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }
}
