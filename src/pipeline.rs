//! Scan + parse glue shared by the CLI and the integration tests.
//!
//! Both entry points treat "no tokens at all" as a load failure (`ParseStatus::Error`) rather
//! than a syntax error: there is nothing to parse, so the parser is never invoked.

use tiny_syntax::diagnostics::LexError;
use tiny_syntax::interchange::{MalformedLine, read_tokens};
use tiny_syntax::lexer::{self, Token};
use tiny_syntax::parser::{self, ParseResult, ParserConfig};

/// Outcome of parsing raw source text.
#[derive(Debug, Clone)]
pub struct SourceParse {
    /// Flattened token stream that was handed to the parser.
    pub tokens: Vec<Token>,
    pub lex_errors: Vec<LexError>,
    pub result: ParseResult,
}

impl SourceParse {
    /// `true` when scanning reported nothing and the parse was accepted.
    pub fn is_clean(&self) -> bool {
        self.lex_errors.is_empty() && self.result.is_accepted()
    }
}

/// Outcome of parsing a persisted token file.
#[derive(Debug, Clone)]
pub struct TokenTextParse {
    pub result: ParseResult,
    /// Lines that could not be read as `lexeme,KIND`.
    pub skipped: Vec<MalformedLine>,
}

/// Scan and parse source text.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_source(source: &str, config: ParserConfig) -> SourceParse {
    let scanned = lexer::scan(source);
    let lex_errors = scanned.errors.clone();
    let tokens = scanned.into_tokens();
    let result = parse_tokens(&tokens, config);

    SourceParse {
        tokens,
        lex_errors,
        result,
    }
}

/// Read a token file and parse the tokens it contains.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn parse_token_text(text: &str, config: ParserConfig) -> TokenTextParse {
    let file = read_tokens(text);
    TokenTextParse {
        result: parse_tokens(&file.tokens, config),
        skipped: file.skipped,
    }
}

fn parse_tokens(tokens: &[Token], config: ParserConfig) -> ParseResult {
    if tokens.is_empty() {
        tracing::warn!("no tokens to parse");
        return ParseResult::no_tokens();
    }
    parser::parse_with_config(tokens, config)
}
