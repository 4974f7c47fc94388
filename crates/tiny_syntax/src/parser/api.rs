/// Parse a token stream with the default [`ParserConfig`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Flat token sequence produced by `tiny_syntax::lexer` (or read from a token file).
///
/// ## Returns
/// A [`ParseResult`]; it never fails outright; diagnostics are collected in `errors`.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> ParseResult {
    Parser::new(tokens).parse()
}

/// Parse a token stream with an explicit configuration (e.g. a custom nesting bound).
#[tracing::instrument(skip_all, fields(token_count = tokens.len(), max_depth = config.max_depth))]
pub fn parse_with_config(tokens: &[Token], config: ParserConfig) -> ParseResult {
    Parser::with_config(tokens, config).parse()
}
