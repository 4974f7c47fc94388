/// Default bound on nested statement sequences plus nested expressions.
///
/// Every `if`/`repeat` body and every parenthesised sub-expression costs one level. Each level
/// is a handful of native stack frames, so 128 stays well inside a 2 MiB thread stack.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting depth. Exceeding it yields a
    /// [`SyntaxError::NestingTooDeep`] diagnostic instead of unbounded recursion.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    /// Default configuration with a different nesting bound.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

/// Overall verdict of a parse.
///
/// `Error` is reserved for input that could not be loaded at all (see [`ParseResult::no_tokens`]);
/// [`Parser::parse`] itself only yields `Accepted` or `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseStatus {
    Accepted,
    Rejected,
    Error,
}

impl std::fmt::Display for ParseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ParseStatus::Accepted => "Accepted",
            ParseStatus::Rejected => "Rejected",
            ParseStatus::Error => "Error",
        };
        f.write_str(s)
    }
}

/// Outcome of a parse: status, the (possibly partial) tree and every diagnostic in order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    pub status: ParseStatus,
    /// `None` when not a single top-level statement could be built.
    pub program: Option<Program>,
    pub errors: Vec<SyntaxError>,
}

impl ParseResult {
    /// Result for an empty or unloadable token stream.
    pub fn no_tokens() -> Self {
        Self {
            status: ParseStatus::Error,
            program: None,
            errors: vec![SyntaxError::NoTokens],
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.status == ParseStatus::Accepted
    }

    /// Diagnostic messages in the order they were reported.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Parser state.
///
/// ## Notes
/// - One token of lookahead, no backtracking.
/// - A failed `expect` never moves the cursor; only `statement` and `factor` skip a token to
///   recover, which together with the depth bound guarantees termination on any input.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    errors: Vec<SyntaxError>,
    config: ParserConfig,
    depth: usize,
    next_id: u32,
    /// Set once the depth bound is hit; later diagnostics are suppressed.
    abandoned: bool,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the default configuration.
    ///
    /// ## Parameters
    /// - `tokens`: Flat token sequence (see [`crate::lexer::ScanOutput::into_tokens`]).
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_config(tokens, ParserConfig::default())
    }

    /// Parser over `tokens` with an explicit configuration.
    pub fn with_config(tokens: &'a [Token], config: ParserConfig) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
            config,
            depth: 0,
            next_id: 1,
            abandoned: false,
        }
    }

    /// Parse the entire token stream.
    ///
    /// The result is `Accepted` iff no diagnostic was recorded. Leftover tokens after the
    /// top-level sequence are only reported when nothing else went wrong first.
    pub fn parse(mut self) -> ParseResult {
        let body = self.program();

        if !self.is_at_end() && self.errors.is_empty() {
            self.errors.push(SyntaxError::TrailingTokens { index: self.pos });
        }

        let status = if self.errors.is_empty() {
            ParseStatus::Accepted
        } else {
            ParseStatus::Rejected
        };
        let program = (!body.is_empty()).then_some(Program { body });

        ParseResult {
            status,
            program,
            errors: self.errors,
        }
    }
}
