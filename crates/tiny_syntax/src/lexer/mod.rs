//! Scanner for the TINY teaching language
//!
//! Works line by line, threading a single piece of state across line boundaries: whether the
//! scanner is currently inside a `{ ... }` block comment.
//!
//! ## Rules
//!
//! - Source is case-insensitive; every lexeme is ASCII-lowercased before classification.
//! - A digit run is a `NUMBER`. A letter run is a keyword or an `IDENTIFIER`; digits never join a
//!   word, so `ab12` scans as `ab` followed by `12`.
//! - `:=` is tried before the single-character symbols `; + - * / ( ) < =`.
//! - Anything else is reported as a [`LexError`], skipped, and scanning continues on the same line.
//! - Lines that produce no tokens (blank, or entirely comment) are dropped from the output.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind};

use tiny_core::lang::symbols;

use crate::diagnostics::LexError;

// ============================================================================
// SCANNER STATE
// ----------------------------------------------------------------------------
//
// [code] --'{'--> [comment] --'}'--> [code]
//    ^                |
//    |             end of line: stays in [comment] for the next line
// ============================================================================

/// Result of scanning a whole source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutput {
    /// One entry per source line that produced at least one token, in source order.
    pub lines: Vec<Vec<Token>>,
    /// Lexical diagnostics in source order.
    pub errors: Vec<LexError>,
    /// The text ended inside an unterminated block comment.
    pub ends_in_comment: bool,
}

impl ScanOutput {
    /// Iterate over all tokens, flattened across lines.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.lines.iter().flatten()
    }

    /// Flatten into the token sequence the parser consumes.
    pub fn into_tokens(self) -> Vec<Token> {
        self.lines.into_iter().flatten().collect()
    }

    /// Number of tokens across all lines.
    pub fn token_count(&self) -> usize {
        self.lines.iter().map(Vec::len).sum()
    }

    /// Return `true` if no lexical errors were reported.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Line-oriented scanner.
///
/// The only state carried between [`Scanner::scan_line`] calls is the block-comment flag and the
/// accumulated diagnostics.
#[derive(Debug, Default)]
pub struct Scanner {
    in_comment: bool,
    errors: Vec<LexError>,
}

impl Scanner {
    /// Create a scanner positioned outside any comment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `true` if the previous line left a block comment open.
    pub fn in_comment(&self) -> bool {
        self.in_comment
    }

    /// Diagnostics reported so far.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Consume the scanner, returning its diagnostics.
    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    /// Scan one line of source.
    ///
    /// ## Parameters
    /// - `line`: Line text without its terminator.
    /// - `line_no`: 1-based line number, for diagnostics.
    /// - `offset`: Byte offset of the line within the full source, for diagnostic spans.
    ///
    /// ## Returns
    /// - The tokens found on this line (possibly none).
    pub fn scan_line(&mut self, line: &str, line_no: usize, offset: usize) -> Vec<Token> {
        let chars: Vec<(usize, char)> = line.char_indices().collect();
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            if self.in_comment {
                match chars[i..].iter().position(|&(_, c)| c == '}') {
                    Some(close) => {
                        self.in_comment = false;
                        i += close + 1;
                        continue;
                    }
                    // The rest of the line is comment text.
                    None => break,
                }
            }

            let (pos, c) = chars[i];

            if c.is_whitespace() {
                i += 1;
                continue;
            }

            if c == '{' {
                self.in_comment = true;
                i += 1;
                continue;
            }

            if c.is_ascii_digit() {
                let end = run_end(&chars, i, |c| c.is_ascii_digit());
                tokens.push(Token::new(TokenKind::Number, collect(&chars[i..end])));
                i = end;
                continue;
            }

            if c.is_ascii_alphabetic() {
                let end = run_end(&chars, i, |c| c.is_ascii_alphabetic());
                let word = collect(&chars[i..end]);
                tokens.push(Token::new(TokenKind::for_word(&word), word));
                i = end;
                continue;
            }

            if c == ':' && chars.get(i + 1).is_some_and(|&(_, next)| next == '=') {
                tokens.push(Token::new(
                    TokenKind::from_symbol(symbols::SymbolId::Assign),
                    symbols::as_str(symbols::SymbolId::Assign),
                ));
                i += 2;
                continue;
            }

            if let Some(id) = symbols::from_char(c) {
                tokens.push(Token::new(TokenKind::from_symbol(id), symbols::as_str(id)));
                i += 1;
                continue;
            }

            let error = LexError::unrecognized(c, line_no, i + 1, offset + pos);
            tracing::warn!(%error, "lexical error");
            self.errors.push(error);
            i += 1;
        }

        tokens
    }
}

/// Index one past the end of the run of characters starting at `start` that satisfy `pred`.
fn run_end(chars: &[(usize, char)], start: usize, pred: impl Fn(char) -> bool) -> usize {
    chars[start..]
        .iter()
        .position(|&(_, c)| !pred(c))
        .map_or(chars.len(), |len| start + len)
}

fn collect(chars: &[(usize, char)]) -> String {
    chars.iter().map(|&(_, c)| c.to_ascii_lowercase()).collect()
}

/// Scan a whole source text.
///
/// ## Parameters
/// - `source`: Raw program text. `\n` and `\r\n` line endings are both accepted.
///
/// ## Returns
/// - The per-line token groups and every lexical diagnostic. Scanning never fails outright.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn scan(source: &str) -> ScanOutput {
    let mut scanner = Scanner::new();
    let mut lines = Vec::new();
    let mut offset = 0;

    for (index, raw) in source.split_inclusive('\n').enumerate() {
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let tokens = scanner.scan_line(line, index + 1, offset);
        if !tokens.is_empty() {
            lines.push(tokens);
        }
        offset += raw.len();
    }

    let ends_in_comment = scanner.in_comment();
    if ends_in_comment {
        tracing::debug!("source ends inside an unterminated block comment");
    }

    ScanOutput {
        lines,
        errors: scanner.into_errors(),
        ends_in_comment,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan(source).tokens().map(|t| t.kind).collect()
    }

    fn lexemes(source: &str) -> Vec<String> {
        scan(source).tokens().map(|t| t.lexeme.clone()).collect()
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert_eq!(kinds("IF if If iF"), vec![TokenKind::If; 4]);
        assert_eq!(lexemes("IF If"), vec!["if", "if"]);
    }

    #[test]
    fn test_identifier_stops_at_digit() {
        let out = scan("ab12");
        let tokens: Vec<_> = out.tokens().cloned().collect();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Identifier, "ab"),
                Token::new(TokenKind::Number, "12"),
            ]
        );
    }

    #[test]
    fn test_assign_before_single_symbols() {
        assert_eq!(
            kinds("x:=x+1;"),
            vec![
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Identifier,
                TokenKind::Plus,
                TokenKind::Number,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_all_single_symbols() {
        assert_eq!(
            kinds("; + - * / ( ) < ="),
            vec![
                TokenKind::Semicolon,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Mult,
                TokenKind::Div,
                TokenKind::OpenParen,
                TokenKind::CloseParen,
                TokenKind::LessThan,
                TokenKind::Equal,
            ]
        );
    }

    #[test]
    fn test_same_line_comment() {
        let out = scan("read x { the input } ; write x");
        assert_eq!(out.lines.len(), 1);
        assert_eq!(out.token_count(), 5);
        assert!(!out.ends_in_comment);
    }

    #[test]
    fn test_comment_spanning_three_lines() {
        let source = "read x;\n{ first\nsecond\nthird }\nwrite x";
        let out = scan(source);
        assert_eq!(out.lines.len(), 2);
        assert_eq!(lexemes(source), vec!["read", "x", ";", "write", "x"]);
    }

    #[test]
    fn test_comment_close_resumes_scanning_mid_line() {
        let out = scan("x := 1 { open\n still } y := 2");
        assert_eq!(out.lines.len(), 2);
        assert_eq!(
            out.lines[1].iter().map(|t| t.lexeme.as_str()).collect::<Vec<_>>(),
            vec!["y", ":=", "2"]
        );
    }

    #[test]
    fn test_comment_only_lines_dropped() {
        let out = scan("{ header }\n\n   \nwrite 1\n{ trailer }");
        assert_eq!(out.lines.len(), 1);
    }

    #[test]
    fn test_unterminated_comment() {
        let out = scan("write 1 { never closed\nwrite 2");
        assert_eq!(out.token_count(), 2);
        assert!(out.ends_in_comment);
        assert!(out.is_clean());
    }

    #[test]
    fn test_scanner_state_carries_between_lines() {
        let mut scanner = Scanner::new();
        assert!(scanner.scan_line("x := { open", 1, 0).len() == 2);
        assert!(scanner.in_comment());
        assert!(scanner.scan_line("still comment ; := 3", 2, 12).is_empty());
        assert!(scanner.in_comment());
        let tokens = scanner.scan_line("} 3", 3, 33);
        assert!(!scanner.in_comment());
        assert_eq!(tokens, vec![Token::new(TokenKind::Number, "3")]);
    }

    #[test]
    fn test_unrecognized_character_reported_and_skipped() {
        let out = scan("x := 1 # 2\ny := 3 ! 4");
        assert_eq!(out.errors.len(), 2);
        assert_eq!(out.errors[0].ch, '#');
        assert_eq!(out.errors[0].line, 1);
        assert_eq!(out.errors[0].column, 8);
        assert_eq!(out.errors[0].span.offset(), 7);
        assert_eq!(out.errors[1].ch, '!');
        assert_eq!(out.errors[1].line, 2);
        assert_eq!(out.errors[1].span.offset(), 18);
        // Scanning continued past both errors.
        assert_eq!(out.token_count(), 8);
    }

    #[test]
    fn test_lone_colon_and_close_brace_are_errors() {
        let out = scan("x : 1 }");
        let chars: Vec<char> = out.errors.iter().map(|e| e.ch).collect();
        assert_eq!(chars, vec![':', '}']);
    }

    #[test]
    fn test_non_ascii_letter_is_error() {
        let out = scan("café := 1");
        assert_eq!(out.errors.len(), 1);
        assert_eq!(out.errors[0].ch, 'é');
        assert_eq!(lexemes("café := 1"), vec!["caf", ":=", "1"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let out = scan("read x;\r\nwrite x\r\n");
        assert_eq!(out.lines.len(), 2);
        assert!(out.is_clean());
    }

    #[test]
    fn test_else_scans_as_keyword() {
        assert_eq!(kinds("else"), vec![TokenKind::Else]);
    }
}
