//! Diagnostics produced by the scanner and the parser.
//!
//! Two independent, non-fatal classes:
//! - [`LexError`]: an unrecognized character. It is reported, skipped, and scanning continues on the
//!   same line. Carries a byte span so the CLI can render it with `miette`.
//! - [`SyntaxError`]: a grammar mismatch, located by token index (tokens carry no source positions).

use std::fmt;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::lexer::TokenKind;

/// An unrecognized character found by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("unrecognized character '{ch}' at line {line}, column {column}")]
#[diagnostic(
    code(tiny::lex::unrecognized_character),
    help("TINY accepts letters, digits, whitespace, brace comments and the symbols ; := < = + - * / ( )")
)]
pub struct LexError {
    pub ch: char,
    /// 1-based source line.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
    /// Byte span into the full source text.
    #[label("not part of the language")]
    pub span: SourceSpan,
}

impl LexError {
    pub fn unrecognized(ch: char, line: usize, column: usize, offset: usize) -> Self {
        Self {
            ch,
            line,
            column,
            span: SourceSpan::new(offset.into(), ch.len_utf8()),
        }
    }
}

/// What the parser was looking for when a match failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    Token(TokenKind),
    Statement,
    Expression,
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Token(kind) => f.write_str(kind.name()),
            Expectation::Statement => f.write_str("statement"),
            Expectation::Expression => f.write_str("expression"),
        }
    }
}

/// A syntax diagnostic. The `Display` form is the message stored in parse records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("expected {expected}, found {} at token {index}", found_name(.found))]
    Expected {
        expected: Expectation,
        /// `None` when the token stream was exhausted.
        found: Option<TokenKind>,
        index: usize,
    },

    #[error("unexpected token '{lexeme}' at start of statement at token {index}")]
    UnexpectedStatementStart { lexeme: String, index: usize },

    #[error("unexpected token '{lexeme}' in expression at token {index}")]
    UnexpectedInExpression { lexeme: String, index: usize },

    #[error("unexpected trailing tokens at token {index}")]
    TrailingTokens { index: usize },

    #[error("nesting depth exceeds the maximum of {max} at token {index}")]
    NestingTooDeep { max: usize, index: usize },

    #[error("failed to load tokens or empty file")]
    NoTokens,
}

impl SyntaxError {
    /// Token index the diagnostic points at, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            SyntaxError::Expected { index, .. }
            | SyntaxError::UnexpectedStatementStart { index, .. }
            | SyntaxError::UnexpectedInExpression { index, .. }
            | SyntaxError::TrailingTokens { index }
            | SyntaxError::NestingTooDeep { index, .. } => Some(*index),
            SyntaxError::NoTokens => None,
        }
    }
}

fn found_name(found: &Option<TokenKind>) -> &'static str {
    found.map_or("EOF", TokenKind::name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_message_names_kinds() {
        let err = SyntaxError::Expected {
            expected: Expectation::Token(TokenKind::Then),
            found: Some(TokenKind::End),
            index: 4,
        };
        assert_eq!(err.to_string(), "expected THEN, found END at token 4");
    }

    #[test]
    fn expected_message_at_eof() {
        let err = SyntaxError::Expected {
            expected: Expectation::Expression,
            found: None,
            index: 2,
        };
        assert_eq!(err.to_string(), "expected expression, found EOF at token 2");
    }

    #[test]
    fn lex_error_span_covers_multibyte_char() {
        let err = LexError::unrecognized('é', 1, 3, 2);
        assert_eq!(err.span.offset(), 2);
        assert_eq!(err.span.len(), 2);
        assert_eq!(err.to_string(), "unrecognized character 'é' at line 1, column 3");
    }
}
