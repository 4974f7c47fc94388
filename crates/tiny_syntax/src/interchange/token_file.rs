//! Token persistence format.
//!
//! One token per line, written as `lexeme,KIND` (e.g. `:=,ASSIGN`). A lexeme may itself contain
//! commas, so readers split on the **last** comma only.

use std::fmt::Write as _;

use thiserror::Error;

use crate::lexer::{Token, TokenKind};

/// A line of a token file that could not be turned into a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedLine {
    #[error("line {line}: missing ',' separator in {text:?}")]
    MissingSeparator { line: usize, text: String },

    #[error("line {line}: unknown token kind {kind:?}")]
    UnknownKind { line: usize, kind: String },
}

/// Tokens read from a token file, plus the lines that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenFile {
    pub tokens: Vec<Token>,
    pub skipped: Vec<MalformedLine>,
}

/// Render tokens in the persistence format, newline-terminated.
pub fn write_tokens<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> String {
    let mut out = String::new();
    for token in tokens {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{token}");
    }
    out
}

/// Parse the persistence format.
///
/// Blank lines are ignored. Both halves of a line are trimmed. Malformed lines are skipped and
/// recorded in [`TokenFile::skipped`] instead of aborting the read.
pub fn read_tokens(text: &str) -> TokenFile {
    let mut file = TokenFile::default();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let skipped = match line.rsplit_once(',') {
            None => MalformedLine::MissingSeparator {
                line: index + 1,
                text: line.to_string(),
            },
            Some((lexeme, kind)) => match TokenKind::from_name(kind.trim()) {
                Some(kind) => {
                    file.tokens.push(Token::new(kind, lexeme.trim()));
                    continue;
                }
                None => MalformedLine::UnknownKind {
                    line: index + 1,
                    kind: kind.trim().to_string(),
                },
            },
        };

        tracing::warn!(%skipped, "skipping malformed token line");
        file.skipped.push(skipped);
    }

    file
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer;

    #[test]
    fn test_write_one_token_per_line() {
        let scanned = lexer::scan("x := 1;\nwrite x");
        assert_eq!(
            write_tokens(scanned.tokens()),
            "x,IDENTIFIER\n:=,ASSIGN\n1,NUMBER\n;,SEMICOLON\nwrite,WRITE\nx,IDENTIFIER\n"
        );
    }

    #[test]
    fn test_split_on_last_comma() {
        let file = read_tokens("a,b,IDENTIFIER\n,,SEMICOLON");
        assert_eq!(
            file.tokens,
            vec![
                Token::new(TokenKind::Identifier, "a,b"),
                Token::new(TokenKind::Semicolon, ","),
            ]
        );
        assert!(file.skipped.is_empty());
    }

    #[test]
    fn test_whitespace_and_blank_lines() {
        let file = read_tokens("\n  read , READ  \n\n x ,IDENTIFIER\r\n");
        assert_eq!(
            file.tokens,
            vec![
                Token::new(TokenKind::Read, "read"),
                Token::new(TokenKind::Identifier, "x"),
            ]
        );
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let file = read_tokens("write,WRITE\nnonsense\n1,INTEGER\n1,NUMBER");
        assert_eq!(file.tokens.len(), 2);
        assert_eq!(
            file.skipped,
            vec![
                MalformedLine::MissingSeparator {
                    line: 2,
                    text: "nonsense".to_string(),
                },
                MalformedLine::UnknownKind {
                    line: 3,
                    kind: "INTEGER".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_written_tokens_read_back() {
        let scanned = lexer::scan("if x < 10 then repeat x := x + 1 until x = 10 end");
        let text = write_tokens(scanned.tokens());
        let file = read_tokens(&text);
        assert_eq!(file.tokens, scanned.into_tokens());
    }
}
