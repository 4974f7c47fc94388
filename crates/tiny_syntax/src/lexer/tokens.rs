//! Token types for the TINY scanner.
//!
//! ## Notes
//! - [`TokenKind`] is a closed, payload-free enumeration; the matched text lives in [`Token::lexeme`].
//! - Every kind has a stable upper-case name ([`TokenKind::name`]) used by the `lexeme,KIND` token file
//!   format and by diagnostics.

use std::fmt;

use tiny_core::lang::keywords::{self, KeywordId};
use tiny_core::lang::symbols::SymbolId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keywords ==========
    If,
    Then,
    Else,
    End,
    Repeat,
    Until,
    Read,
    Write,

    // ========== Symbols ==========
    Semicolon,
    Assign,
    LessThan,
    Equal,
    Plus,
    Minus,
    Mult,
    Div,
    OpenParen,
    CloseParen,

    // ========== Identifiers and Literals ==========
    Identifier,
    Number,
}

impl TokenKind {
    /// Every token kind, keywords first.
    pub const ALL: [TokenKind; 20] = [
        TokenKind::If,
        TokenKind::Then,
        TokenKind::Else,
        TokenKind::End,
        TokenKind::Repeat,
        TokenKind::Until,
        TokenKind::Read,
        TokenKind::Write,
        TokenKind::Semicolon,
        TokenKind::Assign,
        TokenKind::LessThan,
        TokenKind::Equal,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Mult,
        TokenKind::Div,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::Identifier,
        TokenKind::Number,
    ];

    /// Stable name used in token files and diagnostics (e.g. `LESSTHAN`).
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::End => "END",
            TokenKind::Repeat => "REPEAT",
            TokenKind::Until => "UNTIL",
            TokenKind::Read => "READ",
            TokenKind::Write => "WRITE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Assign => "ASSIGN",
            TokenKind::LessThan => "LESSTHAN",
            TokenKind::Equal => "EQUAL",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mult => "MULT",
            TokenKind::Div => "DIV",
            TokenKind::OpenParen => "OPENBRACKET",
            TokenKind::CloseParen => "CLOSEDBRACKET",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
        }
    }

    /// Resolve a token-file kind name. Matching is exact (upper-case).
    pub fn from_name(name: &str) -> Option<TokenKind> {
        TokenKind::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Map a registry keyword to its token kind.
    pub fn from_keyword(id: KeywordId) -> TokenKind {
        match id {
            KeywordId::If => TokenKind::If,
            KeywordId::Then => TokenKind::Then,
            KeywordId::Else => TokenKind::Else,
            KeywordId::End => TokenKind::End,
            KeywordId::Repeat => TokenKind::Repeat,
            KeywordId::Until => TokenKind::Until,
            KeywordId::Read => TokenKind::Read,
            KeywordId::Write => TokenKind::Write,
        }
    }

    /// Map a registry symbol to its token kind.
    pub fn from_symbol(id: SymbolId) -> TokenKind {
        match id {
            SymbolId::Semicolon => TokenKind::Semicolon,
            SymbolId::Assign => TokenKind::Assign,
            SymbolId::LessThan => TokenKind::LessThan,
            SymbolId::Equal => TokenKind::Equal,
            SymbolId::Plus => TokenKind::Plus,
            SymbolId::Minus => TokenKind::Minus,
            SymbolId::Mult => TokenKind::Mult,
            SymbolId::Div => TokenKind::Div,
            SymbolId::OpenParen => TokenKind::OpenParen,
            SymbolId::CloseParen => TokenKind::CloseParen,
        }
    }

    /// Classify a lowercase letter run: a reserved word or an identifier.
    pub fn for_word(word: &str) -> TokenKind {
        keywords::from_str(word).map_or(TokenKind::Identifier, TokenKind::from_keyword)
    }

    /// Return `true` for the eight reserved words.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Then
                | TokenKind::Else
                | TokenKind::End
                | TokenKind::Repeat
                | TokenKind::Until
                | TokenKind::Read
                | TokenKind::Write
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scanned token: the (lowercased) lexeme and its kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub lexeme: String,
    pub kind: TokenKind,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            lexeme: lexeme.into(),
            kind,
        }
    }
}

/// Renders the token-file form, `lexeme,KIND`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lexeme, self.kind)
    }
}
