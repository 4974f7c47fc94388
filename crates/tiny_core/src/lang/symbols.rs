//! Special-symbol vocabulary.
//!
//! This module defines the canonical set of punctuation and operator symbols recognised by the
//! scanner. `:=` is the only two-character spelling; everything else is a single ASCII character,
//! which is what lets the scanner try `:=` first and fall back to [`from_char`].
//!
//! ## Examples
//! ```rust
//! use tiny_core::lang::symbols::{self, SymbolId};
//!
//! assert_eq!(symbols::from_str(":="), Some(SymbolId::Assign));
//! assert_eq!(symbols::from_char('<'), Some(SymbolId::LessThan));
//! assert_eq!(symbols::from_char(':'), None);
//! ```

/// Stable identifier for every special symbol.
///
/// ## Notes
/// - The declaration order matches [`SYMBOLS`]; [`info_for`] relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolId {
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
}

/// Metadata for a symbol.
#[derive(Debug, Clone, Copy)]
pub struct SymbolInfo {
    pub id: SymbolId,
    pub spelling: &'static str,
}

/// Registry of all symbols, in [`SymbolId`] declaration order.
pub const SYMBOLS: &[SymbolInfo] = &[
    info(SymbolId::Semicolon, ";"),
    info(SymbolId::Assign, ":="),
    info(SymbolId::LessThan, "<"),
    info(SymbolId::Equal, "="),
    info(SymbolId::Plus, "+"),
    info(SymbolId::Minus, "-"),
    info(SymbolId::Mult, "*"),
    info(SymbolId::Div, "/"),
    info(SymbolId::OpenParen, "("),
    info(SymbolId::CloseParen, ")"),
];

/// Canonical spelling.
pub fn as_str(id: SymbolId) -> &'static str {
    info_for(id).spelling
}

/// Full metadata from [`SYMBOLS`].
pub fn info_for(id: SymbolId) -> &'static SymbolInfo {
    &SYMBOLS[id as usize]
}

/// Lookup by full spelling (one or two characters).
pub fn from_str(s: &str) -> Option<SymbolId> {
    SYMBOLS.iter().find(|sym| sym.spelling == s).map(|sym| sym.id)
}

/// Lookup a single-character symbol.
///
/// ## Returns
/// - `None` for characters that only occur as part of a longer symbol (`:`) or not at all.
pub fn from_char(c: char) -> Option<SymbolId> {
    SYMBOLS
        .iter()
        .find(|sym| {
            let mut chars = sym.spelling.chars();
            chars.next() == Some(c) && chars.next().is_none()
        })
        .map(|sym| sym.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: SymbolId, spelling: &'static str) -> SymbolInfo {
    SymbolInfo { id, spelling }
}
