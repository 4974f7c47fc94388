//! Define the reserved keyword vocabulary for TINY.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**. TINY itself is case-insensitive, so callers
//!   lowercase a word before resolving it.
//! - Every spelling is made of ASCII letters only. The scanner never puts digits into a word, so a
//!   keyword containing one could never be matched.
//!
//! ## Examples
//! ```rust
//! use tiny_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("repeat"), Some(KeywordId::Repeat));
//! assert_eq!(keywords::as_str(KeywordId::Until), "until");
//! assert_eq!(keywords::from_str("REPEAT"), None);
//! ```

/// Stable identifier for every reserved keyword.
///
/// ## Notes
/// - The declaration order matches [`KEYWORDS`]; [`info_for`] relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    If,
    Then,
    Else,
    End,
    Repeat,
    Until,
    Read,
    Write,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
}

/// Registry of all keywords, in [`KeywordId`] declaration order.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::If, "if"),
    info(KeywordId::Then, "then"),
    info(KeywordId::Else, "else"),
    info(KeywordId::End, "end"),
    info(KeywordId::Repeat, "repeat"),
    info(KeywordId::Until, "until"),
    info(KeywordId::Read, "read"),
    info(KeywordId::Write, "write"),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical (lowercase) spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Full metadata.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The associated [`KeywordInfo`] from [`KEYWORDS`].
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    &KEYWORDS[id as usize]
}

/// Lookup by spelling.
///
/// ## Parameters
/// - `s`: Candidate keyword spelling, already lowercased.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str) -> KeywordInfo {
    KeywordInfo { id, canonical }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn else_is_reserved() {
        assert_eq!(from_str("else"), Some(KeywordId::Else));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(from_str("If"), None);
        assert_eq!(from_str("if"), Some(KeywordId::If));
    }

    #[test]
    fn info_for_matches_id() {
        assert_eq!(info_for(KeywordId::Until).canonical, "until");
        assert_eq!(info_for(KeywordId::Write).id, KeywordId::Write);
    }
}
