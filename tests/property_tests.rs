//! Property-based tests for the TINY pipeline
//!
//! The syntax crate checks the scanner and parser in isolation; these check that the two ways
//! into the parser (source text and persisted token files) stay interchangeable.

use proptest::prelude::*;
use tiny::interchange::write_tokens;
use tiny::parser::ParserConfig;
use tiny::{lexer, parse_source, parse_token_text};

proptest! {
    /// Property: parsing source text and parsing its token file give the same result.
    #[test]
    fn token_file_and_source_agree(source in "[a-zA-Z0-9 :=;<+*/(){}\n-]{0,120}") {
        let direct = parse_source(&source, ParserConfig::default());
        let via_file = parse_token_text(&write_tokens(lexer::scan(&source).tokens()), ParserConfig::default());
        prop_assert!(via_file.skipped.is_empty());
        prop_assert_eq!(via_file.result, direct.result);
    }

    /// Property: the pipeline never panics and its status agrees with the diagnostics.
    #[test]
    fn pipeline_status_matches_errors(source in "\\PC{0,120}", max_depth in 1usize..64) {
        let parsed = parse_source(&source, ParserConfig::with_max_depth(max_depth));
        prop_assert_eq!(parsed.result.is_accepted(), parsed.result.errors.is_empty());
        prop_assert_eq!(parsed.tokens.is_empty(), parsed.result.status == tiny::parser::ParseStatus::Error);
    }
}
