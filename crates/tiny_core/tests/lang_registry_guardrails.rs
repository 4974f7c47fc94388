use std::collections::HashMap;

use tiny_core::lang::keywords;
use tiny_core::lang::symbols;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn keywords_are_ascii_lowercase_letters() {
    for info in keywords::KEYWORDS {
        assert!(
            info.canonical.chars().all(|c| c.is_ascii_lowercase()),
            "keyword {:?} must be made of lowercase ASCII letters",
            info.canonical
        );
    }
}

#[test]
fn keyword_table_follows_declaration_order() {
    for (index, info) in keywords::KEYWORDS.iter().enumerate() {
        assert_eq!(info.id as usize, index, "KEYWORDS out of order at {:?}", info.id);
    }
}

#[test]
fn symbols_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, symbols::SymbolId> = HashMap::new();

    for info in symbols::SYMBOLS {
        assert_eq!(
            symbols::from_str(info.spelling),
            Some(info.id),
            "symbol spelling not resolvable: {}",
            info.spelling
        );
        assert_eq!(symbols::as_str(info.id), info.spelling);

        if let Some(prev) = seen.insert(info.spelling, info.id) {
            panic!(
                "duplicate symbol spelling {:?}: {:?} and {:?}",
                info.spelling, prev, info.id
            );
        }
    }
}

#[test]
fn symbol_table_follows_declaration_order() {
    for (index, info) in symbols::SYMBOLS.iter().enumerate() {
        assert_eq!(info.id as usize, index, "SYMBOLS out of order at {:?}", info.id);
    }
}

#[test]
fn assign_is_the_only_multi_char_symbol() {
    let long: Vec<_> = symbols::SYMBOLS
        .iter()
        .filter(|s| s.spelling.len() > 1)
        .map(|s| s.spelling)
        .collect();
    assert_eq!(long, vec![":="]);
}
