#![no_main]

use libfuzzer_sys::fuzz_target;
use tiny::parser::{ParseStatus, ParserConfig};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let parsed = tiny::parse_source(s, ParserConfig::default());
        assert_eq!(parsed.result.status == ParseStatus::Accepted, parsed.result.errors.is_empty());
    }
});
