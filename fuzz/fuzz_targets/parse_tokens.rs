#![no_main]

use libfuzzer_sys::fuzz_target;
use tiny::parser::ParserConfig;

// Token files come from outside the scanner, so any kind sequence can reach the parser.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = tiny::parse_token_text(s, ParserConfig::with_max_depth(32));
    }
});
