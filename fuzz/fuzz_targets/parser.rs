#![no_main]
use libfuzzer_sys::fuzz_target;
use lilx::{Parser, ParserConfig, QuoteStyle};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = lilx::parse(s);

        let single = ParserConfig::default()
            .with_quote_style(QuoteStyle::Single)
            .with_max_depth(4);
        let _ = Parser::new(single).parse(s);
    }
});
