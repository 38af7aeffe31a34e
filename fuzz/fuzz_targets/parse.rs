#![no_main]
use libfuzzer_sys::fuzz_target;
use nomen::{OrderHint, Parser};

fuzz_target!(|data: &str| {
    let parser = Parser::default();
    if let Some(name) = parser.parse(data, OrderHint::default()) {
        name.full();
        name.proper(parser.config());
    }
});
