#![no_main]

use libfuzzer_sys::fuzz_target;
use schema_syntax::highlight::highlight;
use schema_syntax::{parse_with_options, ParseOptions};

const MAX_SOURCE_BYTES: usize = 4096;

fn decode_source(bytes: &[u8]) -> String {
    let capped = &bytes[..bytes.len().min(MAX_SOURCE_BYTES)];
    String::from_utf8_lossy(capped).into_owned()
}

fn check(source: &str, options: ParseOptions) {
    let parse = parse_with_options(source, options);
    let root = parse.syntax();
    assert_eq!(root.text().to_string(), source);

    let len = source.len();
    for error in parse.errors() {
        assert!(usize::from(error.range.end()) <= len);
    }
    for range in highlight(&parse) {
        assert!(usize::from(range.range.end()) <= len);
    }
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let options = ParseOptions {
        legacy_string_strip: data[0] & 1 == 1,
        report_invalid_numbers: data[0] & 2 == 2,
    };
    let raw = decode_source(&data[1..]);

    check(&raw, options);
    check(&format!("component Fuzz {{\n{raw}\n}}\n"), options);
    check(&format!("[Fuzz({raw})]\ntype T {{ int32 x = 1; }}\n"), options);
});
