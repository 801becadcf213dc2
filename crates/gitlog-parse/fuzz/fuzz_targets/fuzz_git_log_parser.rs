#![no_main]

use gitlog_parse::{ParseOptions, parse_bytes};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let options = ParseOptions::default().quiet();
    if let Ok(records) = parse_bytes(data, &options) {
        for record in &records {
            assert!(!record.commit.is_empty());
        }
    }
});
