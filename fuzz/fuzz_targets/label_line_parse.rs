//! Fuzz target for label line parsing.

#![no_main]

use libfuzzer_sys::fuzz_target;
use segset::yolo::parse_label_line;

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    let _ = parse_label_line(line);
});
