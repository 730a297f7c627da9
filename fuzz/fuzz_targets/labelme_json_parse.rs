//! Fuzz target for LabelMe annotation parsing.
//!
//! Any document that parses must also render into label lines without
//! panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use segset::annotation::from_annotation_str;
use segset::yolo::label_lines;
use segset::ClassTable;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(annotation) = from_annotation_str(json) {
        let mut classes = ClassTable::new();
        let _ = label_lines(&annotation.shapes, 640, &mut classes);
    }
});
