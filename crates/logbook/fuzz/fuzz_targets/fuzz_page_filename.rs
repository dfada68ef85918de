#![no_main]

use libfuzzer_sys::fuzz_target;
use logbook::site::page_filename;

fuzz_target!(|title: &str| {
    let name = page_filename(title);
    assert!(name.ends_with(".html"));
    assert!(!name.contains('/'));
    assert!(!name.contains('\\'));
});
