#![no_main]

use libfuzzer_sys::fuzz_target;
use logbook_git::commit::split_message;
use logbook_git::diff::unified_diff;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let (title, _body) = split_message(text);
    assert!(!title.contains('\n'));

    // First half is the old content, second half the new one
    let mid = (0..=text.len() / 2)
        .rev()
        .find(|i| text.is_char_boundary(*i))
        .unwrap_or(0);
    let (before, after) = text.split_at(mid);
    let _ = unified_diff("fuzz.txt", Some(before), Some(after));
    let _ = unified_diff("fuzz.txt", None, Some(after));
});
