//! Fuzz visual reordering and line wrapping
//!
//! The first byte picks a wrap width, the rest becomes text. Lossy decoding
//! keeps replacement characters in play so every input reaches the reorderer.
//! Checks:
//!
//! - Reordering never panics, wrapped or not
//! - Each output line holds a single word or fits the width

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&width, rest)) = data.split_first() else {
        return;
    };
    let text = String::from_utf8_lossy(rest);
    if text.len() > 10_000 {
        return;
    }

    let width = usize::from(width % 64);
    let fixed = harf_unicode::fix_bidi(&text, width);

    if width > 0 && !text.trim().is_empty() {
        for line in fixed.split('\n') {
            let fits = line.chars().count() <= width;
            let single_word = line.split_whitespace().count() <= 1;
            assert!(fits || single_word, "line {line:?} exceeds width {width}");
        }
    }

    let _ = harf_unicode::fix_bidi_line(&text);
});
