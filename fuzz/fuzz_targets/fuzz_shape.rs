//! Fuzz the contextual shaper
//!
//! Feeds arbitrary bytes through the decoding boundary and the shaper,
//! checking the properties every caller relies on:
//!
//! - Shaping never changes the number of code points
//! - Shaping an already shaped string is a no-op
//! - Stripping vowel marks never grows the text

#![no_main]

use harf_core::decode;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Invalid UTF-8 must be rejected at the boundary, never reach the shaper
    let Ok(text) = decode(data) else {
        return;
    };

    if text.len() > 10_000 {
        return;
    }

    let shaped = harf_unicode::shape(text);
    assert_eq!(shaped.chars().count(), text.chars().count());
    assert_eq!(harf_unicode::shape(&shaped), shaped);

    let stripped = harf_unicode::remove_tashkeel(text);
    assert!(stripped.chars().count() <= text.chars().count());
    assert_eq!(harf_unicode::smart_length(text), stripped.chars().count());
});
