//! Script and digit membership tests

/// Inclusive code point ranges treated as Arabic script.
///
/// Arabic, Arabic Supplement, Arabic Extended-A, Presentation Forms-A,
/// Presentation Forms-B and the U+10E60 block. Sorted and disjoint.
pub static ARABIC_RANGES: [(u32, u32); 6] = [
    (0x0600, 0x06FF),
    (0x0750, 0x077F),
    (0x08A0, 0x08FF),
    (0xFB50, 0xFDFF),
    (0xFE70, 0xFEFF),
    (0x10E60, 0x10E7F),
];

/// True when `c` falls inside any of the [`ARABIC_RANGES`]
pub fn is_arabic_script(c: char) -> bool {
    let cp = c as u32;
    ARABIC_RANGES
        .binary_search_by(|&(start, end)| {
            if end < cp {
                std::cmp::Ordering::Less
            } else if start > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// ASCII or Arabic-Indic (U+0660..U+0669) decimal digit
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || ('\u{0660}'..='\u{0669}').contains(&c)
}
