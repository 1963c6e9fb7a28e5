// this_file: crates/harf-unicode/src/filters.rs

//! Character filters: vowel marks, tatweel and non-Arabic stripping.

use harf_core::Transform;

use crate::letters::{is_arabic_letter, TATWEEL};

/// Arabic vowel marks (tashkeel): fathatan through sukun
pub static TASHKEEL: [char; 8] = [
    '\u{064B}', // fathatan
    '\u{064C}', // dammatan
    '\u{064D}', // kasratan
    '\u{064E}', // fatha
    '\u{064F}', // damma
    '\u{0650}', // kasra
    '\u{0651}', // shadda
    '\u{0652}', // sukun
];

pub fn is_tashkeel(c: char) -> bool {
    TASHKEEL.contains(&c)
}

/// Drop every vowel mark
pub fn remove_tashkeel(text: &str) -> String {
    text.chars().filter(|&c| !is_tashkeel(c)).collect()
}

/// Number of code points, not counting vowel marks
pub fn smart_length(text: &str) -> usize {
    text.chars().filter(|&c| !is_tashkeel(c)).count()
}

/// Drop every tatweel
pub fn remove_tatweel(text: &str) -> String {
    text.chars().filter(|&c| c != TATWEEL).collect()
}

/// Keep only code points that are Arabic letters in some form
pub fn remove_non_arabic(text: &str) -> String {
    text.chars().filter(|&c| is_arabic_letter(c)).collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TashkeelStripper;

impl Transform for TashkeelStripper {
    fn name(&self) -> &'static str {
        "strip-tashkeel"
    }

    fn apply(&self, text: &str) -> String {
        remove_tashkeel(text)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TatweelStripper;

impl Transform for TatweelStripper {
    fn name(&self) -> &'static str {
        "strip-tatweel"
    }

    fn apply(&self, text: &str) -> String {
        remove_tatweel(text)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NonArabicStripper;

impl Transform for NonArabicStripper {
    fn name(&self) -> &'static str {
        "strip-non-arabic"
    }

    fn apply(&self, text: &str) -> String {
        remove_non_arabic(text)
    }
}
