//! Code point and word order reversal

use harf_core::Transform;

/// Reverse `text` code point by code point
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Reverses text code point by code point
#[derive(Debug, Clone, Copy, Default)]
pub struct Reverser;

impl Transform for Reverser {
    fn name(&self) -> &'static str {
        "reverse"
    }

    fn apply(&self, text: &str) -> String {
        reverse(text)
    }
}
