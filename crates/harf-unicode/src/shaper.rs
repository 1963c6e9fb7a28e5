// this_file: crates/harf-unicode/src/shaper.rs

//! Contextual shaping into Arabic presentation forms.
//!
//! Each letter is replaced by the glyph matching its position inside a
//! connected run: isolated, initial, medial or final. The decision looks one
//! code point back and one forward, so the whole string is shaped in a single
//! left-to-right pass.
//!
//! Letters are recognised in any of their forms, so already shaped text finds
//! the same letters again and shaping twice gives the same result as shaping
//! once.

use harf_core::{PositionalForm, Transform};

use crate::letters::{is_arabic_letter, letter_for, Letter};

/// Presentation-form shaper for Arabic text
///
/// ```
/// use harf_unicode::ArabicShaper;
///
/// let shaper = ArabicShaper::new();
/// // beh + yeh + teh: initial, medial, final
/// assert_eq!(shaper.shape("بيت"), "\u{FE91}\u{FEF4}\u{FE96}");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ArabicShaper;

impl ArabicShaper {
    pub fn new() -> Self {
        Self
    }

    /// Shape a string; non-letters pass through untouched
    pub fn shape(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let chars: Vec<char> = text.chars().collect();
        self.shape_chars(&chars).into_iter().collect()
    }

    /// Shape an already decoded buffer. The output has the same length.
    pub fn shape_chars(&self, text: &[char]) -> Vec<char> {
        (0..text.len())
            .map(|index| match self.shaped_letter(text, index) {
                Some((letter, form)) => letter.glyph(form),
                None => text[index],
            })
            .collect()
    }

    /// Positional form of the letter at `index`.
    ///
    /// Returns None when `index` is out of range or the code point there is
    /// not an Arabic letter.
    pub fn positional_form(&self, text: &[char], index: usize) -> Option<PositionalForm> {
        self.shaped_letter(text, index).map(|(_, form)| form)
    }

    fn shaped_letter(&self, text: &[char], index: usize) -> Option<(&'static Letter, PositionalForm)> {
        let letter = letter_for(*text.get(index)?)?;

        let prev = index
            .checked_sub(1)
            .and_then(|i| text.get(i))
            .and_then(|&c| letter_for(c));
        let next_is_letter = text
            .get(index + 1)
            .is_some_and(|&c| is_arabic_letter(c));

        let form = match (prev, next_is_letter) {
            (Some(prev), true) => {
                if prev.joins_following() {
                    PositionalForm::Medial
                } else {
                    PositionalForm::Initial
                }
            }
            (None, true) => PositionalForm::Initial,
            (Some(prev), false) => {
                if prev.joins_following() {
                    PositionalForm::Final
                } else {
                    PositionalForm::Isolated
                }
            }
            (None, false) => PositionalForm::Isolated,
        };

        Some((letter, form))
    }
}

impl Transform for ArabicShaper {
    fn name(&self) -> &'static str {
        "shape"
    }

    fn apply(&self, text: &str) -> String {
        log::debug!("ArabicShaper: shaping {} chars", text.chars().count());
        self.shape(text)
    }
}

/// Shape `text` into Arabic presentation forms
pub fn shape(text: &str) -> String {
    ArabicShaper::new().shape(text)
}
