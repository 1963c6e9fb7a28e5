// this_file: crates/harf-unicode/src/lib.rs

//! Arabic shaping and visual reordering for renderers that draw one code
//! point at a time.
//!
//! Two algorithms do the real work:
//!
//! - [`shape`] swaps each Arabic letter for its isolated, initial, medial or
//!   final presentation form, looking only at its immediate neighbours.
//! - [`fix_bidi`] turns logically ordered mixed Arabic / Latin / digit text
//!   into the word sequence a left-to-right renderer must draw, with optional
//!   greedy line wrapping.
//!
//! Around them sit the small filters ([`remove_tashkeel`], [`remove_tatweel`],
//! [`remove_non_arabic`], [`smart_length`]) and [`reverse`]. Every step also
//! exists as a [`Transform`] so it can be chained in a
//! [`harf_core::Pipeline`] or picked by name with [`transform_by_name`].
//!
//! ```
//! use harf_unicode::{fix_bidi, remove_tashkeel, shape};
//!
//! assert_eq!(remove_tashkeel("نًصٌ عَربيُّ"), "نص عربي");
//! assert_eq!(shape("بيت"), "\u{FE91}\u{FEF4}\u{FE96}");
//! assert_eq!(fix_bidi("١٢٣", 0), "١٢٣");
//! ```

use std::sync::Arc;

use harf_core::{BidiOptions, HarfError, Result, Transform};

pub mod bidi;
pub mod filters;
pub mod letters;
pub mod reverse;
pub mod script;
pub mod shaper;

pub use bidi::{classify_word, fix_bidi, fix_bidi_line, wrap_lines, BidiReorderer};
pub use filters::{
    is_tashkeel, remove_non_arabic, remove_tashkeel, remove_tatweel, smart_length,
    NonArabicStripper, TashkeelStripper, TatweelStripper,
};
pub use letters::{is_arabic_letter, letter_for, Letter, LETTERS, TATWEEL};
pub use reverse::{reverse, Reverser};
pub use script::{is_arabic_script, is_digit};
pub use shaper::{shape, ArabicShaper};

/// Names accepted by [`transform_by_name`], in the order `harf info` lists them
pub const TRANSFORM_NAMES: [&str; 6] = [
    "shape",
    "bidi",
    "reverse",
    "strip-tashkeel",
    "strip-tatweel",
    "strip-non-arabic",
];

/// Look up a transform by its [`Transform::name`]
///
/// `options` only matters for `"bidi"`.
pub fn transform_by_name(name: &str, options: &BidiOptions) -> Result<Arc<dyn Transform>> {
    let transform: Arc<dyn Transform> = match name {
        "shape" => Arc::new(ArabicShaper::new()),
        "bidi" => Arc::new(BidiReorderer::new(*options)),
        "reverse" => Arc::new(Reverser),
        "strip-tashkeel" => Arc::new(TashkeelStripper),
        "strip-tatweel" => Arc::new(TatweelStripper),
        "strip-non-arabic" => Arc::new(NonArabicStripper),
        other => return Err(HarfError::UnknownTransform(other.to_string())),
    };
    Ok(transform)
}


#[cfg(test)]
mod proptests;
