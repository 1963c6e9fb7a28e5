//! Harf - Arabic text for renderers that cannot shape
//!
//! Rasterizers that draw one code point at a time, with no OpenType shaping
//! and no bidi support, show Arabic as disconnected letters in the wrong
//! order. Harf prepares the text for them:
//!
//! 1. Strip what the renderer cannot draw (vowel marks, tatweel)
//! 2. Shape letters into Arabic presentation forms
//! 3. Reorder words so a left-to-right renderer produces a right-to-left line
//!
//! # Example
//!
//! ```
//! use harf::prelude::*;
//!
//! let pipeline = Pipeline::builder()
//!     .stage(transform_by_name("strip-tashkeel", &BidiOptions::default())?)
//!     .stage(transform_by_name("bidi", &BidiOptions::wrapped(40))?)
//!     .build()?;
//!
//! let visual = pipeline.process("نَصٌّ عربي");
//! assert_eq!(visual, harf::fix_bidi("نص عربي", 40));
//! # Ok::<(), HarfError>(())
//! ```

pub use harf_core::{decode, error, pipeline, traits, types, Pipeline, PipelineBuilder};
pub use harf_unicode as unicode;
pub use harf_unicode::{
    fix_bidi, remove_non_arabic, remove_tashkeel, remove_tatweel, reverse, shape, smart_length,
    transform_by_name, TRANSFORM_NAMES,
};

/// Decode bytes, then reorder for display
///
/// The one fallible entry point: invalid UTF-8 is reported before any
/// shaping happens.
pub fn fix_bidi_bytes(bytes: &[u8], max_line_width: usize) -> harf_core::Result<String> {
    let text = decode(bytes)?;
    log::debug!("fix_bidi_bytes: {} bytes decoded", bytes.len());
    Ok(fix_bidi(text, max_line_width))
}

/// Common imports for typical usage
pub mod prelude {
    pub use harf_core::{
        error::{HarfError, Result},
        traits::Transform,
        types::{BidiOptions, PositionalForm, WordClass},
        Pipeline,
    };
    pub use harf_unicode::{
        transform_by_name, ArabicShaper, BidiReorderer, NonArabicStripper, Reverser,
        TashkeelStripper, TatweelStripper,
    };
}
