//! Harf Core: the shared vocabulary of the Harf workspace
//!
//! Arabic stored in logical order has to be joined and flipped before a
//! naive left-to-right rasterizer can draw it. This crate holds the pieces
//! every other crate agrees on:
//!
//! - [`HarfError`] and [`Result`] for the few places that can fail
//! - [`Transform`], the one trait every text step implements
//! - [`Pipeline`], which chains transforms
//! - [`types`], the small enums and options passed between stages
//!
//! The algorithms themselves live in `harf-unicode`.
//!
//! ```rust
//! use std::sync::Arc;
//! use harf_core::{Pipeline, Transform};
//!
//! struct Trim;
//!
//! impl Transform for Trim {
//!     fn name(&self) -> &'static str { "trim" }
//!     fn apply(&self, text: &str) -> String { text.trim().to_string() }
//! }
//!
//! let pipeline = Pipeline::builder().stage(Arc::new(Trim)).build()?;
//! assert_eq!(pipeline.process("  نص  "), "نص");
//! # Ok::<(), harf_core::HarfError>(())
//! ```

pub mod error;
pub mod pipeline;
pub mod traits;

pub use error::{HarfError, Result};
pub use pipeline::{Pipeline, PipelineBuilder};
pub use traits::Transform;
pub use types::{BidiOptions, PositionalForm, WordClass};

/// Decode raw bytes into text before any transform sees them
///
/// Every algorithm in Harf works on `char`s; invalid UTF-8 is rejected here,
/// at the boundary, so the transforms themselves stay infallible.
pub fn decode(bytes: &[u8]) -> Result<&str> {
    Ok(std::str::from_utf8(bytes)?)
}

/// The data structures passed between stages
pub mod types {
    use serde::{Deserialize, Serialize};

    /// Contextual form of a cursive letter
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum PositionalForm {
        /// Not joined on either side
        #[default]
        Isolated,
        /// Joined only to the following letter
        Initial,
        /// Joined on both sides
        Medial,
        /// Joined only to the preceding letter
        Final,
    }

    impl PositionalForm {
        pub fn name(&self) -> &'static str {
            match self {
                Self::Isolated => "isolated",
                Self::Initial => "initial",
                Self::Medial => "medial",
                Self::Final => "final",
            }
        }
    }

    /// How the reorderer treats a whitespace-delimited word
    ///
    /// Precedence is `Numeric` > `Arabic` > `Other`: a word made only of
    /// Arabic-Indic digits is numeric even though those digits sit inside
    /// the Arabic block.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum WordClass {
        /// Every code point is a decimal digit; never shaped or flipped
        Numeric,
        /// Contains at least one Arabic-script code point
        Arabic,
        /// Latin, punctuation and everything else
        Other,
    }

    impl WordClass {
        pub fn is_other(&self) -> bool {
            matches!(self, Self::Other)
        }
    }

    /// Options for visual reordering
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct BidiOptions {
        /// Wrap lines at this many code points before reordering; 0 disables wrapping
        pub max_line_width: usize,
    }

    impl BidiOptions {
        /// Options that wrap at `max_line_width` code points
        pub fn wrapped(max_line_width: usize) -> Self {
            Self { max_line_width }
        }

        pub fn wraps(&self) -> bool {
            self.max_line_width > 0
        }
    }
}
