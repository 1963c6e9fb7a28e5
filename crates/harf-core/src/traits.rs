//! The contract every text transform shares
//!
//! Shaping, reordering and the character filters all take text in and hand
//! text back. Giving them one trait lets the CLI and the [`Pipeline`](crate::Pipeline)
//! chain them by name without caring which one it holds.

/// A pure text-to-text step
///
/// ```
/// use harf_core::Transform;
///
/// struct Upper;
///
/// impl Transform for Upper {
///     fn name(&self) -> &'static str {
///         "upper"
///     }
///
///     fn apply(&self, text: &str) -> String {
///         text.to_uppercase()
///     }
/// }
///
/// assert_eq!(Upper.apply("harf"), "HARF");
/// ```
pub trait Transform: Send + Sync {
    /// Stable name used for lookup, logging and `harf info`
    fn name(&self) -> &'static str;

    /// Run the transform over `text`
    fn apply(&self, text: &str) -> String;
}
