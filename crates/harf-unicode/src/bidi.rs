// this_file: crates/harf-unicode/src/bidi.rs

//! Visual reordering for naive left-to-right renderers.
//!
//! This is deliberately simpler than UAX #9. Text is handled one
//! whitespace-delimited word at a time:
//!
//! 1. Optionally wrap into lines of at most `max_line_width` code points
//! 2. Classify every word as numeric, Arabic or other
//! 3. Shape Arabic words and reverse their code points
//! 4. Reverse the order of the words
//! 5. Put runs of consecutive "other" words back into reading order
//!
//! Original spacing is not kept: words are joined with single spaces and
//! wrapped lines with `\n`.

use harf_core::{BidiOptions, Transform, WordClass};

use crate::reverse::reverse;
use crate::script::{is_arabic_script, is_digit};
use crate::shaper::ArabicShaper;

/// Classify a word with precedence Numeric > Arabic > Other.
///
/// The numeric test runs first so that a word of Arabic-Indic digits, whose
/// code points also sit in the Arabic block, stays numeric and is never
/// shaped or flipped. A word mixing Arabic and Latin letters is Arabic.
pub fn classify_word(word: &str) -> WordClass {
    if !word.is_empty() && word.chars().all(is_digit) {
        WordClass::Numeric
    } else if word.chars().any(is_arabic_script) {
        WordClass::Arabic
    } else {
        WordClass::Other
    }
}

/// Greedy word wrap by code point count.
///
/// A word joins the current line while `line + 1 + word` fits in
/// `max_line_width`. A word longer than the limit gets a line of its own.
/// A zero width returns all words on a single line.
pub fn wrap_lines(text: &str, max_line_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len == 0 {
            current.push_str(word);
            current_len = word_len;
        } else if max_line_width == 0 || current_len + word_len + 1 <= max_line_width {
            current.push(' ');
            current.push_str(word);
            current_len += word_len + 1;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Reorders mixed Arabic / Latin / digit text for left-to-right drawing
///
/// ```
/// use harf_core::BidiOptions;
/// use harf_unicode::BidiReorderer;
///
/// let reorderer = BidiReorderer::new(BidiOptions::default());
/// // Arabic-Indic numbers are left alone
/// assert_eq!(reorderer.fix("١٢٣"), "١٢٣");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BidiReorderer {
    options: BidiOptions,
    shaper: ArabicShaper,
}

impl BidiReorderer {
    pub fn new(options: BidiOptions) -> Self {
        Self {
            options,
            shaper: ArabicShaper::new(),
        }
    }

    pub fn options(&self) -> &BidiOptions {
        &self.options
    }

    /// Reorder `text`, wrapping first when the options ask for it
    pub fn fix(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        if !self.options.wraps() {
            return self.fix_line(text);
        }

        let lines = wrap_lines(text, self.options.max_line_width);
        log::trace!(
            "Wrapped {} chars into {} lines at width {}",
            text.chars().count(),
            lines.len(),
            self.options.max_line_width
        );
        lines
            .iter()
            .map(|line| self.fix_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Reorder a single line; no wrapping
    pub fn fix_line(&self, text: &str) -> String {
        let mut words: Vec<(WordClass, String)> = text
            .split_whitespace()
            .map(|word| {
                let class = classify_word(word);
                let visual = match class {
                    WordClass::Arabic => reverse(&self.shaper.shape(word)),
                    WordClass::Numeric | WordClass::Other => word.to_string(),
                };
                (class, visual)
            })
            .collect();

        // Right-to-left flow at the word level
        words.reverse();

        // Runs of other words read left to right again
        let mut start = 0;
        while start < words.len() {
            if !words[start].0.is_other() {
                start += 1;
                continue;
            }
            let end = words[start..]
                .iter()
                .position(|(class, _)| !class.is_other())
                .map_or(words.len(), |offset| start + offset);
            words[start..end].reverse();
            start = end;
        }

        words
            .into_iter()
            .map(|(_, word)| word)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Transform for BidiReorderer {
    fn name(&self) -> &'static str {
        "bidi"
    }

    fn apply(&self, text: &str) -> String {
        log::debug!(
            "BidiReorderer: {} chars, max_line_width {}",
            text.chars().count(),
            self.options.max_line_width
        );
        self.fix(text)
    }
}

/// Reorder `text` for a left-to-right renderer. `max_line_width == 0` disables wrapping.
pub fn fix_bidi(text: &str, max_line_width: usize) -> String {
    BidiReorderer::new(BidiOptions::wrapped(max_line_width)).fix(text)
}

/// [`fix_bidi`] for a single line with no wrapping
pub fn fix_bidi_line(text: &str) -> String {
    BidiReorderer::default().fix_line(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_precedence() {
        assert_eq!(classify_word("123"), WordClass::Numeric);
        assert_eq!(classify_word("١٢٣"), WordClass::Numeric);
        assert_eq!(classify_word("نص"), WordClass::Arabic);
        assert_eq!(classify_word("abcنص"), WordClass::Arabic);
        // Digits mixed with an Arabic letter are no longer numeric
        assert_eq!(classify_word("١٢ب"), WordClass::Arabic);
        assert_eq!(classify_word("Hello"), WordClass::Other);
        assert_eq!(classify_word("v1.2"), WordClass::Other);
        assert_eq!(classify_word("12a"), WordClass::Other);
    }

    #[test]
    fn wrap_is_greedy() {
        assert_eq!(
            wrap_lines("aa bb cc dd", 5),
            vec!["aa bb".to_string(), "cc dd".to_string()]
        );
        assert_eq!(
            wrap_lines("aa bb cc", 4),
            vec!["aa".to_string(), "bb".to_string(), "cc".to_string()]
        );
    }

    #[test]
    fn wrap_keeps_long_words_whole() {
        assert_eq!(
            wrap_lines("a abcdefgh b", 3),
            vec!["a".to_string(), "abcdefgh".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn wrap_counts_code_points_not_bytes() {
        // Four Arabic letters are eight UTF-8 bytes
        assert_eq!(wrap_lines("عربي عربي", 9), vec!["عربي عربي".to_string()]);
        assert_eq!(wrap_lines("عربي عربي", 8).len(), 2);
    }

    #[test]
    fn wrap_zero_width_is_single_line() {
        assert_eq!(wrap_lines(" a  b\nc ", 0), vec!["a b c".to_string()]);
        assert!(wrap_lines("   ", 3).is_empty());
    }

    #[test]
    fn latin_runs_keep_reading_order() {
        assert_eq!(fix_bidi_line("hello big world"), "hello big world");
    }

    #[test]
    fn arabic_words_are_shaped_reversed_and_flipped() {
        // noon + sad -> final sad, initial noon after reversal
        let ns = "\u{FEBA}\u{FEE7}";
        assert_eq!(fix_bidi_line("نص"), ns);
        assert_eq!(fix_bidi_line("نص نص"), format!("{ns} {ns}"));
    }

    #[test]
    fn arabic_between_latin_words() {
        let ns = "\u{FEBA}\u{FEE7}";
        assert_eq!(
            fix_bidi_line("Hello نص World"),
            format!("World {ns} Hello")
        );
        assert_eq!(
            fix_bidi_line("نص Hello World"),
            format!("Hello World {ns}")
        );
    }

    #[test]
    fn numbers_break_latin_runs() {
        assert_eq!(fix_bidi_line("a b 12 c d"), "c d 12 a b");
    }

    #[test]
    fn whitespace_collapses() {
        assert_eq!(fix_bidi_line("  a \t b  "), "a b");
        assert_eq!(fix_bidi("   ", 0), "");
    }

    #[test]
    fn wrapped_lines_are_reordered_independently() {
        let ns = "\u{FEBA}\u{FEE7}";
        assert_eq!(
            fix_bidi("نص one two three", 8),
            format!("one {ns}\ntwo\nthree")
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(fix_bidi("", 0), "");
        assert_eq!(fix_bidi("", 20), "");
    }

    #[test]
    fn transform_name() {
        let reorderer = BidiReorderer::new(BidiOptions::wrapped(10));
        assert_eq!(reorderer.name(), "bidi");
        assert_eq!(reorderer.options().max_line_width, 10);
    }
}
