use super::*;
use proptest::prelude::*;

/// Arabic letters (including tatweel and a few unassigned slots), vowel
/// marks, Arabic-Indic digits, Latin, ASCII digits and spaces
const MIXED: &str = "[\u{0621}-\u{0652}\u{0660}-\u{0669}a-zA-Z0-9 ]{0,40}";

// Property: shaping twice equals shaping once
proptest! {
    #[test]
    fn prop_shape_idempotent(s in MIXED) {
        let once = shape(&s);
        prop_assert_eq!(shape(&once), once);
    }
}

// Property: shaping never changes the number of code points
proptest! {
    #[test]
    fn prop_shape_preserves_length(s in "\\PC*") {
        prop_assert_eq!(shape(&s).chars().count(), s.chars().count());
    }
}

// Property: text without Arabic script passes through shaping unchanged
proptest! {
    #[test]
    fn prop_shape_passes_non_arabic(s in "[ -~]*") {
        prop_assert_eq!(shape(&s), s);
    }
}

// Property: reverse is an involution
proptest! {
    #[test]
    fn prop_reverse_involution(s in "\\PC*") {
        prop_assert_eq!(reverse(&reverse(&s)), s);
    }
}

// Property: bidi keeps the multiset of word lengths
proptest! {
    #[test]
    fn prop_bidi_preserves_word_lengths(s in MIXED) {
        let mut before: Vec<usize> = s.split_whitespace().map(|w| w.chars().count()).collect();
        let out = fix_bidi(&s, 0);
        let mut after: Vec<usize> = out.split_whitespace().map(|w| w.chars().count()).collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }
}

// Property: wrapped lines fit unless they hold a single over-long word
proptest! {
    #[test]
    fn prop_wrapped_lines_fit(s in MIXED, width in 1usize..30) {
        for line in fix_bidi(&s, width).lines() {
            let len = line.chars().count();
            prop_assert!(len <= width || !line.contains(' '), "{:?} exceeds {}", line, width);
        }
    }
}

// Property: numeric words come through bidi byte-for-byte
proptest! {
    #[test]
    fn prop_numbers_untouched(s in "[0-9\u{0660}-\u{0669}]{1,12}") {
        prop_assert_eq!(fix_bidi(&s, 0), s);
    }
}

// Property: smart length plus the number of vowel marks is the code point count
proptest! {
    #[test]
    fn prop_smart_length_counts(s in MIXED) {
        let marks = s.chars().filter(|&c| is_tashkeel(c)).count();
        prop_assert_eq!(smart_length(&s) + marks, s.chars().count());
        prop_assert_eq!(remove_tashkeel(&s).chars().count(), smart_length(&s));
    }
}
