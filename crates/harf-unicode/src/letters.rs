// this_file: crates/harf-unicode/src/letters.rs

//! The Arabic letter inventory and its presentation forms.
//!
//! Code points come from the Arabic Presentation Forms-A (U+FB50..U+FDFF) and
//! Presentation Forms-B (U+FE70..U+FEFF) blocks. Letters that only join to the
//! preceding letter have no initial or medial glyph: they record their
//! canonical code point as the initial form and their final glyph as the
//! medial form.

use std::collections::HashMap;
use std::sync::OnceLock;

use harf_core::PositionalForm;

/// One Arabic letter and its four contextual glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter {
    pub canonical: char,
    pub isolated: char,
    pub initial: char,
    pub medial: char,
    pub final_form: char,
}

impl Letter {
    /// Letter with all four forms
    const fn dual(canonical: char, isolated: char, final_form: char, initial: char, medial: char) -> Self {
        Self {
            canonical,
            isolated,
            initial,
            medial,
            final_form,
        }
    }

    /// Letter that joins only to the preceding letter
    const fn right(canonical: char, isolated: char, final_form: char) -> Self {
        Self {
            canonical,
            isolated,
            initial: canonical,
            medial: final_form,
            final_form,
        }
    }

    /// Letter with a single shape
    const fn fixed(canonical: char, isolated: char) -> Self {
        Self {
            canonical,
            isolated,
            initial: canonical,
            medial: canonical,
            final_form: canonical,
        }
    }

    /// All five recorded code points, canonical first
    pub fn code_points(&self) -> [char; 5] {
        [
            self.canonical,
            self.isolated,
            self.initial,
            self.medial,
            self.final_form,
        ]
    }

    /// True when `c` is this letter in any of its forms
    pub fn matches(&self, c: char) -> bool {
        self.code_points().contains(&c)
    }

    /// The glyph for a positional form
    pub fn glyph(&self, form: PositionalForm) -> char {
        match form {
            PositionalForm::Isolated => self.isolated,
            PositionalForm::Initial => self.initial,
            PositionalForm::Medial => self.medial,
            PositionalForm::Final => self.final_form,
        }
    }

    /// Whether a following letter may attach to this one
    pub fn joins_following(&self) -> bool {
        !NON_JOINING_AFTER.contains(&self.canonical)
    }
}

/// Every letter the shaper knows, in code point order of the canonical form
pub static LETTERS: [Letter; 44] = [
    Letter::fixed('\u{0621}', '\u{FE80}'), // hamza
    Letter::right('\u{0622}', '\u{FE81}', '\u{FE82}'), // alef with madda above
    Letter::right('\u{0623}', '\u{FE83}', '\u{FE84}'), // alef with hamza above
    Letter::right('\u{0624}', '\u{FE85}', '\u{FE86}'), // waw with hamza above
    Letter::right('\u{0625}', '\u{FE87}', '\u{FE88}'), // alef with hamza below
    Letter::dual('\u{0626}', '\u{FE89}', '\u{FE8A}', '\u{FE8B}', '\u{FE8C}'), // yeh with hamza above
    Letter::right('\u{0627}', '\u{FE8D}', '\u{FE8E}'), // alef
    Letter::dual('\u{0628}', '\u{FE8F}', '\u{FE90}', '\u{FE91}', '\u{FE92}'), // beh
    Letter::right('\u{0629}', '\u{FE93}', '\u{FE94}'), // teh marbuta
    Letter::dual('\u{062A}', '\u{FE95}', '\u{FE96}', '\u{FE97}', '\u{FE98}'), // teh
    Letter::dual('\u{062B}', '\u{FE99}', '\u{FE9A}', '\u{FE9B}', '\u{FE9C}'), // theh
    Letter::dual('\u{062C}', '\u{FE9D}', '\u{FE9E}', '\u{FE9F}', '\u{FEA0}'), // jeem
    Letter::dual('\u{062D}', '\u{FEA1}', '\u{FEA2}', '\u{FEA3}', '\u{FEA4}'), // hah
    Letter::dual('\u{062E}', '\u{FEA5}', '\u{FEA6}', '\u{FEA7}', '\u{FEA8}'), // khah
    Letter::right('\u{062F}', '\u{FEA9}', '\u{FEAA}'), // dal
    Letter::right('\u{0630}', '\u{FEAB}', '\u{FEAC}'), // thal
    Letter::right('\u{0631}', '\u{FEAD}', '\u{FEAE}'), // reh
    Letter::right('\u{0632}', '\u{FEAF}', '\u{FEB0}'), // zain
    Letter::dual('\u{0633}', '\u{FEB1}', '\u{FEB2}', '\u{FEB3}', '\u{FEB4}'), // seen
    Letter::dual('\u{0634}', '\u{FEB5}', '\u{FEB6}', '\u{FEB7}', '\u{FEB8}'), // sheen
    Letter::dual('\u{0635}', '\u{FEB9}', '\u{FEBA}', '\u{FEBB}', '\u{FEBC}'), // sad
    Letter::dual('\u{0636}', '\u{FEBD}', '\u{FEBE}', '\u{FEBF}', '\u{FEC0}'), // dad
    Letter::dual('\u{0637}', '\u{FEC1}', '\u{FEC2}', '\u{FEC3}', '\u{FEC4}'), // tah
    Letter::dual('\u{0638}', '\u{FEC5}', '\u{FEC6}', '\u{FEC7}', '\u{FEC8}'), // zah
    Letter::dual('\u{0639}', '\u{FEC9}', '\u{FECA}', '\u{FECB}', '\u{FECC}'), // ain
    Letter::dual('\u{063A}', '\u{FECD}', '\u{FECE}', '\u{FECF}', '\u{FED0}'), // ghain
    Letter::fixed(TATWEEL, TATWEEL),
    Letter::dual('\u{0641}', '\u{FED1}', '\u{FED2}', '\u{FED3}', '\u{FED4}'), // feh
    Letter::dual('\u{0642}', '\u{FED5}', '\u{FED6}', '\u{FED7}', '\u{FED8}'), // qaf
    Letter::dual('\u{0643}', '\u{FED9}', '\u{FEDA}', '\u{FEDB}', '\u{FEDC}'), // kaf
    Letter::dual('\u{0644}', '\u{FEDD}', '\u{FEDE}', '\u{FEDF}', '\u{FEE0}'), // lam
    Letter::dual('\u{0645}', '\u{FEE1}', '\u{FEE2}', '\u{FEE3}', '\u{FEE4}'), // meem
    Letter::dual('\u{0646}', '\u{FEE5}', '\u{FEE6}', '\u{FEE7}', '\u{FEE8}'), // noon
    Letter::dual('\u{0647}', '\u{FEE9}', '\u{FEEA}', '\u{FEEB}', '\u{FEEC}'), // heh
    Letter::right('\u{0648}', '\u{FEED}', '\u{FEEE}'), // waw
    Letter::dual('\u{0649}', '\u{FEEF}', '\u{FEF0}', '\u{FBE8}', '\u{FBE9}'), // alef maksura
    Letter::dual('\u{064A}', '\u{FEF1}', '\u{FEF2}', '\u{FEF3}', '\u{FEF4}'), // yeh
    Letter::dual('\u{067E}', '\u{FB56}', '\u{FB57}', '\u{FB58}', '\u{FB59}'), // peh
    Letter::dual('\u{0686}', '\u{FB7A}', '\u{FB7B}', '\u{FB7C}', '\u{FB7D}'), // tcheh
    Letter::right('\u{0698}', '\u{FB8A}', '\u{FB8B}'), // jeh
    Letter::dual('\u{06A4}', '\u{FB6A}', '\u{FB6B}', '\u{FB6C}', '\u{FB6D}'), // veh
    Letter::dual('\u{06A9}', '\u{FB8E}', '\u{FB8F}', '\u{FB90}', '\u{FB91}'), // keheh
    Letter::dual('\u{06AF}', '\u{FB92}', '\u{FB93}', '\u{FB94}', '\u{FB95}'), // gaf
    Letter::dual('\u{06CC}', '\u{FBFC}', '\u{FBFD}', '\u{FBFE}', '\u{FBFF}'), // farsi yeh
];

/// Arabic tatweel (kashida), the elongation character
pub const TATWEEL: char = '\u{0640}';

/// Letters a following letter never attaches to.
///
/// Right-joining letters per Unicode ArabicShaping.txt, plus hamza which
/// does not join at all.
pub static NON_JOINING_AFTER: [char; 13] = [
    '\u{0621}', // hamza
    '\u{0622}', // alef with madda above
    '\u{0623}', // alef with hamza above
    '\u{0624}', // waw with hamza above
    '\u{0625}', // alef with hamza below
    '\u{0627}', // alef
    '\u{0629}', // teh marbuta
    '\u{062F}', // dal
    '\u{0630}', // thal
    '\u{0631}', // reh
    '\u{0632}', // zain
    '\u{0648}', // waw
    '\u{0698}', // jeh
];

/// Reverse index from any recorded code point to its slot in [`LETTERS`]
fn letter_index() -> &'static HashMap<char, usize> {
    static INDEX: OnceLock<HashMap<char, usize>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut index = HashMap::with_capacity(LETTERS.len() * 5);
        for (slot, letter) in LETTERS.iter().enumerate() {
            for c in letter.code_points() {
                // First entry wins, matching a front-to-back table scan
                index.entry(c).or_insert(slot);
            }
        }
        log::trace!(
            "Built letter index: {} code points for {} letters",
            index.len(),
            LETTERS.len()
        );
        index
    })
}

/// Find the letter `c` belongs to, in any of its forms
pub fn letter_for(c: char) -> Option<&'static Letter> {
    letter_index().get(&c).map(|&slot| &LETTERS[slot])
}

/// True when `c` is a known Arabic letter (canonical or presentation form)
pub fn is_arabic_letter(c: char) -> bool {
    letter_index().contains_key(&c)
}
