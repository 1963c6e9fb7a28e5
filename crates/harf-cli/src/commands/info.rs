//! Info command implementation
//!
//! Lists the transforms and a summary of the letter and script tables.

use harf_core::Result;
use harf_unicode::{letters::NON_JOINING_AFTER, script::ARABIC_RANGES, LETTERS, TRANSFORM_NAMES};

pub fn run() -> Result<()> {
    println!("Harf v{}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("Transforms:");
    for name in TRANSFORM_NAMES {
        println!("  {:<18}- {}", name, describe(name));
    }
    println!();

    println!("Letter table:");
    println!("  letters           : {}", LETTERS.len());
    println!("  non-joining-after : {}", NON_JOINING_AFTER.len());
    println!();

    println!("Arabic script ranges:");
    for (start, end) in ARABIC_RANGES {
        println!("  U+{start:04X}..U+{end:04X}");
    }

    Ok(())
}

fn describe(name: &str) -> &'static str {
    match name {
        "shape" => "Contextual presentation forms",
        "bidi" => "Shape, reverse and reorder words for LTR renderers",
        "reverse" => "Reverse code points",
        "strip-tashkeel" => "Remove vowel marks",
        "strip-tatweel" => "Remove tatweel (kashida)",
        "strip-non-arabic" => "Keep only Arabic letters",
        _ => "",
    }
}
