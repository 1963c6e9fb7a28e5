//! Reading input text from an argument, a file or stdin

use std::fs;
use std::io::{self, Read};

use harf_core::{decode, Result};

use crate::cli::TextArgs;

/// Resolve the text for a command.
///
/// Files and stdin are read as raw bytes and validated as UTF-8 before any
/// transform runs. A single trailing newline from stdin or a file is dropped.
pub fn read_text(args: &TextArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    let bytes = match &args.text_file {
        Some(path) => {
            log::debug!("Reading text from {}", path.display());
            fs::read(path)?
        },
        None => {
            log::debug!("Reading text from stdin");
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            buf
        },
    };

    Ok(trim_trailing_newline(decode(&bytes)?).to_string())
}

fn trim_trailing_newline(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}
