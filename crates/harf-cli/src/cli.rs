//! CLI argument definitions using Clap v4

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Harf - Arabic shaping and visual reordering from the command line
#[derive(Parser, Debug)]
#[command(name = "harf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Silent mode (no progress info)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Verbose output (debug logging unless RUST_LOG is set)
    #[arg(long = "verbose", global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace Arabic letters with their contextual presentation forms
    #[command(alias = "s")]
    Shape(TextArgs),

    /// Shape and reorder mixed text for a left-to-right renderer
    #[command(alias = "b")]
    Bidi(BidiArgs),

    /// Remove vowel marks, tatweel or non-Arabic characters
    Strip(StripArgs),

    /// Count code points, ignoring vowel marks
    Length(TextArgs),

    /// Run named transforms in sequence
    #[command(alias = "p")]
    Pipe(PipeArgs),

    /// Display available transforms and letter table statistics
    #[command(alias = "i")]
    Info,

    /// Process multiple jobs from a JSONL file
    Batch(BatchArgs),
}

/// Where the input text comes from
#[derive(Args, Debug, Clone)]
pub struct TextArgs {
    /// Input text (reads from stdin if omitted)
    #[arg(conflicts_with = "text_file")]
    pub text: Option<String>,

    /// Read input text from file
    #[arg(short = 'T', long = "text-file")]
    pub text_file: Option<PathBuf>,
}

/// Arguments for the bidi command
#[derive(Args, Debug)]
pub struct BidiArgs {
    #[command(flatten)]
    pub input: TextArgs,

    /// Wrap lines at this many code points before reordering (0 = no wrapping)
    #[arg(short = 'w', long = "width", default_value = "0")]
    pub width: usize,
}

/// Arguments for the strip command
#[derive(Args, Debug)]
pub struct StripArgs {
    #[command(flatten)]
    pub input: TextArgs,

    /// Remove vowel marks (the default when no flag is given)
    #[arg(long = "tashkeel", action = ArgAction::SetTrue)]
    pub tashkeel: bool,

    /// Remove tatweel (kashida)
    #[arg(long = "tatweel", action = ArgAction::SetTrue)]
    pub tatweel: bool,

    /// Keep only Arabic letters
    #[arg(long = "non-arabic", action = ArgAction::SetTrue)]
    pub non_arabic: bool,
}

impl StripArgs {
    /// Transform names to run, in a fixed order
    pub fn transform_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.tashkeel || (!self.tatweel && !self.non_arabic) {
            names.push("strip-tashkeel");
        }
        if self.tatweel {
            names.push("strip-tatweel");
        }
        if self.non_arabic {
            names.push("strip-non-arabic");
        }
        names
    }
}

/// Arguments for the pipe command
#[derive(Args, Debug)]
pub struct PipeArgs {
    #[command(flatten)]
    pub input: TextArgs,

    /// Transform to apply; repeat or comma-separate for several
    #[arg(short = 'o', long = "op", action = ArgAction::Append, value_delimiter = ',', required = true)]
    pub ops: Vec<String>,

    /// Line width for the bidi transform (0 = no wrapping)
    #[arg(short = 'w', long = "width", default_value = "0")]
    pub width: usize,
}

/// Arguments for the batch command
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input JSONL file (one job per line, stdin if omitted)
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output JSONL file (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}
