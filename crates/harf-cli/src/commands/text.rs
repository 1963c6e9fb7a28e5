//! Single-text commands: shape, bidi, strip, length and pipe
//!
//! Each resolves its input, runs one or more transforms and prints the
//! result to stdout.

use harf::{smart_length, transform_by_name};
use harf_core::{BidiOptions, Pipeline, Result};

use crate::cli::{BidiArgs, PipeArgs, StripArgs, TextArgs};
use crate::input::read_text;

pub fn run_shape(args: &TextArgs) -> Result<()> {
    let text = read_text(args)?;
    println!("{}", harf::shape(&text));
    Ok(())
}

pub fn run_bidi(args: &BidiArgs) -> Result<()> {
    let text = read_text(&args.input)?;
    println!("{}", harf::fix_bidi(&text, args.width));
    Ok(())
}

pub fn run_strip(args: &StripArgs) -> Result<()> {
    let text = read_text(&args.input)?;
    let pipeline = build_pipeline(args.transform_names().as_slice(), &BidiOptions::default())?;
    println!("{}", pipeline.process(&text));
    Ok(())
}

pub fn run_length(args: &TextArgs) -> Result<()> {
    let text = read_text(args)?;
    println!("{}", smart_length(&text));
    Ok(())
}

pub fn run_pipe(args: &PipeArgs) -> Result<()> {
    let text = read_text(&args.input)?;
    let pipeline = build_pipeline(args.ops.as_slice(), &BidiOptions::wrapped(args.width))?;
    log::debug!("Running pipeline {:?}", pipeline.stage_names());
    println!("{}", pipeline.process(&text));
    Ok(())
}

/// Resolve transform names into a pipeline
pub fn build_pipeline<S: AsRef<str>>(names: &[S], options: &BidiOptions) -> Result<Pipeline> {
    let mut builder = Pipeline::builder();
    for name in names {
        builder = builder.stage(transform_by_name(name.as_ref().trim(), options)?);
    }
    builder.build()
}
