//! Batch command implementation
//!
//! Processes jobs from a JSONL file, one JSON object per line:
//!
//! ```text
//! {"id": "greeting", "text": "مرحبا Harf", "ops": ["strip-tashkeel", "bidi"], "max_line_width": 20}
//! ```
//!
//! `ops` defaults to `["bidi"]`. Each job produces one JSONL result line. A
//! line that is not valid UTF-8, fails to parse or names an unknown transform
//! yields an `error` result and processing continues.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use harf_core::{decode, BidiOptions, HarfError, Result};
use harf_unicode::smart_length;
use serde::{Deserialize, Serialize};

use crate::cli::BatchArgs;
use crate::commands::text::build_pipeline;

/// JSONL job specification
#[derive(Debug, Deserialize)]
struct BatchJob {
    /// Identifier echoed in the result (defaults to the line number)
    #[serde(default)]
    id: Option<String>,
    /// Text to process
    text: String,
    /// Transforms to apply, in order
    #[serde(default = "default_ops")]
    ops: Vec<String>,
    /// Line width for the bidi transform
    #[serde(default)]
    max_line_width: usize,
}

fn default_ops() -> Vec<String> {
    vec!["bidi".to_string()]
}

/// One JSONL result line
#[derive(Debug, Serialize)]
struct BatchResult {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    smart_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Counts reported once the input is exhausted
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub jobs: usize,
    pub succeeded: usize,
    pub failed: usize,
}

pub fn run(args: &BatchArgs, quiet: bool) -> Result<()> {
    if !quiet {
        eprintln!("Harf Batch Processor v{}", env!("CARGO_PKG_VERSION"));
    }

    let reader: Box<dyn BufRead> = if let Some(ref input_path) = args.input {
        Box::new(BufReader::new(File::open(input_path)?))
    } else {
        if !quiet {
            eprintln!("Reading jobs from stdin...");
        }
        Box::new(BufReader::new(io::stdin()))
    };

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    let summary = process_jobs(reader, writer)?;

    if !quiet {
        eprintln!(
            "Processed {} jobs: {} succeeded, {} failed",
            summary.jobs, summary.succeeded, summary.failed
        );
    }
    Ok(())
}

/// Run every job from `reader`, writing one result line per job to `writer`
pub fn process_jobs<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for (line_num, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        let bytes = raw.strip_suffix(b"\r").unwrap_or(&raw);
        if bytes.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        summary.jobs += 1;

        let fallback_id = (line_num + 1).to_string();
        let result = match decode(bytes) {
            Ok(line) => parse_and_run(line, line_num + 1, fallback_id),
            Err(e) => {
                log::warn!("Line {}: {}", line_num + 1, e);
                error_result(fallback_id, e.to_string())
            },
        };

        if result.error.is_some() {
            summary.failed += 1;
        } else {
            summary.succeeded += 1;
        }

        let json = serde_json::to_string(&result).map_err(|e| HarfError::Other(e.to_string()))?;
        writeln!(writer, "{json}")?;
    }

    writer.flush()?;
    Ok(summary)
}

fn parse_and_run(line: &str, line_no: usize, fallback_id: String) -> BatchResult {
    match serde_json::from_str::<BatchJob>(line) {
        Ok(job) => run_job(job, fallback_id),
        Err(e) => {
            log::warn!("Line {}: invalid job: {}", line_no, e);
            error_result(fallback_id, format!("invalid job: {e}"))
        },
    }
}

fn error_result(id: String, error: String) -> BatchResult {
    BatchResult {
        id,
        output: None,
        smart_length: None,
        error: Some(error),
    }
}

fn run_job(job: BatchJob, fallback_id: String) -> BatchResult {
    let id = job.id.unwrap_or(fallback_id);
    let options = BidiOptions::wrapped(job.max_line_width);

    match build_pipeline(job.ops.as_slice(), &options) {
        Ok(pipeline) => {
            let output = pipeline.process(&job.text);
            BatchResult {
                id,
                smart_length: Some(smart_length(&output)),
                output: Some(output),
                error: None,
            }
        },
        Err(e) => {
            log::warn!("Job {}: {}", id, e);
            error_result(id, e.to_string())
        },
    }
}
