//! CLI Smoke Tests
//!
//! Integration tests for the harf CLI commands:
//! - `info`: List transforms and table statistics
//! - `shape`, `bidi`, `strip`, `length`, `pipe`: Single-text commands
//! - `batch`: Process JSONL jobs
//!
//! Tests cover both success cases and failure cases (bad input, unknown transforms).

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Path to the harf binary built for this test run
fn harf_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_harf"))
}

/// Create a temporary file path
fn temp_output(ext: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    path.push(format!("harf_test_{}.{}", id, ext));
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(harf_binary())
        .args(args)
        .output()
        .expect("Failed to execute harf")
}

fn run_with_stdin(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(harf_binary())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn harf");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin)
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for harf")
}

fn stdout_line(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout)
        .trim_end_matches('\n')
        .to_string()
}

// ============================================================================
// Info Command Tests
// ============================================================================

#[test]
fn test_info_lists_transforms() {
    let output = run(&["info"]);
    assert!(output.status.success(), "info should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["shape", "bidi", "strip-tashkeel", "strip-tatweel"] {
        assert!(stdout.contains(name), "info should list {name}");
    }
    assert!(stdout.contains("U+0600..U+06FF"));
}

#[test]
fn test_help_describes_commands() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("bidi"));
    assert!(stdout.contains("batch"));
}

// ============================================================================
// Text Command Tests
// ============================================================================

#[test]
fn test_shape_positional_text() {
    let output = run(&["shape", "بيت"]);
    assert!(output.status.success());
    assert_eq!(stdout_line(&output), "\u{FE91}\u{FEF4}\u{FE96}");
}

#[test]
fn test_shape_from_stdin() {
    let output = run_with_stdin(&["shape"], "بيت\n".as_bytes());
    assert!(output.status.success());
    assert_eq!(stdout_line(&output), "\u{FE91}\u{FEF4}\u{FE96}");
}

#[test]
fn test_bidi_numbers_untouched() {
    let output = run(&["bidi", "١٢٣"]);
    assert!(output.status.success());
    assert_eq!(stdout_line(&output), "١٢٣");
}

#[test]
fn test_bidi_wraps_lines() {
    let output = run(&["bidi", "-w", "5", "aa bb cc dd"]);
    assert!(output.status.success());
    assert_eq!(stdout_line(&output), "aa bb\ncc dd");
}

#[test]
fn test_strip_default_removes_tashkeel() {
    let output = run(&["strip", "نًصٌ عَربيُّ"]);
    assert!(output.status.success());
    assert_eq!(stdout_line(&output), "نص عربي");
}

#[test]
fn test_strip_tatweel() {
    let output = run(&["strip", "--tatweel", "عـــربي"]);
    assert!(output.status.success());
    assert_eq!(stdout_line(&output), "عربي");
}

#[test]
fn test_length_ignores_marks() {
    let output = run(&["length", "عَربيُّ"]);
    assert!(output.status.success());
    assert_eq!(stdout_line(&output), "4");
}

#[test]
fn test_text_file_input() {
    let input = temp_output("txt");
    fs::write(&input, "نَص\n").unwrap();

    let output = run(&["strip", "-T", input.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout_line(&output), "نص");

    let _ = fs::remove_file(input);
}

#[test]
fn test_pipe_runs_ops_in_order() {
    let output = run(&["pipe", "--op", "strip-tashkeel,reverse", "نَص"]);
    assert!(output.status.success());
    assert_eq!(stdout_line(&output), "صن");
}

// ============================================================================
// Failure Cases
// ============================================================================

#[test]
fn test_pipe_unknown_transform_fails() {
    let output = run(&["pipe", "--op", "kern", "abc"]);
    assert!(!output.status.success(), "unknown transform should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("kern"), "error should name the transform");
}

#[test]
fn test_invalid_utf8_stdin_fails() {
    let output = run_with_stdin(&["shape"], &[0x61, 0xff, 0x62]);
    assert!(!output.status.success(), "invalid UTF-8 should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("InvalidEncoding"));
}

#[test]
fn test_missing_text_file_fails() {
    let output = run(&["shape", "-T", "/nonexistent/harf/input.txt"]);
    assert!(!output.status.success());
}

#[test]
fn test_unknown_subcommand_fails() {
    let output = run(&["render", "abc"]);
    assert!(!output.status.success());
}

// ============================================================================
// Batch Command Tests
// ============================================================================

#[test]
fn test_batch_from_file_to_file() {
    let input = temp_output("jsonl");
    let output_file = temp_output("out.jsonl");
    fs::write(
        &input,
        concat!(
            "{\"id\": \"a\", \"text\": \"١٢٣\"}\n",
            "{\"id\": \"b\", \"text\": \"نَص\", \"ops\": [\"strip-tashkeel\"]}\n",
            "garbage\n",
        ),
    )
    .unwrap();

    let output = run(&[
        "batch",
        "-i",
        input.to_str().unwrap(),
        "-o",
        output_file.to_str().unwrap(),
        "-q",
    ]);
    assert!(
        output.status.success(),
        "batch should succeed: {:?}",
        String::from_utf8_lossy(&output.stderr)
    );

    let results = fs::read_to_string(&output_file).unwrap();
    let lines: Vec<&str> = results.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("\"output\":\"١٢٣\""));
    assert!(lines[1].contains("\"output\":\"نص\""));
    assert!(lines[2].contains("\"error\""));

    let _ = fs::remove_file(input);
    let _ = fs::remove_file(output_file);
}

#[test]
fn test_batch_from_stdin_reports_summary() {
    let output = run_with_stdin(&["batch"], b"{\"text\": \"hello world\"}\n");
    assert!(output.status.success());
    assert!(stdout_line(&output).contains("\"output\":\"hello world\""));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1 succeeded"));
}

#[test]
fn test_batch_continues_past_invalid_utf8_line() {
    let mut input = b"{\"id\": \"a\", \"text\": \"ab\", \"ops\": [\"reverse\"]}\n".to_vec();
    input.extend_from_slice(b"{\"text\": \"\xff\"}\n");
    input.extend_from_slice(b"{\"id\": \"c\", \"text\": \"cd\", \"ops\": [\"reverse\"]}\n");

    let output = run_with_stdin(&["batch", "-q"], &input);
    assert!(output.status.success(), "batch should not abort on a bad line");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("Invalid text encoding"));
    assert!(lines[2].contains("\"output\":\"dc\""));
}
