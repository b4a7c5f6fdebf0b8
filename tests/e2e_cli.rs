//! End-to-end tests for the `count-tokens` binary.
//!
//! These drive the compiled binary over stdin/stdout and check the exit
//! status contract.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_with_stdin(args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_count-tokens"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn count-tokens");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input)
        .expect("failed to write stdin");

    child.wait_with_output().expect("failed to wait on child")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

/// Parse the single-line integer output
fn parse_count(output: &Output) -> usize {
    let stdout = stdout_of(output);
    assert!(stdout.ends_with('\n'), "missing trailing newline: {stdout:?}");
    assert_eq!(stdout.lines().count(), 1, "expected one line: {stdout:?}");
    stdout.trim_end().parse().expect("stdout is an integer")
}

/// Test the pinned count for a short phrase
#[test]
fn test_hello_world() {
    let output = run_with_stdin(&[], b"hello world");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "2\n");
}

/// Test empty stdin prints zero
#[test]
fn test_empty_input() {
    let output = run_with_stdin(&[], b"");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "0\n");
}

/// Test whitespace-only stdin still prints a single integer
#[test]
fn test_whitespace_only_input() {
    let output = run_with_stdin(&[], b"  \n\t\n\n");
    assert!(output.status.success());
    parse_count(&output);
}

/// Test multi-line source code is counted as one text
#[test]
fn test_multiline_input() {
    let input = "fn main() {\n    println!(\"Hello, world!\");\n}\n";
    let output = run_with_stdin(&[], input.as_bytes());
    assert!(output.status.success());
    assert!(parse_count(&output) > 5);
}

/// Test debug logging never leaks onto stdout
#[test]
fn test_stdout_is_quiet_when_verbose() {
    let output = run_with_stdin(&["--verbose"], b"hello world");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "2\n");
}

/// Test a model chosen with --model
#[test]
fn test_explicit_model() {
    let output = run_with_stdin(&["--model", "gpt-4o"], b"hello world");
    assert!(output.status.success());
    assert!(parse_count(&output) > 0);
}

/// Test unknown models exit non-zero with nothing on stdout
#[test]
fn test_unknown_model_fails() {
    let output = run_with_stdin(&["--model", "not-a-model"], b"hello world");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not-a-model"), "stderr: {stderr}");
}

/// Test special tokens in the input abort the count
#[test]
fn test_special_token_fails() {
    let output = run_with_stdin(&[], b"text <|endoftext|> more");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("<|endoftext|>"), "stderr: {stderr}");
}

/// Test non-UTF-8 input is rejected
#[test]
fn test_invalid_utf8_fails() {
    let output = run_with_stdin(&[], &[0x68, 0x69, 0xff, 0xfe]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

/// Test identical input gives identical output across runs
#[test]
fn test_repeated_runs_are_identical() {
    let input = b"The quick brown fox jumps over the lazy dog.";
    let first = run_with_stdin(&[], input);
    let second = run_with_stdin(&[], input);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

/// Test CRLF line endings count the same as LF
#[test]
fn test_crlf_counts_like_lf() {
    let crlf = run_with_stdin(&[], b"  \r\n  \r\n");
    let lf = run_with_stdin(&[], b"  \n  \n");
    assert!(crlf.status.success());
    assert_eq!(stdout_of(&crlf), "1\n");
    assert_eq!(crlf.stdout, lf.stdout);
}
