//! End-to-end tests for the `bcp2csv` binary.
//!
//! Each test spawns the built binary, feeds it BCP bytes and checks the
//! exit status, stdout and (where relevant) stderr.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn bcp2csv(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_bcp2csv"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn bcp2csv");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin)
        .expect("write stdin");
    child.wait_with_output().expect("wait for bcp2csv")
}

fn assert_ok(out: &Output) {
    assert!(
        out.status.success(),
        "bcp2csv failed: status={:?}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stderr)
    );
}

#[test]
fn filters_stdin_to_stdout() {
    let out = bcp2csv(&[], b"a\x1db\x1e\0c\x1dd\x1e");
    assert_ok(&out);
    assert_eq!(out.stdout, b"a,b\nc,d\n");
}

#[test]
fn escaped_newline_is_quoted() {
    let out = bcp2csv(&[], b"a\\nb\x1e");
    assert_ok(&out);
    assert_eq!(out.stdout, b"\"a\nb\"\n");
}

#[test]
fn trailing_segment_dropped_by_default() {
    let out = bcp2csv(&[], b"a\x1etail");
    assert_ok(&out);
    assert_eq!(out.stdout, b"a\n");
}

#[test]
fn flush_trailing_emits_final_record() {
    let out = bcp2csv(&["--flush-trailing"], b"a\x1etail");
    assert_ok(&out);
    assert_eq!(out.stdout, b"a\ntail\n");
}

#[test]
fn dash_means_stdin() {
    let out = bcp2csv(&["-"], b"x\\ry\x1e");
    assert_ok(&out);
    assert_eq!(out.stdout, b"xy\n");
}

#[test]
fn invalid_utf8_fails_after_earlier_rows() {
    let out = bcp2csv(&[], b"first\x1e\xff\xfe\x1esecond\x1e");
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(out.stdout, b"first\n");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error:"), "stderr was: {stderr}");
    assert!(stderr.contains("record 1"), "stderr was: {stderr}");
}

#[test]
fn reads_and_writes_files() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = dir.path().join("table.bcp");
    let output = dir.path().join("table.csv");
    fs::write(&input, b"id\x1dname\x1e1\x1dAda, Countess\x1e").unwrap();

    let out = bcp2csv(
        &[
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ],
        b"",
    );
    assert_ok(&out);
    assert!(out.stdout.is_empty());
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "id,name\n1,\"Ada, Countess\"\n"
    );
}

#[test]
fn missing_input_file_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = dir.path().join("nope.bcp");
    let out = bcp2csv(&[missing.to_str().unwrap()], b"");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("cannot read"), "stderr was: {stderr}");
}

#[test]
fn verbose_logs_to_stderr_only() {
    let out = bcp2csv(&["--verbose"], b"a\x1e");
    assert_ok(&out);
    assert_eq!(out.stdout, b"a\n");
    assert!(String::from_utf8_lossy(&out.stderr).contains("done"));
}
