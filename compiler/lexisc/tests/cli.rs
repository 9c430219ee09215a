//! Runs the `lexis` binary against files on disk.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn lexis(args: &[&str], file: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lexis"))
        .arg("lex")
        .arg(file)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn prints_every_token() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ops.lx");
    std::fs::write(&path, "+ \n - \n * \n /").unwrap();

    let out = lexis(&["--ignore-line-breaks"], &path);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let kinds: Vec<&str> = stdout
        .lines()
        .map(|l| l.split(' ').next().unwrap_or_default())
        .collect();
    assert_eq!(
        kinds,
        vec!["[Plus]", "[Minus]", "[Mult]", "[Div]", "[EndOfFile]"]
    );
}

#[test]
fn json_output_parses() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("num.lx");
    std::fs::write(&path, " 123 ").unwrap();

    let out = lexis(&["--json"], &path);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value[0]["kind"], "Integer");
    assert_eq!(value[0]["text"], "123");
    assert_eq!(value[1]["kind"], "EndOfFile");
}

#[test]
fn scan_error_exits_nonzero_with_diagnostic() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.lx");
    std::fs::write(&path, "a = b").unwrap();

    let out = lexis(&[], &path);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unexpected character"), "{stderr}");
}

#[test]
fn exhausted_buffer_reports_capacity_and_hint() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("long.lx");
    std::fs::write(&path, "abcdefgh").unwrap();

    let out = lexis(&["--no-buffer-growth", "--buffer-capacity=4"], &path);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("buffer holds 4 characters"), "{stderr}");
    assert!(stderr.contains("--buffer-capacity"), "{stderr}");
}

#[test]
fn missing_file_is_reported() {
    let dir = tempdir().unwrap();
    let out = lexis(&[], &dir.path().join("nope.lx"));
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("cannot find file"), "{stderr}");
}

#[test]
fn unknown_option_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ok.lx");
    std::fs::write(&path, "x").unwrap();

    let out = lexis(&["--frobnicate"], &path);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unknown option '--frobnicate'"), "{stderr}");
}
