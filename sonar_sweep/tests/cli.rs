use std::{
    fs,
    process::{Command, Output},
};

use tempfile::TempDir;

/// Runs the binary from a scratch directory, optionally seeding `input/day1.txt`.
fn run_with_input(contents: Option<&str>) -> Output {
    let dir = TempDir::new().unwrap();
    if let Some(contents) = contents {
        let input_dir = dir.path().join("input");
        fs::create_dir(&input_dir).unwrap();
        fs::write(input_dir.join("day1.txt"), contents).unwrap();
    }
    Command::new(env!("CARGO_BIN_EXE_sonar_sweep"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn prints_both_parts_for_sample() {
    let output = run_with_input(Some("199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n"));
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "7\n5\n");
}

#[test]
fn short_input_still_succeeds() {
    let output = run_with_input(Some("1 2 3"));
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "2\n0\n");
}

#[test]
fn bad_token_exits_with_status_1() {
    let output = run_with_input(Some("1\n2\n12x\n4\n"));
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("12x"), "stderr was: {stderr}");
    assert!(stderr.contains("input/day1.txt:3:"), "stderr was: {stderr}");
}

#[test]
fn missing_input_exits_with_status_1() {
    let output = run_with_input(None);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("input/day1.txt"), "stderr was: {stderr}");
}
