//! CLI integration tests.

use assert_cmd::assert::OutputAssertExt;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn rlec_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rlec"))
}

#[test]
fn test_cli_help() {
    rlec_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("bench"));
}

#[test]
fn test_cli_version() {
    rlec_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_encode_then_decode() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("image.bin");
    let encoded = dir.path().join("image.rle");
    let decoded = dir.path().join("image.out");
    fs::write(&input, b"AAAB").unwrap();

    rlec_cmd()
        .args(["encode", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&encoded)
        .assert()
        .success()
        .stdout(predicate::str::contains("Encoded Size:   6 bytes"));
    assert_eq!(fs::read(&encoded).unwrap(), vec![0x00, 0x03, 0x41, 0x00, 0x01, 0x42]);

    rlec_cmd()
        .args(["decode", "-i"])
        .arg(&encoded)
        .arg("-o")
        .arg(&decoded)
        .assert()
        .success();
    assert_eq!(fs::read(&decoded).unwrap(), b"AAAB");
}

#[test]
fn test_decode_malformed_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.rle");
    let output = dir.path().join("bad.out");
    fs::write(&input, [0x00, 0x03, 0x41, 0x00]).unwrap();

    rlec_cmd()
        .args(["decode", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a multiple of 3"));
    assert!(!output.exists());
}

#[test]
fn test_inspect_lists_runs() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("image.rle");
    fs::write(&input, [0x00, 0x03, 0x41, 0x00, 0x01, 0x42]).unwrap();

    rlec_cmd()
        .args(["inspect", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 runs, 4 decoded bytes"))
        .stdout(predicate::str::contains("value=0x41"));
}

#[test]
fn test_bench_json_report() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("fw.bin");
    fs::write(&input, vec![0u8; 10_000]).unwrap();

    let output = rlec_cmd()
        .arg("bench")
        .arg(&input)
        .arg("--output-dir")
        .arg(dir.path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(reports[0]["file"], "fw.bin");
    assert_eq!(reports[0]["encoded_size"], 3);
    assert_eq!(reports[0]["loss"], 0.0);
    assert!(dir.path().join("encoded_fw.bin").exists());
    assert!(dir.path().join("decoded_fw.bin").exists());
}

#[test]
fn test_bench_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("fw.bin");
    fs::write(&input, b"x").unwrap();

    rlec_cmd()
        .arg("bench")
        .arg(&input)
        .args(["--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid report format"));
}

#[test]
fn test_bench_rejects_duplicate_file_names() {
    let dir = TempDir::new().unwrap();
    for sub in ["a", "b"] {
        fs::create_dir_all(dir.path().join(sub)).unwrap();
        fs::write(dir.path().join(sub).join("fw.bin"), b"AAAB").unwrap();
    }
    let out = dir.path().join("out");

    rlec_cmd()
        .arg("bench")
        .arg(dir.path().join("a").join("fw.bin"))
        .arg(dir.path().join("b").join("fw.bin"))
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate file name fw.bin"));
    assert!(!out.join("encoded_fw.bin").exists());
}
