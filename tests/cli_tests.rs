//! CLI integration tests.
//!
//! Tests the circuit-input CLI commands by invoking the binary as a subprocess.

use std::io::Write;
use std::process::{Command, Stdio};

fn binary_path() -> std::path::PathBuf {
    // Find the binary in the target directory
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_default();

    // Navigate to the deps directory's sibling (the main binary location)
    if path.ends_with("deps") {
        path.pop();
    }

    if cfg!(windows) {
        path.join("circuit-input.exe")
    } else {
        path.join("circuit-input")
    }
}

fn run(args: &[&str], input: &str) -> (i32, String, String) {
    let binary = binary_path();
    let mut child = Command::new(&binary)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("Failed to spawn circuit-input at {:?}: {}", binary, e));

    {
        let stdin = child.stdin.as_mut().unwrap();
        stdin.write_all(input.as_bytes()).unwrap();
    }

    let output = child.wait_with_output().unwrap();
    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

fn parse(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout.trim())
        .unwrap_or_else(|e| panic!("stdout is not JSON ({}): {}", e, stdout))
}

// ============================================================================
// Version / Metadata
// ============================================================================

#[test]
fn cli_version() {
    let (code, stdout, _stderr) = run(&["version"], "");
    assert_eq!(code, 0);
    assert!(stdout.contains("Circuit Input v"), "unexpected output: {}", stdout);
    assert!(stdout.contains("bn254_fr"));
}

#[test]
fn cli_export_metadata() {
    let (code, stdout, _stderr) = run(&["export-metadata"], "");
    assert_eq!(code, 0);
    let out = parse(&stdout);
    assert_eq!(out["ok"]["bit_size"], 254);
    assert_eq!(out["ok"]["byte_size"], 32);
    assert_eq!(
        out["ok"]["modulus_hex"],
        "0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001"
    );
}

// ============================================================================
// Field Command Tests
// ============================================================================

#[test]
fn cli_field_add_wraps() {
    let (code, stdout, _stderr) = run(&["field", "add", "-1", "2"], "");
    assert_eq!(code, 0, "stdout: {}", stdout);
    assert_eq!(stdout.trim(), r#"{"ok":"0x1"}"#);
}

#[test]
fn cli_field_pow_scenario() {
    let (code, stdout, _stderr) = run(&["field", "pow", "2", "4294967295"], "");
    assert_eq!(code, 0);
    assert_eq!(
        parse(&stdout)["ok"],
        "0x4aa46b15346c19ec569802276feb4778e1921469782ef1287716e7712fb8f70"
    );
}

#[test]
fn cli_field_dec() {
    let (code, stdout, _stderr) = run(&["field", "dec", "0xff"], "");
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), r#"{"ok":"255"}"#);
}

#[test]
fn cli_field_division_by_zero() {
    let (code, stdout, _stderr) = run(&["field", "div", "1", "0"], "");
    assert_eq!(code, 1);
    let out = parse(&stdout);
    assert_eq!(out["err"]["code"], 200);
    assert_eq!(out["err"]["name"], "E200_DivisionByZero");
}

#[test]
fn cli_field_missing_operand() {
    let (code, stdout, _stderr) = run(&["field", "mul", "3"], "");
    assert_eq!(code, 1);
    assert_eq!(parse(&stdout)["err"]["code"], 100);
}

// ============================================================================
// Decompose Command Tests
// ============================================================================

#[test]
fn cli_decompose_bits() {
    let (code, stdout, _stderr) = run(&["decompose", "300", "--len", "9"], "");
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), r#"{"ok":[0,0,1,1,0,1,0,0,1]}"#);

    let (code, stdout, _stderr) = run(&["decompose", "300", "--len", "9", "--be"], "");
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), r#"{"ok":[1,0,0,1,0,1,1,0,0]}"#);
}

#[test]
fn cli_decompose_radix() {
    let (code, stdout, _stderr) = run(
        &["decompose", "300", "--format", "radix", "--radix", "16", "--len", "4", "--be"],
        "",
    );
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), r#"{"ok":[0,1,2,12]}"#);
}

#[test]
fn cli_decompose_too_short() {
    let (code, stdout, _stderr) = run(&["decompose", "300", "--format", "bytes", "--len", "1"], "");
    assert_eq!(code, 1);
    assert_eq!(parse(&stdout)["err"]["name"], "E300_LengthOutOfRange");
}

// ============================================================================
// Encode Command Tests
// ============================================================================

#[test]
fn cli_encode_document() {
    let (code, stdout, _stderr) = run(&["encode"], r#"{"b": [1, 2], "a": true, "s": "hi"}"#);
    assert_eq!(code, 0, "stdout: {}", stdout);
    assert_eq!(stdout.trim(), r#"{"ok":{"a":true,"b":["0x1","0x2"],"s":"hi"}}"#);
}

#[test]
fn cli_encode_rejects_null() {
    let (code, stdout, _stderr) = run(&["encode"], r#"{"a": null}"#);
    assert_eq!(code, 1);
    assert_eq!(parse(&stdout)["err"]["code"], 500);
}

#[test]
fn cli_encode_invalid_json() {
    let (code, stdout, _stderr) = run(&["encode"], "{not json");
    assert_eq!(code, 1);
    assert_eq!(parse(&stdout)["err"]["name"], "E100_InvalidInput");
}
