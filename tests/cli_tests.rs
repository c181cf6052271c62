//! End-to-end tests for the splotr binary

use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn splotr() -> Command {
    Command::new(env!("CARGO_BIN_EXE_splotr"))
}

fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("splotr_cli_{}_{}", std::process::id(), name));
    fs::write(&path, contents).expect("Failed to write temp file");
    path
}

#[test]
fn test_prints_banner_and_summary() {
    // original + copyright, emphasis 3
    let path = temp_file("summary.mp3", &[0b0000_1111, 0x20, 0xFB, 0xFF, 0x00]);
    let output = splotr().arg(&path).output().expect("Failed to run splotr");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Splotr v1.0 - sound plotter\nWritten by Ian M. Moffett\n"));
    assert!(stdout.contains("Emphasis:  3\n"));
    assert!(stdout.contains("Original copy:  yes\n"));
    assert!(stdout.contains("Is copyrighted:  yes\n"));
    fs::remove_file(&path).ok();
}

#[test]
fn test_quiet_verbose_output() {
    let path = temp_file("verbose.mp3", &[0x40, 0x20, 0xFB, 0xFF, 0x00]);
    let output = splotr().args(["-q", "-v"]).arg(&path).output().expect("Failed to run splotr");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Splotr v1.0"));
    assert!(stdout.contains("Layer:  Layer III"));
    fs::remove_file(&path).ok();
}

#[test]
fn test_missing_argument_fails() {
    let output = splotr().output().expect("Failed to run splotr");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("too few arguments!"));
    // Banner is printed before arguments are checked
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Splotr v1.0 - sound plotter\n"));
}

#[test]
fn test_unreadable_file_fails_with_path() {
    let path = std::env::temp_dir().join("splotr_cli_missing.mp3");
    let output = splotr().arg(&path).output().expect("Failed to run splotr");

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("Could not find {}", path.display())));
}

#[test]
fn test_short_file_fails() {
    let path = temp_file("short.mp3", &[0xFF, 0xFB]);
    let output = splotr().arg(&path).output().expect("Failed to run splotr");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Truncated input"));
    fs::remove_file(&path).ok();
}

#[cfg(feature = "json")]
#[test]
fn test_json_output() {
    let path = temp_file("json.mp3", &[0x40, 0x20, 0xFB, 0xFF, 0x00]);
    let output = splotr().args(["-q", "-j"]).arg(&path).output().expect("Failed to run splotr");

    assert!(output.status.success());
    let header: splotr::FrameHeader =
        serde_json::from_slice(&output.stdout).expect("stdout should be a JSON header");
    assert_eq!(header.frame_sync, 0x7FF);
    assert_eq!(header.layer_description, 1);
    assert_eq!(header.channel_mode, 1);
    fs::remove_file(&path).ok();
}

#[cfg(not(feature = "json"))]
#[test]
fn test_json_flag_requires_feature() {
    let path = temp_file("no_json.mp3", &[0x40, 0x20, 0xFB, 0xFF, 0x00]);
    let output = splotr().args(["-q", "-j"]).arg(&path).output().expect("Failed to run splotr");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("JSON output requires the `json` feature"));
    assert!(output.stdout.is_empty());
    fs::remove_file(&path).ok();
}
