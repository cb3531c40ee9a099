//! Binary exit status and output tests

mod fixtures;

use fixtures::PageDir;
use std::process::Command;

fn vbit_config(args: &[String]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_vbit-config"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run vbit-config")
}

fn vbit_config_with_filter(args: &[String], filter: &str) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_vbit-config"))
        .args(args)
        .env("RUST_LOG", filter)
        .output()
        .expect("run vbit-config")
}

#[test]
fn test_prints_effective_config() {
    let pages = PageDir::with_base("command_port=6100\nbogus_key=1\n");
    let output = vbit_config(&pages.argv(&[]));

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["settings"]["command_port"], 6100);
    assert_eq!(value["rejected"][0]["line"], "bogus_key=1");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid config line"), "stderr: {}", stderr);
}

#[test]
fn test_reverse_with_raw_exits_non_zero() {
    let pages = PageDir::new();
    let output = vbit_config(&pages.argv(&["--format", "raw", "--reverse"]));

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--reverse requires t42"), "stderr: {}", stderr);
}

#[test]
fn test_missing_flag_value_exits_non_zero() {
    let output = vbit_config(&["--dir".to_string()]);
    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_missing_page_dir_exits_non_zero() {
    let pages = PageDir::new();
    let missing = pages.path().join("missing");
    let output = vbit_config(&["--dir".to_string(), missing.display().to_string()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist or is not a directory"), "stderr: {}", stderr);
}

#[test]
fn test_unrecognised_argument_logged_at_debug() {
    let pages = PageDir::new();
    let output = vbit_config(&pages.argv(&["--frobnicate", "--debug", "1"]));

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ignoring unrecognised argument"), "stderr: {}", stderr);
    assert!(stderr.contains("--frobnicate"), "stderr: {}", stderr);
}

#[test]
fn test_unrecognised_argument_quiet_at_default_level() {
    let pages = PageDir::new();
    let output = vbit_config(&pages.argv(&["--frobnicate"]));

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("ignoring unrecognised argument"), "stderr: {}", stderr);
}

#[test]
fn test_fatal_error_reported_with_logging_off() {
    let pages = PageDir::new();
    let output = vbit_config_with_filter(&pages.argv(&["--format", "raw", "--reverse"]), "off");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--reverse requires t42"), "stderr: {}", stderr);
}

#[test]
fn test_piped_stderr_has_no_colour() {
    let pages = PageDir::with_base("bogus_key=1\n");
    let output = vbit_config(&pages.argv(&["--debug", "1"]));

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid config line"), "stderr: {}", stderr);
    assert!(!stderr.contains('\u{1b}'), "stderr: {:?}", stderr);
}
