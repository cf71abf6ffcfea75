use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary text file
fn create_temp_text_file(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("doc.txt");
    let mut file = std::fs::File::create(&file_path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    (temp_dir, file_path)
}

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Terminal auto-scroller with bookmarklet export",
        ));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("autoscroll"));
}

#[test]
fn test_bookmarklet_mode_prints_uri() {
    cargo_bin_cmd!()
        .arg("--bookmarklet")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("javascript:"));
}

#[test]
fn test_bookmarklet_mode_embeds_cli_config() {
    cargo_bin_cmd!()
        .args(["--bookmarklet", "--speed", "800", "--direction", "up", "--no-loop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("var speed=800"))
        .stdout(predicate::str::contains("dir=-1"))
        .stdout(predicate::str::contains("loop=false"));
}

#[test]
fn test_bookmarklet_mode_clamps_speed() {
    cargo_bin_cmd!()
        .args(["--bookmarklet", "--speed", "999999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("var speed=3000"));

    cargo_bin_cmd!()
        .args(["--bookmarklet", "--speed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("var speed=10"));
}

#[test]
fn test_bookmarklet_mode_is_single_line() {
    let output = cargo_bin_cmd!()
        .arg("--bookmarklet")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end_matches('\n').lines().count(), 1);
}

#[test]
fn test_stop_bookmarklet_mode() {
    cargo_bin_cmd!()
        .arg("--stop-bookmarklet")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("javascript:"))
        .stdout(predicate::str::contains("__autoScroller__"));
}

#[test]
fn test_both_print_modes_print_both_uris() {
    let output = cargo_bin_cmd!()
        .args(["--bookmarklet", "--stop-bookmarklet"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end_matches('\n').lines().count(), 2);
}

#[test]
fn test_print_mode_ignores_input_file() {
    // Print modes exit before the loader ever runs
    let (_temp_dir, file_path) = create_temp_text_file("some text\n");
    cargo_bin_cmd!()
        .arg(&file_path)
        .arg("--bookmarklet")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("javascript:"));
}

#[test]
fn test_invalid_direction_rejected() {
    cargo_bin_cmd!()
        .args(["--bookmarklet", "--direction", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
