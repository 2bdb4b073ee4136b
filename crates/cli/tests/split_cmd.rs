//! CLI tests for the `launchline split` subcommand.

use std::process::Command;

use assert_cmd::cargo;

fn launchline_cmd() -> Command {
    Command::new(cargo::cargo_bin!("launchline"))
}

#[test]
fn split_json_lists_commandlines() {
    let output = launchline_cmd()
        .args(["--output", "json", "split", "--"])
        .args(["wt.exe", "new-tab;split-pane", "echo", "a\\;b"])
        .output()
        .expect("run split command");
    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(
        json["commandlines"],
        serde_json::json!([["wt.exe", "new-tab"], ["wt.exe", "split-pane", "echo", "a;b"]])
    );
}

#[test]
fn split_never_fails_on_bad_grammar() {
    let output = launchline_cmd()
        .args(["--output", "pretty", "split", "--"])
        .args(["wt.exe", "split-pane", "-H", "-V"])
        .output()
        .expect("run split command");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("[0] "), "stdout={stdout}");
    assert!(stdout.contains("\"-V\""), "stdout={stdout}");
}
