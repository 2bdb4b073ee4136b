//! Tests for splitting raw argument streams into commandlines.

mod common;

use common::argvs;
use launchline_core::{SplitConfig, build_commands, build_commands_with_config};

fn v(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn no_arguments_yield_one_empty_commandline() {
    let cmds = build_commands(Vec::<String>::new());
    assert_eq!(cmds.len(), 1);
    assert!(cmds[0].is_empty());
}

#[test]
fn input_without_delimiter_is_one_commandline() {
    let input = ["wt.exe", "new-tab", "-p", "Windows PowerShell", "cmd.exe"];
    let cmds = build_commands(input);
    assert_eq!(argvs(&cmds), vec![v(&input)]);
}

#[test]
fn standalone_delimiter_starts_new_commandline() {
    let cmds = build_commands(["wt.exe", "new-tab", ";", "split-pane", "-V"]);
    assert_eq!(
        argvs(&cmds),
        vec![v(&["wt.exe", "new-tab"]), v(&["wt.exe", "split-pane", "-V"])]
    );
}

#[test]
fn delimiter_attached_to_token_end() {
    let cmds = build_commands(["wt.exe", "new-tab;", "focus-tab", "-n"]);
    assert_eq!(
        argvs(&cmds),
        vec![v(&["wt.exe", "new-tab"]), v(&["wt.exe", "focus-tab", "-n"])]
    );
}

#[test]
fn delimiter_attached_to_token_start() {
    let cmds = build_commands(["wt.exe", "new-tab", ";focus-tab"]);
    assert_eq!(
        argvs(&cmds),
        vec![v(&["wt.exe", "new-tab"]), v(&["wt.exe", "focus-tab"])]
    );
}

#[test]
fn delimiter_inside_token_splits_it() {
    let cmds = build_commands(["wt.exe", "new-tab;split-pane;focus-tab"]);
    assert_eq!(
        argvs(&cmds),
        vec![
            v(&["wt.exe", "new-tab"]),
            v(&["wt.exe", "split-pane"]),
            v(&["wt.exe", "focus-tab"]),
        ]
    );
}

#[test]
fn escaped_delimiter_is_literal_and_unescaped() {
    let cmds = build_commands(["wt.exe", "new-tab", "cmd.exe", "/c", "echo", "a\\;b"]);
    assert_eq!(cmds.len(), 1);
    assert_eq!(cmds[0].argv().last().map(String::as_str), Some("a;b"));
}

#[test]
fn escaped_and_unescaped_in_one_token() {
    let cmds = build_commands(["wt.exe", "echo", "x\\;y;split-pane"]);
    assert_eq!(
        argvs(&cmds),
        vec![v(&["wt.exe", "echo", "x;y"]), v(&["wt.exe", "split-pane"])]
    );
}

#[test]
fn other_backslashes_survive() {
    let cmds = build_commands(["wt.exe", "-d", "C:\\Users\\me"]);
    assert_eq!(cmds[0].argv()[2], "C:\\Users\\me");
}

#[test]
fn consecutive_delimiters_make_an_argless_commandline() {
    let cmds = build_commands(["wt.exe", ";", ";", "new-tab"]);
    assert_eq!(
        argvs(&cmds),
        vec![v(&["wt.exe"]), v(&["wt.exe"]), v(&["wt.exe", "new-tab"])]
    );
}

#[test]
fn every_later_commandline_starts_with_program_name() {
    let cmds = build_commands(["a", "b;c", ";", "d;"]);
    assert!(cmds.len() >= 2);
    for c in &cmds[1..] {
        assert_eq!(c.argv()[0], "wt.exe");
    }
    let content: Vec<&str> = cmds
        .iter()
        .enumerate()
        .flat_map(|(i, c)| c.argv().iter().skip(usize::from(i > 0)).map(String::as_str))
        .collect();
    assert_eq!(content, ["a", "b", "c", "d"]);
}

#[test]
fn custom_config_changes_delimiter_and_placeholder() {
    let mut config = SplitConfig::with_chars('+', '\\');
    config.program_name = "term".into();
    let cmds = build_commands_with_config(["term", "new-tab", "+", "a;b"], &config);
    assert_eq!(
        argvs(&cmds),
        vec![v(&["term", "new-tab"]), v(&["term", "a;b"])]
    );
}

#[test]
fn empty_argument_is_kept_in_place() {
    let cmds = build_commands(["wt.exe", "new-tab", "-p", "", "cmd.exe"]);
    assert_eq!(argvs(&cmds), vec![v(&["wt.exe", "new-tab", "-p", "", "cmd.exe"])]);
}
