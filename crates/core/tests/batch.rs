//! Tests for whole-batch parsing with diagnostics.

mod common;

use common::{new_tab, split_pane};
use launchline_core::{
    Action, ParserConfig, Severity, SplitOrientation, codes, load_config_from_str, parse_args,
};

fn ids(outcome: &launchline_core::BatchOutcome) -> Vec<&str> {
    outcome.diagnostics.iter().map(|d| d.id.as_ref()).collect()
}

#[test]
fn clean_batch_has_no_diagnostics() {
    let outcome = parse_args(
        ["wt.exe", "new-tab", "-p", "cmd", ";", "split-pane", "-H"],
        &ParserConfig::default(),
    );
    assert!(outcome.ok());
    assert_eq!(outcome.status, 0);
    assert!(outcome.diagnostics.is_empty());
    assert!(outcome.exit_message.is_empty());
    assert_eq!(outcome.commandlines.len(), 2);
    let actions: Vec<_> = outcome.actions.iter().cloned().collect();
    assert_eq!(
        actions,
        vec![
            new_tab(Some("cmd"), None, None),
            split_pane(SplitOrientation::Horizontal),
        ]
    );
}

#[test]
fn empty_stream_yields_one_default_new_tab() {
    let outcome = parse_args(Vec::<String>::new(), &ParserConfig::default());
    assert!(outcome.ok());
    assert_eq!(outcome.commandlines.len(), 1);
    assert_eq!(outcome.actions.len(), 1);
    assert_eq!(outcome.actions.front(), Some(&Action::default_new_tab()));
    assert!(ids(&outcome).is_empty());
}

#[test]
fn failures_are_skipped_and_reported() {
    let outcome = parse_args(
        ["wt.exe", "split-pane", "-H", "-V", ";", "focus-tab", "-n"],
        &ParserConfig::default(),
    );
    assert!(!outcome.ok());
    assert_ne!(outcome.status, 0);
    assert!(!outcome.exit_message.is_empty());
    assert_eq!(ids(&outcome), [codes::GRAMMAR_VIOLATION, codes::IMPLICIT_NEW_TAB]);

    let violation = &outcome.diagnostics[0];
    assert_eq!(violation.severity, Severity::Error);
    let ctx = violation.context.as_ref().expect("context");
    assert_eq!(ctx.get("commandline").map(String::as_str), Some("0"));
    assert_eq!(ctx.get("subcommand").map(String::as_str), Some("split-pane"));
    let span = violation.span.expect("span");
    let source = outcome.commandlines[0].to_source();
    let text = &source[span.start..span.end];
    assert!(text == "-H" || text == "-V", "unexpected span text {text:?}");

    let actions: Vec<_> = outcome.actions.iter().cloned().collect();
    assert_eq!(actions, vec![Action::default_new_tab(), Action::NextTab]);
}

#[test]
fn all_failures_still_leave_one_new_tab() {
    let outcome = parse_args(
        ["wt.exe", "focus-tab", "-t", "x", ";", "--bogus"],
        &ParserConfig::default(),
    );
    assert_eq!(
        ids(&outcome),
        [codes::GRAMMAR_VIOLATION, codes::FALLBACK_FAILED, codes::IMPLICIT_NEW_TAB]
    );
    assert_eq!(outcome.actions.len(), 1);
    assert!(outcome.actions.front().is_some_and(Action::is_new_tab));
}

#[test]
fn stop_on_error_halts_at_first_failure() {
    let mut config = ParserConfig::default();
    config.stop_on_error = true;
    let outcome = parse_args(
        ["wt.exe", "focus-tab", "-n", "-p", ";", "split-pane", ";", "focus-tab", "-n"],
        &config,
    );
    assert_eq!(outcome.commandlines.len(), 3);
    assert_eq!(ids(&outcome), [codes::GRAMMAR_VIOLATION, codes::IMPLICIT_NEW_TAB]);
    assert_eq!(outcome.actions.len(), 1);
}

#[test]
fn help_is_informational_and_does_not_stop() {
    let mut config = ParserConfig::default();
    config.stop_on_error = true;
    let outcome = parse_args(["wt.exe", "-?", ";", "split-pane", "-V"], &config);
    assert!(outcome.ok());
    assert_eq!(outcome.status, 0);
    assert!(outcome.exit_message.contains("focus-tab"));
    assert_eq!(ids(&outcome), [codes::HELP_REQUESTED, codes::IMPLICIT_NEW_TAB]);
    assert_eq!(outcome.actions.len(), 2);
}

#[test]
fn commandline_without_action_is_noted() {
    let outcome = parse_args(["wt.exe", "new-tab", ";", "focus-tab"], &ParserConfig::default());
    assert!(outcome.ok());
    assert_eq!(ids(&outcome), [codes::NO_ACTION]);
    assert_eq!(outcome.diagnostics[0].severity, Severity::Warn);
    assert_eq!(outcome.actions.len(), 1);
}

#[test]
fn empty_argument_stays_in_its_position() {
    let outcome = parse_args(
        ["wt.exe", "new-tab", "-p", "", "cmd.exe"],
        &ParserConfig::default(),
    );
    assert!(outcome.ok());
    assert_eq!(
        outcome.commandlines[0].argv(),
        ["wt.exe", "new-tab", "-p", "", "cmd.exe"]
    );
    let actions: Vec<_> = outcome.actions.iter().cloned().collect();
    assert_eq!(actions, vec![new_tab(None, None, Some("cmd.exe"))]);
}

#[test]
fn configured_delimiter_is_used() {
    let config = load_config_from_str(r#"{ "split": { "delimiter": "+", "programName": "term" } }"#)
        .expect("valid config");
    let outcome = parse_args(["term", "new-tab", "+", "split-pane", "a;b"], &config);
    assert!(outcome.ok());
    assert_eq!(outcome.commandlines[1].argv()[0], "term");
    let last = outcome.actions.iter().last().cloned();
    let Some(Action::SplitPane { spec, .. }) = last else {
        panic!("expected split-pane, got {last:?}");
    };
    assert_eq!(spec.commandline.as_deref(), Some("a;b"));
}

#[test]
fn invalid_config_is_rejected() {
    assert!(load_config_from_str(r#"{ "split": { "delimiter": "\\" } }"#).is_err());
    assert!(load_config_from_str(r#"{ "split": { "programName": "  " } }"#).is_err());
    assert!(load_config_from_str("{ not json").is_err());
}

#[test]
fn outcome_serializes_camel_case() {
    let outcome = parse_args(["wt.exe", "focus-tab", "-t", "2"], &ParserConfig::default());
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["commandlines"][0][1], "focus-tab");
    assert_eq!(json["actions"][0]["action"], "newTab");
    assert_eq!(json["actions"][1]["action"], "switchToTab");
    assert_eq!(json["actions"][1]["index"], 2);
    assert_eq!(json["exitMessage"], "");
    assert_eq!(json["diagnostics"][0]["id"], codes::IMPLICIT_NEW_TAB);
}
