//! Parsing commandlines into startup actions.
//!
//! [`parse_commandline`] handles one commandline: it tries the full registry
//! and, when no subcommand was named, retries the same tokens as an implicit
//! `new-tab`. [`StartupArgs`] keeps the action queue and exit message for a
//! session, and [`parse_args`] runs a whole batch and reports diagnostics.

use std::collections::BTreeMap;

use launchline_diagnostics::{Diagnostic, Span, codes};
use serde::Serialize;

use crate::action::Action;
use crate::commandline::{Commandline, build_commands_with_config};
use crate::config::ParserConfig;
use crate::error::CommandlineError;
use crate::grammar::registry::arg_spellings;
use crate::grammar::{
    GrammarFailure, ImplicitMatch, MatchOutcome, SubcommandKind, match_new_tab, match_registry,
    root_help,
};
use crate::queue::StartupActions;

/// Unix-style help token recognized when it is the only argument.
pub const NIX_HELP_FLAG: &str = "-?";
/// Windows-style help token recognized when it is the only argument.
pub const WINDOWS_HELP_FLAG: &str = "/?";

/// A successfully parsed commandline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommandline {
    /// The subcommand that matched.
    pub subcommand: SubcommandKind,
    /// The action it produced, if any.
    pub action: Option<Action>,
    /// Whether the commandline named no subcommand and was read as `new-tab`.
    pub implicit: bool,
}

// ─── Single commandline ─────────────────────────────────────────────────────

/// Parse one commandline.
///
/// A commandline whose only argument is `-?` or `/?` asks for help, whatever
/// else it looks like. Otherwise the registry is tried first; if no
/// subcommand was named the commandline is retried as `new-tab`. A named
/// subcommand that rejects its arguments is reported as is and never retried.
pub fn parse_commandline(command: &Commandline) -> Result<ParsedCommandline, CommandlineError> {
    let argv = command.argv();

    if argv.len() == 2 && (argv[1] == NIX_HELP_FLAG || argv[1] == WINDOWS_HELP_FLAG) {
        return Err(CommandlineError::HelpRequested { text: root_help() });
    }

    match match_registry(argv) {
        MatchOutcome::Matched { subcommand, action } => Ok(ParsedCommandline {
            subcommand,
            action,
            implicit: false,
        }),
        MatchOutcome::Help(text) => Err(CommandlineError::HelpRequested { text }),
        MatchOutcome::GrammarError {
            subcommand,
            failure,
        } => Err(CommandlineError::GrammarViolation {
            subcommand,
            failure,
        }),
        MatchOutcome::NoSubcommand { error } => {
            tracing::debug!(
                argc = argv.len(),
                rejected = error.is_some(),
                "no subcommand named, retrying as new-tab"
            );
            parse_implicit_new_tab(argv, error)
        }
    }
}

fn parse_implicit_new_tab(
    argv: &[String],
    registry_failure: Option<GrammarFailure>,
) -> Result<ParsedCommandline, CommandlineError> {
    match match_new_tab(argv) {
        ImplicitMatch::Matched(action) => Ok(ParsedCommandline {
            subcommand: SubcommandKind::NewTab,
            action: Some(action),
            implicit: true,
        }),
        ImplicitMatch::Help(text) => Err(CommandlineError::HelpRequested { text }),
        ImplicitMatch::Rejected(failure) => Err(CommandlineError::FallbackAlsoFailed {
            failure,
            registry_failure,
        }),
    }
}

// ─── Session ────────────────────────────────────────────────────────────────

/// A startup-argument parsing session: the action queue, the last exit
/// message, and the configuration used to split raw arguments.
#[derive(Debug, Clone, Default)]
pub struct StartupArgs {
    config: ParserConfig,
    actions: StartupActions,
    exit_message: String,
}

impl StartupArgs {
    /// A session with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session with the given configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The session's configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Split a raw argument stream into commandlines using this session's
    /// splitting rules.
    pub fn build_commands<I, S>(&self, args: I) -> Vec<Commandline>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        build_commands_with_config(args, &self.config.split)
    }

    /// Parse one commandline, queueing its action.
    ///
    /// Returns 0 on success or help and a non-zero status on failure. Help
    /// and failures replace [`StartupArgs::exit_message`]; a failure queues
    /// nothing.
    pub fn parse_command(&mut self, command: &Commandline) -> i32 {
        match parse_commandline(command) {
            Ok(parsed) => {
                if let Some(action) = parsed.action {
                    self.actions.push(action);
                }
                0
            }
            Err(err) => {
                self.exit_message = err.exit_message().to_string();
                err.exit_code()
            }
        }
    }

    /// Help text or error text from the most recent help request or failure.
    pub fn exit_message(&self) -> &str {
        &self.exit_message
    }

    /// The actions queued so far.
    pub fn startup_actions(&self) -> &StartupActions {
        &self.actions
    }

    /// Mutable access to the queue, e.g. for a consumer draining it.
    pub fn startup_actions_mut(&mut self) -> &mut StartupActions {
        &mut self.actions
    }

    /// Make sure the first queued action opens a tab.
    ///
    /// Call once, after every commandline has been parsed. Only the first
    /// call has an effect; see [`StartupActions::ensure_leading_new_tab`].
    pub fn validate_startup_commands(&mut self) -> bool {
        self.actions.ensure_leading_new_tab()
    }

    /// Validate the queue and hand it over.
    pub fn into_startup_actions(mut self) -> StartupActions {
        self.validate_startup_commands();
        self.actions
    }
}

// ─── Batch ──────────────────────────────────────────────────────────────────

/// Everything produced by parsing one raw argument stream.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    /// The commandlines the stream was split into.
    pub commandlines: Vec<Commandline>,
    /// The finalized action queue.
    pub actions: StartupActions,
    /// One diagnostic per failed, help-only or action-less commandline, plus
    /// one if a leading `new-tab` was inserted.
    pub diagnostics: Vec<Diagnostic>,
    /// Exit message of the last help request or failure; empty if none.
    pub exit_message: String,
    /// Status of the last failed commandline, or 0.
    pub status: i32,
}

impl BatchOutcome {
    /// Whether every commandline parsed without error.
    pub fn ok(&self) -> bool {
        !self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Split `args`, parse every commandline, and finalize the action queue.
///
/// Parsing continues past failures unless `config.stop_on_error` is set.
/// The queue invariant is enforced exactly once, at the end.
pub fn parse_args<I, S>(args: I, config: &ParserConfig) -> BatchOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut session = StartupArgs::with_config(config.clone());
    let commandlines = session.build_commands(args);
    let mut diagnostics = Vec::new();
    let mut status = 0;

    for (index, command) in commandlines.iter().enumerate() {
        match parse_commandline(command) {
            Ok(parsed) => {
                tracing::debug!(
                    index,
                    subcommand = %parsed.subcommand,
                    implicit = parsed.implicit,
                    action = parsed.action.as_ref().map(Action::name),
                    "commandline parsed"
                );
                match parsed.action {
                    Some(action) => session.startup_actions_mut().push(action),
                    None => diagnostics.push(
                        Diagnostic::warn(
                            codes::NO_ACTION,
                            format!("{} produced no action", parsed.subcommand),
                        )
                        .with_context(context(index, Some(parsed.subcommand), None)),
                    ),
                }
            }
            Err(err) => {
                tracing::debug!(index, error = %err, "commandline rejected");
                session.exit_message = err.exit_message().to_string();
                diagnostics.push(diagnostic_for(index, command, &err));
                if !err.is_help() {
                    status = err.exit_code();
                    if config.stop_on_error {
                        tracing::debug!(index, "stopping at first failed commandline");
                        break;
                    }
                }
            }
        }
    }

    if session.validate_startup_commands() {
        diagnostics.push(Diagnostic::info(
            codes::IMPLICIT_NEW_TAB,
            "inserted a default new-tab action at the front",
        ));
    }

    BatchOutcome {
        commandlines,
        exit_message: session.exit_message.clone(),
        actions: session.into_startup_actions(),
        diagnostics,
        status,
    }
}

fn diagnostic_for(index: usize, command: &Commandline, err: &CommandlineError) -> Diagnostic {
    match err {
        CommandlineError::HelpRequested { .. } => {
            Diagnostic::info(codes::HELP_REQUESTED, err.to_string())
                .with_context(context(index, None, None))
        }
        CommandlineError::GrammarViolation {
            subcommand,
            failure,
        } => Diagnostic::error(codes::GRAMMAR_VIOLATION, err.to_string())
            .with_span(locate(command, Some(*subcommand), failure))
            .with_context(context(index, Some(*subcommand), failure.invalid_arg.as_deref())),
        CommandlineError::FallbackAlsoFailed { failure, .. } => {
            Diagnostic::error(codes::FALLBACK_FAILED, err.to_string())
                .with_span(locate(command, None, failure))
                .with_context(context(index, None, failure.invalid_arg.as_deref()))
        }
    }
}

fn context(
    index: usize,
    subcommand: Option<SubcommandKind>,
    argument: Option<&str>,
) -> BTreeMap<String, String> {
    let mut ctx = BTreeMap::from([("commandline".to_string(), index.to_string())]);
    if let Some(sub) = subcommand {
        ctx.insert("subcommand".into(), sub.name().into());
    }
    if let Some(arg) = argument {
        ctx.insert("argument".into(), arg.into());
    }
    ctx
}

/// Span of the token a failure is about, within [`Commandline::to_source`].
///
/// The offending value is preferred; otherwise any spelling of the offending
/// argument, alone or in `--name=value` form.
fn locate(
    command: &Commandline,
    subcommand: Option<SubcommandKind>,
    failure: &GrammarFailure,
) -> Option<Span> {
    let argv = command.argv();
    let by_value = failure
        .invalid_value
        .as_deref()
        .and_then(|value| argv.iter().skip(1).position(|t| t == value));
    let index = by_value.or_else(|| {
        let display = failure.invalid_arg.as_deref()?;
        let spellings = arg_spellings(subcommand, display);
        argv.iter().skip(1).position(|t| {
            spellings
                .iter()
                .any(|s| t == s || t.strip_prefix(s.as_str()).is_some_and(|r| r.starts_with('=')))
        })
    })?;
    let (start, end) = command.token_span(index + 1)?;
    Some(Span::new(start, end))
}
