//! Subcommand registry, grammars, and matching a commandline against them.

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Args, CommandFactory, Parser, Subcommand};
use serde::Serialize;

use super::terminal::TerminalArgs;
use crate::action::{Action, SplitOrientation};

// ─── Registry ──────────────────────────────────────────────────────────────

/// The fixed set of startup subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubcommandKind {
    /// `new-tab`
    NewTab,
    /// `split-pane`
    SplitPane,
    /// `focus-tab`
    FocusTab,
}

impl SubcommandKind {
    /// Every registered subcommand, in declaration order.
    pub const ALL: [SubcommandKind; 3] = [
        SubcommandKind::NewTab,
        SubcommandKind::SplitPane,
        SubcommandKind::FocusTab,
    ];

    /// The name that selects this subcommand on a commandline.
    pub fn name(self) -> &'static str {
        match self {
            SubcommandKind::NewTab => "new-tab",
            SubcommandKind::SplitPane => "split-pane",
            SubcommandKind::FocusTab => "focus-tab",
        }
    }

    /// Look a subcommand up by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

impl std::fmt::Display for SubcommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Grammars ──────────────────────────────────────────────────────────────

/// Top-level grammar: all registered subcommands as siblings.
#[derive(Debug, Parser)]
#[command(
    name = "wt",
    about = "Open tabs and panes, and move focus between them, at startup",
    disable_help_subcommand = true
)]
struct StartupCommand {
    #[command(subcommand)]
    subcommand: Option<StartupSubcommand>,
}

#[derive(Debug, Subcommand)]
enum StartupSubcommand {
    /// Create a new tab
    #[command(name = "new-tab")]
    NewTab(TerminalArgs),
    /// Create a new pane by splitting the focused one
    #[command(name = "split-pane")]
    SplitPane(SplitPaneArgs),
    /// Move focus to another tab
    #[command(name = "focus-tab")]
    FocusTab(FocusTabArgs),
}

impl StartupSubcommand {
    fn kind(&self) -> SubcommandKind {
        match self {
            StartupSubcommand::NewTab(_) => SubcommandKind::NewTab,
            StartupSubcommand::SplitPane(_) => SubcommandKind::SplitPane,
            StartupSubcommand::FocusTab(_) => SubcommandKind::FocusTab,
        }
    }

    fn into_action(self) -> Option<Action> {
        match self {
            StartupSubcommand::NewTab(args) => Some(Action::NewTab(args.to_launch_spec())),
            StartupSubcommand::SplitPane(args) => Some(args.to_action()),
            StartupSubcommand::FocusTab(args) => args.to_action(),
        }
    }
}

/// `new-tab` applied at the top level, used when no subcommand name was given.
#[derive(Debug, Parser)]
#[command(name = "new-tab", about = "Create a new tab")]
struct ImplicitNewTab {
    #[command(flatten)]
    terminal: TerminalArgs,
}

/// Options of `split-pane`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct SplitPaneArgs {
    /// Create the new pane as a horizontal split (think [-])
    #[arg(short = 'H', long, conflicts_with = "vertical", overrides_with = "horizontal")]
    pub horizontal: bool,

    /// Create the new pane as a vertical split (think [|])
    #[arg(short = 'V', long, overrides_with = "vertical")]
    pub vertical: bool,

    #[command(flatten)]
    pub terminal: TerminalArgs,
}

impl SplitPaneArgs {
    /// Horizontal only when `--horizontal` was given.
    pub fn orientation(&self) -> SplitOrientation {
        if self.horizontal {
            SplitOrientation::Horizontal
        } else {
            SplitOrientation::Vertical
        }
    }

    /// The `SplitPane` action these options describe.
    pub fn to_action(&self) -> Action {
        Action::SplitPane {
            spec: self.terminal.to_launch_spec(),
            orientation: self.orientation(),
        }
    }
}

/// Options of `focus-tab`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct FocusTabArgs {
    /// Move focus to the tab at the given index
    #[arg(short, long, value_name = "INDEX", conflicts_with_all = ["next", "previous"])]
    pub target: Option<u32>,

    /// Move focus to the next tab
    #[arg(short, long, conflicts_with = "previous", overrides_with = "next")]
    pub next: bool,

    /// Move focus to the previous tab
    #[arg(short, long, overrides_with = "previous")]
    pub previous: bool,
}

impl FocusTabArgs {
    /// The focus action these options describe, if any.
    ///
    /// A target wins over `--next`, which wins over `--previous`; the grammar
    /// rejects combinations, so the order only matters for hand-built values.
    pub fn to_action(&self) -> Option<Action> {
        if let Some(index) = self.target {
            Some(Action::SwitchToTab { index })
        } else if self.next {
            Some(Action::NextTab)
        } else if self.previous {
            Some(Action::PrevTab)
        } else {
            None
        }
    }
}

// ─── Matching ──────────────────────────────────────────────────────────────

/// A rejected match attempt, as reported by the option parser.
#[derive(Debug, Clone)]
pub struct GrammarFailure {
    /// Rendered error text, ready to show to the user.
    pub message: String,
    /// What went wrong.
    pub kind: ErrorKind,
    /// Process exit status the option parser suggests (never 0).
    pub exit_code: i32,
    /// The argument the error is about, as written in the grammar (e.g. `--vertical`).
    pub invalid_arg: Option<String>,
    /// The offending value, for value and type errors.
    pub invalid_value: Option<String>,
}

impl GrammarFailure {
    fn from_clap(err: &clap::Error) -> Self {
        Self {
            message: err.render().to_string(),
            kind: err.kind(),
            exit_code: err.exit_code(),
            invalid_arg: context_string(err, ContextKind::InvalidArg),
            invalid_value: context_string(err, ContextKind::InvalidValue),
        }
    }
}

impl std::fmt::Display for GrammarFailure {
    /// The first line of the rendered message, without its `error: ` prefix.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line = self.message.lines().next().unwrap_or_default();
        f.write_str(line.strip_prefix("error: ").unwrap_or(line))
    }
}

fn context_string(err: &clap::Error, kind: ContextKind) -> Option<String> {
    match err.get(kind) {
        Some(ContextValue::String(s)) => Some(s.clone()),
        _ => None,
    }
}

/// Result of matching one commandline against a grammar.
#[derive(Debug, Clone)]
pub enum MatchOutcome {
    /// A subcommand matched; `action` is `None` when it describes nothing to do.
    Matched {
        /// The subcommand that matched.
        subcommand: SubcommandKind,
        /// The action it produced.
        action: Option<Action>,
    },
    /// No subcommand name was recognized. `error` carries the parse failure,
    /// if the tokens were rejected rather than simply naming nothing.
    NoSubcommand {
        /// Why the registry rejected the tokens, if it did.
        error: Option<GrammarFailure>,
    },
    /// Help was requested; carries the rendered help text.
    Help(String),
    /// A recognized subcommand rejected its arguments.
    GrammarError {
        /// The subcommand whose grammar failed.
        subcommand: SubcommandKind,
        /// The failure.
        failure: GrammarFailure,
    },
}

/// Match `argv` (program name first) against all registered subcommands.
pub fn match_registry<S: AsRef<str>>(argv: &[S]) -> MatchOutcome {
    let args: Vec<&str> = argv.iter().map(|a| a.as_ref()).collect();
    match StartupCommand::try_parse_from(args) {
        Ok(StartupCommand {
            subcommand: Some(sub),
        }) => MatchOutcome::Matched {
            subcommand: sub.kind(),
            action: sub.into_action(),
        },
        Ok(StartupCommand { subcommand: None }) => MatchOutcome::NoSubcommand { error: None },
        Err(err) if is_help(&err) => MatchOutcome::Help(err.render().to_string()),
        Err(err) => {
            let failure = GrammarFailure::from_clap(&err);
            match recognized_subcommand(argv) {
                Some(subcommand) => MatchOutcome::GrammarError {
                    subcommand,
                    failure,
                },
                None => MatchOutcome::NoSubcommand {
                    error: Some(failure),
                },
            }
        }
    }
}

/// Result of matching a commandline as an implicit `new-tab`.
#[derive(Debug, Clone)]
pub enum ImplicitMatch {
    /// The tokens were accepted; carries the `NewTab` action.
    Matched(Action),
    /// Help was requested; carries the rendered help text.
    Help(String),
    /// The `new-tab` grammar rejected the tokens.
    Rejected(GrammarFailure),
}

/// Match `argv` (program name first) against `new-tab` alone, with its
/// options at the top level and no subcommand name.
pub fn match_new_tab<S: AsRef<str>>(argv: &[S]) -> ImplicitMatch {
    let args: Vec<&str> = argv.iter().map(|a| a.as_ref()).collect();
    match ImplicitNewTab::try_parse_from(args) {
        Ok(cmd) => ImplicitMatch::Matched(Action::NewTab(cmd.terminal.to_launch_spec())),
        Err(err) if is_help(&err) => ImplicitMatch::Help(err.render().to_string()),
        Err(err) => ImplicitMatch::Rejected(GrammarFailure::from_clap(&err)),
    }
}

/// Rendered help for the whole registry.
pub fn root_help() -> String {
    StartupCommand::command().render_help().to_string()
}

/// Every spelling of the argument `display` refers to, within `subcommand`'s
/// grammar or, for `None`, the implicit `new-tab` grammar.
///
/// `display` is an argument as the option parser prints it, e.g.
/// `--target <INDEX>`; the result holds its long and short forms.
pub(crate) fn arg_spellings(subcommand: Option<SubcommandKind>, display: &str) -> Vec<String> {
    let word = display.split_whitespace().next().unwrap_or(display);
    let mut out = vec![word.to_string()];
    let root = StartupCommand::command();
    let implicit = ImplicitNewTab::command();
    let grammar = match subcommand {
        Some(kind) => root.find_subcommand(kind.name()),
        None => Some(&implicit),
    };
    let Some(grammar) = grammar else {
        return out;
    };
    for arg in grammar.get_arguments() {
        let long = arg.get_long().map(|l| format!("--{l}"));
        let short = arg.get_short().map(|c| format!("-{c}"));
        if long.as_deref() == Some(word) || short.as_deref() == Some(word) {
            out.extend(long.into_iter().chain(short).filter(|s| s != word));
        }
    }
    out
}

/// The subcommand named by the first token after the program name.
///
/// The top-level grammar takes no options besides help, so a subcommand can
/// only be selected from that position.
fn recognized_subcommand<S: AsRef<str>>(argv: &[S]) -> Option<SubcommandKind> {
    argv.get(1).and_then(|t| SubcommandKind::from_name(t.as_ref()))
}

fn is_help(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}
