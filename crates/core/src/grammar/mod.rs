//! Subcommand grammar registry: the fixed set of startup subcommands, the
//! shared terminal-launch grammar, and matching a commandline against them.

/// The registered subcommands and commandline matching.
pub mod registry;
/// The terminal-launch grammar shared by `new-tab` and `split-pane`.
pub mod terminal;

pub use registry::{
    FocusTabArgs, GrammarFailure, ImplicitMatch, MatchOutcome, SplitPaneArgs, SubcommandKind,
    match_new_tab, match_registry, root_help,
};
pub use terminal::{TerminalArgs, join_commandline};
