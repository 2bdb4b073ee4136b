//! launchline core library.
//!
//! Turns the raw arguments of a terminal application's startup invocation
//! into an ordered queue of startup actions (open a tab, split a pane, move
//! focus). One invocation may hold several commands separated by an
//! unescaped `;`. The main entry points are [`build_commands`] for splitting,
//! [`parse_commandline`] for a single commandline, [`StartupArgs`] for a
//! parsing session, and [`parse_args`] for a whole batch with diagnostics.

#![warn(missing_docs)]

/// Startup actions and terminal launch specs.
pub mod action;
/// Commandlines and the accumulator that builds them.
pub mod commandline;
/// Splitting and batch configuration.
pub mod config;
/// Per-commandline parse errors.
pub mod error;
/// Subcommand grammars and matching.
pub mod grammar;
/// Single-commandline parsing, sessions, and batches.
pub mod parse;
/// The startup action queue.
pub mod queue;
/// Escape-aware splitting of raw arguments.
pub mod split;

// ── Convenience re-exports ──────────────────────────────────────────────────

// Actions
pub use action::{Action, SplitOrientation, TerminalLaunchSpec};

// Splitting
pub use commandline::{
    Commandline, CommandlineAccumulator, build_commands, build_commands_with_config,
};
pub use split::{next_split_point, split_arg, split_arg_with_config, unescape_delimiters};

// Grammar
pub use grammar::{ImplicitMatch, MatchOutcome, SubcommandKind, join_commandline};

// Parsing
pub use error::CommandlineError;
pub use parse::{BatchOutcome, ParsedCommandline, StartupArgs, parse_args, parse_commandline};

// Queue
pub use queue::{StartupActions, ensure_leading_new_tab};

// Config
pub use config::{ConfigError, ParserConfig, SplitConfig, load_config_from_str};

// Diagnostics (re-exported from the diagnostics crate)
pub use launchline_diagnostics::{Diagnostic, Severity, Span, codes};
