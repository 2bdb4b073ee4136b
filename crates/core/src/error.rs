//! Per-commandline parse errors.

use thiserror::Error;

use crate::grammar::{GrammarFailure, SubcommandKind};

/// Why a commandline produced no action.
///
/// Help is modelled as an error so callers handle it in one place, but it
/// is not a failure: [`CommandlineError::exit_code`] is 0 for it.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum CommandlineError {
    /// Help was requested with `-h`, `--help`, `-?` or `/?`.
    #[error("help requested")]
    HelpRequested {
        /// Rendered help text.
        text: String,
    },

    /// A recognized subcommand rejected its arguments.
    #[error("{subcommand}: {failure}")]
    GrammarViolation {
        /// The subcommand named on the commandline.
        subcommand: SubcommandKind,
        /// What the option parser reported.
        failure: GrammarFailure,
    },

    /// No subcommand was named, and parsing the commandline as an implicit
    /// `new-tab` failed as well.
    #[error("new-tab (implicit): {failure}")]
    FallbackAlsoFailed {
        /// What the implicit `new-tab` parse reported.
        failure: GrammarFailure,
        /// What the first attempt against the full registry reported, if it failed.
        registry_failure: Option<GrammarFailure>,
    },
}

impl CommandlineError {
    /// Status for this outcome: 0 for help, the option parser's exit code otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandlineError::HelpRequested { .. } => 0,
            CommandlineError::GrammarViolation { failure, .. }
            | CommandlineError::FallbackAlsoFailed { failure, .. } => failure.exit_code,
        }
    }

    /// Text to show the user verbatim: the help text or the rendered error.
    pub fn exit_message(&self) -> &str {
        match self {
            CommandlineError::HelpRequested { text } => text,
            CommandlineError::GrammarViolation { failure, .. }
            | CommandlineError::FallbackAlsoFailed { failure, .. } => &failure.message,
        }
    }

    /// Whether this is a help request rather than a failure.
    pub fn is_help(&self) -> bool {
        matches!(self, CommandlineError::HelpRequested { .. })
    }

    /// The grammar failure behind this error, if it is a failure.
    pub fn failure(&self) -> Option<&GrammarFailure> {
        match self {
            CommandlineError::HelpRequested { .. } => None,
            CommandlineError::GrammarViolation { failure, .. }
            | CommandlineError::FallbackAlsoFailed { failure, .. } => Some(failure),
        }
    }
}
