//! Diagnostic ID constants.
//!
//! Use these instead of string literals to get compile-time typo detection
//! and IDE autocomplete. Every constant has an entry in [`crate::explain`].

/// A recognized subcommand rejected its arguments.
pub const GRAMMAR_VIOLATION: &str = "LNL1001";

/// No subcommand was recognized and the implicit `new-tab` parse failed.
pub const FALLBACK_FAILED: &str = "LNL1002";

/// Help text was requested for a commandline.
pub const HELP_REQUESTED: &str = "LNL2001";

/// A commandline parsed cleanly but produced no startup action.
pub const NO_ACTION: &str = "LNL2002";

/// A default `new-tab` action was inserted at the front of the queue.
pub const IMPLICIT_NEW_TAB: &str = "LNL2003";

/// Every diagnostic code known to this crate, in numeric order.
pub const ALL: &[&str] = &[
    GRAMMAR_VIOLATION,
    FALLBACK_FAILED,
    HELP_REQUESTED,
    NO_ACTION,
    IMPLICIT_NEW_TAB,
];
