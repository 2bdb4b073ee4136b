//! Diagnostics for launchline.
//!
//! A [`Diagnostic`] describes what happened to one commandline of a startup
//! invocation: it was rejected, it only asked for help, it did nothing, or the
//! action queue had to be adjusted. Codes live in [`codes`] and each one has
//! a long-form explanation available through [`explain`].

#![warn(missing_docs)]

/// Diagnostic ID constants.
pub mod codes;

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// How serious a diagnostic is. Only errors make a batch fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Severity {
    /// The commandline was rejected and queued nothing.
    Error,
    /// The commandline was accepted but probably does not do what was meant.
    Warn,
    /// Informational note.
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
        })
    }
}

/// Byte range of one token inside a commandline's space-joined source text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Span {
    /// Offset of the token's first byte.
    pub start: usize,
    /// Offset one past the token's last byte.
    pub end: usize,
}

impl Span {
    /// Span over `[start, end)`; an inverted pair collapses to `start`.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// The span as a range, clipped to a source of `len` bytes.
    pub fn clamped(self, len: usize) -> Range<usize> {
        let start = self.start.min(len);
        start..self.end.min(len).max(start)
    }
}

/// One finding about a parsed batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Code from [`codes`], e.g. `"LNL1001"`.
    pub id: Cow<'static, str>,
    /// Severity level.
    pub severity: Severity,
    /// One-line message.
    pub message: String,
    /// Offending token, when the finding is about one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    /// Where the finding came from: `commandline` index, `subcommand`,
    /// offending `argument`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<BTreeMap<String, String>>,
}

impl Diagnostic {
    /// A diagnostic without span or context.
    pub fn new(
        id: impl Into<Cow<'static, str>>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            severity,
            message: message.into(),
            span: None,
            context: None,
        }
    }

    /// An `Error` diagnostic.
    pub fn error(id: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self::new(id, Severity::Error, message)
    }

    /// A `Warn` diagnostic.
    pub fn warn(id: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self::new(id, Severity::Warn, message)
    }

    /// An `Info` diagnostic.
    pub fn info(id: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self::new(id, Severity::Info, message)
    }

    /// Point the diagnostic at a token, if one could be located.
    pub fn with_span(mut self, span: Option<Span>) -> Self {
        self.span = span;
        self
    }

    /// Attach context entries.
    pub fn with_context(mut self, ctx: BTreeMap<String, String>) -> Self {
        self.context = Some(ctx);
        self
    }

    /// Whether this diagnostic has `Error` severity.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Long-form explanation of this diagnostic's code.
    pub fn explain(&self) -> Option<&'static str> {
        explain(&self.id)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.id, self.message)
    }
}

/// Long-form explanation of a diagnostic code, if it is known.
pub fn explain(id: &str) -> Option<&'static str> {
    match id {
        codes::GRAMMAR_VIOLATION => Some(
            "The commandline named a known subcommand (new-tab, split-pane or focus-tab) \
             but its arguments were rejected: an unknown option, a value of the wrong type, \
             a missing option value, or two mutually exclusive flags such as -H and -V.",
        ),
        codes::FALLBACK_FAILED => Some(
            "The commandline did not start with a known subcommand, so it was parsed as an \
             implicit new-tab request, and that parse failed too. Put the subcommand name \
             first, or escape a literal ';' as '\\;'.",
        ),
        codes::HELP_REQUESTED => Some(
            "Help text was requested with -h, --help, -? or /? and is carried as the exit \
             message instead of an action.",
        ),
        codes::NO_ACTION => Some(
            "The commandline parsed cleanly but produced no startup action, e.g. focus-tab \
             with none of --target, --next or --previous.",
        ),
        codes::IMPLICIT_NEW_TAB => Some(
            "The first startup action must open a tab, so a default new-tab action was \
             inserted at the front of the queue.",
        ),
        _ => None,
    }
}
