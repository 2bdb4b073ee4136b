//! Pretty diagnostic rendering using ariadne.
//!
//! Each diagnostic is drawn against the source text of the commandline it
//! came from (its tokens joined with spaces). Falls back to structured JSON
//! when the output is piped or when the user explicitly requests it.

use std::io::{self, IsTerminal};

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use launchline_core::Commandline;
use launchline_diagnostics::{Diagnostic, Severity};

// ── Output format ───────────────────────────────────────────────────────

/// Output format for command results and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    /// Coloured, source-annotated output (ariadne).
    Pretty,
    /// Machine-readable JSON.
    Json,
}

impl Format {
    /// Use the explicit choice, or pick by whether stdout is a TTY.
    pub(crate) fn resolve_or_detect(explicit: Option<&str>) -> Self {
        match explicit {
            Some("json") => Format::Json,
            Some("pretty") => Format::Pretty,
            _ => {
                if io::stdout().is_terminal() {
                    Format::Pretty
                } else {
                    Format::Json
                }
            }
        }
    }
}

// ── Severity mapping ────────────────────────────────────────────────────

fn report_kind(severity: &Severity) -> ReportKind<'static> {
    match severity {
        Severity::Error => ReportKind::Error,
        Severity::Warn => ReportKind::Warning,
        Severity::Info => ReportKind::Advice,
        _ => ReportKind::Warning,
    }
}

fn severity_color(severity: &Severity) -> Color {
    match severity {
        Severity::Error => Color::Red,
        Severity::Warn => Color::Yellow,
        Severity::Info => Color::Blue,
        _ => Color::White,
    }
}

fn severity_label(severity: &Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warn => "warning",
        Severity::Info => "info",
        _ => "diagnostic",
    }
}

// ── Pretty rendering ────────────────────────────────────────────────────

/// Render diagnostics for a parsed batch to stderr.
///
/// A diagnostic with a span and a `commandline` context entry is drawn
/// under the source of that commandline; anything else is printed as a
/// standalone message.
pub(crate) fn render_diagnostics_pretty(commandlines: &[Commandline], diagnostics: &[Diagnostic]) {
    let config = Config::default().with_compact(false);

    for diag in diagnostics {
        let located = diag.span.zip(commandline_index(diag)).and_then(|(span, index)| {
            commandlines.get(index).map(|c| (span, index, c.to_source()))
        });

        let Some((span, index, source)) = located else {
            render_standalone(diag);
            continue;
        };

        let filename = format!("commandline[{index}]");
        let range = span.clamped(source.len());

        let mut builder = Report::build(
            report_kind(&diag.severity),
            (filename.as_str(), range.clone()),
        )
        .with_code(diag.id.as_ref())
        .with_message(&diag.message)
        .with_config(config)
        .with_label(
            Label::new((filename.as_str(), range))
                .with_message(label_message(diag))
                .with_color(severity_color(&diag.severity)),
        );

        if let Some(explanation) = diag.explain() {
            builder = builder.with_help(explanation);
        }

        builder
            .finish()
            .eprint((filename.as_str(), Source::from(source.as_str())))
            .ok();
    }
}

fn render_standalone(diag: &Diagnostic) {
    eprintln!(
        "{}[{}]: {}",
        severity_label(&diag.severity),
        diag.id,
        diag.message
    );
    if let Some(ctx) = &diag.context {
        eprintln!("  = note: {}", context_note(ctx));
    }
    if let Some(explanation) = diag.explain() {
        eprintln!("  = help: {explanation}");
    }
}

fn commandline_index(diag: &Diagnostic) -> Option<usize> {
    diag.context.as_ref()?.get("commandline")?.parse().ok()
}

/// The offending argument when known, otherwise the whole message.
fn label_message(diag: &Diagnostic) -> String {
    match diag.context.as_ref().and_then(|ctx| ctx.get("argument")) {
        Some(arg) => format!("argument {arg}"),
        None => diag.message.clone(),
    }
}

fn context_note(ctx: &std::collections::BTreeMap<String, String>) -> String {
    ctx.iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(", ")
}

// ── Summary line ────────────────────────────────────────────────────────

/// Print a coloured summary line showing error/warning/info counts.
///
/// Example: `2 errors, 1 info`
pub(crate) fn print_summary(diagnostics: &[Diagnostic]) {
    use ariadne::Fmt;

    let (mut errors, mut warnings, mut infos) = (0usize, 0usize, 0usize);
    for d in diagnostics {
        match d.severity {
            Severity::Error => errors += 1,
            Severity::Info => infos += 1,
            _ => warnings += 1,
        }
    }

    if errors + warnings + infos == 0 {
        return;
    }

    let mut parts = Vec::new();
    if errors > 0 {
        let s = if errors == 1 { "" } else { "s" };
        parts.push(format!("{}", format!("{errors} error{s}").fg(Color::Red)));
    }
    if warnings > 0 {
        let s = if warnings == 1 { "" } else { "s" };
        parts.push(format!(
            "{}",
            format!("{warnings} warning{s}").fg(Color::Yellow)
        ));
    }
    if infos > 0 {
        parts.push(format!("{}", format!("{infos} info").fg(Color::Blue)));
    }
    eprintln!("{}", parts.join(", "));
}
