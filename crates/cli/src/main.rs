//! `launchline`: split and parse terminal startup arguments from the command line.

mod render;

use std::fs;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use launchline_core::{
    ParserConfig, build_commands_with_config, load_config_from_str, parse_args,
};
use launchline_diagnostics as diag;

use crate::render::{Format, print_summary, render_diagnostics_pretty};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "launchline",
    version,
    about = "Split and parse terminal startup arguments into tab and pane actions"
)]
struct Cli {
    /// Output mode: "pretty" for coloured terminal output, "json" for
    /// machine-readable JSON. Defaults to "pretty" when stdout is a TTY,
    /// "json" otherwise.
    #[arg(long, global = true, value_parser = ["pretty", "json"])]
    output: Option<String>,

    /// Path to a JSON parser configuration (delimiter, escape, program name).
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<String>,

    /// Stop parsing at the first commandline that fails.
    #[arg(long, global = true)]
    stop_on_error: bool,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Parse startup arguments into actions. The first argument is the
    /// program name, e.g. `launchline parse -- wt.exe new-tab ; split-pane -V`.
    Parse {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
        args: Vec<String>,
    },

    /// Show how startup arguments are split into commandlines.
    Split {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
        args: Vec<String>,
    },

    /// Explain a diagnostic ID (e.g. LNL1001).
    Explain { id: String },
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = Format::resolve_or_detect(cli.output.as_deref());

    match cli.cmd {
        Cmd::Parse { args } => {
            let config = resolve_config(cli.config.as_deref(), cli.stop_on_error)?;
            cmd_parse(&args, &config, format)?;
        }
        Cmd::Split { args } => {
            let config = resolve_config(cli.config.as_deref(), cli.stop_on_error)?;
            cmd_split(&args, &config, format)?;
        }
        Cmd::Explain { id } => cmd_explain(&id, format)?,
    }

    Ok(())
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_parse(args: &[String], config: &ParserConfig, format: Format) -> Result<()> {
    let outcome = parse_args(args, config);
    tracing::debug!(
        commandlines = outcome.commandlines.len(),
        actions = outcome.actions.len(),
        status = outcome.status,
        "batch parsed"
    );

    match format {
        Format::Json => {
            let out = serde_json::json!({
                "ok": outcome.ok(),
                "commandlines": outcome.commandlines,
                "actions": outcome.actions,
                "diagnostics": outcome.diagnostics,
                "exitMessage": outcome.exit_message,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            for action in &outcome.actions {
                println!("{action}");
            }
            if !outcome.exit_message.is_empty() {
                eprint!("{}", outcome.exit_message);
                if !outcome.exit_message.ends_with('\n') {
                    eprintln!();
                }
            }
            render_diagnostics_pretty(&outcome.commandlines, &outcome.diagnostics);
            print_summary(&outcome.diagnostics);
        }
    }

    if !outcome.ok() {
        process::exit(1);
    }
    Ok(())
}

fn cmd_split(args: &[String], config: &ParserConfig, format: Format) -> Result<()> {
    let commandlines = build_commands_with_config(args, &config.split);

    match format {
        Format::Json => {
            let out = serde_json::json!({ "commandlines": commandlines });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            for (index, command) in commandlines.iter().enumerate() {
                let tokens: Vec<String> = command.argv().iter().map(|t| format!("{t:?}")).collect();
                println!("[{index}] {}", tokens.join(" "));
            }
        }
    }
    Ok(())
}

fn cmd_explain(id: &str, format: Format) -> Result<()> {
    match format {
        Format::Json => {
            let text = diag::explain(id);
            let out = serde_json::json!({
                "id": id,
                "explanation": text,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            if let Some(text) = diag::explain(id) {
                use ariadne::Fmt;
                println!("{}: {}", id.fg(ariadne::Color::Cyan), text);
            } else {
                println!("{id}: (no explanation available)");
            }
        }
    }
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Load the parser configuration from `path`, or use defaults.
/// `--stop-on-error` on the command line wins over the file.
fn resolve_config(path: Option<&str>, stop_on_error: bool) -> Result<ParserConfig> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{path}'"))?;
            load_config_from_str(&text)
                .with_context(|| format!("invalid config file '{path}'"))?
        }
        None => ParserConfig::default(),
    };
    if stop_on_error {
        config.stop_on_error = true;
    }
    Ok(config)
}
