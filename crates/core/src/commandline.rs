//! Commandlines and the accumulator that builds them from a raw argument stream.

use serde::{Deserialize, Serialize};

use crate::config::SplitConfig;
use crate::split::{PieceKind, split_arg_with_config};

/// One logical invocation: an argv-like list of tokens.
///
/// Every commandline after the first in a batch starts with the synthetic
/// program name; the first one is filled from the live argument stream,
/// whose first token is the real program name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Commandline {
    args: Vec<String>,
}

impl Commandline {
    /// An empty commandline.
    pub fn new() -> Self {
        Self::default()
    }

    /// A commandline seeded with a program-name token.
    pub fn with_program_name(program_name: impl Into<String>) -> Self {
        Self {
            args: vec![program_name.into()],
        }
    }

    /// Append a token.
    pub fn add_arg(&mut self, arg: impl Into<String>) {
        self.args.push(arg.into());
    }

    /// Number of tokens, including the program name.
    pub fn argc(&self) -> usize {
        self.args.len()
    }

    /// All tokens, including the program name.
    pub fn argv(&self) -> &[String] {
        &self.args
    }

    /// Whether the commandline holds no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Tokens joined with single spaces, used as diagnostic source text.
    pub fn to_source(&self) -> String {
        self.args.join(" ")
    }

    /// Byte span of token `index` within [`Commandline::to_source`].
    pub fn token_span(&self, index: usize) -> Option<(usize, usize)> {
        let token = self.args.get(index)?;
        let start: usize = self.args[..index].iter().map(|a| a.len() + 1).sum();
        Some((start, start + token.len()))
    }
}

impl<S: Into<String>> FromIterator<S> for Commandline {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            args: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Accumulates commandlines while raw arguments are streamed in.
///
/// Always holds at least one (possibly empty) commandline; the last one is
/// the one currently being appended to.
#[derive(Debug, Clone)]
pub struct CommandlineAccumulator {
    config: SplitConfig,
    commands: Vec<Commandline>,
}

impl CommandlineAccumulator {
    /// Start a batch with one empty commandline.
    pub fn new(config: SplitConfig) -> Self {
        Self {
            config,
            commands: vec![Commandline::new()],
        }
    }

    /// Split one raw argument and append its pieces to the current
    /// commandline, starting a new commandline at every split point.
    pub fn push_arg(&mut self, arg: &str) {
        for piece in split_arg_with_config(arg, &self.config) {
            match piece.kind {
                PieceKind::Text => {
                    if let Some(current) = self.commands.last_mut() {
                        current.add_arg(piece.text.into_owned());
                    }
                }
                PieceKind::Delimiter => self
                    .commands
                    .push(Commandline::with_program_name(self.config.program_name.as_str())),
            }
        }
    }

    /// The commandlines built so far.
    pub fn commands(&self) -> &[Commandline] {
        &self.commands
    }

    /// Finish the batch and hand over the commandlines.
    pub fn finish(self) -> Vec<Commandline> {
        self.commands
    }
}

/// Build commandlines from a raw argument stream with the default splitting rules.
pub fn build_commands<I, S>(args: I) -> Vec<Commandline>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    build_commands_with_config(args, &SplitConfig::default())
}

/// Build commandlines from a raw argument stream.
///
/// Zero arguments yield a single empty commandline.
pub fn build_commands_with_config<I, S>(args: I, config: &SplitConfig) -> Vec<Commandline>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut acc = CommandlineAccumulator::new(config.clone());
    for arg in args {
        acc.push_arg(arg.as_ref());
    }
    acc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_span_indexes_joined_source() {
        let cmd: Commandline = ["wt.exe", "split-pane", "-H"].into_iter().collect();
        assert_eq!(cmd.to_source(), "wt.exe split-pane -H");
        assert_eq!(cmd.token_span(0), Some((0, 6)));
        assert_eq!(cmd.token_span(2), Some((18, 20)));
        assert_eq!(cmd.token_span(3), None);
    }

    #[test]
    fn accumulator_starts_with_one_empty_commandline() {
        let acc = CommandlineAccumulator::new(SplitConfig::default());
        assert_eq!(acc.commands().len(), 1);
        assert!(acc.commands()[0].is_empty());
    }

    #[test]
    fn accumulator_seeds_configured_program_name() {
        let mut config = SplitConfig::default();
        config.program_name = "term".into();
        let mut acc = CommandlineAccumulator::new(config);
        acc.push_arg("a;b");
        let cmds = acc.finish();
        assert_eq!(cmds[0].argv(), ["a"]);
        assert_eq!(cmds[1].argv(), ["term", "b"]);
    }

    #[test]
    fn empty_argument_is_kept_as_token() {
        let cmds = build_commands(["wt.exe", "-p", "", "cmd.exe"]);
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].argv(), ["wt.exe", "-p", "", "cmd.exe"]);
    }
}
