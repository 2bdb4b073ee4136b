use clap::Args;

use crate::action::TerminalLaunchSpec;

/// Options that describe a new terminal surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct TerminalArgs {
    /// Open with the given profile. Accepts either the name or GUID of a profile
    #[arg(short, long, value_name = "PROFILE")]
    pub profile: Option<String>,

    /// Open in the given directory instead of the profile's set startingDirectory
    #[arg(short = 'd', long = "startingDirectory", value_name = "DIR")]
    pub starting_directory: Option<String>,

    /// Commandline to run in the given profile
    #[arg(trailing_var_arg = true, value_name = "CMDLINE")]
    pub cmdline: Vec<String>,
}

impl TerminalArgs {
    /// Build the launch spec. Empty strings count as unset.
    pub fn to_launch_spec(&self) -> TerminalLaunchSpec {
        TerminalLaunchSpec {
            profile: non_empty(self.profile.as_deref()),
            starting_directory: non_empty(self.starting_directory.as_deref()),
            commandline: (!self.cmdline.is_empty()).then(|| join_commandline(&self.cmdline)),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Re-join commandline tokens into one string.
///
/// Tokens containing a space are wrapped in double quotes. Nothing else is
/// escaped, so a token holding a quote character does not round-trip through
/// a shell.
pub fn join_commandline<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut buffer = String::new();
    for (i, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        if i > 0 {
            buffer.push(' ');
        }
        if token.contains(' ') {
            buffer.push('"');
            buffer.push_str(token);
            buffer.push('"');
        } else {
            buffer.push_str(token);
        }
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_quotes_tokens_with_spaces() {
        assert_eq!(join_commandline(&["a", "b c", "d"]), "a \"b c\" d");
    }

    #[test]
    fn join_single_and_empty() {
        assert_eq!(join_commandline(&["cmd.exe"]), "cmd.exe");
        assert_eq!(join_commandline::<&str>(&[]), "");
    }

    #[test]
    fn empty_strings_are_unset() {
        let args = TerminalArgs {
            profile: Some(String::new()),
            starting_directory: Some("C:\\src".into()),
            cmdline: vec![],
        };
        let spec = args.to_launch_spec();
        assert_eq!(spec.profile, None);
        assert_eq!(spec.starting_directory.as_deref(), Some("C:\\src"));
        assert_eq!(spec.commandline, None);
    }
}
