//! Shared test helpers for `launchline_core` integration tests.

#![allow(unreachable_pub)]

use launchline_core::{Action, Commandline, SplitOrientation, TerminalLaunchSpec};

/// Build a commandline from string literals.
#[allow(dead_code)]
pub fn cmd(args: &[&str]) -> Commandline {
    args.iter().copied().collect()
}

/// Token lists of every commandline, for compact assertions.
#[allow(dead_code)]
pub fn argvs(commands: &[Commandline]) -> Vec<Vec<String>> {
    commands.iter().map(|c| c.argv().to_vec()).collect()
}

/// A `NewTab` action with the given launch fields.
#[allow(dead_code)]
pub fn new_tab(profile: Option<&str>, dir: Option<&str>, commandline: Option<&str>) -> Action {
    Action::NewTab(spec(profile, dir, commandline))
}

/// A `SplitPane` action with an empty launch spec.
#[allow(dead_code)]
pub fn split_pane(orientation: SplitOrientation) -> Action {
    Action::SplitPane {
        spec: TerminalLaunchSpec::default(),
        orientation,
    }
}

/// A launch spec with the given fields.
#[allow(dead_code)]
pub fn spec(
    profile: Option<&str>,
    dir: Option<&str>,
    commandline: Option<&str>,
) -> TerminalLaunchSpec {
    TerminalLaunchSpec {
        profile: profile.map(str::to_string),
        starting_directory: dir.map(str::to_string),
        commandline: commandline.map(str::to_string),
    }
}
