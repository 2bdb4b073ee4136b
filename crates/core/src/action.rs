//! Startup actions produced by parsing commandlines.

use serde::{Deserialize, Serialize};

/// How to open a new terminal surface.
///
/// Unset fields mean "use the application's default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalLaunchSpec {
    /// Profile name or GUID, as typed by the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// Starting directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_directory: Option<String>,
    /// Commandline to run, re-joined into a single shell-style string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commandline: Option<String>,
}

impl TerminalLaunchSpec {
    /// Whether every field is unset.
    pub fn is_empty(&self) -> bool {
        self.profile.is_none() && self.starting_directory.is_none() && self.commandline.is_none()
    }
}

/// Orientation of a new pane relative to the focused one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitOrientation {
    /// Split with a horizontal divider (new pane below).
    Horizontal,
    /// Split with a vertical divider (new pane beside).
    Vertical,
}

/// One startup intent for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
#[non_exhaustive]
pub enum Action {
    /// Open a new tab.
    NewTab(TerminalLaunchSpec),
    /// Split the focused pane.
    SplitPane {
        /// What to run in the new pane.
        #[serde(flatten)]
        spec: TerminalLaunchSpec,
        /// Which way to split.
        orientation: SplitOrientation,
    },
    /// Focus the tab at a zero-based index.
    SwitchToTab {
        /// Zero-based tab index.
        index: u32,
    },
    /// Focus the next tab.
    NextTab,
    /// Focus the previous tab.
    PrevTab,
}

impl Action {
    /// A `NewTab` action with every launch field unset.
    pub fn default_new_tab() -> Self {
        Action::NewTab(TerminalLaunchSpec::default())
    }

    /// Whether this action opens a new tab.
    pub fn is_new_tab(&self) -> bool {
        matches!(self, Action::NewTab(_))
    }

    /// Stable kebab-case name of the action kind.
    pub fn name(&self) -> &'static str {
        match self {
            Action::NewTab(_) => "new-tab",
            Action::SplitPane { .. } => "split-pane",
            Action::SwitchToTab { .. } => "switch-to-tab",
            Action::NextTab => "next-tab",
            Action::PrevTab => "prev-tab",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())?;
        match self {
            Action::NewTab(spec) => write_spec(f, spec),
            Action::SplitPane { spec, orientation } => {
                let o = match orientation {
                    SplitOrientation::Horizontal => "horizontal",
                    SplitOrientation::Vertical => "vertical",
                };
                write!(f, " {o}")?;
                write_spec(f, spec)
            }
            Action::SwitchToTab { index } => write!(f, " {index}"),
            Action::NextTab | Action::PrevTab => Ok(()),
        }
    }
}

fn write_spec(f: &mut std::fmt::Formatter<'_>, spec: &TerminalLaunchSpec) -> std::fmt::Result {
    if let Some(p) = &spec.profile {
        write!(f, " profile={p:?}")?;
    }
    if let Some(d) = &spec.starting_directory {
        write!(f, " startingDirectory={d:?}")?;
    }
    if let Some(c) = &spec.commandline {
        write!(f, " commandline={c:?}")?;
    }
    Ok(())
}
