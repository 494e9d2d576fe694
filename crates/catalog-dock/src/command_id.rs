//! Command identifiers
//!
//! Stable IDs that keybindings resolve to. The keyboard middleware maps
//! a matched `CommandId` to the action it dispatches.

use serde::{Deserialize, Serialize};

use crate::actions::{Action, DockAction, GlobalAction, NavigationAction};
use crate::state::DockMode;

/// Identifier for a bindable command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandId {
    /// Open the dock in search mode
    DockOpenSearch,
    /// Open the dock in commands mode
    DockOpenCommands,
    /// Toggle between search and commands mode
    DockSwitchMode,

    /// Move selection down
    NavigateNext,
    /// Move selection up
    NavigatePrevious,

    /// Close the top-most view
    GlobalClose,
    /// Quit the application
    GlobalQuit,
}

impl CommandId {
    /// Translate this command into the action it dispatches
    pub fn to_action(self) -> Action {
        match self {
            Self::DockOpenSearch => Action::Dock(DockAction::Open(DockMode::Search)),
            Self::DockOpenCommands => Action::Dock(DockAction::Open(DockMode::Commands)),
            Self::DockSwitchMode => Action::Dock(DockAction::SwitchMode),
            Self::NavigateNext => Action::Navigate(NavigationAction::Next),
            Self::NavigatePrevious => Action::Navigate(NavigationAction::Previous),
            Self::GlobalClose => Action::Global(GlobalAction::Close),
            Self::GlobalQuit => Action::Global(GlobalAction::Quit),
        }
    }
}
