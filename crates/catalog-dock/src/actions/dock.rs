//! Dock actions
//!
//! Actions specific to the command dock overlay.

use crate::search::SearchResult;
use crate::state::DockMode;

/// Actions for the command dock
#[derive(Debug, Clone)]
pub enum DockAction {
    /// Open the dock in the given mode (Ctrl+K opens commands, `/` opens
    /// search)
    Open(DockMode),
    /// Close the dock, clearing query and results
    Close,
    /// Switch to the other mode, clearing query and results
    SwitchMode,

    /// Character typed into the query field
    Char(char),
    /// Backspace pressed in the query field
    Backspace,
    /// Clear the entire query
    Clear,

    /// Move selection to the next row
    NavigateNext,
    /// Move selection to the previous row
    NavigatePrev,
    /// Execute the selected row (navigate or run a command)
    Execute,

    /// A debounced search was scheduled; marks the dock pending and
    /// records the winning sequence number
    SearchStarted { seq: u64 },
    /// A search settled; applied only if `seq` is still current
    SearchResolved {
        seq: u64,
        results: Vec<SearchResult>,
    },
}
