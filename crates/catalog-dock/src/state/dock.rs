//! Dock State

use crate::commands::{dock_commands, filter_commands};
use crate::query::QueryRoute;
use crate::search::SearchResult;
use crate::state::CommandContext;
use strum::Display;

/// Which engine the dock input feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum DockMode {
    Search,
    Commands,
}

impl DockMode {
    /// Parse a persisted mode label
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "search" => Some(Self::Search),
            "commands" => Some(Self::Commands),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Search => Self::Commands,
            Self::Commands => Self::Search,
        }
    }
}

/// Dock session state
///
/// Owned exclusively by the dock reducer; nothing outside the reducer
/// writes `results` or `selected_index`.
#[derive(Debug, Clone)]
pub struct DockState {
    pub is_open: bool,
    pub mode: DockMode,
    /// Current raw input text
    pub query: String,
    /// Entity search results (search mode only; command rows are derived
    /// synchronously from the registry)
    pub results: Vec<SearchResult>,
    /// Clamped to the visible list bounds, reset to 0 on list replacement
    pub selected_index: usize,
    /// True while a debounced search is in flight
    pub pending: bool,
    /// Sequence number of the most recently started search; responses
    /// carrying an older number are stale and dropped
    pub search_seq: u64,
}

impl Default for DockState {
    fn default() -> Self {
        Self {
            is_open: false,
            mode: DockMode::Search,
            query: String::new(),
            results: Vec::new(),
            selected_index: 0,
            pending: false,
            search_seq: 0,
        }
    }
}

impl DockState {
    /// Whether the input currently feeds the command filter.
    ///
    /// True in commands mode, and also in search mode when the utterance
    /// classifies as command-like ("create ...", "go to ...").
    pub fn commands_engine_active(&self) -> bool {
        match self.mode {
            DockMode::Commands => true,
            DockMode::Search => matches!(QueryRoute::classify(&self.query), QueryRoute::Command),
        }
    }

    /// Length of the currently visible result list
    pub fn visible_len(&self, ctx: &CommandContext) -> usize {
        if self.commands_engine_active() {
            filter_commands(dock_commands(), &self.query, ctx).len()
        } else {
            self.results.len()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_labels_round_trip() {
        assert_eq!(DockMode::from_label("search"), Some(DockMode::Search));
        assert_eq!(DockMode::from_label("Commands"), Some(DockMode::Commands));
        assert_eq!(DockMode::from_label("nope"), None);
        assert_eq!(DockMode::Search.to_string(), "search");
        assert_eq!(
            DockMode::from_label(&DockMode::Commands.to_string()),
            Some(DockMode::Commands)
        );
    }

    #[test]
    fn command_utterance_activates_command_engine_in_search_mode() {
        let dock = DockState {
            query: "create artist".into(),
            ..DockState::default()
        };
        assert!(dock.commands_engine_active());

        let dock = DockState {
            query: "miles".into(),
            ..DockState::default()
        };
        assert!(!dock.commands_engine_active());
    }
}
