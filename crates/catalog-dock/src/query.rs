//! Query routing
//!
//! Classifies raw dock input as a command-like utterance or a search, and
//! detects scope prefixes (`a:`, `r:`, `f:`/`d:`) for scoped searches.
//! Pure function, re-evaluated on every keystroke.

use strum::Display;

/// Entity scope a search can be restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SearchScope {
    Artist,
    Release,
    Deliverable,
}

/// Imperative verb prefixes that route input to the command filter
const COMMAND_PREFIXES: [&str; 6] = ["create ", "new ", "add ", "go to ", "open ", "upload "];

/// How a raw input string should be handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryRoute {
    /// Empty or whitespace-only input - show the default/suggestion state
    Empty,
    /// Command-like utterance - run the synchronous command filter
    Command,
    /// Search utterance, optionally restricted to one entity scope
    Search {
        scope: Option<SearchScope>,
        /// Residual term with any scope prefix stripped and trimmed
        term: String,
    },
}

impl QueryRoute {
    /// Classify raw input text
    pub fn classify(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }

        let lower = trimmed.to_lowercase();
        if COMMAND_PREFIXES.iter().any(|p| lower.starts_with(p)) {
            return Self::Command;
        }

        // Scope prefixes are two ASCII characters, so byte offsets into the
        // original (trimmed) text line up with the lowercased copy.
        let scope = match lower.get(..2) {
            Some("a:") => Some(SearchScope::Artist),
            Some("r:") => Some(SearchScope::Release),
            Some("f:") | Some("d:") => Some(SearchScope::Deliverable),
            _ => None,
        };

        let term = if scope.is_some() {
            trimmed[2..].trim().to_string()
        } else {
            trimmed.to_string()
        };

        Self::Search { scope, term }
    }
}
