//! Command registry for the dock
//!
//! Defines the static catalog of invocable actions, each with an optional
//! visibility predicate over the current context and extra keyword match
//! terms. The registry is built once at startup and is read-only
//! thereafter.

use crate::state::CommandContext;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, LazyLock};

/// Cap on the filtered command list
pub const COMMAND_CAP: usize = 10;

/// Command ids the controller special-cases to open a creation flow,
/// bypassing the registered action.
pub const CREATE_ARTIST: &str = "create:artist";
pub const CREATE_RELEASE: &str = "create:release";

/// What a command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub title: String,
    pub description: Option<String>,
    /// Path to navigate to after the command, if any
    pub destination: Option<String>,
}

/// An invocable command body
///
/// Receives the raw query text (commands like "create artist Sun Ra" carry
/// their argument inside the utterance) and the ambient context.
#[async_trait]
pub trait CommandAction: Send + Sync {
    async fn run(&self, query: &str, ctx: &CommandContext) -> Result<CommandOutcome>;
}

/// Action that resolves to a navigation target
struct NavigateAction {
    title: &'static str,
    destination: &'static str,
}

#[async_trait]
impl CommandAction for NavigateAction {
    async fn run(&self, _query: &str, _ctx: &CommandContext) -> Result<CommandOutcome> {
        Ok(CommandOutcome {
            title: self.title.to_string(),
            description: None,
            destination: Some(self.destination.to_string()),
        })
    }
}

/// Placeholder body for commands whose flow lives outside the dock
struct StubAction {
    title: &'static str,
}

#[async_trait]
impl CommandAction for StubAction {
    async fn run(&self, _query: &str, _ctx: &CommandContext) -> Result<CommandOutcome> {
        Err(anyhow!("{} is not available here yet", self.title))
    }
}

/// A statically registered invocable action
#[derive(Clone)]
pub struct DockCommand {
    /// Stable id, namespaced by verb prefix (`create:`, `navigate:`, ...)
    pub id: &'static str,
    pub title: &'static str,
    /// One-line description shown under the list
    pub hint: Option<&'static str>,
    /// Extra match terms beyond title and hint
    pub keywords: &'static [&'static str],
    /// Commands failing this check are excluded entirely, not disabled.
    /// `None` means always visible.
    pub visibility: Option<fn(&CommandContext) -> bool>,
    pub action: Arc<dyn CommandAction>,
}

impl std::fmt::Debug for DockCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DockCommand")
            .field("id", &self.id)
            .field("title", &self.title)
            .finish()
    }
}

impl DockCommand {
    fn matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query)
            || self
                .hint
                .map(|h| h.to_lowercase().contains(query))
                .unwrap_or(false)
            || self.keywords.iter().any(|k| k.to_lowercase().contains(query))
    }
}

static DOCK_COMMANDS: LazyLock<Vec<DockCommand>> = LazyLock::new(build_registry);

/// The command catalog, in registration order. Built once on first use
/// and read-only thereafter.
pub fn dock_commands() -> &'static [DockCommand] {
    &DOCK_COMMANDS
}

fn build_registry() -> Vec<DockCommand> {
    vec![
        // The controller opens the creation flow directly for these two
        // ids; their registered actions are never reached.
        DockCommand {
            id: CREATE_ARTIST,
            title: "Create artist",
            hint: Some("Add a new artist to the catalog"),
            keywords: &["new", "band", "musician"],
            visibility: None,
            action: Arc::new(StubAction {
                title: "Create artist",
            }),
        },
        DockCommand {
            id: CREATE_RELEASE,
            title: "Create release",
            hint: Some("Start a new release"),
            keywords: &["new", "album", "ep", "single"],
            visibility: None,
            action: Arc::new(StubAction {
                title: "Create release",
            }),
        },
        DockCommand {
            id: "upload:file",
            title: "Upload file",
            hint: Some("Upload a deliverable to the current release"),
            keywords: &["deliverable", "asset", "audio"],
            visibility: Some(|ctx| ctx.release_id.is_some()),
            action: Arc::new(StubAction {
                title: "Upload file",
            }),
        },
        DockCommand {
            id: "navigate:artists",
            title: "Go to artists",
            hint: Some("Open the artist list"),
            keywords: &["roster"],
            visibility: None,
            action: Arc::new(NavigateAction {
                title: "Go to artists",
                destination: "/artists",
            }),
        },
        DockCommand {
            id: "navigate:releases",
            title: "Go to releases",
            hint: Some("Open the release list"),
            keywords: &["albums", "catalog"],
            visibility: None,
            action: Arc::new(NavigateAction {
                title: "Go to releases",
                destination: "/releases",
            }),
        },
        DockCommand {
            id: "navigate:deliverables",
            title: "Go to deliverables",
            hint: Some("Open the deliverable browser"),
            keywords: &["files", "assets"],
            visibility: None,
            action: Arc::new(NavigateAction {
                title: "Go to deliverables",
                destination: "/deliverables",
            }),
        },
        DockCommand {
            id: "navigate:settings",
            title: "Open settings",
            hint: Some("Organization settings"),
            keywords: &["preferences"],
            visibility: Some(|ctx| ctx.organization_id.is_some()),
            action: Arc::new(NavigateAction {
                title: "Open settings",
                destination: "/settings",
            }),
        },
    ]
}

/// Filter commands by visibility and query, capped and in registration order
///
/// Empty query returns the full visible list (the default "available
/// actions" view). Non-empty query narrows to commands where the lowercased
/// query is a substring of the title, the hint, or any keyword. No
/// relevance scoring beyond this binary filter.
pub fn filter_commands(
    commands: &[DockCommand],
    query: &str,
    ctx: &CommandContext,
) -> Vec<DockCommand> {
    let query = query.trim().to_lowercase();
    commands
        .iter()
        .filter(|cmd| cmd.visibility.map(|v| v(ctx)).unwrap_or(true))
        .filter(|cmd| query.is_empty() || cmd.matches(&query))
        .take(COMMAND_CAP)
        .cloned()
        .collect()
}
