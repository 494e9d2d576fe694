//! Ambient command context
//!
//! Passed into command visibility checks and command execution. Not
//! persisted; reconstructed from the current route whenever navigation
//! happens.

/// Ambient state commands see
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext {
    /// Current route path (e.g., `/releases/r1`)
    pub route: String,
    pub artist_id: Option<String>,
    pub release_id: Option<String>,
    pub organization_id: Option<String>,
}

impl Default for CommandContext {
    fn default() -> Self {
        Self {
            route: "/artists".to_string(),
            artist_id: None,
            release_id: None,
            organization_id: None,
        }
    }
}

impl CommandContext {
    /// Rebuild the context from a route path, keeping the organization.
    ///
    /// Entity ids are derived from the path: `/artists/{id}` sets
    /// `artist_id`, `/releases/{id}` sets `release_id`.
    pub fn from_route(route: &str, organization_id: Option<String>) -> Self {
        let mut segments = route.trim_matches('/').split('/');
        let (head, id) = (segments.next(), segments.next());

        let mut ctx = Self {
            route: route.to_string(),
            artist_id: None,
            release_id: None,
            organization_id,
        };

        match (head, id) {
            (Some("artists"), Some(id)) if !id.is_empty() => {
                ctx.artist_id = Some(id.to_string());
            }
            (Some("releases"), Some(id)) if !id.is_empty() => {
                ctx.release_id = Some(id.to_string());
            }
            _ => {}
        }

        ctx
    }
}
