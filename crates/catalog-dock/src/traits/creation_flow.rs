//! Trait for opening an entity creation flow.

use strum::Display;

/// Which entity a creation flow is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum EntityKind {
    Artist,
    Release,
    Deliverable,
}

/// Opens a creation flow (modal in the original UI).
///
/// Invoked directly by the dock controller for the `create:artist` and
/// `create:release` command ids, bypassing those commands' registered
/// actions.
pub trait CreationFlow: Send + Sync {
    fn open_creation_flow(&self, kind: EntityKind);
}
