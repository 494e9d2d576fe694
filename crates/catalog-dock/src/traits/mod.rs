//! Collaborator interfaces the dock calls out to.
//!
//! The dock treats navigation, user notification, and the entity creation
//! flow as black boxes behind these narrow traits; the binary wires real
//! implementations, tests wire recording fakes.

mod creation_flow;
mod navigator;
mod notifier;

pub use creation_flow::{CreationFlow, EntityKind};
pub use navigator::Navigator;
pub use notifier::Notifier;
