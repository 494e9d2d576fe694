//! Trait for following a result's destination path.

/// Performs route changes on behalf of the dock.
///
/// Fire-and-forget: the dock does not await confirmation that the route
/// actually changed.
pub trait Navigator: Send + Sync {
    /// Navigate to a destination path (e.g., `/artists/a1`)
    fn navigate_to(&self, destination: &str);
}
