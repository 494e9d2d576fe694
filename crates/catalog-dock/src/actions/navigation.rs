//! Navigation actions - shared across screens
//!
//! Generic list navigation that views translate into their
//! screen-specific actions.

/// Generic navigation actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Navigate to next item (down arrow)
    Next,
    /// Navigate to previous item (up arrow)
    Previous,
}
