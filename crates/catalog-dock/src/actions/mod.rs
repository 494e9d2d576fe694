//! Actions module
//!
//! All actions in the application, using a tagged action architecture:
//! - Generic actions (Navigation, TextInput) that views translate to
//!   screen-specific actions
//! - Global actions that affect the entire application
//! - Dock actions, already targeted at the dock reducer

pub mod dock;
pub mod global;
pub mod navigation;
pub mod text_input;

pub use dock::DockAction;
pub use global::GlobalAction;
pub use navigation::NavigationAction;
pub use text_input::TextInputAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Generic navigation action - translated by the active view
    Navigate(NavigationAction),
    /// Generic text input action - translated by the active view
    TextInput(TextInputAction),
    /// Global application actions
    Global(GlobalAction),
    /// Dock actions (already targeted)
    Dock(DockAction),
}
