use crate::actions::{Action, NavigationAction, TextInputAction};
use crate::capabilities::ViewCapabilities;
use crate::state::AppState;
use ratatui::{layout::Rect, Frame};

pub mod dock_view;
pub mod library_view;

pub use dock_view::DockView;
pub use library_view::LibraryView;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Library,
    Dock,
}

/// View trait - the interface all views implement
///
/// Views are held as trait objects (Box<dyn View>) on the state's view
/// stack, so this trait must stay object-safe: no generic methods, all
/// methods take &self, and Send + Sync because state snapshots are
/// shared with the background worker.
pub trait View: std::fmt::Debug + Send + Sync {
    /// Get the unique identifier for this view type
    fn view_id(&self) -> ViewId;

    /// Render this view
    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Get the capabilities of this view (for keyboard handling)
    fn capabilities(&self, state: &AppState) -> ViewCapabilities;

    /// Clone this view into a Box; Clone itself requires Sized
    fn clone_box(&self) -> Box<dyn View>;

    /// Translate a generic navigation action to this view's specific
    /// action. `None` means the view doesn't handle navigation.
    fn translate_navigation(&self, _nav: NavigationAction) -> Option<Action> {
        None
    }

    /// Translate a generic text input action to this view's specific
    /// action. `None` means the view doesn't handle text input.
    fn translate_text_input(&self, _input: TextInputAction) -> Option<Action> {
        None
    }

    /// Gate for keymap-resolved actions: the keyboard middleware only
    /// dispatches a matched command if the active view accepts it. This
    /// is what keeps activation shortcuts inert while the dock is open.
    fn accepts_action(&self, _action: &Action) -> bool {
        true
    }
}

impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Render the entire application UI
///
/// Views render bottom-up, so floating overlays (the dock) paint last
/// and land on top.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    for view in &state.view_stack {
        view.render(state, area, f);
    }
}
