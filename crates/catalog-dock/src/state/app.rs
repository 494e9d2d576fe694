//! Application State

use crate::keymap::{default_keymap, Keymap};
use crate::views::{LibraryView, View};

use super::{CommandContext, DockState, StatusBarState};

/// Application state
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the base, top views are floating
    /// overlays. Rendered bottom-up, so the last view renders on top.
    pub view_stack: Vec<Box<dyn View>>,
    pub dock: DockState,
    /// Ambient context for command visibility and execution, rebuilt from
    /// the current route on navigation
    pub context: CommandContext,
    pub status_bar: StatusBarState,
    pub keymap: Keymap,
}

impl AppState {
    /// Get the top-most (active) view from the stack
    pub fn active_view(&self) -> Option<&dyn View> {
        self.view_stack.last().map(|v| v.as_ref())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("running", &self.running)
            .field("view_stack", &format!("{} views", self.view_stack.len()))
            .field("dock", &self.dock)
            .field("context", &self.context)
            .field("status_bar", &self.status_bar)
            .finish()
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            running: self.running,
            view_stack: self.view_stack.clone(),
            dock: self.dock.clone(),
            context: self.context.clone(),
            status_bar: self.status_bar.clone(),
            keymap: self.keymap.clone(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(LibraryView::new())],
            dock: DockState::default(),
            context: CommandContext::default(),
            status_bar: StatusBarState::default(),
            keymap: default_keymap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_id::CommandId;
    use crate::views::ViewId;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn default_state_starts_on_the_library_view() {
        let state = AppState::default();
        assert_eq!(state.active_view().map(|v| v.view_id()), Some(ViewId::Library));
    }

    #[test]
    fn default_state_keymap_resolves_dock_activation() {
        let state = AppState::default();
        let key = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL);
        assert!(state
            .keymap
            .match_key(&key)
            .contains(&CommandId::DockOpenCommands));
    }
}
