//! Default keymap
//!
//! The bindings every session starts with. Keybindings resolve to
//! `CommandId`s; the keyboard middleware decides, per active view,
//! whether a matched command applies.

use crate::command_id::CommandId::*;
use crate::keybindings::KeyBinding;

pub use crate::keybindings::Keymap;

/// Build the default keymap
pub fn default_keymap() -> Keymap {
    Keymap::new(vec![
        // Dock activation. `/` is gated in the keyboard middleware:
        // it only fires while the active view does not capture text.
        KeyBinding::new("ctrl+k", "Ctrl+K", DockOpenCommands),
        KeyBinding::new("cmd+k", "Cmd+K", DockOpenCommands),
        KeyBinding::new("/", "/", DockOpenSearch),

        // Inside the dock
        KeyBinding::new("tab", "Tab", DockSwitchMode),
        KeyBinding::new("down", "↓", NavigateNext),
        KeyBinding::new("up", "↑", NavigatePrevious),

        // Global
        KeyBinding::new("esc", "Esc", GlobalClose),
        KeyBinding::new("ctrl+c", "Ctrl+C", GlobalQuit),
    ])
}
