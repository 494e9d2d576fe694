//! Session Middleware
//!
//! Persists the dock mode across sessions. Reopening the dock restores
//! the mode it last had, so the session file is updated on every mode
//! change. Persistence failures are logged and otherwise ignored; mode
//! memory is not worth interrupting the user over.

use dock_config::DockSession;

use crate::actions::{Action, DockAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct SessionMiddleware {
    session: DockSession,
}

impl SessionMiddleware {
    pub fn new(session: DockSession) -> Self {
        Self { session }
    }

    fn persist_mode(&mut self, mode: &str) {
        self.session.set_dock_mode(mode);
        if let Err(e) = self.session.save() {
            log::warn!("Failed to persist dock mode: {:#}", e);
        } else {
            log::debug!("Persisted dock mode: {}", mode);
        }
    }
}

impl Middleware for SessionMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Dock(DockAction::Open(mode)) => {
                self.persist_mode(&mode.to_string());
            }
            Action::Dock(DockAction::SwitchMode) if state.dock.is_open => {
                // Middleware sees the action before the reducer applies
                // it; the new mode is the toggle of the snapshot's
                self.persist_mode(&state.dock.mode.toggled().to_string());
            }
            _ => {}
        }

        true
    }
}
