//! Dock reducer
//!
//! Pure state transitions for the command dock. Side effects (debounce,
//! store lookups, command execution, mode persistence) live in middleware;
//! this reducer only moves the state machine.

use crate::actions::DockAction;
use crate::query::QueryRoute;
use crate::state::{CommandContext, DockState};

/// Reducer for dock state.
///
/// Takes the ambient command context so selection clamping can size the
/// synchronously-filtered command list in commands mode.
pub fn reduce_dock(
    mut dock: DockState,
    action: &DockAction,
    ctx: &CommandContext,
) -> DockState {
    match action {
        DockAction::Open(mode) => {
            dock.is_open = true;
            dock.mode = *mode;
            dock.query.clear();
            dock.results.clear();
            dock.selected_index = 0;
            dock.pending = false;
        }

        DockAction::Close => {
            dock.is_open = false;
            dock.query.clear();
            dock.results.clear();
            dock.selected_index = 0;
            dock.pending = false;
        }

        DockAction::SwitchMode => {
            // No query carried across a mode switch
            dock.mode = dock.mode.toggled();
            dock.query.clear();
            dock.results.clear();
            dock.selected_index = 0;
            dock.pending = false;
        }

        DockAction::Char(c) => {
            dock.query.push(*c);
            dock.selected_index = 0;
            settle_non_search(&mut dock);
        }

        DockAction::Backspace => {
            dock.query.pop();
            dock.selected_index = 0;
            settle_non_search(&mut dock);
        }

        DockAction::Clear => {
            dock.query.clear();
            dock.results.clear();
            dock.selected_index = 0;
            dock.pending = false;
        }

        DockAction::NavigateNext => {
            let len = dock.visible_len(ctx);
            if len > 0 {
                dock.selected_index = (dock.selected_index + 1).min(len - 1);
            }
        }

        DockAction::NavigatePrev => {
            dock.selected_index = dock.selected_index.saturating_sub(1);
        }

        DockAction::Execute => {
            // The middleware has already acted on the selection snapshot;
            // the dock closes regardless of the command outcome.
            dock.is_open = false;
            dock.query.clear();
            dock.results.clear();
            dock.selected_index = 0;
            dock.pending = false;
        }

        DockAction::SearchStarted { seq } => {
            if dock.is_open {
                dock.pending = true;
                dock.search_seq = *seq;
            }
        }

        DockAction::SearchResolved { seq, results } => {
            // Stale responses (query changed, dock closed or reopened)
            // must never overwrite newer state.
            if dock.is_open && dock.pending && *seq == dock.search_seq {
                dock.results = results.clone();
                dock.selected_index = 0;
                dock.pending = false;
            } else {
                log::debug!("Dropping stale search response (seq {})", seq);
            }
        }
    }

    dock
}

/// After an edit, a query that no longer routes to search (empty, or a
/// command-style utterance) has nothing in flight: the middleware
/// cancels its lookup without resolving, so the edit itself must settle
/// `pending` or the view would show a spinner forever.
fn settle_non_search(dock: &mut DockState) {
    if !matches!(QueryRoute::classify(&dock.query), QueryRoute::Search { .. }) {
        dock.results.clear();
        dock.pending = false;
    }
}
