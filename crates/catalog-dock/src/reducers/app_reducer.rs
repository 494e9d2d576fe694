//! Root reducer
//!
//! Pure function that produces new state from current state + action.
//! Orchestrates the dock sub-reducer and keeps the view stack in step
//! with the dock's open/closed state.

use crate::actions::{Action, DockAction, GlobalAction};
use crate::reducers::dock_reducer::reduce_dock;
use crate::state::{AppState, CommandContext};
use crate::views::{DockView, ViewId};

pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(global) => match global {
            GlobalAction::Quit => {
                state.running = false;
            }

            GlobalAction::Close => {
                // Close the top-most view; closing the last view quits.
                if state.view_stack.len() > 1 {
                    let popped = state.view_stack.pop();
                    log::debug!("Closed view: {:?}", popped.map(|v| v.view_id()));
                    if state.dock.is_open {
                        state.dock = reduce_dock(state.dock, &DockAction::Close, &state.context);
                    }
                } else {
                    log::debug!("Closing last view - quitting application");
                    state.running = false;
                }
            }

            GlobalAction::RouteChanged(route) => {
                state.context =
                    CommandContext::from_route(route, state.context.organization_id.clone());
                log::debug!("Route changed to {}", route);
            }

            GlobalAction::Notice(notice) => {
                state.status_bar.notice = Some(notice.clone());
            }

            // Raw keys are consumed by the keyboard middleware
            GlobalAction::KeyPressed(_) => {}
        },

        Action::Dock(dock_action) => {
            // Keep the view stack in step with open/close transitions
            match dock_action {
                DockAction::Open(_) => {
                    let already_open = state
                        .view_stack
                        .last()
                        .map(|top| top.view_id() == ViewId::Dock)
                        .unwrap_or(false);
                    if !already_open {
                        state.view_stack.push(Box::new(DockView::new()));
                    }
                }
                DockAction::Close | DockAction::Execute => {
                    if state
                        .view_stack
                        .last()
                        .map(|top| top.view_id() == ViewId::Dock)
                        .unwrap_or(false)
                    {
                        state.view_stack.pop();
                    }
                }
                _ => {}
            }

            state.dock = reduce_dock(state.dock, dock_action, &state.context);
        }

        // Generic actions are translated by middleware before they reach
        // the reducer; untranslated ones are no-ops here.
        Action::Navigate(_) | Action::TextInput(_) => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DockMode, Notice, NoticeLevel};

    #[test]
    fn quit_stops_the_app() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }

    #[test]
    fn dock_open_pushes_overlay_and_close_pops_it() {
        let mut state = AppState::default();
        assert_eq!(state.view_stack.len(), 1);

        state = reduce(state, &Action::Dock(DockAction::Open(DockMode::Search)));
        assert_eq!(state.view_stack.len(), 2);
        assert!(state.dock.is_open);

        // Opening again must not stack a second overlay
        state = reduce(state, &Action::Dock(DockAction::Open(DockMode::Search)));
        assert_eq!(state.view_stack.len(), 2);

        state = reduce(state, &Action::Dock(DockAction::Close));
        assert_eq!(state.view_stack.len(), 1);
        assert!(!state.dock.is_open);
    }

    #[test]
    fn route_change_rebuilds_context() {
        let mut state = AppState::default();
        state.context.organization_id = Some("org-1".into());

        state = reduce(
            state,
            &Action::Global(GlobalAction::RouteChanged("/releases/r7".into())),
        );
        assert_eq!(state.context.release_id.as_deref(), Some("r7"));
        assert_eq!(state.context.organization_id.as_deref(), Some("org-1"));
    }

    #[test]
    fn notice_lands_in_status_bar() {
        let state = reduce(
            AppState::default(),
            &Action::Global(GlobalAction::Notice(Notice {
                level: NoticeLevel::Error,
                title: "Command failed".into(),
                detail: None,
            })),
        );
        assert_eq!(state.status_bar.notice.unwrap().title, "Command failed");
    }

    #[test]
    fn closing_last_view_quits() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Close));
        assert!(!state.running);
    }
}
