//! CommandMiddleware - executes the selected dock row
//!
//! Handles `DockAction::Execute` by snapshotting the selection from
//! state and performing its side effect. The reducer closes the dock on
//! the same action regardless of how execution turns out; failures are
//! reported through the [`Notifier`] instead of reopening the dock.
//!
//! Two command ids are special-cased: `create:artist` and
//! `create:release` open the entity creation flow directly, bypassing
//! their registered actions.
//!
//! Command bodies run to completion on this middleware's runtime; they
//! are short-lived, and middleware already runs off the render thread.

use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::actions::{Action, DockAction};
use crate::commands::{dock_commands, filter_commands, CREATE_ARTIST, CREATE_RELEASE};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::traits::{CreationFlow, EntityKind, Navigator, Notifier};

pub struct CommandMiddleware {
    /// Tokio runtime for async command bodies
    runtime: Runtime,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    creation_flow: Arc<dyn CreationFlow>,
}

impl CommandMiddleware {
    pub fn new(
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        creation_flow: Arc<dyn CreationFlow>,
    ) -> Self {
        let runtime = Runtime::new().expect("Failed to create tokio runtime");
        Self {
            runtime,
            navigator,
            notifier,
            creation_flow,
        }
    }

    fn execute_selection(&self, state: &AppState) {
        let dock = &state.dock;

        if dock.commands_engine_active() {
            let visible = filter_commands(dock_commands(), &dock.query, &state.context);
            let Some(command) = visible.get(dock.selected_index) else {
                log::debug!("Execute with no selectable command, ignoring");
                return;
            };

            match command.id {
                CREATE_ARTIST => {
                    log::info!("Opening artist creation flow");
                    self.creation_flow.open_creation_flow(EntityKind::Artist);
                }
                CREATE_RELEASE => {
                    log::info!("Opening release creation flow");
                    self.creation_flow.open_creation_flow(EntityKind::Release);
                }
                _ => {
                    let outcome = self
                        .runtime
                        .block_on(command.action.run(&dock.query, &state.context));
                    match outcome {
                        Ok(outcome) => {
                            log::info!("Command {} succeeded", command.id);
                            if let Some(destination) = &outcome.destination {
                                self.navigator.navigate_to(destination);
                            }
                            self.notifier
                                .notify_success(&outcome.title, outcome.description.as_deref());
                        }
                        Err(e) => {
                            log::error!("Command {} failed: {:#}", command.id, e);
                            self.notifier
                                .notify_error("Command failed", Some(&e.to_string()));
                        }
                    }
                }
            }
        } else {
            let Some(result) = dock.results.get(dock.selected_index) else {
                log::debug!("Execute with no selected result, ignoring");
                return;
            };
            log::info!("Navigating to {}", result.destination);
            self.navigator.navigate_to(&result.destination);
        }
    }
}

impl Middleware for CommandMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, _dispatcher: &Dispatcher) -> bool {
        if matches!(action, Action::Dock(DockAction::Execute)) && state.dock.is_open {
            self.execute_selection(state);
        }

        // Always forwarded: the reducer closes the dock on Execute
        true
    }
}
