//! Background worker thread that processes actions through middleware
//!
//! - Main thread handles rendering and user input only
//! - Background thread runs all middleware (store lookups, file I/O)
//! - Communication happens via channels
//!
//! Actions dispatched by middleware via Dispatcher re-enter the chain,
//! which is how debounced search responses and command outcomes flow
//! back to the reducer.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::thread;

/// Shared state that background can read (main thread writes via reducer)
pub type SharedState = Arc<RwLock<AppState>>;

/// Spawn the background worker thread
///
/// - `action_rx`: receives actions from main thread and from Dispatcher
/// - `action_tx`: used to create the Dispatcher for middleware
/// - `result_tx`: sends non-consumed actions to the main thread reducer
/// - `state`: shared state snapshot source for middleware
/// - `middleware`: the middleware chain, run in registration order
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware + Send>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        background_loop(action_rx, action_tx, result_tx, state, middleware);
    })
}

fn background_loop(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    mut middleware: Vec<Box<dyn Middleware + Send>>,
) {
    log::info!("Background worker started");

    let dispatcher = Dispatcher::new(action_tx);

    loop {
        match action_rx.recv() {
            Ok(action) => {
                if matches!(action, Action::Global(GlobalAction::Quit)) {
                    log::info!("Background worker received shutdown signal");
                    if result_tx.send(action).is_err() {
                        log::error!("Failed to send quit action to main thread");
                    }
                    break;
                }

                // State snapshot for middleware to read
                let current_state = match state.read() {
                    Ok(s) => s.clone(),
                    Err(e) => {
                        log::error!("Failed to read shared state: {}", e);
                        continue;
                    }
                };

                let mut should_forward = true;
                for mw in &mut middleware {
                    let continue_chain = mw.handle(&action, &current_state, &dispatcher);
                    if !continue_chain {
                        should_forward = false;
                        break;
                    }
                }

                // If no middleware consumed the action, hand it to the
                // reducer on the main thread
                if should_forward && result_tx.send(action).is_err() {
                    log::error!("Result channel disconnected, shutting down");
                    break;
                }
            }
            Err(_) => {
                log::info!("Action channel disconnected, shutting down");
                break;
            }
        }
    }

    log::info!("Background worker stopped");
}
