//! SearchMiddleware - debounced catalog lookups for the dock
//!
//! Watches dock query edits and schedules store lookups on its own
//! tokio runtime. Two rules govern scheduling:
//!
//! - **Debounce**: a lookup fires only after 200ms without a further
//!   edit. Every edit bumps a shared sequence number; the sleeping task
//!   re-checks it and bails if it has been superseded.
//! - **Last keystroke wins**: even a lookup that already hit the store
//!   re-checks the sequence before dispatching, and the reducer
//!   verifies it once more against `DockState::search_seq`. A slow
//!   early response can never overwrite a newer one.
//!
//! The middleware keeps its own copy of the dock's open flag, mode and
//! query text, folded from the action stream. The state snapshot lags
//! behind while the render thread is parked in the event poll, so two
//! queued keystrokes would both see the same pre-edit query; the action
//! stream itself arrives in order on the worker thread.
//!
//! Command-style queries never reach the store: the command registry is
//! filtered synchronously at render time.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Runtime;

use catalog_client::CatalogStore;

use crate::actions::{Action, DockAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::query::{QueryRoute, SearchScope};
use crate::search::{search_all, search_scope};
use crate::state::{AppState, DockMode};

/// Quiet period after the last keystroke before a lookup fires
pub const DEBOUNCE: Duration = Duration::from_millis(200);

pub struct SearchMiddleware {
    /// Tokio runtime for async store lookups
    runtime: Runtime,
    store: Arc<dyn CatalogStore>,
    /// The sequence number of the newest edit; in-flight tasks compare
    /// against it to detect being superseded
    current_seq: Arc<AtomicU64>,
    next_seq: u64,
    /// Dock projection folded from the action stream; authoritative for
    /// scheduling, unlike the possibly stale state snapshot
    open: bool,
    mode: DockMode,
    query: String,
}

impl SearchMiddleware {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        let runtime = Runtime::new().expect("Failed to create tokio runtime");
        Self {
            runtime,
            store,
            current_seq: Arc::new(AtomicU64::new(0)),
            next_seq: 0,
            open: false,
            mode: DockMode::Search,
            query: String::new(),
        }
    }

    /// Invalidate any in-flight lookup without starting a new one
    fn cancel_inflight(&mut self) {
        self.next_seq += 1;
        self.current_seq.store(self.next_seq, Ordering::SeqCst);
    }

    fn schedule(&mut self, dispatcher: &Dispatcher) {
        self.cancel_inflight();
        let seq = self.next_seq;

        // Commands mode filters synchronously; nothing to look up
        if self.mode == DockMode::Commands {
            return;
        }

        let (scope, term) = match QueryRoute::classify(&self.query) {
            QueryRoute::Search { scope, term } => (scope, term),
            // Empty input or a command-style utterance: no store lookup
            QueryRoute::Empty | QueryRoute::Command => return,
        };

        dispatcher.dispatch(Action::Dock(DockAction::SearchStarted { seq }));

        let store = Arc::clone(&self.store);
        let current_seq = Arc::clone(&self.current_seq);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(debounced_search(
            store,
            current_seq,
            seq,
            scope,
            term,
            dispatcher,
        ));
    }
}

impl Middleware for SearchMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Dock(dock_action) = action {
            match dock_action {
                DockAction::Open(mode) => {
                    self.cancel_inflight();
                    self.open = true;
                    self.mode = *mode;
                    self.query.clear();
                }
                DockAction::Close | DockAction::Execute => {
                    self.cancel_inflight();
                    self.open = false;
                    self.query.clear();
                }
                DockAction::SwitchMode => {
                    self.cancel_inflight();
                    if self.open {
                        self.mode = self.mode.toggled();
                        self.query.clear();
                    }
                }
                DockAction::Char(c) => {
                    if self.open {
                        self.query.push(*c);
                        self.schedule(dispatcher);
                    }
                }
                DockAction::Backspace => {
                    if self.open {
                        self.query.pop();
                        self.schedule(dispatcher);
                    }
                }
                DockAction::Clear => {
                    if self.open {
                        self.query.clear();
                        self.schedule(dispatcher);
                    }
                }
                _ => {}
            }
        }

        // Never consumes: the reducer still applies the edit itself
        true
    }
}

/// The spawned lookup task: wait out the debounce window, check we are
/// still the newest edit, hit the store, check again, then dispatch.
async fn debounced_search(
    store: Arc<dyn CatalogStore>,
    current_seq: Arc<AtomicU64>,
    seq: u64,
    scope: Option<SearchScope>,
    term: String,
    dispatcher: Dispatcher,
) {
    tokio::time::sleep(DEBOUNCE).await;
    if current_seq.load(Ordering::SeqCst) != seq {
        log::debug!("Search seq {} superseded during debounce", seq);
        return;
    }

    let results = match scope {
        Some(scope) => search_scope(store.as_ref(), scope, &term).await,
        None => search_all(store.as_ref(), &term).await,
    };

    if current_seq.load(Ordering::SeqCst) != seq {
        log::debug!("Search seq {} superseded during lookup", seq);
        return;
    }

    dispatcher.dispatch(Action::Dock(DockAction::SearchResolved { seq, results }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use catalog_client::{ArtistRecord, DeliverableRecord, ReleaseRecord, StoreError};
    use std::sync::atomic::AtomicUsize;
    use std::sync::{mpsc, Mutex};

    /// Store fake that counts lookups and records artist search terms
    #[derive(Default)]
    struct CountingStore {
        calls: AtomicUsize,
        terms: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl CatalogStore for CountingStore {
        async fn find_artists(
            &self,
            term: &str,
            _limit: usize,
        ) -> Result<Vec<ArtistRecord>, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.terms.lock().unwrap().push(term.to_string());
            Ok(vec![ArtistRecord {
                id: "a1".into(),
                name: term.to_string(),
                region: None,
                country: None,
            }])
        }

        async fn find_releases(
            &self,
            _term: &str,
            _limit: usize,
        ) -> Result<Vec<ReleaseRecord>, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }

        async fn find_deliverables(
            &self,
            _term: &str,
            _limit: usize,
        ) -> Result<Vec<DeliverableRecord>, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }
    }

    fn dispatcher_pair() -> (Dispatcher, mpsc::Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        (Dispatcher::new(tx), rx)
    }

    fn drain(rx: &mpsc::Receiver<Action>) -> Vec<Action> {
        let mut out = Vec::new();
        while let Ok(action) = rx.try_recv() {
            out.push(action);
        }
        out
    }

    #[tokio::test(start_paused = true)]
    async fn lookup_waits_out_the_debounce_window() {
        let store = Arc::new(CountingStore::default());
        let seq = Arc::new(AtomicU64::new(1));
        let (dispatcher, rx) = dispatcher_pair();

        let handle = tokio::spawn(debounced_search(
            store.clone() as Arc<dyn CatalogStore>,
            seq,
            1,
            None,
            "miles".into(),
            dispatcher,
        ));

        // Nothing happens before the window elapses
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);

        handle.await.unwrap();
        assert_eq!(store.calls.load(Ordering::SeqCst), 3);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Dock(DockAction::SearchResolved { seq: 1, .. }))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_lookup_never_touches_the_store() {
        let store = Arc::new(CountingStore::default());
        let seq = Arc::new(AtomicU64::new(1));
        let (dispatcher, rx) = dispatcher_pair();

        let handle = tokio::spawn(debounced_search(
            store.clone() as Arc<dyn CatalogStore>,
            seq.clone(),
            1,
            None,
            "miles".into(),
            dispatcher,
        ));

        // A newer keystroke arrives mid-window
        tokio::time::sleep(Duration::from_millis(100)).await;
        seq.store(2, Ordering::SeqCst);

        handle.await.unwrap();
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn scoped_lookup_only_queries_one_collection() {
        let store = Arc::new(CountingStore::default());
        let seq = Arc::new(AtomicU64::new(1));
        let (dispatcher, rx) = dispatcher_pair();

        tokio::spawn(debounced_search(
            store.clone() as Arc<dyn CatalogStore>,
            seq,
            1,
            Some(SearchScope::Artist),
            "miles".into(),
            dispatcher,
        ))
        .await
        .unwrap();

        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
        match rx.try_recv() {
            Ok(Action::Dock(DockAction::SearchResolved { results, .. })) => {
                assert_eq!(results.len(), 1);
                assert_eq!(results[0].title, "miles");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn queued_keystrokes_fold_into_one_query() {
        let store = Arc::new(CountingStore::default());
        let mut mw = SearchMiddleware::new(store.clone());
        let (dispatcher, rx) = dispatcher_pair();

        // The snapshot never advances between keystrokes, as happens
        // when the render thread lags the input stream
        let state = AppState::default();
        mw.handle(
            &Action::Dock(DockAction::Open(DockMode::Search)),
            &state,
            &dispatcher,
        );
        mw.handle(&Action::Dock(DockAction::Char('a')), &state, &dispatcher);
        mw.handle(&Action::Dock(DockAction::Char('r')), &state, &dispatcher);

        std::thread::sleep(DEBOUNCE + Duration::from_millis(150));

        // Only the newest edit survives the debounce, and it carries
        // both keystrokes
        assert_eq!(*store.terms.lock().unwrap(), vec!["ar".to_string()]);

        let started: Vec<u64> = drain(&rx)
            .into_iter()
            .filter_map(|a| match a {
                Action::Dock(DockAction::SearchStarted { seq }) => Some(seq),
                _ => None,
            })
            .collect();
        assert_eq!(started.len(), 2);
        assert!(started[1] > started[0]);
    }

    #[test]
    fn command_style_queries_skip_the_store() {
        let store = Arc::new(CountingStore::default());
        let mut mw = SearchMiddleware::new(store.clone());
        let (dispatcher, rx) = dispatcher_pair();

        let state = AppState::default();
        mw.handle(
            &Action::Dock(DockAction::Open(DockMode::Search)),
            &state,
            &dispatcher,
        );
        for c in "create ".chars() {
            mw.handle(&Action::Dock(DockAction::Char(c)), &state, &dispatcher);
        }
        drain(&rx);

        // The verb prefix is complete: further edits never schedule
        mw.handle(&Action::Dock(DockAction::Char('a')), &state, &dispatcher);
        assert!(rx.try_recv().is_err());

        std::thread::sleep(DEBOUNCE + Duration::from_millis(150));
        // "create" and shorter fragments were plain searches, but the
        // completed utterance never reached the store
        assert!(!store
            .terms
            .lock()
            .unwrap()
            .iter()
            .any(|t| t.starts_with("create ")));
    }

    #[test]
    fn search_edits_mark_the_dock_pending() {
        let store = Arc::new(CountingStore::default());
        let mut mw = SearchMiddleware::new(store);
        let (dispatcher, rx) = dispatcher_pair();

        let state = AppState::default();
        mw.handle(
            &Action::Dock(DockAction::Open(DockMode::Search)),
            &state,
            &dispatcher,
        );
        mw.handle(&Action::Dock(DockAction::Char('m')), &state, &dispatcher);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Dock(DockAction::SearchStarted { .. }))
        ));
    }

    #[test]
    fn edits_in_commands_mode_never_schedule() {
        let store = Arc::new(CountingStore::default());
        let mut mw = SearchMiddleware::new(store.clone());
        let (dispatcher, rx) = dispatcher_pair();

        let state = AppState::default();
        mw.handle(
            &Action::Dock(DockAction::Open(DockMode::Commands)),
            &state,
            &dispatcher,
        );
        mw.handle(&Action::Dock(DockAction::Char('g')), &state, &dispatcher);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn mode_switch_resets_the_tracked_query() {
        let store = Arc::new(CountingStore::default());
        let mut mw = SearchMiddleware::new(store.clone());
        let (dispatcher, rx) = dispatcher_pair();

        let state = AppState::default();
        mw.handle(
            &Action::Dock(DockAction::Open(DockMode::Commands)),
            &state,
            &dispatcher,
        );
        mw.handle(&Action::Dock(DockAction::Char('x')), &state, &dispatcher);

        // Switch to search mode; the "x" typed in commands mode is gone
        mw.handle(&Action::Dock(DockAction::SwitchMode), &state, &dispatcher);
        mw.handle(&Action::Dock(DockAction::Char('m')), &state, &dispatcher);

        std::thread::sleep(DEBOUNCE + Duration::from_millis(150));
        assert_eq!(*store.terms.lock().unwrap(), vec!["m".to_string()]);
        assert!(drain(&rx)
            .iter()
            .any(|a| matches!(a, Action::Dock(DockAction::SearchStarted { .. }))));
    }
}
