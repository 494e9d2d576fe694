use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::mpsc;
use std::sync::{Arc, RwLock};
use std::time::Duration;

mod actions;
mod background;
mod capabilities;
mod collaborators;
mod command_id;
mod commands;
mod dispatcher;
mod keybindings;
mod keymap;
mod logger;
mod middleware;
mod query;
mod reducers;
mod search;
mod state;
mod traits;
mod view_models;
mod views;

use actions::{Action, GlobalAction};
use background::{spawn_background_worker, SharedState};
use catalog_client::{
    ArtistRecord, CatalogStore, DeliverableKind, DeliverableRecord, MemoryCatalog, ReleaseRecord,
};
use collaborators::{DispatchNavigator, NoticeCreationFlow, StatusNotifier};
use dispatcher::Dispatcher;
use dock_config::DockSession;
use middleware::{
    command_middleware::CommandMiddleware, keyboard_middleware::KeyboardMiddleware,
    logging_middleware::LoggingMiddleware, navigation_middleware::NavigationMiddleware,
    search_middleware::SearchMiddleware, session_middleware::SessionMiddleware,
    text_input_middleware::TextInputMiddleware, Middleware,
};
use state::{AppState, DockMode};

fn main() -> io::Result<()> {
    let log_file = logger::init();
    log::info!("Starting catalog-dock (log: {:?})", log_file);

    // Restore the remembered dock mode from the session file
    let session = DockSession::load();
    let mut initial_state = AppState::default();
    if let Some(mode) = session.dock_mode().and_then(DockMode::from_label) {
        initial_state.dock.mode = mode;
        log::info!("Restored dock mode: {}", mode);
    }

    // Channels: UI -> worker (actions), worker -> UI (reduced actions)
    let (action_tx, action_rx) = mpsc::channel::<Action>();
    let (result_tx, result_rx) = mpsc::channel::<Action>();

    let shared_state: SharedState = Arc::new(RwLock::new(initial_state));

    let store: Arc<dyn CatalogStore> = Arc::new(demo_catalog());
    let dispatcher = Dispatcher::new(action_tx.clone());
    let navigator = Arc::new(DispatchNavigator::new(dispatcher.clone()));
    let notifier = Arc::new(StatusNotifier::new(dispatcher.clone()));
    let creation_flow = Arc::new(NoticeCreationFlow::new(dispatcher.clone()));

    // Middleware chain, in execution order
    let middleware: Vec<Box<dyn Middleware + Send>> = vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(TextInputMiddleware::new()),
        Box::new(NavigationMiddleware::new()),
        Box::new(SearchMiddleware::new(store)),
        Box::new(CommandMiddleware::new(navigator, notifier, creation_flow)),
        Box::new(SessionMiddleware::new(session)),
    ];

    let worker = spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        Arc::clone(&shared_state),
        middleware,
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &shared_state, &action_tx, &result_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Unblock and join the worker
    let _ = action_tx.send(Action::Global(GlobalAction::Quit));
    if worker.join().is_err() {
        log::error!("Background worker panicked");
    }

    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    log::info!("Exiting catalog-dock");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    shared_state: &SharedState,
    action_tx: &mpsc::Sender<Action>,
    result_rx: &mpsc::Receiver<Action>,
) -> io::Result<()> {
    loop {
        // Render from a state snapshot
        {
            let state = shared_state
                .read()
                .map_err(|e| io::Error::other(e.to_string()))?;
            terminal.draw(|frame| {
                let area = frame.area();
                views::render(&state, area, frame);
            })?;

            if !state.running {
                break;
            }
        }

        // Forward key presses to the worker
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && action_tx
                        .send(Action::Global(GlobalAction::KeyPressed(key)))
                        .is_err()
                {
                    log::error!("Action channel disconnected");
                    break;
                }
            }
        }

        // Apply all actions the worker forwarded for reduction
        while let Ok(action) = result_rx.try_recv() {
            let mut state = shared_state
                .write()
                .map_err(|e| io::Error::other(e.to_string()))?;
            let next = reducers::reduce(state.clone(), &action);
            *state = next;
        }
    }

    Ok(())
}

/// Seed catalog so the binary is usable without a real backend
fn demo_catalog() -> MemoryCatalog {
    MemoryCatalog::new(
        vec![
            ArtistRecord {
                id: "a1".into(),
                name: "Miles Davis".into(),
                region: Some("Alton".into()),
                country: Some("USA".into()),
            },
            ArtistRecord {
                id: "a2".into(),
                name: "Milton Nascimento".into(),
                region: None,
                country: Some("Brazil".into()),
            },
            ArtistRecord {
                id: "a3".into(),
                name: "Alice Coltrane".into(),
                region: Some("Detroit".into()),
                country: Some("USA".into()),
            },
        ],
        vec![
            ReleaseRecord {
                id: "r1".into(),
                title: "Kind of Blue".into(),
                release_type: Some("Album".into()),
                catalog_number: Some("CL-1355".into()),
                status: Some("Delivered".into()),
            },
            ReleaseRecord {
                id: "r2".into(),
                title: "Milestones".into(),
                release_type: Some("Album".into()),
                catalog_number: Some("CL-1193".into()),
                status: Some("Draft".into()),
            },
        ],
        vec![
            DeliverableRecord {
                id: "d1".into(),
                name: "kind-of-blue-master.wav".into(),
                kind: DeliverableKind::File,
                file_type: Some("WAV".into()),
                status: Some("Uploaded".into()),
                release_id: Some("r1".into()),
            },
            DeliverableRecord {
                id: "d2".into(),
                name: "Kind of Blue artwork".into(),
                kind: DeliverableKind::Folder,
                file_type: None,
                status: None,
                release_id: Some("r1".into()),
            },
        ],
    )
}
