//! Dispatcher-backed collaborator implementations
//!
//! The dock talks to the host application through the [`Navigator`],
//! [`Notifier`] and [`CreationFlow`] traits. In this binary all three
//! are backed by the dispatcher: navigation becomes a route change
//! action, feedback becomes a status bar notice, and creation flows
//! (modals in a fuller client) surface as an info notice.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::state::{Notice, NoticeLevel};
use crate::traits::{CreationFlow, EntityKind, Navigator, Notifier};

/// Navigator that dispatches a route change
pub struct DispatchNavigator {
    dispatcher: Dispatcher,
}

impl DispatchNavigator {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }
}

impl Navigator for DispatchNavigator {
    fn navigate_to(&self, destination: &str) {
        self.dispatcher
            .dispatch(Action::Global(GlobalAction::RouteChanged(
                destination.to_string(),
            )));
    }
}

/// Notifier that surfaces feedback on the status bar
pub struct StatusNotifier {
    dispatcher: Dispatcher,
}

impl StatusNotifier {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    fn notify(&self, level: NoticeLevel, title: &str, detail: Option<&str>) {
        self.dispatcher.dispatch(Action::Global(GlobalAction::Notice(Notice {
            level,
            title: title.to_string(),
            detail: detail.map(str::to_string),
        })));
    }
}

impl Notifier for StatusNotifier {
    fn notify_success(&self, title: &str, detail: Option<&str>) {
        self.notify(NoticeLevel::Success, title, detail);
    }

    fn notify_error(&self, title: &str, detail: Option<&str>) {
        self.notify(NoticeLevel::Error, title, detail);
    }
}

/// Creation flow stand-in: announces the flow on the status bar
pub struct NoticeCreationFlow {
    dispatcher: Dispatcher,
}

impl NoticeCreationFlow {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }
}

impl CreationFlow for NoticeCreationFlow {
    fn open_creation_flow(&self, kind: EntityKind) {
        self.dispatcher.dispatch(Action::Global(GlobalAction::Notice(Notice {
            level: NoticeLevel::Info,
            title: format!("Create {}", kind),
            detail: Some("Creation flow opened".to_string()),
        })));
    }
}
