//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod context;
mod dock;
mod status_bar;

pub use app::AppState;
pub use context::CommandContext;
pub use dock::{DockMode, DockState};
pub use status_bar::{Notice, NoticeLevel, StatusBarState};
