//! Session persistence for the catalog dock
//!
//! This crate provides:
//! - File path utilities for the config directory
//! - The session file remembering the last-used dock mode
//!
//! Persistence is best-effort: a missing or unreadable session file falls
//! back to defaults, and a failed save is logged, never fatal.

pub mod paths;
pub mod session;

pub use paths::{cache_dir, config_dir, global_session_path, has_local_session, local_session_path};
pub use session::{DockSession, SessionData};
