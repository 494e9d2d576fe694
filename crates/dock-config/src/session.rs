//! Session state persistence
//!
//! Remembers the last-used dock mode across runs.
//!
//! # Precedence
//!
//! 1. `$CWD/.catalog-dock.session.toml` - Local session (highest priority)
//! 2. `~/.config/catalog-dock/session.toml` - Global session (fallback)
//!
//! On save: use the local file if it exists, otherwise the global one.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::paths;

const SESSION_VERSION: u32 = 1;

/// Session metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMeta {
    pub last_modified: DateTime<Utc>,
    pub version: u32,
}

/// Session data - the actual persisted state
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionData {
    /// Last-used dock mode, stored as a lowercase label ("search" / "commands")
    pub dock_mode: Option<String>,
}

/// Complete session with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DockSession {
    pub meta: SessionMeta,
    #[serde(default)]
    pub session: SessionData,
}

impl Default for DockSession {
    fn default() -> Self {
        Self {
            meta: SessionMeta {
                last_modified: Utc::now(),
                version: SESSION_VERSION,
            },
            session: SessionData::default(),
        }
    }
}

impl DockSession {
    /// Load session with precedence: local > global > default
    pub fn load() -> Self {
        if paths::has_local_session() {
            if let Ok(path) = paths::local_session_path() {
                if let Ok(session) = Self::load_from_path(&path) {
                    log::info!("Loaded local session from {:?}", path);
                    return session;
                }
            }
        }

        if let Ok(path) = paths::global_session_path() {
            if path.exists() {
                if let Ok(session) = Self::load_from_path(&path) {
                    log::info!("Loaded global session from {:?}", path);
                    return session;
                }
            }
        }

        log::info!("No existing session found, using defaults");
        Self::default()
    }

    /// Load session from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file: {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse session file: {:?}", path))
    }

    /// Save session (to local if it exists, otherwise global)
    pub fn save(&mut self) -> Result<()> {
        self.meta.last_modified = Utc::now();

        let path = if paths::has_local_session() {
            paths::local_session_path()?
        } else {
            paths::global_session_path()?
        };

        self.save_to_path(&path)
    }

    /// Save session to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize session")?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write session file: {:?}", path))?;

        log::info!("Saved session to {:?}", path);
        Ok(())
    }

    /// Update the remembered dock mode
    pub fn set_dock_mode(&mut self, mode: &str) {
        self.session.dock_mode = Some(mode.to_string());
    }

    /// Get the remembered dock mode label, if any
    pub fn dock_mode(&self) -> Option<&str> {
        self.session.dock_mode.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session() {
        let session = DockSession::default();
        assert_eq!(session.meta.version, SESSION_VERSION);
        assert!(session.dock_mode().is_none());
    }

    #[test]
    fn test_set_dock_mode() {
        let mut session = DockSession::default();
        session.set_dock_mode("commands");
        assert_eq!(session.dock_mode(), Some("commands"));
    }

    #[test]
    fn test_session_serialization() {
        let mut session = DockSession::default();
        session.set_dock_mode("search");

        let toml_str = toml::to_string_pretty(&session).unwrap();
        assert!(toml_str.contains("[meta]"));
        assert!(toml_str.contains("[session]"));
        assert!(toml_str.contains("search"));

        // Round-trip
        let parsed: DockSession = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.dock_mode(), Some("search"));
    }

    #[test]
    fn test_save_and_load_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");

        let mut session = DockSession::default();
        session.set_dock_mode("commands");
        session.save_to_path(&path).unwrap();

        let loaded = DockSession::load_from_path(&path).unwrap();
        assert_eq!(loaded.dock_mode(), Some("commands"));
    }

    #[test]
    fn test_missing_mode_deserializes_as_none() {
        let toml_str = "[meta]\nlast_modified = \"2026-01-01T00:00:00Z\"\nversion = 1\n";
        let parsed: DockSession = toml::from_str(toml_str).unwrap();
        assert!(parsed.dock_mode().is_none());
    }
}
