//! Configuration directory paths
//!
//! Uses XDG directories via the `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/catalog-dock/`
//! - macOS: `~/Library/Application Support/catalog-dock/`
//! - Windows: `%APPDATA%\catalog-dock\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "catalog-dock";
const LOCAL_SESSION_FILE: &str = ".catalog-dock.session.toml";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to the global session file
pub fn global_session_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("session.toml"))
}

/// Get path to the local session file (in CWD)
pub fn local_session_path() -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join(LOCAL_SESSION_FILE))
}

/// Check if a local session file exists
pub fn has_local_session() -> bool {
    local_session_path().map(|p| p.exists()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_paths() {
        let global = global_session_path().unwrap();
        assert!(global.ends_with("session.toml"));

        let local = local_session_path().unwrap();
        assert!(local.ends_with(LOCAL_SESSION_FILE));
    }
}
