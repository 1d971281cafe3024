//! Platform-specific configuration and paths

use anyhow::{Context, Result};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::cards::launcher::LaunchTiming;

/// Environment variable overriding the store location
pub const STORE_PATH_ENV: &str = "PROFILE_CARDS_DB";

/// Get the default store database path
/// - macOS: ~/Library/Application Support/profile-cards/storage.db
/// - Linux: ~/.local/share/profile-cards/storage.db
/// - Windows: %APPDATA%/profile-cards/storage.db
pub fn default_store_path() -> Result<PathBuf> {
    let data = dirs::data_dir().context("Could not determine data directory")?;
    Ok(data.join("profile-cards").join("storage.db"))
}

/// Runtime configuration, built once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub store_path: PathBuf,
    pub timing: LaunchTiming,
}

impl Config {
    /// Resolve the configuration; an explicit path wins over the environment
    pub fn resolve(store_override: Option<PathBuf>) -> Result<Self> {
        Self::resolve_with(store_override, env::var_os(STORE_PATH_ENV))
    }

    /// Resolve against an explicit `PROFILE_CARDS_DB` value; empty is unset
    pub fn resolve_with(
        store_override: Option<PathBuf>,
        env_path: Option<OsString>,
    ) -> Result<Self> {
        let store_path = match (store_override, env_path) {
            (Some(path), _) => path,
            (None, Some(path)) if !path.is_empty() => PathBuf::from(path),
            _ => default_store_path()?,
        };

        Ok(Self {
            store_path,
            timing: LaunchTiming::default(),
        })
    }
}
