// Storage path utilities.
// Constructs platform paths for config, session, campaign data, and logs.

use std::path::PathBuf;

use directories::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "outbox")
}

/// Get the config directory (~/.config/outbox on Linux).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path to the configuration file.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the data directory (~/.local/share/outbox on Linux).
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Path to the stored session (signed-in user).
pub fn session_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("session.json"))
}

/// Default path to the campaigns data file.
pub fn campaigns_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("campaigns.json"))
}

/// Get the cache directory, where the log file lives.
pub fn log_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}
