//! Where the board keeps its config file and session logs.
//!
//! A debug build or `cargo run` uses the working directory, so a checkout
//! keeps its `config.json` and `logs/refboard.log` next to the sources.
//! Installed builds use the platform locations:
//! - Windows: `%APPDATA%\refboard\`
//! - macOS: `~/Library/Application Support/refboard/`
//! - Linux: `~/.config/refboard/` (config), `~/.local/share/refboard/` (logs)

use std::path::PathBuf;

const APP_DIR_NAME: &str = "refboard";
pub const CONFIG_FILE_NAME: &str = "config.json";
/// Single log file; each run appends a session separator to it.
pub const LOG_FILE_NAME: &str = "refboard.log";

/// True under `cargo run` or in a debug build.
pub fn is_dev_mode() -> bool {
    std::env::var("CARGO").is_ok() || cfg!(debug_assertions)
}

/// Directory holding `config.json`. Same as [`data_dir`] outside Linux.
pub fn config_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    #[cfg(target_os = "linux")]
    {
        dirs::config_dir().map(|p| p.join(APP_DIR_NAME))
    }

    #[cfg(not(target_os = "linux"))]
    {
        data_dir()
    }
}

pub fn data_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    dirs::data_dir().map(|p| p.join(APP_DIR_NAME))
}

/// History limit and log filter live here, see [`crate::config::BoardConfig`].
pub fn config_file() -> PathBuf {
    config_dir()
        .map(|p| p.join(CONFIG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

pub fn logs_dir() -> PathBuf {
    data_dir()
        .map(|p| p.join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// The file debug builds write their tracing output to.
pub fn log_file() -> PathBuf {
    logs_dir().join(LOG_FILE_NAME)
}

/// Creates the config and logs directories before anything reads or writes them.
pub fn ensure_directories() -> std::io::Result<()> {
    if let Some(config) = config_dir() {
        std::fs::create_dir_all(&config)?;
    }
    std::fs::create_dir_all(logs_dir())?;
    Ok(())
}
