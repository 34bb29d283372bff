use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::board::History;
use crate::constants::DEFAULT_HISTORY_LIMIT;
use crate::error::{BoardError, Result};

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

/// Application configuration persisted to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfigData {
    /// Number of undoable commands kept before the oldest are dropped
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Tracing filter directive used when `RUST_LOG` is not set
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl Default for BoardConfigData {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            log_filter: None,
        }
    }
}

/// Runtime configuration resource
#[derive(Resource, Debug, Clone)]
pub struct BoardConfig {
    /// The persisted configuration data
    pub data: BoardConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Why the config was reset to defaults, for the UI to show
    pub reset_reason: Option<String>,
}

impl BoardConfig {
    /// Load configuration from disk, falling back to defaults.
    ///
    /// A missing file is created with the defaults; an unreadable or corrupt
    /// one is left alone and the reason recorded in `reset_reason`.
    pub fn load(config_path: PathBuf) -> Self {
        let (data, reset_reason) = if config_path.exists() {
            match read_config(&config_path) {
                Ok(data) => {
                    info!("Loaded config from {:?}", config_path);
                    (data, None)
                }
                Err(e) => {
                    warn!("{}", e);
                    (BoardConfigData::default(), Some(e.to_string()))
                }
            }
        } else {
            info!("No config file found, using defaults");
            let data = BoardConfigData::default();
            match save_config(&config_path, &data) {
                Ok(()) => info!("Config saved to {:?}", config_path),
                Err(e) => error!("{}", e),
            }
            (data, None)
        };

        Self {
            data,
            config_path,
            reset_reason,
        }
    }
}

pub fn read_config(path: &Path) -> Result<BoardConfigData> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| BoardError::Config(format!("Could not read configuration file: {}", e)))?;
    serde_json::from_str(&json)
        .map_err(|e| BoardError::Config(format!("Configuration file was corrupted: {}", e)))
}

pub fn save_config(path: &Path, data: &BoardConfigData) -> Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| BoardError::Config(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, json)
        .map_err(|e| BoardError::Config(format!("Failed to save config: {}", e)))
}

/// Inserts the loaded config and a history sized from it.
pub struct ConfigPlugin {
    pub config: BoardConfig,
}

impl ConfigPlugin {
    pub fn load() -> Self {
        Self {
            config: BoardConfig::load(crate::paths::config_file()),
        }
    }
}

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(History::with_limit(self.config.data.history_limit))
            .insert_resource(self.config.clone());
    }
}
