//! # Configuration Management Module
//!
//! This module handles all configuration of the qrescape binary: room
//! identity, the final gate, where the room definition comes from, where
//! progress is stored, and logging.
//!
//! ## Configuration Structure
//!
//! The configuration is organized into logical sections:
//!
//! - [`RoomConfig`] - Room identity and the final escape gate
//! - [`ContentConfig`] - Source of the room definition (built-in or JSON file)
//! - [`StorageConfig`] - Data persistence settings
//! - [`LoggingConfig`] - Logging settings
//!
//! ## Usage
//!
//! ```rust,no_run
//! use qrescape::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     println!("Room: {}", config.room.name);
//!
//!     // Or write a starter file
//!     Config::create_default("config.toml").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [room]
//! name = "QR Escape Verse"
//! final_password = "ESCAPE2024"
//! final_password_threshold = 3
//!
//! [content]
//! # Omit to play the built-in room.
//! seed_file = "data/room.json"
//!
//! [storage]
//! data_dir = "./data"
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Every field has a default, so a partial file (or none at all for the
//! built-in room) is fine.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Room identity and the final escape gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomConfig {
    #[serde(default = "default_room_name")]
    pub name: String,
    /// Shown when the play loop opens.
    #[serde(default = "default_welcome_message")]
    pub welcome_message: String,
    /// Password that ends the game, compared uppercased.
    #[serde(default = "default_final_password")]
    pub final_password: String,
    /// Discoveries required before the password prompt opens.
    #[serde(default = "default_final_password_threshold")]
    pub final_password_threshold: usize,
}

fn default_room_name() -> String {
    "QR Escape Verse".to_string()
}

fn default_welcome_message() -> String {
    "Scan the QR codes hidden around the room to uncover hints, riddles, and secrets.".to_string()
}

fn default_final_password() -> String {
    "ESCAPE2024".to_string()
}

fn default_final_password_threshold() -> usize {
    3
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            name: default_room_name(),
            welcome_message: default_welcome_message(),
            final_password: default_final_password(),
            final_password_threshold: default_final_password_threshold(),
        }
    }
}

/// Where the room definition comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    /// JSON room definition to load; unset plays the built-in room.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<String>,
}

/// Data persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    "./data".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    /// Filesystem location of the sled progress database.
    pub fn progress_db_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join("progress")
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level used when no `-v` flags are given: error, warn, info, debug, trace.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional log file; appended to, with console output kept on a TTY.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub room: RoomConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a file.
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Create a default configuration file.
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}
