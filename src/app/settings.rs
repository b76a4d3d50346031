//! User settings persistence
//!
//! Stores preferences that persist across sessions, such as the reduced
//! motion choice.

use crate::paths;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Persistent user settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Settings {
    /// Whether animations should render pre-completed
    #[serde(default)]
    pub reduce_motion: bool,

    /// When the portfolio was last opened
    #[serde(default)]
    pub last_opened: Option<DateTime<Utc>>,
}

impl Settings {
    /// Get the settings file path
    #[must_use]
    pub fn path() -> PathBuf {
        paths::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vita")
            .join("settings.json")
    }

    /// Load settings from disk, returning defaults if file doesn't exist
    #[must_use]
    pub fn load() -> Self {
        let path = Self::path();
        if !path.exists() {
            debug!("Settings file not found, using defaults");
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => {
                    debug!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be written.
    pub fn save(&self) -> std::io::Result<()> {
        let path = Self::path();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;

        std::fs::write(&path, content)?;
        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Record that the portfolio was opened now and save
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be written.
    pub fn touch(&mut self) -> std::io::Result<()> {
        self.last_opened = Some(Utc::now());
        self.save()
    }
}
