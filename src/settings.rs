use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::manager::settings_file_path;
use crate::password::SamplingBound;

/// Application settings persisted as JSON in the data directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Index sampling mode used by the generator (default Exclusive)
    pub sampling_bound: SamplingBound,
    /// Show the entropy estimate under the result
    pub show_entropy: bool,
    /// Initial window width in points (320-1920, default 420)
    pub window_width: f32,
    /// Initial window height in points (240-1440, default 520)
    pub window_height: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            sampling_bound: SamplingBound::Exclusive,
            show_entropy: true,
            window_width: 420.0,
            window_height: 520.0,
        }
    }
}

impl AppSettings {
    fn settings_path() -> PathBuf {
        settings_file_path()
    }

    /// Load settings from the data directory, or defaults if missing or unreadable
    pub fn load() -> Self {
        Self::load_from(&Self::settings_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str::<Self>(&data) {
                Ok(mut settings) => {
                    settings.clamp_window();
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings at {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read settings at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Save settings to the data directory
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::settings_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    /// Validate and clamp the window size to the allowed range
    pub fn set_window_size(&mut self, width: f32, height: f32) {
        self.window_width = width;
        self.window_height = height;
        self.clamp_window();
    }

    fn clamp_window(&mut self) {
        self.window_width = self.window_width.clamp(320.0, 1920.0);
        self.window_height = self.window_height.clamp(240.0, 1440.0);
    }
}
