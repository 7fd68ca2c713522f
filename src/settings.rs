//! Game settings
//!
//! Read by the host before a session starts; the engine never touches disk.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{GRID_SIZE, MIN_GRID_SIZE, TICK_INTERVAL_MS};

/// Host-side knobs for one game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Side length of the square board
    pub grid_size: i32,
    /// Delay between ticks
    pub tick_interval_ms: u64,
    /// Fixed RNG seed; `None` means pick one at startup
    pub seed: Option<u64>,
    /// Let the demo steering play instead of reading input
    pub autopilot: bool,
    /// Stop after this many ticks (0 = run until game over)
    pub max_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            tick_interval_ms: TICK_INTERVAL_MS,
            seed: None,
            autopilot: false,
            max_ticks: 0,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Copy with out-of-range values pulled back to something playable
    pub fn sanitized(mut self) -> Self {
        if self.grid_size < MIN_GRID_SIZE {
            log::warn!(
                "grid_size {} too small, using {}",
                self.grid_size,
                MIN_GRID_SIZE
            );
            self.grid_size = MIN_GRID_SIZE;
        }
        if self.tick_interval_ms == 0 {
            log::warn!("tick_interval_ms must be positive, using 1");
            self.tick_interval_ms = 1;
        }
        self
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read {}: {}, using default settings", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
