//! Simulation settings
//!
//! Loaded from an optional JSON file; any field missing from the file keeps
//! its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_BOUNCE_FACTOR;
use crate::error::Result;

/// Playfield size presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Playfield {
    Small,
    #[default]
    Medium,
    Large,
}

impl Playfield {
    pub fn as_str(&self) -> &'static str {
        match self {
            Playfield::Small => "Small",
            Playfield::Medium => "Medium",
            Playfield::Large => "Large",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "small" => Some(Playfield::Small),
            "medium" | "med" => Some(Playfield::Medium),
            "large" => Some(Playfield::Large),
            _ => None,
        }
    }

    /// Width and height in simulation units
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            Playfield::Small => (320.0, 240.0),
            Playfield::Medium => (800.0, 600.0),
            Playfield::Large => (1920.0, 1080.0),
        }
    }
}

/// World and demo configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub width: f64,
    pub height: f64,

    // === Physics ===
    /// Downward acceleration given to spawned balls (positive y is down)
    pub gravity: f64,
    /// Applied to every ball the world adopts
    pub bounce_factor: f64,
    /// Upper bound on the launch speed of spawned balls, per axis
    pub max_launch_speed: f64,

    // === Balls ===
    pub ball_radius: f64,
    pub initial_balls: usize,
    /// Balls smaller than this are never picked for explosion
    pub min_explode_radius: f64,
    /// Color tokens handed out to spawned balls in turn
    pub palette: Vec<String>,

    // === Run ===
    /// RNG seed; `None` picks one at startup
    pub seed: Option<u64>,
    /// Number of ticks the demo runs for
    pub ticks: u64,
    /// Explode the largest ball every this many ticks (0 disables)
    pub explode_every: u64,
}

impl Default for Settings {
    fn default() -> Self {
        let (width, height) = Playfield::default().dimensions();
        Self {
            width,
            height,

            gravity: 0.2,
            bounce_factor: DEFAULT_BOUNCE_FACTOR,
            max_launch_speed: 5.0,

            ball_radius: 32.0,
            initial_balls: 3,
            min_explode_radius: 4.0,
            palette: ["red", "green", "blue", "orange"]
                .into_iter()
                .map(String::from)
                .collect(),

            seed: None,
            ticks: 600,
            explode_every: 120,
        }
    }
}

impl Settings {
    /// Defaults with the playfield taken from a preset
    pub fn from_playfield(playfield: Playfield) -> Self {
        let mut settings = Self::default();
        settings.apply_playfield(playfield);
        settings
    }

    pub fn apply_playfield(&mut self, playfield: Playfield) {
        (self.width, self.height) = playfield.dimensions();
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Read settings from a JSON file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
