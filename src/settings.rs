// Command line and settings file

use clap::Parser;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use winit::keyboard::KeyCode;

use crate::engine::game_loop::DEFAULT_TICK_RATE;
use crate::engine::input::Action;
use crate::game::characters::{CatTuning, TuningError};

/// A 2D platformer starring a giraffe cat
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON settings file; built-in defaults are used when absent
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Start with the debug overlay on
    #[arg(long)]
    pub debug_overlay: bool,
}

/// Settings loading errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid setting {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error(transparent)]
    Tuning(#[from] TuningError),
}

/// Window properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Giraffe Cat".to_string(),
            width: 640,
            height: 480,
        }
    }
}

/// Everything configurable from the settings file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    /// Simulation updates per second
    pub tick_rate: f32,
    pub tuning: CatTuning,
    /// Replacement keys per action, e.g. `{ "Jump": ["Space"] }`
    pub bindings: HashMap<Action, Vec<KeyCode>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            tick_rate: DEFAULT_TICK_RATE,
            tuning: CatTuning::default(),
            bindings: HashMap::new(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate a settings file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Settings for this run: the file named on the command line if it loads,
    /// otherwise the defaults
    pub fn resolve(args: &Args) -> Self {
        match &args.settings {
            Some(path) => Self::load(path).unwrap_or_else(|e| {
                warn!("{}; using default settings", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.tick_rate > 0.0) || !self.tick_rate.is_finite() {
            return Err(SettingsError::Invalid {
                field: "tick_rate",
                reason: format!("{} is not a positive rate", self.tick_rate),
            });
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(SettingsError::Invalid {
                field: "window",
                reason: format!(
                    "{}x{} has no area",
                    self.window.width, self.window.height
                ),
            });
        }
        self.tuning.validate()?;
        Ok(())
    }
}
