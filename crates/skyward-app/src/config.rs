//! Host configuration. Loaded from `skyward.ron` at startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Host settings. Every field may be omitted from the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Display refresh rate both loops are paced at.
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    /// World and fireworks seed.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Fireworks canvas width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Fireworks canvas height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
    /// How long a headless run lasts before shutdown.
    #[serde(default = "default_run_secs")]
    pub run_secs: f64,
    /// Log a HUD line every this many frames (0 = never).
    #[serde(default = "default_hud_log_interval")]
    pub hud_log_interval: u32,
}

fn default_frame_rate() -> u32 {
    skyward_core::constants::FRAME_RATE
}
fn default_seed() -> u64 {
    42
}
fn default_width() -> u32 {
    skyward_fireworks::constants::DEFAULT_WIDTH
}
fn default_height() -> u32 {
    skyward_fireworks::constants::DEFAULT_HEIGHT
}
fn default_run_secs() -> f64 {
    10.0
}
fn default_hud_log_interval() -> u32 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            seed: default_seed(),
            width: default_width(),
            height: default_height(),
            run_secs: default_run_secs(),
            hud_log_interval: default_hud_log_interval(),
        }
    }
}

impl AppConfig {
    /// Load from `path`, or `skyward.ron` in the working directory. A missing
    /// or invalid file yields the defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
        match std::fs::read_to_string(&path) {
            Ok(data) => Self::parse(&data).unwrap_or_else(|e| {
                log::warn!("Invalid config at {:?}: {}, using defaults", path, e);
                Self::default()
            }),
            Err(_) => {
                log::debug!("No config at {:?}, using defaults", path);
                Self::default()
            }
        }
    }

    pub fn parse(data: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(data)
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("skyward.ron")
}
