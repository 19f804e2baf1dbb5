//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level flight state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightPhase {
    #[default]
    Flying,
    /// Hit a balloon; waiting for the automatic reset.
    Crashed,
}

/// Balloon surface state as drawn by the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalloonMaterial {
    /// Yellow glow.
    #[default]
    Normal,
    /// Struck by the plane: full red glow.
    Hit,
}

impl BalloonMaterial {
    /// Emissive color (0xRRGGBB).
    pub fn emissive(self) -> u32 {
        match self {
            BalloonMaterial::Normal => 0xffff00,
            BalloonMaterial::Hit => 0xff0000,
        }
    }

    pub fn emissive_intensity(self) -> f64 {
        match self {
            BalloonMaterial::Normal => 0.2,
            BalloonMaterial::Hit => 1.0,
        }
    }
}
