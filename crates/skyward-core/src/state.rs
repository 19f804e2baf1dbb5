//! Flight snapshot (the complete visible state handed to the presentation
//! layer after each frame) and the static scene built once at startup.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::components::CloudPuff;
use crate::enums::*;
use crate::events::FlightEvent;
use crate::types::SimTime;

/// Complete frame state for the renderer and HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlightSnapshot {
    pub time: SimTime,
    pub phase: FlightPhase,
    pub plane: PlaneView,
    pub camera: CameraView,
    pub balloons: Vec<BalloonView>,
    pub clouds: Vec<CloudView>,
    pub hud: HudView,
    /// Present while the crash screen is up.
    pub crash_overlay: Option<CrashOverlayView>,
    pub events: Vec<FlightEvent>,
}

/// Plane pose.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlaneView {
    pub position: DVec3,
    /// Body rotation (pitch about x, yaw about y, roll about z).
    pub rotation: DQuat,
    /// Propeller spin angle (radians).
    pub propeller_angle: f64,
}

/// Chase camera pose.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CameraView {
    pub position: DVec3,
    pub look_at: DVec3,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BalloonView {
    pub id: u32,
    pub position: DVec3,
    /// Spin about the vertical axis (radians).
    pub yaw: f64,
    pub material: BalloonMaterial,
    /// Glow color for `material` (0xRRGGBB).
    pub emissive: u32,
    pub emissive_intensity: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CloudView {
    pub id: u32,
    pub position: DVec3,
}

/// HUD readouts, already rounded for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HudView {
    pub speed: i64,
    pub altitude: i64,
    pub pitch: i64,
    pub roll: i64,
    pub yaw: i64,
    pub score: u32,
    pub collision_warning: bool,
}

/// Crash screen contents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrashOverlayView {
    pub final_score: u32,
    /// Seconds until the automatic reset.
    pub remaining_secs: f64,
}

/// Static scenery, generated once from the world seed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneDescription {
    pub terrain: TerrainView,
    pub water: WaterView,
    pub sky: SkyView,
    pub lighting: LightingView,
    pub camera: ProjectionView,
    /// Cloud layouts by cloud id.
    pub clouds: Vec<CloudShapeView>,
}

/// Ground heightfield: `(segments + 1)^2` vertex heights, row-major.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TerrainView {
    pub size: f64,
    pub segments: usize,
    pub base_y: f64,
    pub heights: Vec<f64>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WaterView {
    pub center: DVec3,
    pub size: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SkyView {
    pub radius: f64,
    pub color: u32,
    pub fog_near: f64,
    pub fog_far: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LightingView {
    pub ambient_intensity: f64,
    pub sun_intensity: f64,
    pub sun_position: DVec3,
    pub shadow_map_size: u32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ProjectionView {
    pub fov_deg: f64,
    pub near: f64,
    pub far: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CloudShapeView {
    pub id: u32,
    pub puffs: Vec<CloudPuff>,
}
