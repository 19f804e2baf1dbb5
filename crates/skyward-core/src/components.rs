//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::BalloonMaterial;

/// Obstacle the plane must avoid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Balloon {
    /// Stable identifier reported in snapshots and crash events.
    pub id: u32,
    /// Collision radius. Never changes after spawn.
    pub radius: f64,
    pub material: BalloonMaterial,
}

/// Sinusoidal vertical drift.
///
/// The height is nudged by the change between consecutive samples, never set
/// from the sample directly, so the baseline carries whatever drift has built up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bobbing {
    /// Angular rate applied to elapsed seconds.
    pub speed: f64,
    /// Phase offset (radians).
    pub phase_offset: f64,
    /// Previous sample of `amplitude * sin(...)`.
    pub last_sample: f64,
}

/// Heading of a slowly spinning object (radians).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Spin {
    pub yaw: f64,
}

/// Marks a drifting cloud.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cloud {
    pub id: u32,
}

/// One sphere of a cloud, relative to the cloud's position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CloudPuff {
    pub offset: DVec3,
    pub radius: f64,
}
