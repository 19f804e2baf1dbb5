//! Fundamental geometric and simulation types.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// World-space position in scene units.
/// x = lateral, y = up (altitude), z = forward at zero yaw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec3);

/// Aircraft attitude in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Attitude {
    /// Rotation about x. Positive = nose down.
    pub pitch: f64,
    /// Rotation about z.
    pub roll: f64,
    /// Rotation about y. Unbounded heading.
    pub yaw: f64,
}

/// Frame time tracking.
///
/// `elapsed_secs` follows the host's wall clock rather than a frame count,
/// so timed transitions keep their duration when frames are dropped.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of frames simulated so far.
    pub frame: u64,
    /// Host clock reading (seconds) at the most recent frame.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Straight-line distance to another position.
    pub fn range_to(&self, other: &Position) -> f64 {
        self.0.distance(other.0)
    }
}

impl Attitude {
    pub fn new(pitch: f64, roll: f64, yaw: f64) -> Self {
        Self { pitch, roll, yaw }
    }

    /// Body rotation, composed in XYZ order (x = pitch, y = yaw, z = roll).
    pub fn rotation(&self) -> DQuat {
        DQuat::from_rotation_x(self.pitch.to_radians())
            * DQuat::from_rotation_y(self.yaw.to_radians())
            * DQuat::from_rotation_z(self.roll.to_radians())
    }

    /// Unit nose direction (body +z rotated into world space).
    pub fn forward(&self) -> DVec3 {
        self.rotation() * DVec3::Z
    }

    /// Heading as shown on the HUD: rounded degrees, wrapped to (-360, 360).
    /// The sign is kept, so a left turn reads negative.
    pub fn display_yaw(&self) -> i64 {
        (self.yaw.round() as i64) % 360
    }
}

impl SimTime {
    /// Record a new frame observed at `now_secs` on the host clock.
    pub fn advance_to(&mut self, now_secs: f64) {
        self.frame += 1;
        self.elapsed_secs = now_secs;
    }
}
