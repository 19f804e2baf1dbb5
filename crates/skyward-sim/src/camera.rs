//! Chase camera.

use glam::DVec3;

use skyward_core::constants::{CAMERA_FOLLOW_FACTOR, CAMERA_OFFSET};
use skyward_core::state::CameraView;

use crate::flight::FlightState;

/// Camera that trails the plane from behind and above.
///
/// Each frame it closes a fixed fraction of the gap to its desired spot, so
/// it never snaps, and it always looks at the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub position: DVec3,
    pub look_at: DVec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        let [x, y, z] = CAMERA_OFFSET;
        Self {
            position: DVec3::new(x, y, z),
            look_at: DVec3::ZERO,
        }
    }
}

impl CameraRig {
    /// Where the camera wants to be for the given plane pose.
    pub fn desired_position(plane: &FlightState) -> DVec3 {
        let [x, y, z] = CAMERA_OFFSET;
        plane.position + plane.attitude.rotation() * DVec3::new(x, y, z)
    }

    /// Move one frame toward the desired position.
    pub fn follow(&mut self, plane: &FlightState) {
        let desired = Self::desired_position(plane);
        self.position = self.position.lerp(desired, CAMERA_FOLLOW_FACTOR);
        self.look_at = plane.position;
    }

    pub fn view(&self) -> CameraView {
        CameraView {
            position: self.position,
            look_at: self.look_at,
        }
    }
}
