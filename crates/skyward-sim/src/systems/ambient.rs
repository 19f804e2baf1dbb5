//! Ambient animation: drifting clouds and bobbing balloons.

use hecs::World;

use skyward_core::components::{Bobbing, Cloud, Spin};
use skyward_core::constants::*;
use skyward_core::types::Position;

/// Push clouds along +x, wrapping to the far side past the bound.
pub fn drift_clouds(world: &mut World) {
    for (_entity, (_cloud, pos)) in world.query_mut::<(&Cloud, &mut Position)>() {
        pos.0.x += CLOUD_DRIFT;
        if pos.0.x > CLOUD_WRAP {
            pos.0.x = -CLOUD_WRAP;
        }
    }
}

/// Bob and spin balloons.
///
/// `elapsed_secs` is the host clock. Only the change in the bob sample since
/// the previous frame is applied, scaled down for smoothing.
pub fn bob_balloons(world: &mut World, elapsed_secs: f64) {
    for (_entity, (bob, pos)) in world.query_mut::<(&mut Bobbing, &mut Position)>() {
        let sample =
            BALLOON_BOB_AMPLITUDE * (elapsed_secs * bob.speed + bob.phase_offset).sin();
        pos.0.y += (sample - bob.last_sample) * BALLOON_BOB_SMOOTHING;
        bob.last_sample = sample;
    }

    for (_entity, spin) in world.query_mut::<&mut Spin>() {
        spin.yaw += BALLOON_SPIN_RATE;
    }
}
