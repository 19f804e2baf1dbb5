//! Snapshot system: queries the ECS world and builds a complete FlightSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use skyward_core::components::*;
use skyward_core::events::FlightEvent;
use skyward_core::state::*;
use skyward_core::types::{Position, SimTime};

use crate::camera::CameraRig;
use crate::crash::CrashState;
use crate::flight::FlightState;

/// Build a complete FlightSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    flight: &FlightState,
    camera: &CameraRig,
    crash: &CrashState,
    events: Vec<FlightEvent>,
) -> FlightSnapshot {
    FlightSnapshot {
        time: *time,
        phase: crash.phase(),
        plane: PlaneView {
            position: flight.position,
            rotation: flight.attitude.rotation(),
            propeller_angle: flight.propeller_angle,
        },
        camera: camera.view(),
        balloons: build_balloons(world),
        clouds: build_clouds(world),
        hud: build_hud(flight),
        crash_overlay: crash.overlay(time.elapsed_secs),
        events,
    }
}

/// HUD readouts, rounded for display.
pub fn build_hud(flight: &FlightState) -> HudView {
    HudView {
        speed: flight.speed.round() as i64,
        altitude: flight.altitude.round() as i64,
        pitch: flight.attitude.pitch.round() as i64,
        roll: flight.attitude.roll.round() as i64,
        yaw: flight.attitude.display_yaw(),
        score: flight.score,
        collision_warning: flight.collision_warning,
    }
}

fn build_balloons(world: &World) -> Vec<BalloonView> {
    let mut balloons: Vec<BalloonView> = world
        .query::<(&Balloon, &Position, Option<&Spin>)>()
        .iter()
        .map(|(_, (balloon, pos, spin))| BalloonView {
            id: balloon.id,
            position: pos.0,
            yaw: spin.map(|s| s.yaw).unwrap_or_default(),
            material: balloon.material,
            emissive: balloon.material.emissive(),
            emissive_intensity: balloon.material.emissive_intensity(),
        })
        .collect();
    balloons.sort_by_key(|b| b.id);
    balloons
}

fn build_clouds(world: &World) -> Vec<CloudView> {
    let mut clouds: Vec<CloudView> = world
        .query::<(&Cloud, &Position)>()
        .iter()
        .map(|(_, (cloud, pos))| CloudView {
            id: cloud.id,
            position: pos.0,
        })
        .collect();
    clouds.sort_by_key(|c| c.id);
    clouds
}
