//! Entity spawn factories for setting up the simulation world.
//!
//! Creates clouds and balloons with their component bundles, and generates
//! the static scenery handed to the renderer.

use glam::DVec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyward_core::components::*;
use skyward_core::constants::*;
use skyward_core::enums::BalloonMaterial;
use skyward_core::state::*;
use skyward_core::types::Position;

/// Populate the world and return the scenery it sits in.
/// Draw order is fixed (terrain, clouds, balloons) so a seed fully
/// determines the result.
pub fn setup_world(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    cloud_count: usize,
    balloon_count: usize,
) -> SceneDescription {
    let terrain = build_terrain(rng);

    let mut cloud_shapes = Vec::with_capacity(cloud_count);
    for id in 0..cloud_count as u32 {
        let puffs = spawn_cloud(world, rng, id);
        cloud_shapes.push(CloudShapeView { id, puffs });
    }

    for id in 0..balloon_count as u32 {
        spawn_balloon(world, rng, id);
    }

    log::info!(
        "world ready: {} clouds, {} balloons, {} terrain vertices",
        cloud_count,
        balloon_count,
        terrain.heights.len()
    );

    SceneDescription {
        terrain,
        water: WaterView {
            center: DVec3::from_array(WATER_CENTER),
            size: WATER_SIZE,
        },
        sky: SkyView {
            radius: SKY_RADIUS,
            color: SKY_COLOR,
            fog_near: FOG_NEAR,
            fog_far: FOG_FAR,
        },
        lighting: LightingView {
            ambient_intensity: AMBIENT_LIGHT_INTENSITY,
            sun_intensity: SUN_INTENSITY,
            sun_position: DVec3::from_array(SUN_POSITION),
            shadow_map_size: SHADOW_MAP_SIZE,
        },
        camera: ProjectionView {
            fov_deg: CAMERA_FOV_DEG,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        },
        clouds: cloud_shapes,
    }
}

/// Rolling ground: one random height per grid vertex.
fn build_terrain(rng: &mut ChaCha8Rng) -> TerrainView {
    let vertices = (TERRAIN_SEGMENTS + 1) * (TERRAIN_SEGMENTS + 1);
    let heights = (0..vertices)
        .map(|_| rng.gen_range(-TERRAIN_ROUGHNESS..TERRAIN_ROUGHNESS))
        .collect();
    TerrainView {
        size: TERRAIN_SIZE,
        segments: TERRAIN_SEGMENTS,
        base_y: TERRAIN_BASE_Y,
        heights,
    }
}

/// Spawn a cloud made of a few overlapping puffs. Returns the puff layout.
pub fn spawn_cloud(world: &mut World, rng: &mut ChaCha8Rng, id: u32) -> Vec<CloudPuff> {
    let puffs: Vec<CloudPuff> = (0..CLOUD_PUFFS)
        .map(|_| {
            let radius = rng.gen_range(10.0..30.0);
            let offset = DVec3::new(
                rng.gen_range(-20.0..20.0),
                rng.gen_range(0.0..10.0),
                rng.gen_range(-20.0..20.0),
            );
            CloudPuff { offset, radius }
        })
        .collect();

    let position = Position::new(
        rng.gen_range(CLOUD_SPAWN_XZ.0..CLOUD_SPAWN_XZ.1),
        rng.gen_range(CLOUD_SPAWN_Y.0..CLOUD_SPAWN_Y.1),
        rng.gen_range(CLOUD_SPAWN_XZ.0..CLOUD_SPAWN_XZ.1),
    );

    world.spawn((Cloud { id }, position));
    puffs
}

/// Spawn a balloon somewhere ahead of the start position.
pub fn spawn_balloon(world: &mut World, rng: &mut ChaCha8Rng, id: u32) -> hecs::Entity {
    let position = Position::new(
        rng.gen_range(BALLOON_SPAWN_X.0..BALLOON_SPAWN_X.1),
        rng.gen_range(BALLOON_SPAWN_Y.0..BALLOON_SPAWN_Y.1),
        rng.gen_range(BALLOON_SPAWN_Z.0..BALLOON_SPAWN_Z.1),
    );
    let spin = Spin {
        yaw: rng.gen_range(0.0..std::f64::consts::TAU),
    };
    let bobbing = Bobbing {
        speed: rng.gen_range(BALLOON_BOB_SPEED_MIN..BALLOON_BOB_SPEED_MAX),
        phase_offset: rng.gen_range(0.0..std::f64::consts::TAU),
        last_sample: 0.0,
    };

    world.spawn((
        Balloon {
            id,
            radius: BALLOON_RADIUS,
            material: BalloonMaterial::Normal,
        },
        position,
        spin,
        bobbing,
    ))
}

/// Spawn a motionless balloon at an exact spot (for tests that need known geometry).
#[cfg(test)]
pub fn spawn_fixed_balloon(world: &mut World, id: u32, position: DVec3) -> hecs::Entity {
    world.spawn((
        Balloon {
            id,
            radius: BALLOON_RADIUS,
            material: BalloonMaterial::Normal,
        },
        Position(position),
    ))
}
