//! Collision system: plane-to-balloon proximity checks.
//!
//! Brute force over every balloon; the balloon count is small and fixed.

use glam::DVec3;
use hecs::{Entity, World};

use skyward_core::components::Balloon;
use skyward_core::constants::{HIT_MARGIN, WARN_MARGIN};
use skyward_core::enums::BalloonMaterial;
use skyward_core::types::Position;

/// Result of one proximity pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollisionReport {
    /// Some balloon is inside its warning distance.
    pub warning: bool,
    /// First balloon found inside its hit distance.
    pub hit: Option<Hit>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub entity: Entity,
    pub balloon_id: u32,
}

/// Check every balloon against the plane position.
/// Read-only; the caller decides what a hit does.
pub fn run(world: &World, plane: DVec3) -> CollisionReport {
    let plane = Position(plane);
    let mut report = CollisionReport::default();

    for (entity, (balloon, pos)) in world.query::<(&Balloon, &Position)>().iter() {
        let distance = plane.range_to(pos);

        if distance < balloon.radius + WARN_MARGIN {
            report.warning = true;
        }
        if report.hit.is_none() && distance < balloon.radius + HIT_MARGIN {
            report.hit = Some(Hit {
                entity,
                balloon_id: balloon.id,
            });
        }
    }

    report
}

/// Flag a struck balloon.
pub fn mark_hit(world: &mut World, entity: Entity) {
    if let Ok(mut balloon) = world.get::<&mut Balloon>(entity) {
        balloon.material = BalloonMaterial::Hit;
    }
}

/// Return every balloon to its normal look.
pub fn restore_materials(world: &mut World) {
    for (_entity, balloon) in world.query_mut::<&mut Balloon>() {
        balloon.material = BalloonMaterial::Normal;
    }
}
