//! Burst particles.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::{random_neon, Rgb};
use crate::constants::*;

/// One spark of a burst.
///
/// Alpha is derived from the number of updates survived, so a particle with
/// decay `d` is dead after exactly `ceil(1 / d)` updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: DVec2,
    pub radius: f64,
    pub color: Rgb,
    /// Travel direction (radians, canvas space: +y is down).
    pub angle: f64,
    pub speed: f64,
    /// Alpha lost per update.
    pub decay: f64,
    /// Updates survived.
    pub age: u32,
}

impl Particle {
    pub fn new(position: DVec2, color: Rgb, angle: f64, speed: f64, decay: f64, radius: f64) -> Self {
        Self {
            position,
            radius,
            color,
            angle,
            speed,
            decay,
            age: 0,
        }
    }

    /// A particle at `origin` with random size, heading, speed, decay and color.
    pub fn spawn(rng: &mut impl Rng, origin: DVec2) -> Self {
        Self::new(
            origin,
            random_neon(rng),
            rng.gen_range(0.0..std::f64::consts::TAU),
            rng.gen_range(PARTICLE_SPEED.0..PARTICLE_SPEED.1),
            rng.gen_range(PARTICLE_DECAY.0..PARTICLE_DECAY.1),
            rng.gen_range(PARTICLE_RADIUS.0..PARTICLE_RADIUS.1),
        )
    }

    pub fn alpha(&self) -> f64 {
        1.0 - self.age as f64 * self.decay
    }

    pub fn is_dead(&self) -> bool {
        self.alpha() <= 0.0
    }

    /// Move along the heading, lose alpha, then slow down.
    pub fn update(&mut self) {
        self.position += DVec2::from_angle(self.angle) * self.speed;
        self.age += 1;
        self.speed *= PARTICLE_DRAG;
    }
}
