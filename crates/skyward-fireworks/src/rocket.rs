//! Rising rockets.

use std::collections::VecDeque;

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::{random_neon, Rgb};
use crate::constants::*;

/// A rocket climbing toward its burst height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rocket {
    pub position: DVec2,
    /// Burst height. The rocket explodes once `position.y <= target_y`.
    pub target_y: f64,
    pub color: Rgb,
    pub speed: f64,
    /// Recent positions, oldest first, at most `TRAIL_LEN` long.
    pub trail: VecDeque<DVec2>,
    pub exploded: bool,
}

impl Rocket {
    pub fn new(position: DVec2, target_y: f64, speed: f64, color: Rgb) -> Self {
        Self {
            position,
            target_y,
            color,
            speed,
            trail: VecDeque::with_capacity(TRAIL_LEN + 1),
            exploded: false,
        }
    }

    /// A rocket at `position` with random speed and color.
    pub fn spawn(rng: &mut impl Rng, position: DVec2, target_y: f64) -> Self {
        let speed = rng.gen_range(ROCKET_SPEED.0..ROCKET_SPEED.1);
        Self::new(position, target_y, speed, random_neon(rng))
    }

    /// Advance one frame. Returns true on the update in which the rocket
    /// explodes, and only then.
    pub fn update(&mut self) -> bool {
        if self.exploded {
            return false;
        }
        if self.position.y > self.target_y {
            self.trail.push_back(self.position);
            if self.trail.len() > TRAIL_LEN {
                self.trail.pop_front();
            }
            self.position.y -= self.speed;
        }
        if self.position.y <= self.target_y {
            self.exploded = true;
        }
        self.exploded
    }
}
