//! Shows: a free-standing burst, or a volley of rockets that each burst.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::particle::Particle;
use crate::rocket::Rocket;

/// A cloud of particles expanding from one point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Burst {
    pub particles: Vec<Particle>,
}

impl Burst {
    /// 40 to 79 particles at `origin`, each with its own palette color.
    pub fn spawn(rng: &mut impl Rng, origin: DVec2) -> Self {
        let count = rng.gen_range(BURST_PARTICLES.0..BURST_PARTICLES.1);
        let particles = (0..count).map(|_| Particle::spawn(rng, origin)).collect();
        Self { particles }
    }

    /// Update every particle, then drop the dead ones.
    pub fn update(&mut self) {
        for p in &mut self.particles {
            p.update();
        }
        self.particles.retain(|p| !p.is_dead());
    }

    pub fn is_drained(&self) -> bool {
        self.particles.is_empty()
    }
}

/// One rocket and, once it has exploded, its burst.
///
/// The exploded rocket stays here, inert, until its burst has drained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    pub rocket: Rocket,
    pub burst: Option<Burst>,
}

impl Launch {
    pub fn new(rocket: Rocket) -> Self {
        Self { rocket, burst: None }
    }

    /// Returns true on the update that spawned the burst.
    pub fn update(&mut self, rng: &mut impl Rng) -> bool {
        let exploded = self.rocket.update();
        if exploded && self.burst.is_none() {
            self.burst = Some(Burst::spawn(rng, self.rocket.position));
        }
        if let Some(burst) = &mut self.burst {
            burst.update();
        }
        exploded
    }

    pub fn is_drained(&self) -> bool {
        self.burst.as_ref().is_some_and(Burst::is_drained)
    }
}

/// A set of rockets launched together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Volley {
    pub launches: Vec<Launch>,
    /// Bursts spawned over the volley's life.
    pub bursts_spawned: usize,
}

impl Volley {
    pub fn new(rockets: Vec<Rocket>) -> Self {
        Self {
            launches: rockets.into_iter().map(Launch::new).collect(),
            bursts_spawned: 0,
        }
    }

    /// Advance every launch, then drop the ones whose burst has drained.
    pub fn update(&mut self, rng: &mut impl Rng) {
        for launch in &mut self.launches {
            if launch.update(rng) {
                self.bursts_spawned += 1;
            }
        }
        self.launches.retain(|l| !l.is_drained());
    }

    pub fn is_drained(&self) -> bool {
        self.launches.is_empty()
    }

    /// Rockets that have not exploded yet.
    pub fn climbing(&self) -> impl Iterator<Item = &Rocket> {
        self.launches
            .iter()
            .map(|l| &l.rocket)
            .filter(|r| !r.exploded)
    }

    /// Bursts still burning.
    pub fn bursts(&self) -> impl Iterator<Item = &Burst> {
        self.launches.iter().filter_map(|l| l.burst.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Show {
    Burst(Burst),
    Volley(Volley),
}

impl Show {
    pub fn update(&mut self, rng: &mut impl Rng) {
        match self {
            Show::Burst(burst) => burst.update(),
            Show::Volley(volley) => volley.update(rng),
        }
    }

    pub fn is_drained(&self) -> bool {
        match self {
            Show::Burst(burst) => burst.is_drained(),
            Show::Volley(volley) => volley.is_drained(),
        }
    }

    /// Rockets still climbing.
    pub fn rockets(&self) -> Box<dyn Iterator<Item = &Rocket> + '_> {
        match self {
            Show::Burst(_) => Box::new(std::iter::empty()),
            Show::Volley(volley) => Box::new(volley.climbing()),
        }
    }

    /// Every live particle, across all of this show's bursts.
    pub fn particles(&self) -> Box<dyn Iterator<Item = &Particle> + '_> {
        match self {
            Show::Burst(burst) => Box::new(burst.particles.iter()),
            Show::Volley(volley) => Box::new(volley.bursts().flat_map(|b| b.particles.iter())),
        }
    }
}
