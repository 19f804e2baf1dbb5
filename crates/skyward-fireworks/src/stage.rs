//! The fireworks stage: every active show on one canvas.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::rocket::Rocket;
use crate::show::{Burst, Show, Volley};

/// Stage configuration.
#[derive(Debug, Clone)]
pub struct StageConfig {
    pub seed: u64,
    pub width: u32,
    pub height: u32,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Whether the host should schedule another frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    Continue,
    Stop,
}

/// Live entity counts, for logging and the host status line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageStats {
    pub shows: usize,
    pub rockets: usize,
    pub particles: usize,
}

pub struct Stage {
    shows: Vec<Show>,
    rng: ChaCha8Rng,
    viewport: Viewport,
    frame: u64,
}

impl Stage {
    pub fn new(config: StageConfig) -> Self {
        Self {
            shows: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            viewport: Viewport {
                width: config.width as f64,
                height: config.height as f64,
            },
            frame: 0,
        }
    }

    /// One burst at a random point away from the edges.
    pub fn launch_burst(&mut self) {
        let Viewport { width, height } = self.viewport;
        let origin = DVec2::new(
            random_between(&mut self.rng, BURST_MARGIN, width - BURST_MARGIN),
            random_between(&mut self.rng, BURST_MARGIN, height - BURST_MARGIN),
        );
        let burst = Burst::spawn(&mut self.rng, origin);
        log::info!(
            "Burst at ({:.0}, {:.0}) with {} particles",
            origin.x,
            origin.y,
            burst.particles.len()
        );
        self.shows.push(Show::Burst(burst));
    }

    /// A volley of 3 to 6 rockets rising from the bottom edge.
    pub fn launch_rockets(&mut self) {
        let Viewport { width, height } = self.viewport;
        let count = self.rng.gen_range(VOLLEY_ROCKETS.0..VOLLEY_ROCKETS.1);
        let rockets: Vec<Rocket> = (0..count)
            .map(|_| {
                let x = random_between(&mut self.rng, ROCKET_MARGIN_X, width - ROCKET_MARGIN_X);
                let target_y = random_between(&mut self.rng, ROCKET_TARGET_MIN_Y, height / 2.0);
                let start = DVec2::new(x, height - ROCKET_LAUNCH_INSET);
                Rocket::spawn(&mut self.rng, start, target_y)
            })
            .collect();
        log::info!("Launched volley of {} rockets", rockets.len());
        self.launch_volley(rockets);
    }

    /// Add a volley of prepared rockets.
    pub fn launch_volley(&mut self, rockets: Vec<Rocket>) {
        self.shows.push(Show::Volley(Volley::new(rockets)));
    }

    /// Later launches use the new size. Shows in flight are left alone.
    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!("Stage resized to {}x{}", width, height);
        self.viewport = Viewport {
            width: width as f64,
            height: height as f64,
        };
    }

    /// Advance every show one frame and drop the ones that have finished.
    pub fn tick(&mut self) -> TickOutcome {
        self.frame += 1;
        for show in &mut self.shows {
            show.update(&mut self.rng);
        }
        let before = self.shows.len();
        self.shows.retain(|s| !s.is_drained());
        if before > 0 && self.shows.is_empty() {
            log::info!("Fireworks finished at frame {}", self.frame);
        }

        if self.is_idle() {
            TickOutcome::Stop
        } else {
            TickOutcome::Continue
        }
    }

    pub fn is_idle(&self) -> bool {
        self.shows.is_empty()
    }

    pub fn shows(&self) -> &[Show] {
        &self.shows
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn stats(&self) -> StageStats {
        StageStats {
            shows: self.shows.len(),
            rockets: self.shows.iter().map(|s| s.rockets().count()).sum(),
            particles: self.shows.iter().map(|s| s.particles().count()).sum(),
        }
    }
}

/// Uniform in `[low, high)`. An empty range collapses to `low`.
pub fn random_between(rng: &mut impl Rng, low: f64, high: f64) -> f64 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}
