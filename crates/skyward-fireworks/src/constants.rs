//! Fireworks tuning. Lengths are canvas pixels, rates are per frame.

use crate::color::Rgb;

/// Default viewport when the host has not reported one.
pub const DEFAULT_WIDTH: u32 = 1280;
pub const DEFAULT_HEIGHT: u32 = 720;

// --- Frame fade ---

/// Fill used to fade the previous frame (destination-out).
pub const FADE_COLOR: Rgb = Rgb::new(20, 20, 30);
pub const FADE_ALPHA: f64 = 0.25;

/// Glow blur applied to every disc.
pub const GLOW_BLUR: f64 = 20.0;

// --- Particles ---

pub const PARTICLE_RADIUS: (f64, f64) = (2.0, 5.0);
pub const PARTICLE_SPEED: (f64, f64) = (2.0, 8.0);
/// Alpha lost per frame.
pub const PARTICLE_DECAY: (f64, f64) = (0.01, 0.03);
/// Speed multiplier applied after each move.
pub const PARTICLE_DRAG: f64 = 0.96;

/// Particles per burst (upper bound exclusive).
pub const BURST_PARTICLES: (usize, usize) = (40, 80);

/// Keep-out border for free-standing bursts.
pub const BURST_MARGIN: f64 = 200.0;

// --- Rockets ---

/// Rockets per volley (upper bound exclusive).
pub const VOLLEY_ROCKETS: (usize, usize) = (3, 7);

/// Horizontal keep-out border for launch points.
pub const ROCKET_MARGIN_X: f64 = 150.0;

/// Launch height above the bottom edge.
pub const ROCKET_LAUNCH_INSET: f64 = 10.0;

/// Highest point (smallest y) a rocket may be aimed at.
pub const ROCKET_TARGET_MIN_Y: f64 = 120.0;

pub const ROCKET_SPEED: (f64, f64) = (7.0, 12.0);
pub const ROCKET_RADIUS: f64 = 6.0;

pub const TRAIL_LEN: usize = 10;
pub const TRAIL_RADIUS: f64 = 3.0;
/// Alpha of the newest trail dot.
pub const TRAIL_MAX_ALPHA: f64 = 0.7;
