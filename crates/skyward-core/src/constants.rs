//! Simulation constants and tuning parameters.
//!
//! All per-frame rates assume one update per display refresh.

/// Nominal display refresh rate the per-frame rates were tuned for (Hz).
pub const FRAME_RATE: u32 = 60;

// --- Plane ---

/// Initial plane position.
pub const PLANE_START: [f64; 3] = [0.0, 500.0, 0.0];

/// Initial cruise speed.
pub const INITIAL_SPEED: f64 = 100.0;

pub const MIN_SPEED: f64 = 50.0;
pub const MAX_SPEED: f64 = 300.0;

/// Speed change per frame while a throttle key is held.
pub const SPEED_STEP: f64 = 2.0;

/// Attitude change per frame while a stick key is held (degrees).
pub const ATTITUDE_STEP_DEG: f64 = 1.0;

/// Yaw change per frame while a rudder key is held (degrees).
pub const YAW_STEP_DEG: f64 = 1.0;

pub const MAX_PITCH_DEG: f64 = 60.0;
pub const MAX_ROLL_DEG: f64 = 60.0;

/// Self-centering factor applied to pitch/roll with no stick input.
pub const ATTITUDE_DAMPING: f64 = 0.95;

/// Distance flown per frame per unit of speed.
pub const MOVE_SCALE: f64 = 0.02;

/// Lowest altitude the plane can reach.
pub const MIN_ALTITUDE: f64 = 10.0;

/// Propeller rotation per frame per unit of speed (radians).
pub const PROPELLER_SPIN_SCALE: f64 = 0.01;

// --- Camera ---

/// Chase camera offset in the plane's body frame.
pub const CAMERA_OFFSET: [f64; 3] = [0.0, 5.0, -20.0];

/// Fraction of the remaining distance the camera covers each frame.
pub const CAMERA_FOLLOW_FACTOR: f64 = 0.1;

pub const CAMERA_FOV_DEG: f64 = 75.0;
pub const CAMERA_NEAR: f64 = 0.1;
pub const CAMERA_FAR: f64 = 10_000.0;

// --- Balloons ---

pub const BALLOON_COUNT: usize = 40;

/// Collision radius of a balloon.
pub const BALLOON_RADIUS: f64 = 7.0;

/// Extra distance beyond the radius that raises the HUD warning.
pub const WARN_MARGIN: f64 = 15.0;

/// Extra distance beyond the radius that counts as a hit.
pub const HIT_MARGIN: f64 = 3.0;

pub const BALLOON_BOB_AMPLITUDE: f64 = 3.0;

/// Share of each new bob delta applied to the balloon's height.
pub const BALLOON_BOB_SMOOTHING: f64 = 0.1;

pub const BALLOON_BOB_SPEED_MIN: f64 = 0.01;
pub const BALLOON_BOB_SPEED_MAX: f64 = 0.03;

/// Balloon spin per frame (radians).
pub const BALLOON_SPIN_RATE: f64 = 0.002;

pub const BALLOON_SPAWN_X: (f64, f64) = (-1500.0, 1500.0);
pub const BALLOON_SPAWN_Y: (f64, f64) = (100.0, 400.0);
pub const BALLOON_SPAWN_Z: (f64, f64) = (200.0, 3200.0);

// --- Clouds ---

pub const CLOUD_COUNT: usize = 50;

/// Puffs per cloud.
pub const CLOUD_PUFFS: usize = 5;

/// Horizontal cloud drift per frame.
pub const CLOUD_DRIFT: f64 = 0.1;

/// Clouds past +CLOUD_WRAP on x reappear at -CLOUD_WRAP.
pub const CLOUD_WRAP: f64 = 2000.0;

pub const CLOUD_SPAWN_XZ: (f64, f64) = (-2000.0, 2000.0);
pub const CLOUD_SPAWN_Y: (f64, f64) = (200.0, 500.0);

// --- Crash ---

/// Wall-clock time between a crash and the automatic reset (seconds).
pub const CRASH_RESET_DELAY_SECS: f64 = 3.0;

// --- Scenery ---

pub const TERRAIN_SIZE: f64 = 5000.0;
pub const TERRAIN_SEGMENTS: usize = 50;
pub const TERRAIN_BASE_Y: f64 = -50.0;

/// Terrain vertex heights are drawn from [-TERRAIN_ROUGHNESS, TERRAIN_ROUGHNESS).
pub const TERRAIN_ROUGHNESS: f64 = 10.0;

pub const WATER_SIZE: f64 = 1000.0;
pub const WATER_CENTER: [f64; 3] = [1000.0, -48.0, 1000.0];

pub const SKY_RADIUS: f64 = 5000.0;
pub const SKY_COLOR: u32 = 0x87CEEB;
pub const FOG_NEAR: f64 = 100.0;
pub const FOG_FAR: f64 = 2000.0;

pub const AMBIENT_LIGHT_INTENSITY: f64 = 0.6;
pub const SUN_INTENSITY: f64 = 0.8;
pub const SUN_POSITION: [f64; 3] = [100.0, 200.0, 100.0];
pub const SHADOW_MAP_SIZE: u32 = 2048;
