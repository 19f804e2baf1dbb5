//! Plane state and the per-frame flight integrator.
//!
//! Stored directly on `SimulationEngine`, NOT as an ECS entity: there is
//! exactly one plane for the lifetime of the session.

use glam::DVec3;

use skyward_core::constants::*;
use skyward_core::types::Attitude;

use crate::input::ControlIntent;

/// The player's aircraft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightState {
    pub position: DVec3,
    pub attitude: Attitude,
    pub speed: f64,
    /// Altitude readout. Mirrors the clamped `position.y`.
    pub altitude: f64,
    pub score: u32,
    /// Set when any balloon is inside its warning distance this frame.
    pub collision_warning: bool,
    /// Cosmetic propeller angle (radians, wrapped to [0, TAU)).
    pub propeller_angle: f64,
}

impl Default for FlightState {
    fn default() -> Self {
        Self::initial()
    }
}

impl FlightState {
    /// State at startup and after every crash reset.
    pub fn initial() -> Self {
        let [x, y, z] = PLANE_START;
        Self {
            position: DVec3::new(x, y, z),
            attitude: Attitude::default(),
            speed: INITIAL_SPEED,
            altitude: y,
            score: 0,
            collision_warning: false,
            propeller_angle: 0.0,
        }
    }

    /// Restore the initial flight values. The propeller keeps its angle.
    pub fn reset(&mut self) {
        *self = Self {
            propeller_angle: self.propeller_angle,
            ..Self::initial()
        };
    }
}

/// Advance the plane by one frame.
///
/// Throttle and stick inputs are applied first, then the plane moves along
/// its nose by `speed * MOVE_SCALE` and is held above `MIN_ALTITUDE`. The
/// result depends only on `state` and `intent`.
pub fn integrate(state: &mut FlightState, intent: ControlIntent) {
    if intent.throttle_up {
        state.speed = (state.speed + SPEED_STEP).min(MAX_SPEED);
    }
    if intent.throttle_down {
        state.speed = (state.speed - SPEED_STEP).max(MIN_SPEED);
    }

    let attitude = &mut state.attitude;
    if intent.nose_up {
        attitude.pitch = (attitude.pitch - ATTITUDE_STEP_DEG).max(-MAX_PITCH_DEG);
    }
    if intent.nose_down {
        attitude.pitch = (attitude.pitch + ATTITUDE_STEP_DEG).min(MAX_PITCH_DEG);
    }
    if intent.roll_left {
        attitude.roll = (attitude.roll - ATTITUDE_STEP_DEG).max(-MAX_ROLL_DEG);
    }
    if intent.roll_right {
        attitude.roll = (attitude.roll + ATTITUDE_STEP_DEG).min(MAX_ROLL_DEG);
    }

    // Yaw is a heading, not a stick position: no clamp, no centering.
    if intent.yaw_right {
        attitude.yaw -= YAW_STEP_DEG;
    }
    if intent.yaw_left {
        attitude.yaw += YAW_STEP_DEG;
    }

    if !intent.pitch_held() {
        attitude.pitch *= ATTITUDE_DAMPING;
    }
    if !intent.roll_held() {
        attitude.roll *= ATTITUDE_DAMPING;
    }

    state.position += state.attitude.forward() * (state.speed * MOVE_SCALE);

    state.altitude = state.position.y.max(MIN_ALTITUDE);
    state.position.y = state.altitude;

    state.propeller_angle = (state.propeller_angle + state.speed * PROPELLER_SPIN_SCALE)
        .rem_euclid(std::f64::consts::TAU);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent() -> ControlIntent {
        ControlIntent::NEUTRAL
    }

    #[test]
    fn test_level_flight_moves_along_z() {
        let mut state = FlightState::initial();
        integrate(&mut state, intent());
        assert!((state.position.z - INITIAL_SPEED * MOVE_SCALE).abs() < 1e-9);
        assert!((state.position.y - 500.0).abs() < 1e-9);
        assert!(state.position.x.abs() < 1e-9);
    }

    #[test]
    fn test_speed_clamped_at_both_ends() {
        let mut state = FlightState::initial();
        let up = ControlIntent {
            throttle_up: true,
            ..intent()
        };
        for _ in 0..500 {
            integrate(&mut state, up);
            assert!(state.speed <= MAX_SPEED);
        }
        assert_eq!(state.speed, MAX_SPEED);

        let down = ControlIntent {
            throttle_down: true,
            ..intent()
        };
        for _ in 0..500 {
            integrate(&mut state, down);
            assert!(state.speed >= MIN_SPEED);
        }
        assert_eq!(state.speed, MIN_SPEED);
    }

    #[test]
    fn test_pitch_and_roll_clamped() {
        let mut state = FlightState::initial();
        let stick = ControlIntent {
            nose_down: true,
            roll_left: true,
            ..intent()
        };
        for _ in 0..200 {
            integrate(&mut state, stick);
            assert!(state.attitude.pitch <= MAX_PITCH_DEG);
            assert!(state.attitude.roll >= -MAX_ROLL_DEG);
        }
        assert_eq!(state.attitude.pitch, MAX_PITCH_DEG);
        assert_eq!(state.attitude.roll, -MAX_ROLL_DEG);
    }

    #[test]
    fn test_released_stick_damps_toward_zero() {
        let mut state = FlightState::initial();
        state.attitude.pitch = 40.0;
        state.attitude.roll = -20.0;

        for _ in 0..10 {
            let pitch_before = state.attitude.pitch;
            let roll_before = state.attitude.roll;
            integrate(&mut state, intent());
            assert!((state.attitude.pitch - pitch_before * ATTITUDE_DAMPING).abs() < 1e-12);
            assert!((state.attitude.roll - roll_before * ATTITUDE_DAMPING).abs() < 1e-12);
        }
    }

    #[test]
    fn test_holding_one_axis_does_not_damp_it() {
        let mut state = FlightState::initial();
        state.attitude.roll = 10.0;
        let roll_right = ControlIntent {
            roll_right: true,
            ..intent()
        };
        integrate(&mut state, roll_right);
        assert_eq!(state.attitude.roll, 11.0);
    }

    #[test]
    fn test_opposing_keys_cancel_without_damping() {
        let mut state = FlightState::initial();
        state.attitude.pitch = 10.0;
        let both = ControlIntent {
            nose_up: true,
            nose_down: true,
            ..intent()
        };
        integrate(&mut state, both);
        assert_eq!(state.attitude.pitch, 10.0);
    }

    #[test]
    fn test_yaw_is_unbounded_and_undamped() {
        let mut state = FlightState::initial();
        let rudder = ControlIntent {
            yaw_left: true,
            ..intent()
        };
        for _ in 0..400 {
            integrate(&mut state, rudder);
        }
        assert_eq!(state.attitude.yaw, 400.0);

        integrate(&mut state, intent());
        assert_eq!(state.attitude.yaw, 400.0, "yaw must not self-center");

        let rudder_right = ControlIntent {
            yaw_right: true,
            ..intent()
        };
        integrate(&mut state, rudder_right);
        assert_eq!(state.attitude.yaw, 399.0);
    }

    #[test]
    fn test_altitude_floor() {
        let mut state = FlightState::initial();
        state.position.y = 11.0;
        state.altitude = 11.0;
        state.attitude.pitch = 60.0;
        let dive = ControlIntent {
            nose_down: true,
            throttle_up: true,
            ..intent()
        };
        for _ in 0..100 {
            integrate(&mut state, dive);
            assert!(state.position.y >= MIN_ALTITUDE);
            assert_eq!(state.altitude, state.position.y);
        }
        assert_eq!(state.altitude, MIN_ALTITUDE);
    }

    #[test]
    fn test_zero_speed_holds_position() {
        let mut state = FlightState::initial();
        state.speed = 0.0;
        state.attitude.pitch = 30.0;
        let start = state.position;
        integrate(&mut state, intent());
        assert_eq!(state.position, start);
    }

    #[test]
    fn test_propeller_spins_with_speed() {
        let mut state = FlightState::initial();
        integrate(&mut state, intent());
        assert!((state.propeller_angle - INITIAL_SPEED * PROPELLER_SPIN_SCALE).abs() < 1e-12);
        for _ in 0..1000 {
            integrate(&mut state, intent());
            assert!(state.propeller_angle < std::f64::consts::TAU);
        }
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut state = FlightState::initial();
        state.position = DVec3::new(12.0, 80.0, -4.0);
        state.attitude = Attitude::new(12.0, -30.0, 725.0);
        state.speed = 0.0;
        state.score = 9;
        state.collision_warning = true;
        state.propeller_angle = 1.5;

        state.reset();
        assert_eq!(state.position, DVec3::new(0.0, 500.0, 0.0));
        assert_eq!(state.attitude, Attitude::default());
        assert_eq!(state.speed, 100.0);
        assert_eq!(state.altitude, 500.0);
        assert_eq!(state.score, 0);
        assert!(!state.collision_warning);
        assert_eq!(state.propeller_angle, 1.5);
    }
}
