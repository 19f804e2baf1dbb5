//! Keyboard sampler.
//!
//! Holds the current pressed state of every key the host has reported, under
//! both its lower-cased key name and its physical code. Queries are
//! point-in-time; there is no event buffering.

use std::collections::HashMap;

/// Current key state.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pressed: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down signal.
    pub fn key_down(&mut self, key: &str, code: &str) {
        self.set(key, code, true);
    }

    /// Record a key-up signal.
    pub fn key_up(&mut self, key: &str, code: &str) {
        self.set(key, code, false);
    }

    fn set(&mut self, key: &str, code: &str, down: bool) {
        self.pressed.insert(key.to_lowercase(), down);
        self.pressed.insert(code.to_string(), down);
    }

    /// Whether the identifier (lower-cased key name or physical code) is held.
    pub fn is_pressed(&self, id: &str) -> bool {
        self.pressed.get(id).copied().unwrap_or(false)
    }

    /// Whether any of the identifiers is held.
    pub fn any_pressed(&self, ids: &[&str]) -> bool {
        ids.iter().any(|id| self.is_pressed(id))
    }

    /// Translate the held keys into stick, rudder and throttle demands.
    pub fn intent(&self) -> ControlIntent {
        ControlIntent {
            throttle_up: self.any_pressed(&["shift", "ShiftLeft", "ShiftRight"]),
            throttle_down: self.any_pressed(&["control", "ControlLeft", "ControlRight"]),
            nose_up: self.is_pressed("ArrowUp"),
            nose_down: self.is_pressed("ArrowDown"),
            roll_left: self.is_pressed("ArrowLeft"),
            roll_right: self.is_pressed("ArrowRight"),
            yaw_right: self.is_pressed("e"),
            yaw_left: self.is_pressed("q"),
        }
    }
}

/// Pilot demands for one frame.
///
/// Each flag corresponds to one held control; opposing flags may both be set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlIntent {
    pub throttle_up: bool,
    pub throttle_down: bool,
    /// Pitch decreases.
    pub nose_up: bool,
    /// Pitch increases.
    pub nose_down: bool,
    pub roll_left: bool,
    pub roll_right: bool,
    /// Yaw decreases.
    pub yaw_right: bool,
    /// Yaw increases.
    pub yaw_left: bool,
}

impl ControlIntent {
    /// No controls held.
    pub const NEUTRAL: ControlIntent = ControlIntent {
        throttle_up: false,
        throttle_down: false,
        nose_up: false,
        nose_down: false,
        roll_left: false,
        roll_right: false,
        yaw_right: false,
        yaw_left: false,
    };

    pub fn pitch_held(&self) -> bool {
        self.nose_down || self.nose_up
    }

    pub fn roll_held(&self) -> bool {
        self.roll_left || self.roll_right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_and_code_both_recorded() {
        let mut input = InputState::new();
        input.key_down("Shift", "ShiftLeft");
        assert!(input.is_pressed("shift"));
        assert!(input.is_pressed("ShiftLeft"));
        assert!(!input.is_pressed("ShiftRight"));
        assert!(input.intent().throttle_up);

        input.key_up("Shift", "ShiftLeft");
        assert!(!input.is_pressed("shift"));
        assert!(!input.intent().throttle_up);
    }

    #[test]
    fn test_arrow_keys_match_on_code() {
        let mut input = InputState::new();
        input.key_down("ArrowUp", "ArrowUp");
        // The lower-cased key name is stored too, but controls read the code.
        assert!(input.is_pressed("arrowup"));
        let intent = input.intent();
        assert!(intent.nose_up);
        assert!(intent.pitch_held());
        assert!(!intent.roll_held());
    }

    #[test]
    fn test_uppercase_letter_maps_to_lowercase_key() {
        let mut input = InputState::new();
        input.key_down("Q", "KeyQ");
        assert!(input.intent().yaw_left);
        assert!(input.is_pressed("KeyQ"));
    }

    #[test]
    fn test_unknown_key_is_not_pressed() {
        let input = InputState::new();
        assert!(!input.is_pressed("z"));
        assert_eq!(input.intent(), ControlIntent::NEUTRAL);
    }
}
