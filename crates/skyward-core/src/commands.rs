//! Input signals sent from the host to the simulation.
//!
//! Commands are queued and applied to the input sampler at the next frame
//! boundary, in arrival order.

use serde::{Deserialize, Serialize};

/// Keyboard signals as delivered by the host.
///
/// `key` is the printable key name (`"e"`, `"Shift"`, `"ArrowUp"`), `code` the
/// physical key code (`"KeyE"`, `"ShiftLeft"`, `"ArrowUp"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FlightCommand {
    KeyDown { key: String, code: String },
    KeyUp { key: String, code: String },
}

impl FlightCommand {
    pub fn key_down(key: impl Into<String>, code: impl Into<String>) -> Self {
        FlightCommand::KeyDown {
            key: key.into(),
            code: code.into(),
        }
    }

    pub fn key_up(key: impl Into<String>, code: impl Into<String>) -> Self {
        FlightCommand::KeyUp {
            key: key.into(),
            code: code.into(),
        }
    }
}
