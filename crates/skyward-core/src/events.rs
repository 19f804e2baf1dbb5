//! Events emitted by the simulation for HUD and sound feedback.

use serde::{Deserialize, Serialize};

/// One-shot notifications produced during a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FlightEvent {
    /// The plane hit a balloon.
    Crashed { balloon_id: u32, final_score: u32 },
    /// Flight state was restored after a crash.
    Reset,
}
