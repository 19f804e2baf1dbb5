//! Neon fireworks for SKYWARD.
//!
//! A `Stage` owns every active show (single bursts and rocket volleys),
//! advances them once per frame, and reports whether another frame is
//! needed. Drawing goes through the `Canvas` trait so the host picks the
//! surface.

pub mod canvas;
pub mod color;
pub mod constants;
pub mod particle;
pub mod rocket;
pub mod show;
pub mod stage;

pub use canvas::{render, BlendMode, Canvas};
pub use stage::{Stage, StageConfig, TickOutcome};
