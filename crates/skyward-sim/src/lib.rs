//! Flight simulation engine for SKYWARD.
//!
//! Owns the hecs ECS world, runs systems once per display frame,
//! and produces FlightSnapshots for the presentation layer.

pub mod camera;
pub mod crash;
pub mod engine;
pub mod flight;
pub mod input;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use skyward_core as core;
