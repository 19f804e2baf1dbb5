//! SKYWARD host application.
//!
//! Runs the flight sim and the fireworks stage on their own loop threads,
//! presents the HUD, and drives headless sessions from the command line.

pub mod config;
pub mod error;
pub mod game_loop;
pub mod hud;
pub mod raster;
pub mod script;
pub mod session;
pub mod state;

pub use skyward_core as core;
