//! Core types and definitions for the SKYWARD flight arcade.
//!
//! This crate defines the vocabulary shared by the simulation and the host:
//! components, input commands, snapshots, events, and tuning constants.
//! It has no dependency on any renderer or windowing framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
