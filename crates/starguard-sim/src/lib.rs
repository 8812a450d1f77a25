//! Simulation engine for STARGUARD.
//!
//! Owns the hecs ECS world, runs systems once per frame,
//! and produces GameStateSnapshots for the renderer.

pub mod engine;
pub mod match_state;
pub mod schedule;
pub mod store;
pub mod systems;

pub use engine::{SimConfig, SimulationEngine};
pub use starguard_core as core;
