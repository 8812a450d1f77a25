//! STARGUARD host application.
//!
//! Wires the simulation engine to a wall-clock game loop thread and a
//! headless autopilot driver.

pub mod autopilot;
pub mod config;
pub mod error;
pub mod game_loop;
pub mod state;

pub use starguard_core as core;
