//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over the entity store (or `&World` for
//! read-only passes). They do not own state. Session counters are never
//! written here; systems report what happened and the engine applies it.

pub mod cleanup;
pub mod combat;
pub mod fire_control;
pub mod movement;
pub mod particles;
pub mod snapshot;
pub mod starfield;
pub mod wave_spawner;
