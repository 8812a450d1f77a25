//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{ColorTag, EnemyKind};

/// Session-unique entity identity. Allocated monotonically, never reused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Marker for player bullets.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Bullet;

/// A descending enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
}

/// Cosmetic explosion fragment. Never collides with anything.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    /// Ticks left before the particle is dropped.
    pub life_ticks: u32,
    /// Color of the enemy this particle commemorates.
    pub color: ColorTag,
}
