//! Events emitted by the simulation for UI feedback.
//!
//! Events are collected during a tick and drained into that tick's
//! snapshot; the view layer decides what to flash, shake or announce.

use serde::{Deserialize, Serialize};

use crate::components::EntityId;
use crate::enums::EnemyKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A fire intent passed the cooldown and produced a bullet.
    ShotFired { bullet_id: EntityId },
    /// A bullet destroyed an enemy.
    EnemyDestroyed {
        enemy_id: EntityId,
        bullet_id: EntityId,
        kind: EnemyKind,
        points: u64,
    },
    /// An enemy left the bottom of the play area. No penalty.
    EnemyEscaped { enemy_id: EntityId },
    /// An enemy rammed the ship.
    PlayerHit { enemy_id: EntityId, kind: EnemyKind },
    /// A new wave entered the play area.
    WaveStarted { wave: u32, enemy_count: u32 },
    /// The current wave has no enemies left.
    WaveCleared { wave: u32 },
    /// Lives reached zero.
    GameOver { score: u64, wave: u32 },
    /// The final wave was cleared.
    Victory { score: u64 },
}
