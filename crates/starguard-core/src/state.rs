//! Game state snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::components::EntityId;
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete, read-only game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u64,
    pub wave: u32,
    pub lives: u32,
    /// Whether the current wave's enemies are still being fought.
    pub wave_in_progress: bool,
    /// Seconds until the next wave spawns, if one is pending.
    pub next_wave_in_secs: Option<f64>,
    pub player: PlayerView,
    pub bullets: Vec<BulletView>,
    pub enemies: Vec<EnemyView>,
    pub particles: Vec<ParticleView>,
    pub stars: Vec<StarView>,
    pub events: Vec<GameEvent>,
}

/// The player's ship.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub id: EntityId,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EntityId,
    pub kind: EnemyKind,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub id: EntityId,
    pub position: Position,
    /// Remaining lifetime in ticks (for fade-out).
    pub life_ticks: u32,
    pub color: ColorTag,
}

/// Background star.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarView {
    pub position: Position,
    pub size: f64,
}
