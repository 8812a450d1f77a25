//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Enemy type. The set is closed: every enemy is exactly one of these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Standard descender.
    #[default]
    Basic,
    /// Quick, fragile-looking diver.
    Fast,
    /// Slow heavy hull worth the most points.
    Tank,
}

impl EnemyKind {
    /// Multiplier applied to `ENEMY_BASE_SPEED`.
    pub fn speed_multiplier(&self) -> f64 {
        match self {
            EnemyKind::Basic => 1.0,
            EnemyKind::Fast => 1.5,
            EnemyKind::Tank => 0.6,
        }
    }

    /// Downward speed in units per tick.
    pub fn speed(&self) -> f64 {
        ENEMY_BASE_SPEED * self.speed_multiplier()
    }

    /// Points awarded when a bullet destroys this enemy.
    pub fn score_value(&self) -> u64 {
        match self {
            EnemyKind::Basic => SCORE_BASIC,
            EnemyKind::Fast => SCORE_FAST,
            EnemyKind::Tank => SCORE_TANK,
        }
    }

    /// Hull color, inherited by the explosion particles.
    pub fn color(&self) -> ColorTag {
        match self {
            EnemyKind::Basic => ColorTag::Red,
            EnemyKind::Fast => ColorTag::Amber,
            EnemyKind::Tank => ColorTag::Violet,
        }
    }
}

/// Color tag carried by particles. The renderer maps it to a palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorTag {
    #[default]
    Red,
    Amber,
    Violet,
}

/// Match phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    GameOver,
    Victory,
}

impl GamePhase {
    /// Terminal phases end a session and wait for a restart.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Victory)
    }
}
