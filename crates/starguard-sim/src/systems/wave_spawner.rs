//! Wave spawning system: sizes a wave, rolls enemy types, lays out the grid.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starguard_core::constants::*;
use starguard_core::enums::EnemyKind;
use starguard_core::types::Position;

use crate::store::EntityStore;

/// Enemy count for wave `n` (1-based): `floor(5 * 1.1^(n-1))`.
pub fn wave_enemy_count(wave: u32) -> u32 {
    let exponent = wave.saturating_sub(1) as i32;
    (WAVE_BASE_COUNT * WAVE_GROWTH.powi(exponent)).floor() as u32
}

/// Map one uniform draw in `[0, 1)` to an enemy type.
///
/// The tank check runs first on the same draw, so the split is
/// 70% basic, 20% fast, 10% tank.
pub fn roll_enemy_kind(draw: f64) -> EnemyKind {
    if draw > TANK_THRESHOLD {
        EnemyKind::Tank
    } else if draw > FAST_THRESHOLD {
        EnemyKind::Fast
    } else {
        EnemyKind::Basic
    }
}

/// Spawn position of the `index`-th enemy of a wave.
///
/// Enemies fill rows of `SPAWN_COLUMNS` upward from `SPAWN_TOP_Y`, so the
/// whole wave starts above the visible area. Odd rows shift half a column
/// to stagger the formation.
pub fn grid_position(index: u32) -> Position {
    let column = index % SPAWN_COLUMNS;
    let row = index / SPAWN_COLUMNS;
    let stagger = if row % 2 == 1 { SPAWN_SPACING_X / 2.0 } else { 0.0 };
    Position::new(
        SPAWN_MARGIN_X + column as f64 * SPAWN_SPACING_X + stagger,
        SPAWN_TOP_Y - row as f64 * SPAWN_SPACING_Y,
    )
}

/// Spawn every enemy of wave `n`. Returns how many were spawned.
///
/// The caller marks the wave as in progress; this must run exactly once
/// per wave transition.
pub fn spawn_wave(store: &mut EntityStore, rng: &mut ChaCha8Rng, wave: u32) -> u32 {
    let count = wave_enemy_count(wave);
    for index in 0..count {
        let kind = roll_enemy_kind(rng.gen::<f64>());
        store.add_enemy(kind, grid_position(index));
    }
    log::debug!("Spawned wave {wave}: {count} enemies");
    count
}
