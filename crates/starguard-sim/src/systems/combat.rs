//! Collision & combat resolution: enemy vs ship, bullet vs enemy.
//!
//! Both passes use strict AABB overlap and walk entities in id order.
//! Nothing here writes score or lives; the passes return a
//! `CombatOutcome` and the engine hands the deltas to the match state.

use starguard_core::enums::ColorTag;
use starguard_core::events::GameEvent;
use starguard_core::types::Position;

use crate::store::EntityStore;

/// An explosion to materialise as particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Explosion {
    pub origin: Position,
    pub color: ColorTag,
}

/// Deltas requested by one resolution pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombatOutcome {
    pub score_delta: u64,
    pub lives_lost: u32,
    pub explosions: Vec<Explosion>,
}

/// Remove every enemy overlapping the ship and report one lost life per enemy.
pub fn resolve_player_hits(store: &mut EntityStore, events: &mut Vec<GameEvent>) -> CombatOutcome {
    let player = store.player_rect();
    let mut outcome = CombatOutcome::default();
    let mut hits = Vec::new();

    for enemy in store.enemies() {
        let rect = enemy.rect();
        if rect.overlaps(&player) {
            outcome.lives_lost += 1;
            outcome.explosions.push(Explosion {
                origin: rect.center(),
                color: enemy.kind.color(),
            });
            events.push(GameEvent::PlayerHit {
                enemy_id: enemy.id,
                kind: enemy.kind,
            });
            hits.push(enemy.entity);
        }
    }

    store.despawn_all(hits);
    outcome
}

/// Match bullets to enemies and remove every matched pair.
///
/// Each bullet takes the first overlapping enemy (by id) that no earlier
/// bullet has already claimed this tick, so a bullet scores at most once
/// and an enemy is consumed by at most one bullet.
pub fn resolve_bullet_hits(store: &mut EntityStore, events: &mut Vec<GameEvent>) -> CombatOutcome {
    let bullets = store.bullets();
    let enemies = store.enemies();
    let mut claimed = vec![false; enemies.len()];
    let mut outcome = CombatOutcome::default();
    let mut despawn = Vec::new();

    for bullet in &bullets {
        let bullet_rect = bullet.rect();
        let hit = enemies
            .iter()
            .enumerate()
            .find(|(i, enemy)| !claimed[*i] && enemy.rect().overlaps(&bullet_rect));

        let Some((index, enemy)) = hit else {
            continue;
        };
        claimed[index] = true;

        let points = enemy.kind.score_value();
        outcome.score_delta += points;
        outcome.explosions.push(Explosion {
            origin: enemy.rect().center(),
            color: enemy.kind.color(),
        });
        events.push(GameEvent::EnemyDestroyed {
            enemy_id: enemy.id,
            bullet_id: bullet.id,
            kind: enemy.kind,
            points,
        });
        despawn.push(bullet.entity);
        despawn.push(enemy.entity);
    }

    store.despawn_all(despawn);
    outcome
}
