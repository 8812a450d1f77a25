//! Snapshot system: reads the entity store and builds a GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use starguard_core::constants::{PLAYER_HEIGHT, PLAYER_WIDTH};
use starguard_core::events::GameEvent;
use starguard_core::state::*;
use starguard_core::types::SimTime;

use crate::match_state::MatchState;
use crate::schedule::Scheduler;
use crate::store::EntityStore;
use crate::systems::starfield::Starfield;

/// Build a complete GameStateSnapshot from the current session.
pub fn build_snapshot(
    store: &EntityStore,
    starfield: &Starfield,
    match_state: &MatchState,
    scheduler: &Scheduler,
    time: &SimTime,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let next_wave_in_secs = scheduler
        .next_due(match_state.generation())
        .map(|due| (due - time.elapsed_secs).max(0.0));

    GameStateSnapshot {
        time: *time,
        phase: match_state.phase(),
        score: match_state.score(),
        wave: match_state.wave(),
        lives: match_state.lives(),
        wave_in_progress: match_state.wave_in_progress(),
        next_wave_in_secs,
        player: PlayerView {
            position: store.player(),
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
        },
        bullets: build_bullets(store),
        enemies: build_enemies(store),
        particles: build_particles(store),
        stars: starfield.views(),
        events,
    }
}

fn build_bullets(store: &EntityStore) -> Vec<BulletView> {
    store
        .bullets()
        .into_iter()
        .map(|b| BulletView {
            id: b.id,
            position: b.position,
        })
        .collect()
}

fn build_enemies(store: &EntityStore) -> Vec<EnemyView> {
    store
        .enemies()
        .into_iter()
        .map(|e| EnemyView {
            id: e.id,
            kind: e.kind,
            position: e.position,
        })
        .collect()
}

fn build_particles(store: &EntityStore) -> Vec<ParticleView> {
    store
        .particles()
        .into_iter()
        .map(|p| ParticleView {
            id: p.id,
            position: p.position,
            life_ticks: p.particle.life_ticks,
            color: p.particle.color,
        })
        .collect()
}
