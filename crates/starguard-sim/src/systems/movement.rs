//! Kinematic integration: ship intent, bullets, enemies.
//!
//! Velocities are per tick, so every pass moves an entity by exactly its
//! velocity once.

use hecs::World;

use starguard_core::components::{Bullet, Enemy};
use starguard_core::types::{Position, Velocity};

use crate::store::EntityStore;

/// Apply the tick's accumulated horizontal intent to the ship.
///
/// The result is clamped to the play area whatever the magnitude of `dx`.
pub fn apply_player_intent(store: &mut EntityStore, dx: f64) {
    let x = store.player().x + dx;
    store.set_player_x(x);
}

/// Move every bullet by its velocity.
pub fn advance_bullets(world: &mut World) {
    for (_entity, (pos, vel, _bullet)) in world.query_mut::<(&mut Position, &Velocity, &Bullet)>() {
        pos.translate(vel);
    }
}

/// Move every enemy by its velocity.
pub fn advance_enemies(world: &mut World) {
    for (_entity, (pos, vel, _enemy)) in world.query_mut::<(&mut Position, &Velocity, &Enemy)>() {
        pos.translate(vel);
    }
}
