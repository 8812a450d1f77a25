//! Cleanup system: removes bullets and enemies that left the play area.

use starguard_core::constants::*;
use starguard_core::events::GameEvent;

use crate::store::EntityStore;

/// Drop bullets whose bottom edge has passed the top of the play area.
pub fn drop_escaped_bullets(store: &mut EntityStore) -> usize {
    store
        .retain_bullets(|pos| pos.y + BULLET_HEIGHT >= 0.0)
        .len()
}

/// Drop enemies whose top edge has passed the bottom of the play area.
///
/// Escaping is not a collision: no life is lost and no score is awarded.
pub fn drop_escaped_enemies(store: &mut EntityStore, events: &mut Vec<GameEvent>) -> usize {
    let escaped = store.retain_enemies(|pos, _enemy| pos.y <= PLAY_AREA_HEIGHT);
    for (enemy_id, _enemy) in &escaped {
        events.push(GameEvent::EnemyEscaped {
            enemy_id: *enemy_id,
        });
    }
    escaped.len()
}
