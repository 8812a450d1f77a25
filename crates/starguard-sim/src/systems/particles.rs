//! Particle system: drift, age, expire.

use starguard_core::components::Particle;
use starguard_core::types::{Position, Velocity};

use crate::store::EntityStore;

/// Move every particle, burn one tick of life, drop the ones that expired.
pub fn run(store: &mut EntityStore) {
    for (_entity, (pos, vel, particle)) in store
        .world_mut()
        .query_mut::<(&mut Position, &Velocity, &mut Particle)>()
    {
        pos.translate(vel);
        particle.life_ticks = particle.life_ticks.saturating_sub(1);
    }
    store.retain_particles(|p| p.life_ticks > 0);
}
