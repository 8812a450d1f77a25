//! Entity Store: the hecs world plus the single player position.
//!
//! Bullets, enemies and particles are hecs entities carrying an `EntityId`
//! alongside their components. hecs recycles its own `Entity` handles, so
//! the `EntityId` is what gives every entity a session-unique identity.
//! Listings are returned sorted by `EntityId`, which is the iteration order
//! every system uses.

use glam::DVec2;
use hecs::{Entity, World};
use rand::Rng;

use starguard_core::components::*;
use starguard_core::constants::*;
use starguard_core::enums::{ColorTag, EnemyKind};
use starguard_core::types::{Position, Rect, Velocity};

/// A bullet as seen by the collision pass.
#[derive(Debug, Clone, Copy)]
pub struct BulletRecord {
    pub id: EntityId,
    pub entity: Entity,
    pub position: Position,
}

impl BulletRecord {
    pub fn rect(&self) -> Rect {
        self.position.rect(BULLET_WIDTH, BULLET_HEIGHT)
    }
}

/// An enemy as seen by the collision pass.
#[derive(Debug, Clone, Copy)]
pub struct EnemyRecord {
    pub id: EntityId,
    pub entity: Entity,
    pub position: Position,
    pub kind: EnemyKind,
}

impl EnemyRecord {
    pub fn rect(&self) -> Rect {
        self.position.rect(ENEMY_WIDTH, ENEMY_HEIGHT)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ParticleRecord {
    pub id: EntityId,
    pub position: Position,
    pub particle: Particle,
}

/// Storage for every simulated entity of one engine.
pub struct EntityStore {
    world: World,
    player: Position,
    next_id: u32,
    despawn_buffer: Vec<Entity>,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            player: Position::new(PLAYER_START_X, PLAYER_Y),
            next_id: 1,
            despawn_buffer: Vec::new(),
        }
    }

    /// Drop every entity and recentre the ship. Ids keep counting up so
    /// no identity is ever handed out twice by the same store.
    pub fn clear(&mut self) {
        self.world.clear();
        self.player = Position::new(PLAYER_START_X, PLAYER_Y);
        self.despawn_buffer.clear();
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn player_rect(&self) -> Rect {
        self.player.rect(PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Set the ship's x, clamped to the play area. Non-finite input is ignored.
    pub fn set_player_x(&mut self, x: f64) {
        if x.is_finite() {
            self.player.x = x.clamp(0.0, PLAYER_MAX_X);
        }
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Spawn a bullet with its top-left corner at `origin`, travelling up.
    pub fn add_bullet(&mut self, origin: Position) -> EntityId {
        let id = self.allocate_id();
        self.world.spawn((id, Bullet, origin, Velocity::new(0.0, -BULLET_SPEED)));
        id
    }

    /// Spawn an enemy of `kind` at `position`, travelling down at its kind's speed.
    pub fn add_enemy(&mut self, kind: EnemyKind, position: Position) -> EntityId {
        let id = self.allocate_id();
        let velocity = Velocity::new(0.0, kind.speed());
        self.world.spawn((id, Enemy { kind }, position, velocity));
        id
    }

    /// Burst `count` particles out of `origin` in random directions.
    pub fn add_particles<R: Rng + ?Sized>(
        &mut self,
        origin: Position,
        color: ColorTag,
        count: usize,
        rng: &mut R,
    ) {
        for _ in 0..count {
            let id = self.allocate_id();
            let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
            let speed: f64 = rng.gen_range(PARTICLE_MIN_SPEED..PARTICLE_MAX_SPEED);
            let life_ticks = rng.gen_range(PARTICLE_LIFE_MIN..=PARTICLE_LIFE_MAX);
            let velocity = Velocity::from(DVec2::from_angle(angle) * speed);
            self.world.spawn((id, Particle { life_ticks, color }, origin, velocity));
        }
    }

    /// Despawn a batch of entities. Missing handles are skipped.
    pub fn despawn_all(&mut self, entities: impl IntoIterator<Item = Entity>) {
        for entity in entities {
            let _ = self.world.despawn(entity);
        }
    }

    /// Keep only the bullets for which `keep` returns true.
    /// Returns the ids of the removed bullets.
    pub fn retain_bullets(&mut self, mut keep: impl FnMut(&Position) -> bool) -> Vec<EntityId> {
        self.despawn_buffer.clear();
        let mut removed = Vec::new();
        for (entity, (id, pos, _bullet)) in
            self.world.query_mut::<(&EntityId, &Position, &Bullet)>()
        {
            if !keep(pos) {
                self.despawn_buffer.push(entity);
                removed.push(*id);
            }
        }
        self.flush_despawns();
        removed.sort();
        removed
    }

    /// Keep only the enemies for which `keep` returns true.
    /// Returns the removed enemies in id order.
    pub fn retain_enemies(
        &mut self,
        mut keep: impl FnMut(&Position, &Enemy) -> bool,
    ) -> Vec<(EntityId, Enemy)> {
        self.despawn_buffer.clear();
        let mut removed = Vec::new();
        for (entity, (id, pos, enemy)) in
            self.world.query_mut::<(&EntityId, &Position, &Enemy)>()
        {
            if !keep(pos, enemy) {
                self.despawn_buffer.push(entity);
                removed.push((*id, *enemy));
            }
        }
        self.flush_despawns();
        removed.sort_by_key(|(id, _)| *id);
        removed
    }

    /// Keep only the particles for which `keep` returns true.
    pub fn retain_particles(&mut self, mut keep: impl FnMut(&Particle) -> bool) -> usize {
        self.despawn_buffer.clear();
        for (entity, particle) in self.world.query_mut::<&Particle>() {
            if !keep(particle) {
                self.despawn_buffer.push(entity);
            }
        }
        let removed = self.despawn_buffer.len();
        self.flush_despawns();
        removed
    }

    fn flush_despawns(&mut self) {
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }
    }

    /// All bullets, sorted by id.
    pub fn bullets(&self) -> Vec<BulletRecord> {
        let mut bullets: Vec<BulletRecord> = self
            .world
            .query::<(&EntityId, &Position, &Bullet)>()
            .iter()
            .map(|(entity, (id, pos, _))| BulletRecord {
                id: *id,
                entity,
                position: *pos,
            })
            .collect();
        bullets.sort_by_key(|b| b.id);
        bullets
    }

    /// All enemies, sorted by id.
    pub fn enemies(&self) -> Vec<EnemyRecord> {
        let mut enemies: Vec<EnemyRecord> = self
            .world
            .query::<(&EntityId, &Position, &Enemy)>()
            .iter()
            .map(|(entity, (id, pos, enemy))| EnemyRecord {
                id: *id,
                entity,
                position: *pos,
                kind: enemy.kind,
            })
            .collect();
        enemies.sort_by_key(|e| e.id);
        enemies
    }

    /// All particles, sorted by id.
    pub fn particles(&self) -> Vec<ParticleRecord> {
        let mut particles: Vec<ParticleRecord> = self
            .world
            .query::<(&EntityId, &Position, &Particle)>()
            .iter()
            .map(|(_, (id, pos, particle))| ParticleRecord {
                id: *id,
                position: *pos,
                particle: *particle,
            })
            .collect();
        particles.sort_by_key(|p| p.id);
        particles
    }

    pub fn bullet_count(&self) -> usize {
        self.world.query::<&Bullet>().iter().count()
    }

    pub fn enemy_count(&self) -> usize {
        self.world.query::<&Enemy>().iter().count()
    }

    pub fn particle_count(&self) -> usize {
        self.world.query::<&Particle>().iter().count()
    }
}
