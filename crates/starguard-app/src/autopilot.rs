//! Demo intent source: a deterministic pilot that hunts the lowest enemy.
//!
//! The pilot only reads snapshots and only emits `PlayerCommand`s, so it
//! drives the engine through the same surface as a human player.

use starguard_core::commands::PlayerCommand;
use starguard_core::constants::*;
use starguard_core::enums::GamePhase;
use starguard_core::state::{EnemyView, GameStateSnapshot};
use starguard_sim::engine::{SimConfig, SimulationEngine};

use crate::config::AppConfig;

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Horizontal misalignment (ship center to target center) still
    /// considered on target.
    pub aim_tolerance: f64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            aim_tolerance: ENEMY_WIDTH / 2.0,
        }
    }
}

impl Autopilot {
    /// The enemy closest to the ship's row. Ties go to the lowest id.
    pub fn pick_target<'a>(&self, snapshot: &'a GameStateSnapshot) -> Option<&'a EnemyView> {
        snapshot.enemies.iter().fold(None, |best: Option<&EnemyView>, enemy| match best {
            Some(b) if b.position.y >= enemy.position.y => Some(b),
            _ => Some(enemy),
        })
    }

    /// Intents for the next frame.
    pub fn plan(&self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        if snapshot.phase != GamePhase::Playing {
            return Vec::new();
        }
        let Some(target) = self.pick_target(snapshot) else {
            return Vec::new();
        };

        let ship_center = snapshot.player.position.x + PLAYER_WIDTH / 2.0;
        let target_center = target.position.x + ENEMY_WIDTH / 2.0;
        let offset = target_center - ship_center;

        let mut commands = Vec::with_capacity(2);
        if offset.abs() > f64::EPSILON {
            commands.push(PlayerCommand::MoveBy {
                dx: offset.clamp(-PLAYER_SPEED, PLAYER_SPEED),
            });
        }
        if offset.abs() <= self.aim_tolerance {
            commands.push(PlayerCommand::Fire);
        }
        commands
    }
}

/// Play one autopilot session at a fixed frame delta.
///
/// Stops at the first terminal phase or after `config.frames` frames and
/// returns the last snapshot.
pub fn run_headless(config: &AppConfig) -> GameStateSnapshot {
    let pilot = Autopilot::default();
    let dt = config.frame_dt();
    let mut engine = SimulationEngine::new(SimConfig { seed: config.seed });

    engine.queue_command(PlayerCommand::StartGame);
    let mut snapshot = engine.tick(dt);

    for _ in 1..config.frames {
        if snapshot.phase.is_terminal() {
            break;
        }
        engine.queue_commands(pilot.plan(&snapshot));
        snapshot = engine.tick(dt);
    }

    log::info!(
        "Headless session ended in {:?}: score {}, wave {}, lives {}",
        snapshot.phase,
        snapshot.score,
        snapshot.wave,
        snapshot.lives
    );
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use starguard_core::components::EntityId;
    use starguard_core::enums::EnemyKind;
    use starguard_core::types::Position;

    fn playing_snapshot(enemies: Vec<EnemyView>) -> GameStateSnapshot {
        let mut snap = GameStateSnapshot {
            phase: GamePhase::Playing,
            enemies,
            ..Default::default()
        };
        snap.player.position = Position::new(PLAYER_START_X, PLAYER_Y);
        snap
    }

    fn enemy(id: u32, x: f64, y: f64) -> EnemyView {
        EnemyView {
            id: EntityId(id),
            kind: EnemyKind::Basic,
            position: Position::new(x, y),
        }
    }

    #[test]
    fn test_idle_outside_playing() {
        let pilot = Autopilot::default();
        let mut snap = playing_snapshot(vec![enemy(1, 0.0, 0.0)]);
        snap.phase = GamePhase::Menu;
        assert!(pilot.plan(&snap).is_empty());
    }

    #[test]
    fn test_targets_lowest_enemy() {
        let pilot = Autopilot::default();
        let snap = playing_snapshot(vec![
            enemy(1, 100.0, 50.0),
            enemy(2, 600.0, 200.0),
            enemy(3, 300.0, 200.0),
        ]);
        assert_eq!(pilot.pick_target(&snap).unwrap().id, EntityId(2));

        let commands = pilot.plan(&snap);
        assert_eq!(
            commands,
            vec![PlayerCommand::MoveBy { dx: PLAYER_SPEED }]
        );
    }

    #[test]
    fn test_fires_when_aligned() {
        let pilot = Autopilot::default();
        let x = PLAYER_START_X + PLAYER_WIDTH / 2.0 - ENEMY_WIDTH / 2.0;
        let snap = playing_snapshot(vec![enemy(1, x, 100.0)]);
        assert_eq!(pilot.plan(&snap), vec![PlayerCommand::Fire]);
    }

    #[test]
    fn test_headless_session_is_deterministic() {
        let config = AppConfig {
            frames: 900,
            ..Default::default()
        };
        let a = serde_json::to_string(&run_headless(&config)).unwrap();
        let b = serde_json::to_string(&run_headless(&config)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_headless_session_scores() {
        let config = AppConfig {
            frames: 1800,
            ..Default::default()
        };
        let snap = run_headless(&config);
        assert!(snap.score > 0, "Autopilot should destroy something in 30 seconds");
    }
}
