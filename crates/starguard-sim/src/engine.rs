//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the entity store, the match state, the RNGs and
//! the deferred-action scheduler. It processes player commands, runs all
//! systems once per frame, and produces `GameStateSnapshot`s. Completely
//! headless (no rendering or input dependency), enabling deterministic
//! testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starguard_core::commands::PlayerCommand;
use starguard_core::constants::*;
use starguard_core::enums::GamePhase;
use starguard_core::events::GameEvent;
use starguard_core::state::GameStateSnapshot;
use starguard_core::types::{Position, SimTime};

use crate::match_state::{MatchState, WaveCompletion};
use crate::schedule::{ScheduledAction, Scheduler};
use crate::store::EntityStore;
use crate::systems;
use crate::systems::combat::CombatOutcome;
use crate::systems::fire_control::FireControl;
use crate::systems::starfield::Starfield;

/// ChaCha stream for cosmetic draws (stars, particles). Gameplay draws use
/// stream 0, so cosmetics never shift the enemy-type sequence.
const FX_STREAM: u64 = 1;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    store: EntityStore,
    match_state: MatchState,
    starfield: Starfield,
    fire_control: FireControl,
    scheduler: Scheduler,
    time: SimTime,
    rng: ChaCha8Rng,
    fx_rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    /// Horizontal intent accumulated since the last tick.
    pending_dx: f64,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let mut fx_rng = ChaCha8Rng::seed_from_u64(config.seed);
        fx_rng.set_stream(FX_STREAM);
        let starfield = Starfield::generate(&mut fx_rng, STAR_COUNT);

        Self {
            store: EntityStore::new(),
            match_state: MatchState::new(),
            starfield,
            fire_control: FireControl::default(),
            scheduler: Scheduler::default(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            fx_rng,
            command_queue: VecDeque::new(),
            pending_dx: 0.0,
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    pub fn move_left(&mut self) {
        self.queue_command(PlayerCommand::MoveLeft);
    }

    pub fn move_right(&mut self) {
        self.queue_command(PlayerCommand::MoveRight);
    }

    pub fn fire(&mut self) {
        self.queue_command(PlayerCommand::Fire);
    }

    /// Advance the simulation by one frame covering `dt_secs` of wall-clock
    /// time and return the resulting snapshot.
    ///
    /// Systems only run while `Playing`; in every other phase queued
    /// commands are still processed (so the menu can start a game) but
    /// nothing moves and session time stands still.
    pub fn tick(&mut self, dt_secs: f64) -> GameStateSnapshot {
        let dt_secs = if dt_secs.is_finite() && dt_secs >= 0.0 {
            dt_secs
        } else {
            log::warn!("Ignoring invalid frame delta {dt_secs}");
            0.0
        };

        self.process_commands();

        if self.match_state.is_playing() {
            self.run_systems();
            self.time.advance(dt_secs);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.store,
            &self.starfield,
            &self.match_state,
            &self.scheduler,
            &self.time,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.match_state.phase()
    }

    /// Get the current session time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn score(&self) -> u64 {
        self.match_state.score()
    }

    pub fn wave(&self) -> u32 {
        self.match_state.wave()
    }

    pub fn lives(&self) -> u32 {
        self.match_state.lives()
    }

    /// Read-only access to the entity store.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn match_state(&self) -> &MatchState {
        &self.match_state
    }

    /// Number of deferred actions still waiting (any generation).
    pub fn pending_actions(&self) -> usize {
        self.scheduler.len()
    }

    /// Mutable store access for tests that stage exact layouts.
    #[cfg(test)]
    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    /// Mutable scheduler access for tests that plant stale timers.
    #[cfg(test)]
    pub fn scheduler_mut(&mut self) -> &mut Scheduler {
        &mut self.scheduler
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.match_state.start() {
                    self.store.clear();
                    self.scheduler.clear();
                    self.fire_control.reset();
                    self.pending_dx = 0.0;
                    self.time = SimTime::default();
                    self.spawn_wave(1);
                }
            }
            PlayerCommand::ReturnToMenu => {
                if self.match_state.return_to_menu() {
                    self.scheduler.clear();
                    self.pending_dx = 0.0;
                }
            }
            PlayerCommand::MoveLeft => self.push_intent(-PLAYER_SPEED),
            PlayerCommand::MoveRight => self.push_intent(PLAYER_SPEED),
            PlayerCommand::MoveBy { dx } => {
                if dx.is_finite() {
                    self.push_intent(dx);
                } else {
                    log::warn!("Rejecting non-finite move intent {dx}");
                }
            }
            PlayerCommand::Fire => {
                if self.match_state.is_playing()
                    && self.fire_control.try_fire(self.time.elapsed_secs)
                {
                    let player = self.store.player();
                    let nose = Position::new(
                        player.x + PLAYER_WIDTH / 2.0 - BULLET_WIDTH / 2.0,
                        player.y - BULLET_HEIGHT,
                    );
                    let bullet_id = self.store.add_bullet(nose);
                    self.events.push(GameEvent::ShotFired { bullet_id });
                }
            }
        }
    }

    fn push_intent(&mut self, dx: f64) {
        if self.match_state.is_playing() {
            self.pending_dx += dx;
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 0. Deferred actions that came due since the last frame
        self.run_due_actions();
        // 1. Starfield
        self.starfield.advance();
        // 2. Ship movement
        let dx = std::mem::take(&mut self.pending_dx);
        systems::movement::apply_player_intent(&mut self.store, dx);
        // 3. Bullets
        systems::movement::advance_bullets(self.store.world_mut());
        systems::cleanup::drop_escaped_bullets(&mut self.store);
        // 4. Enemies
        systems::movement::advance_enemies(self.store.world_mut());
        systems::cleanup::drop_escaped_enemies(&mut self.store, &mut self.events);
        // 5. Enemy vs ship
        let outcome = systems::combat::resolve_player_hits(&mut self.store, &mut self.events);
        self.apply_outcome(outcome);
        if !self.match_state.is_playing() {
            return;
        }
        // 6. Bullet vs enemy
        let outcome = systems::combat::resolve_bullet_hits(&mut self.store, &mut self.events);
        self.apply_outcome(outcome);
        // 7. Particles
        systems::particles::run(&mut self.store);
        // 8. Wave completion
        self.check_wave_completion();
    }

    fn run_due_actions(&mut self) {
        let generation = self.match_state.generation();
        for action in self.scheduler.take_due(&self.time, generation) {
            match action {
                ScheduledAction::AdvanceWave => {
                    let wave = self.match_state.advance_wave();
                    self.spawn_wave(wave);
                }
            }
        }
    }

    fn spawn_wave(&mut self, wave: u32) {
        let enemy_count = systems::wave_spawner::spawn_wave(&mut self.store, &mut self.rng, wave);
        self.match_state.mark_wave_started();
        self.events.push(GameEvent::WaveStarted { wave, enemy_count });
    }

    /// Hand a resolver's requested deltas to the match state.
    fn apply_outcome(&mut self, outcome: CombatOutcome) {
        for explosion in &outcome.explosions {
            self.store.add_particles(
                explosion.origin,
                explosion.color,
                PARTICLES_PER_EXPLOSION,
                &mut self.fx_rng,
            );
        }
        self.match_state.award(outcome.score_delta);
        if self.match_state.lose_lives(outcome.lives_lost) {
            self.scheduler.clear();
            self.events.push(GameEvent::GameOver {
                score: self.match_state.score(),
                wave: self.match_state.wave(),
            });
        }
    }

    fn check_wave_completion(&mut self) {
        let board_empty = self.store.enemy_count() == 0;
        let Some(completion) = self.match_state.complete_wave(board_empty) else {
            return;
        };
        self.events.push(GameEvent::WaveCleared {
            wave: self.match_state.wave(),
        });
        match completion {
            WaveCompletion::Victory => {
                self.scheduler.clear();
                self.events.push(GameEvent::Victory {
                    score: self.match_state.score(),
                });
            }
            WaveCompletion::NextWave => {
                let due = self.time.elapsed_secs + WAVE_DELAY_SECS;
                self.scheduler.schedule(
                    due,
                    self.match_state.generation(),
                    ScheduledAction::AdvanceWave,
                );
            }
        }
    }
}
