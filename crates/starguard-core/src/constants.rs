//! Simulation constants and tuning parameters.
//!
//! Distances are play-area units, speeds are units per tick, and
//! durations are seconds of session time unless stated otherwise.

/// Nominal frame rate the speeds below are tuned for (Hz).
pub const NOMINAL_FPS: u32 = 60;

/// Nominal seconds per frame.
pub const NOMINAL_DT: f64 = 1.0 / NOMINAL_FPS as f64;

// --- Play area ---

pub const PLAY_AREA_WIDTH: f64 = 800.0;
pub const PLAY_AREA_HEIGHT: f64 = 600.0;

// --- Player ---

pub const PLAYER_WIDTH: f64 = 40.0;
pub const PLAYER_HEIGHT: f64 = 30.0;

/// Horizontal step applied per move intent.
pub const PLAYER_SPEED: f64 = 5.0;

/// Fixed vertical position of the ship's top edge.
pub const PLAYER_Y: f64 = PLAY_AREA_HEIGHT - 60.0;

/// Starting x so the ship is horizontally centred.
pub const PLAYER_START_X: f64 = (PLAY_AREA_WIDTH - PLAYER_WIDTH) / 2.0;

/// Largest x the ship's left edge may reach.
pub const PLAYER_MAX_X: f64 = PLAY_AREA_WIDTH - PLAYER_WIDTH;

// --- Bullets ---

pub const BULLET_WIDTH: f64 = 4.0;
pub const BULLET_HEIGHT: f64 = 10.0;
pub const BULLET_SPEED: f64 = 7.0;

/// Minimum wall-clock time between two successful shots.
pub const FIRE_COOLDOWN_SECS: f64 = 0.2;

// --- Enemies ---

pub const ENEMY_WIDTH: f64 = 30.0;
pub const ENEMY_HEIGHT: f64 = 30.0;
pub const ENEMY_BASE_SPEED: f64 = 1.0;

pub const SCORE_BASIC: u64 = 100;
pub const SCORE_FAST: u64 = 200;
pub const SCORE_TANK: u64 = 300;

// --- Waves ---

/// Enemies in wave 1.
pub const WAVE_BASE_COUNT: f64 = 5.0;

/// Per-wave multiplicative growth of the enemy count.
pub const WAVE_GROWTH: f64 = 1.1;

/// Clearing this wave wins the match.
pub const FINAL_WAVE: u32 = 10;

/// Delay between a wave being cleared and the next one spawning.
pub const WAVE_DELAY_SECS: f64 = 1.5;

/// A draw above this is a tank.
pub const TANK_THRESHOLD: f64 = 0.9;

/// A draw above this (and not a tank) is fast.
pub const FAST_THRESHOLD: f64 = 0.7;

/// Spawn grid columns.
pub const SPAWN_COLUMNS: u32 = 8;
pub const SPAWN_SPACING_X: f64 = 80.0;
pub const SPAWN_SPACING_Y: f64 = 60.0;
pub const SPAWN_MARGIN_X: f64 = 60.0;

/// y of the first spawn row. Negative so the wave enters from above.
pub const SPAWN_TOP_Y: f64 = -ENEMY_HEIGHT - 30.0;

// --- Session ---

pub const STARTING_LIVES: u32 = 3;

// --- Explosions ---

pub const PARTICLES_PER_EXPLOSION: usize = 15;
pub const PARTICLE_MIN_SPEED: f64 = 0.5;
pub const PARTICLE_MAX_SPEED: f64 = 3.0;

/// Particle lifetime range in ticks (inclusive).
pub const PARTICLE_LIFE_MIN: u32 = 20;
pub const PARTICLE_LIFE_MAX: u32 = 40;

// --- Starfield ---

pub const STAR_COUNT: usize = 100;
pub const STAR_MIN_SPEED: f64 = 0.3;
pub const STAR_MAX_SPEED: f64 = 2.0;
pub const STAR_MAX_SIZE: f64 = 2.0;
