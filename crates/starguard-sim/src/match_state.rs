//! Match State Machine: phase plus session counters.
//!
//! `menu -> playing -> {gameover | victory}`; terminal phases leave via
//! `start` (restart) or `return_to_menu`. Score, lives and wave are
//! written only through this type.

use serde::{Deserialize, Serialize};

use starguard_core::constants::*;
use starguard_core::enums::GamePhase;

/// What clearing the board means for the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveCompletion {
    /// The final wave is down; the match is won.
    Victory,
    /// Another wave follows after the wave delay.
    NextWave,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    phase: GamePhase,
    score: u64,
    wave: u32,
    lives: u32,
    wave_in_progress: bool,
    /// Incremented on every session start. Deferred work stamped with an
    /// older generation belongs to a dead session.
    generation: u64,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Menu,
            score: 0,
            wave: 1,
            lives: STARTING_LIVES,
            wave_in_progress: false,
            generation: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn wave_in_progress(&self) -> bool {
        self.wave_in_progress
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Begin a fresh session. Legal from the menu and from either terminal
    /// phase; returns false (and changes nothing) while already playing.
    pub fn start(&mut self) -> bool {
        if self.phase == GamePhase::Playing {
            return false;
        }
        self.score = 0;
        self.wave = 1;
        self.lives = STARTING_LIVES;
        self.wave_in_progress = false;
        self.generation += 1;
        self.phase = GamePhase::Playing;
        log::info!("Session {} started", self.generation);
        true
    }

    /// Leave a terminal phase for the menu.
    pub fn return_to_menu(&mut self) -> bool {
        if !self.phase.is_terminal() {
            return false;
        }
        self.phase = GamePhase::Menu;
        true
    }

    /// Add points. Ignored outside `Playing`.
    pub fn award(&mut self, points: u64) {
        if self.is_playing() {
            self.score += points;
        }
    }

    /// Remove `count` lives. Returns true exactly when this call moved the
    /// match into `GameOver`.
    pub fn lose_lives(&mut self, count: u32) -> bool {
        if !self.is_playing() || count == 0 {
            return false;
        }
        self.lives = self.lives.saturating_sub(count);
        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            log::info!("Game over at wave {} with score {}", self.wave, self.score);
            return true;
        }
        false
    }

    pub fn mark_wave_started(&mut self) {
        self.wave_in_progress = true;
    }

    /// Check for a cleared board. Only fires when a wave was in progress,
    /// so the empty board before the first spawn never counts.
    pub fn complete_wave(&mut self, board_empty: bool) -> Option<WaveCompletion> {
        if !self.is_playing() || !board_empty || !self.wave_in_progress {
            return None;
        }
        self.wave_in_progress = false;
        if self.wave >= FINAL_WAVE {
            self.phase = GamePhase::Victory;
            log::info!("Victory with score {}", self.score);
            Some(WaveCompletion::Victory)
        } else {
            Some(WaveCompletion::NextWave)
        }
    }

    /// Step to the next wave and return its number.
    pub fn advance_wave(&mut self) -> u32 {
        self.wave = (self.wave + 1).min(FINAL_WAVE);
        self.wave
    }
}
