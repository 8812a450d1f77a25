//! Fire control: wall-clock rate limiting of the fire intent.

use serde::{Deserialize, Serialize};

use starguard_core::constants::FIRE_COOLDOWN_SECS;

/// Float slack so a shot exactly one cooldown later is never refused
/// because of accumulated frame-delta rounding.
const COOLDOWN_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FireControl {
    last_shot_secs: Option<f64>,
}

impl FireControl {
    /// Whether a shot at `now_secs` would pass the cooldown.
    pub fn ready(&self, now_secs: f64) -> bool {
        match self.last_shot_secs {
            Some(last) => now_secs - last + COOLDOWN_EPSILON >= FIRE_COOLDOWN_SECS,
            None => true,
        }
    }

    /// Record a shot at `now_secs` if the cooldown allows it.
    pub fn try_fire(&mut self, now_secs: f64) -> bool {
        if !self.ready(now_secs) {
            return false;
        }
        self.last_shot_secs = Some(now_secs);
        true
    }

    pub fn reset(&mut self) {
        self.last_shot_secs = None;
    }
}
