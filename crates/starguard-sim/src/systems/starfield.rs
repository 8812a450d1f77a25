//! Scrolling starfield. Cosmetic only: stars are not entities and never
//! touch gameplay state.

use rand::Rng;
use serde::{Deserialize, Serialize};

use starguard_core::constants::*;
use starguard_core::state::StarView;
use starguard_core::types::Position;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub position: Position,
    pub speed: f64,
    pub size: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    /// Scatter `count` stars over the play area.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                position: Position::new(
                    rng.gen_range(0.0..PLAY_AREA_WIDTH),
                    rng.gen_range(0.0..PLAY_AREA_HEIGHT),
                ),
                speed: rng.gen_range(STAR_MIN_SPEED..STAR_MAX_SPEED),
                size: rng.gen_range(0.5..STAR_MAX_SIZE),
            })
            .collect();
        Self { stars }
    }

    /// Scroll every star down by its speed, wrapping at the bottom edge.
    pub fn advance(&mut self) {
        for star in &mut self.stars {
            star.position.y += star.speed;
            if star.position.y > PLAY_AREA_HEIGHT {
                star.position.y -= PLAY_AREA_HEIGHT;
            }
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn views(&self) -> Vec<StarView> {
        self.stars
            .iter()
            .map(|s| StarView {
                position: s.position,
                size: s.size,
            })
            .collect()
    }
}
