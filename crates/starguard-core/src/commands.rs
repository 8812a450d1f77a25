//! Player intents sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Every
//! command is safe to send at any rate and in any phase; the engine
//! ignores gameplay intents outside `Playing`.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Ship control ---
    /// Step the ship left by one `PLAYER_SPEED`.
    MoveLeft,
    /// Step the ship right by one `PLAYER_SPEED`.
    MoveRight,
    /// Move the ship by an arbitrary horizontal delta (drag/analog input).
    /// Non-finite deltas are rejected.
    MoveBy { dx: f64 },
    /// Fire a bullet, subject to the cooldown.
    Fire,

    // --- Match control ---
    /// Start a new session from the menu or a terminal screen.
    StartGame,
    /// Leave a terminal screen for the menu.
    ReturnToMenu,
}
