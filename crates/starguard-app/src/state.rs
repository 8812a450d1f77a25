//! Application state shared between callers and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use starguard_core::commands::PlayerCommand;
use starguard_core::state::GameStateSnapshot;

use crate::error::LoopError;
use crate::game_loop::{self, LoopSettings};

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared handle to a running game loop.
///
/// `mpsc::Sender` is wrapped in `Mutex` so the handle is `Sync`; the latest
/// snapshot is an `Arc` shared with the loop thread.
pub struct AppState {
    /// `None` before `start` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Updated by the game loop thread after each frame.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub running: Mutex<bool>,
    loop_handle: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
            loop_handle: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop thread if it is not already running.
    pub fn start(&self, settings: LoopSettings) -> Result<(), LoopError> {
        let mut running = self.running.lock().map_err(|_| LoopError::Poisoned)?;
        if *running {
            return Err(LoopError::AlreadyRunning);
        }

        let (cmd_tx, handle) =
            game_loop::spawn_game_loop(settings, self.latest_snapshot.clone())?;

        *self.command_tx.lock().map_err(|_| LoopError::Poisoned)? = Some(cmd_tx);
        *self.loop_handle.lock().map_err(|_| LoopError::Poisoned)? = Some(handle);
        *running = true;
        Ok(())
    }

    /// Forward a player command to the loop.
    pub fn send(&self, command: PlayerCommand) -> Result<(), LoopError> {
        let tx_lock = self.command_tx.lock().map_err(|_| LoopError::Poisoned)?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(GameLoopCommand::Player(command))
                .map_err(|_| LoopError::Disconnected),
            None => Err(LoopError::NotRunning),
        }
    }

    /// Latest snapshot published by the loop, if any.
    pub fn snapshot(&self) -> Result<Option<GameStateSnapshot>, LoopError> {
        let lock = self
            .latest_snapshot
            .lock()
            .map_err(|_| LoopError::Poisoned)?;
        Ok(lock.clone())
    }

    /// Start a loop, run `body` against it, then stop the loop.
    ///
    /// The loop is shut down and joined whether `body` succeeds or fails.
    /// An error from `body` takes precedence over a shutdown error.
    pub fn run_session<T>(
        &self,
        settings: LoopSettings,
        body: impl FnOnce(&Self) -> Result<T, LoopError>,
    ) -> Result<T, LoopError> {
        self.start(settings)?;
        let outcome = body(self);
        let stopped = self.shutdown();
        let value = outcome?;
        stopped?;
        Ok(value)
    }

    /// Stop the loop and wait for its thread to finish.
    pub fn shutdown(&self) -> Result<(), LoopError> {
        let mut running = self.running.lock().map_err(|_| LoopError::Poisoned)?;
        if !*running {
            return Err(LoopError::NotRunning);
        }

        if let Some(tx) = self.command_tx.lock().map_err(|_| LoopError::Poisoned)?.take() {
            // The loop may already have exited; joining below still succeeds.
            let _ = tx.send(GameLoopCommand::Shutdown);
        }
        if let Some(handle) = self.loop_handle.lock().map_err(|_| LoopError::Poisoned)?.take() {
            if handle.join().is_err() {
                log::error!("Game loop thread panicked");
            }
        }
        *running = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starguard_core::enums::GamePhase;
    use std::time::{Duration, Instant};

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(!*state.running.lock().unwrap());
    }

    #[test]
    fn test_send_before_start_fails() {
        let state = AppState::new();
        assert!(matches!(
            state.send(PlayerCommand::Fire),
            Err(LoopError::NotRunning)
        ));
        assert!(matches!(state.shutdown(), Err(LoopError::NotRunning)));
    }

    #[test]
    fn test_start_send_shutdown() {
        let state = AppState::new();
        let settings = LoopSettings { seed: 3, fps: 120 };
        state.start(settings).unwrap();
        assert!(matches!(state.start(settings), Err(LoopError::AlreadyRunning)));

        state.send(PlayerCommand::StartGame).unwrap();
        let deadline = Instant::now() + Duration::from_secs(3);
        let mut phase = None;
        while Instant::now() < deadline {
            phase = state.snapshot().unwrap().map(|s| s.phase);
            if phase == Some(GamePhase::Playing) {
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(phase, Some(GamePhase::Playing));

        state.shutdown().unwrap();
        assert!(!*state.running.lock().unwrap());
        assert!(matches!(
            state.send(PlayerCommand::Fire),
            Err(LoopError::NotRunning)
        ));
    }

    #[test]
    fn test_session_stops_loop_when_body_fails() {
        let state = AppState::new();
        let settings = LoopSettings { seed: 3, fps: 120 };

        let result: Result<(), LoopError> = state.run_session(settings, |s| {
            s.send(PlayerCommand::StartGame)?;
            Err(LoopError::Disconnected)
        });
        assert!(matches!(result, Err(LoopError::Disconnected)));
        assert!(!*state.running.lock().unwrap());
        assert!(state.command_tx.lock().unwrap().is_none());

        // The stopped loop leaves the handle reusable.
        let phase = state
            .run_session(settings, |s| Ok(s.snapshot()?.map(|snap| snap.phase)))
            .unwrap();
        assert!(matches!(phase, None | Some(GamePhase::Menu)));
        assert!(!*state.running.lock().unwrap());
    }

    #[test]
    fn test_session_does_not_start_twice() {
        let state = AppState::new();
        let settings = LoopSettings { seed: 3, fps: 60 };
        state.start(settings).unwrap();

        let result = state.run_session(settings, |_| Ok(()));
        assert!(matches!(result, Err(LoopError::AlreadyRunning)));
        assert!(*state.running.lock().unwrap(), "Existing loop is left alone");
        state.shutdown().unwrap();
    }
}
