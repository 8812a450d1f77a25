//! Game loop thread: owns the engine, ticks it against the wall clock and
//! publishes snapshots.
//!
//! The engine is created inside the thread. Commands arrive over an `mpsc`
//! channel and the latest snapshot is stored in shared state for polling.
//! Outside `Playing` the loop schedules no frames at all: it blocks on the
//! channel until the next command arrives.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use starguard_core::enums::GamePhase;
use starguard_core::state::GameStateSnapshot;
use starguard_sim::engine::{SimConfig, SimulationEngine};

use crate::config::AppConfig;
use crate::error::LoopError;
use crate::state::GameLoopCommand;

/// Seed and frame rate for one game loop thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSettings {
    pub seed: u64,
    pub fps: u32,
}

impl LoopSettings {
    /// Target duration of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / self.fps.max(1) as u64)
    }
}

impl From<&AppConfig> for LoopSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            seed: config.seed,
            fps: config.fps,
        }
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for callers to use and the thread handle.
pub fn spawn_game_loop(
    settings: LoopSettings,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), LoopError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("starguard-game-loop".into())
        .spawn(move || {
            run_game_loop(settings, cmd_rx, &latest_snapshot);
        })?;

    log::debug!("Game loop spawned at {} fps (seed {})", settings.fps, settings.seed);
    Ok((cmd_tx, handle))
}

/// Outcome of feeding one command to the engine.
enum Flow {
    Continue,
    Stop,
}

fn forward(engine: &mut SimulationEngine, command: GameLoopCommand) -> Flow {
    match command {
        GameLoopCommand::Player(cmd) => {
            engine.queue_command(cmd);
            Flow::Continue
        }
        GameLoopCommand::Shutdown => Flow::Stop,
    }
}

fn publish(latest_snapshot: &Mutex<Option<GameStateSnapshot>>, snapshot: GameStateSnapshot) {
    if let Ok(mut lock) = latest_snapshot.lock() {
        *lock = Some(snapshot);
    }
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    settings: LoopSettings,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut engine = SimulationEngine::new(SimConfig {
        seed: settings.seed,
    });
    let frame_duration = settings.frame_duration();

    publish(latest_snapshot, engine.tick(0.0));

    let mut last_frame = Instant::now();
    let mut next_tick_time = last_frame;

    loop {
        // 1. Halted: wait for a command without burning frames
        if engine.phase() != GamePhase::Playing {
            match cmd_rx.recv() {
                Ok(cmd) => {
                    if let Flow::Stop = forward(&mut engine, cmd) {
                        break;
                    }
                }
                Err(_) => break,
            }
            last_frame = Instant::now();
            next_tick_time = last_frame;
        }

        // 2. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(cmd) => {
                    if let Flow::Stop = forward(&mut engine, cmd) {
                        log::debug!("Game loop shutting down");
                        return;
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 3. Advance one frame by the measured wall-clock delta
        let now = Instant::now();
        let dt = now.duration_since(last_frame);
        last_frame = now;
        let snapshot = engine.tick(dt.as_secs_f64());

        // 4. Store latest snapshot for synchronous polling
        publish(latest_snapshot, snapshot);

        // 5. Sleep until next frame
        next_tick_time += frame_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > frame_duration * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
    log::debug!("Game loop shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use starguard_core::commands::PlayerCommand;

    fn wait_for(
        latest: &Mutex<Option<GameStateSnapshot>>,
        pred: impl Fn(&GameStateSnapshot) -> bool,
    ) -> Option<GameStateSnapshot> {
        let deadline = Instant::now() + Duration::from_secs(3);
        while Instant::now() < deadline {
            if let Some(snap) = latest.lock().unwrap().as_ref() {
                if pred(snap) {
                    return Some(snap.clone());
                }
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        None
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::StartGame))
            .unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::Fire)).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::StartGame)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_frame_duration() {
        let settings = LoopSettings { seed: 1, fps: 60 };
        assert_eq!(
            settings.frame_duration().as_nanos(),
            (1_000_000_000u64 / 60) as u128
        );
    }

    #[test]
    fn test_loop_halts_in_menu_and_runs_when_playing() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) =
            spawn_game_loop(LoopSettings { seed: 5, fps: 120 }, latest.clone()).unwrap();

        let menu = wait_for(&latest, |s| s.phase == GamePhase::Menu).unwrap();
        std::thread::sleep(Duration::from_millis(50));
        let still_menu = latest.lock().unwrap().clone().unwrap();
        assert_eq!(menu.time.tick, still_menu.time.tick, "No frames while halted");

        tx.send(GameLoopCommand::Player(PlayerCommand::StartGame))
            .unwrap();
        let playing = wait_for(&latest, |s| s.phase == GamePhase::Playing && s.time.tick > 5);
        assert!(playing.is_some(), "Loop should tick while playing");

        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_loop_exits_when_sender_dropped() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) =
            spawn_game_loop(LoopSettings { seed: 5, fps: 60 }, latest.clone()).unwrap();
        wait_for(&latest, |_| true).unwrap();
        drop(tx);
        handle.join().unwrap();
    }
}
