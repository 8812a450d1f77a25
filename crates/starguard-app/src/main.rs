use std::process;
use std::time::Duration;

use starguard_app::autopilot::{self, Autopilot};
use starguard_app::config::{AppConfig, RunMode};
use starguard_app::error::AppError;
use starguard_app::game_loop::LoopSettings;
use starguard_app::state::AppState;
use starguard_core::commands::PlayerCommand;
use starguard_core::state::GameStateSnapshot;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        log::error!("{err}");
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = AppConfig::from_env_and_args()?;
    log::info!(
        "Starting {:?} session: seed {}, {} frames at {} fps",
        config.mode,
        config.seed,
        config.frames,
        config.fps
    );

    let snapshot = match config.mode {
        RunMode::Headless => autopilot::run_headless(&config),
        RunMode::Realtime => run_realtime(&config)?,
    };

    if config.print_json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!(
            "{:?}: score {} wave {} lives {}",
            snapshot.phase, snapshot.score, snapshot.wave, snapshot.lives
        );
    }
    Ok(())
}

/// Drive the threaded loop with the autopilot, polling once per frame.
fn run_realtime(config: &AppConfig) -> Result<GameStateSnapshot, AppError> {
    let state = AppState::new();
    let pilot = Autopilot::default();
    let frame = Duration::from_secs_f64(config.frame_dt());

    let last = state.run_session(LoopSettings::from(config), |state| {
        state.send(PlayerCommand::StartGame)?;

        let mut last = GameStateSnapshot::default();
        for _ in 0..config.frames {
            std::thread::sleep(frame);
            let Some(snapshot) = state.snapshot()? else {
                continue;
            };
            if snapshot.phase.is_terminal() {
                last = snapshot;
                break;
            }
            for command in pilot.plan(&snapshot) {
                state.send(command)?;
            }
            last = snapshot;
        }
        Ok(last)
    })?;
    Ok(last)
}
