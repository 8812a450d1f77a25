//! Runtime configuration: CLI flags with environment fallbacks.
//!
//! Precedence is flag, then environment variable, then default.

use starguard_core::constants::NOMINAL_FPS;

use crate::error::ConfigError;

pub const ENV_SEED: &str = "STARGUARD_SEED";
pub const ENV_FRAMES: &str = "STARGUARD_FRAMES";
pub const ENV_FPS: &str = "STARGUARD_FPS";

/// Frames simulated by the headless demo when nothing overrides it.
pub const DEFAULT_FRAMES: u64 = 3600;

/// How the binary drives the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Tick as fast as possible with a fixed frame delta.
    Headless,
    /// Run the threaded game loop against the wall clock.
    Realtime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub seed: u64,
    pub frames: u64,
    pub fps: u32,
    pub mode: RunMode,
    /// Print the final snapshot as JSON on stdout.
    pub print_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            frames: DEFAULT_FRAMES,
            fps: NOMINAL_FPS,
            mode: RunMode::Headless,
            print_json: false,
        }
    }
}

impl AppConfig {
    /// Frame delta in seconds at the configured rate.
    pub fn frame_dt(&self) -> f64 {
        1.0 / self.fps as f64
    }

    /// Build from the process arguments and environment.
    pub fn from_env_and_args() -> Result<Self, ConfigError> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse(&args, |key| std::env::var(key).ok())
    }

    /// Build from explicit arguments (program name excluded) and an
    /// environment lookup.
    pub fn parse(
        args: &[String],
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = env(ENV_SEED) {
            config.seed = parse_value(ENV_SEED, &value)?;
        }
        if let Some(value) = env(ENV_FRAMES) {
            config.frames = parse_value(ENV_FRAMES, &value)?;
        }
        if let Some(value) = env(ENV_FPS) {
            config.fps = parse_value(ENV_FPS, &value)?;
        }

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--seed" => config.seed = parse_value(flag, flag_value(args, i)?)?,
                "--frames" => config.frames = parse_value(flag, flag_value(args, i)?)?,
                "--fps" => config.fps = parse_value(flag, flag_value(args, i)?)?,
                "--json" => {
                    config.print_json = true;
                    i += 1;
                    continue;
                }
                "--realtime" => {
                    config.mode = RunMode::Realtime;
                    i += 1;
                    continue;
                }
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
            i += 2;
        }

        if config.fps == 0 {
            return Err(ConfigError::OutOfRange {
                source_name: "fps".into(),
                value: config.fps.to_string(),
                requirement: "at least 1",
            });
        }
        Ok(config)
    }
}

fn flag_value(args: &[String], i: usize) -> Result<&str, ConfigError> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| ConfigError::MissingValue {
            flag: args[i].clone(),
        })
}

fn parse_value<T: std::str::FromStr>(source_name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            source_name: source_name.to_string(),
            value: value.to_string(),
        })
}
