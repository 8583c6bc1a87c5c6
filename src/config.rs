//! Application configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `MEMORY_SEED` | random |
//! | `MEMORY_BOARD_SIZE` | 4 |
//! | `MEMORY_MISMATCH_DELAY_MS` | 500 |
//! | `MEMORY_FPS` | 60 |
//! | `MEMORY_LOG_PATH` | unset (no logging) |
//! | `MEMORY_LOG_LEVEL` | info |
//!
//! Missing or unparsable values fall back to the default. Board sizes are not
//! checked here; an unplayable size fails when the board is built.

use std::path::PathBuf;
use std::str::FromStr;

use tracing::Level;

use crate::core::GameConfig;
use crate::types::{BOARD_SIZE, FRAME_RATE, MISMATCH_DELAY_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Shuffle seed; `None` picks a random one at startup.
    pub seed: Option<u64>,
    pub board_size: u8,
    pub mismatch_delay_ms: u64,
    pub frame_rate: u32,
    pub log_path: Option<PathBuf>,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            board_size: BOARD_SIZE,
            mismatch_delay_ms: MISMATCH_DELAY_MS,
            frame_rate: FRAME_RATE,
            log_path: None,
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    /// Create from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_path = lookup("MEMORY_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            seed: parsed(&lookup, "MEMORY_SEED"),
            board_size: parsed(&lookup, "MEMORY_BOARD_SIZE").unwrap_or(defaults.board_size),
            mismatch_delay_ms: parsed(&lookup, "MEMORY_MISMATCH_DELAY_MS")
                .unwrap_or(defaults.mismatch_delay_ms),
            frame_rate: parsed(&lookup, "MEMORY_FPS")
                .filter(|&fps: &u32| fps > 0)
                .unwrap_or(defaults.frame_rate),
            log_path,
            log_level: parsed(&lookup, "MEMORY_LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Game parameters, drawing a random seed if none was configured.
    pub fn game_config(&self) -> GameConfig {
        GameConfig::default()
            .with_seed(self.seed.unwrap_or_else(rand::random))
            .with_board_size(self.board_size)
            .with_mismatch_delay_ms(self.mismatch_delay_ms)
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}
