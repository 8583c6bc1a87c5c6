//! Log setup.
//!
//! The terminal UI owns stdout and stderr, so logs only ever go to a file, and
//! only when `MEMORY_LOG_PATH` is set. Without a subscriber the `tracing` macros
//! in the game crates cost next to nothing.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};

use crate::config::AppConfig;

/// Install the global file subscriber if a log path is configured.
///
/// Returns whether a subscriber was installed.
pub fn init(config: &AppConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_ref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(config.log_level)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_installs_nothing() {
        assert!(!init(&AppConfig::default()).unwrap());
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let config = AppConfig {
            log_path: Some("/nonexistent-dir/for/sure/memory.log".into()),
            ..AppConfig::default()
        };
        assert!(init(&config).is_err());
    }
}
