//! Runtime configuration read from environment variables.
//!
//! - `PHARAOH_SEED`: RNG seed (default: derived from the system clock)
//! - `PHARAOH_FRAME_MS`: terminal frame/poll interval (default 16)
//! - `PHARAOH_FAST_DROP_GRACE_MS`: fast-drop auto-release window for
//!   terminals without key release events (default 150)
//! - `PHARAOH_LOG_PATH`: log file; logging is off when unset
//! - `PHARAOH_LOG_LEVEL`: `error`, `warn`, `info`, `debug`, `trace` or `off`
//!   (default `info`)
//!
//! Unparsable values fall back to their defaults.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use log::LevelFilter;

use crate::types::{FAST_DROP_GRACE_MS, FRAME_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub frame_ms: u32,
    pub fast_drop_grace_ms: u32,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            frame_ms: FRAME_MS,
            fast_drop_grace_ms: FAST_DROP_GRACE_MS,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let seed = lookup("PHARAOH_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let frame_ms = lookup("PHARAOH_FRAME_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(defaults.frame_ms);

        let fast_drop_grace_ms = lookup("PHARAOH_FAST_DROP_GRACE_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.fast_drop_grace_ms);

        let log_path = lookup("PHARAOH_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let log_level = lookup("PHARAOH_LOG_LEVEL")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.log_level);

        Self {
            seed,
            frame_ms,
            fast_drop_grace_ms,
            log_path,
            log_level,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
