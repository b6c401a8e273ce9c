//! Runtime configuration from environment variables.
//!
//! - `TETRIS_SEED`: piece sequence seed (default: derived from the clock)
//! - `TETRIS_TICK_MS`: frame interval in milliseconds (default 16)
//! - `TETRIS_CELL_WIDTH`: terminal columns per board cell, 1-4 (default 2)
//! - `TETRIS_LOG_PATH`: write logs to this file (default: no logging)
//! - `TETRIS_LOG`: log filter directive (default "info")
//!
//! Values that do not parse fall back to the default.

use std::env;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::TICK_MS;

const DEFAULT_CELL_WIDTH: u16 = 2;
const MAX_CELL_WIDTH: u16 = 4;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub tick: Duration,
    pub cell_width: u16,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            tick: Duration::from_millis(TICK_MS as u64),
            cell_width: DEFAULT_CELL_WIDTH,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("TETRIS_SEED")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(defaults.seed);
        let tick = lookup("TETRIS_TICK_MS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(|ms| Duration::from_millis(ms.max(1)))
            .unwrap_or(defaults.tick);
        let cell_width = lookup("TETRIS_CELL_WIDTH")
            .and_then(|v| v.trim().parse::<u16>().ok())
            .map(|w| w.clamp(1, MAX_CELL_WIDTH))
            .unwrap_or(defaults.cell_width);
        let log_path = lookup("TETRIS_LOG_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let log_filter = lookup("TETRIS_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            seed,
            tick,
            cell_width,
            log_path,
            log_filter,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
