//! Run configuration read from environment variables.
//!
//! - `TETRIS_SEED`: seed for the piece generator (default: derived from the clock)
//! - `TETRIS_GRAVITY_MS`: gravity interval in milliseconds (default: 1000)

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};

use crate::types::GRAVITY_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u32,
    pub gravity_ms: u32,
}

impl RunConfig {
    /// Read the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = match get("TETRIS_SEED") {
            Some(s) => s.parse::<u32>().with_context(|| {
                format!("TETRIS_SEED must be an unsigned 32-bit integer, got {:?}", s)
            })?,
            None => clock_seed(),
        };

        let gravity_ms = match get("TETRIS_GRAVITY_MS") {
            Some(s) => {
                let ms = s.parse::<u32>().with_context(|| {
                    format!("TETRIS_GRAVITY_MS must be a number of milliseconds, got {:?}", s)
                })?;
                if ms == 0 {
                    return Err(anyhow!("TETRIS_GRAVITY_MS must be greater than zero"));
                }
                ms
            }
            None => GRAVITY_MS,
        };

        Ok(Self { seed, gravity_ms })
    }
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    (nanos as u32) ^ ((nanos >> 32) as u32)
}
