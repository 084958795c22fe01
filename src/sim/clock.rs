//! Frame delta normalization
//!
//! The render driver hands us whatever time elapsed since its last callback.
//! A stalled tab can report seconds; a busy loop can report zero. Both are
//! clamped so a single step can neither tunnel through an obstacle nor stall.

use crate::config::GameConfig;
use crate::consts::{MAX_DT_MS, MIN_DT_MS};

/// Clamps raw frame deltas into a bounded step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stepper {
    min_dt_ms: f32,
    max_dt_ms: f32,
}

impl Default for Stepper {
    fn default() -> Self {
        Self {
            min_dt_ms: MIN_DT_MS,
            max_dt_ms: MAX_DT_MS,
        }
    }
}

impl Stepper {
    /// Bounds must satisfy `min_dt_ms <= max_dt_ms` (checked by `GameConfig::validate`)
    pub fn new(min_dt_ms: f32, max_dt_ms: f32) -> Self {
        Self {
            min_dt_ms,
            max_dt_ms,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.min_dt_ms, config.max_dt_ms)
    }

    /// Clamp a raw delta in milliseconds and return the step in seconds
    pub fn step(&self, raw_dt_ms: f32) -> f32 {
        self.clamp_ms(raw_dt_ms) / 1000.0
    }

    /// Clamp a raw delta in milliseconds
    pub fn clamp_ms(&self, raw_dt_ms: f32) -> f32 {
        if raw_dt_ms.is_nan() || raw_dt_ms < self.min_dt_ms {
            self.min_dt_ms
        } else if raw_dt_ms > self.max_dt_ms {
            self.max_dt_ms
        } else {
            raw_dt_ms
        }
    }
}
