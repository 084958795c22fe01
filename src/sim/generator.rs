//! Obstacle pair generation
//!
//! Gap position is the only randomized quantity. The RNG is injected so runs
//! replay exactly from a seed.

use std::ops::RangeInclusive;

use rand::Rng;

use super::state::{ObstacleId, ObstaclePair};
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Feasible gap centers for a play field
///
/// Fails when the field is shorter than the gap; never clamps silently.
pub fn gap_center_range(
    ceiling_y: f32,
    ground_y: f32,
    min_gap_size: f32,
) -> Result<RangeInclusive<f32>, ConfigError> {
    let low = ceiling_y + min_gap_size / 2.0;
    let high = ground_y - min_gap_size / 2.0;
    if low > high || low.is_nan() || high.is_nan() {
        return Err(ConfigError::InfeasibleGap {
            min_gap: min_gap_size,
            available: ground_y - ceiling_y,
        });
    }
    Ok(low..=high)
}

/// Factory for obstacle pairs
#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleGenerator {
    pub ceiling_y: f32,
    pub ground_y: f32,
    pub min_gap_size: f32,
    /// Spawn x, just past the right edge of the play field
    pub spawn_x: f32,
}

impl ObstacleGenerator {
    pub fn new(ceiling_y: f32, ground_y: f32, min_gap_size: f32, spawn_x: f32) -> Self {
        Self {
            ceiling_y,
            ground_y,
            min_gap_size,
            spawn_x,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.ceiling_y(),
            config.ground_y(),
            config.min_gap_size,
            config.spawn_x(),
        )
    }

    /// Produce a new pair at the spawn line with a uniformly placed gap
    pub fn generate<R: Rng + ?Sized>(
        &self,
        id: ObstacleId,
        rng: &mut R,
    ) -> Result<ObstaclePair, ConfigError> {
        let range = gap_center_range(self.ceiling_y, self.ground_y, self.min_gap_size)?;
        let (low, high) = (*range.start(), *range.end());
        let gap_center_y = if low == high {
            low
        } else {
            rng.random_range(low..=high)
        };

        Ok(ObstaclePair {
            id,
            x: self.spawn_x,
            gap_center_y,
            gap_size: self.min_gap_size,
            scored: false,
        })
    }
}
