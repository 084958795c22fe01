//! Live obstacle collection
//!
//! Pairs are appended on spawn and filtered out on retire. Ids are never
//! reused within a session, so a retired pair cannot come back.

use rand::Rng;

use super::generator::ObstacleGenerator;
use super::state::{ObstacleId, ObstaclePair};
use crate::config::GameConfig;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleField {
    /// Ordered by creation
    pairs: Vec<ObstaclePair>,
    next_id: u32,
    /// Seconds accumulated since the last spawn
    since_last_spawn: f32,
    /// Seconds between spawns
    spawn_interval: f32,
    retire_x: f32,
}

impl ObstacleField {
    /// Empty field whose first spawn happens on the first advanced tick
    pub fn new(spawn_interval: f32, retire_x: f32) -> Self {
        Self {
            pairs: Vec::new(),
            next_id: 1,
            since_last_spawn: spawn_interval,
            spawn_interval,
            retire_x,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.spawn_interval_secs(), config.retire_x)
    }

    pub fn pairs(&self) -> &[ObstaclePair] {
        &self.pairs
    }

    pub fn pairs_mut(&mut self) -> &mut [ObstaclePair] {
        &mut self.pairs
    }

    pub fn get(&self, id: ObstacleId) -> Option<&ObstaclePair> {
        self.pairs.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn since_last_spawn(&self) -> f32 {
        self.since_last_spawn
    }

    /// Allocate a new pair id
    pub fn next_id(&mut self) -> ObstacleId {
        let id = ObstacleId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Insert a pair built elsewhere
    pub fn push(&mut self, pair: ObstaclePair) {
        self.pairs.push(pair);
    }

    /// Drop every pair (id counter keeps running)
    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    /// Arm the spawn timer so the next advanced tick spawns immediately
    pub fn rearm(&mut self) {
        self.since_last_spawn = self.spawn_interval;
    }

    /// Scroll every pair left and retire the ones past the threshold
    ///
    /// Returns the retired ids.
    pub fn advance(&mut self, dt: f32, move_speed: f32) -> Vec<ObstacleId> {
        let shift = move_speed * dt;
        for pair in &mut self.pairs {
            pair.x -= shift;
        }

        let retire_x = self.retire_x;
        let mut retired = Vec::new();
        self.pairs.retain(|pair| {
            if pair.x < retire_x {
                retired.push(pair.id);
                false
            } else {
                true
            }
        });
        retired
    }

    /// Accumulate `dt` and spawn a pair once the interval is exceeded
    ///
    /// Cadence follows accumulated time, not frame count.
    pub fn maybe_spawn<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        generator: &ObstacleGenerator,
        rng: &mut R,
    ) -> Result<Option<ObstacleId>, ConfigError> {
        self.since_last_spawn += dt;
        if self.since_last_spawn <= self.spawn_interval {
            return Ok(None);
        }

        self.since_last_spawn = 0.0;
        let id = self.next_id();
        let pair = generator.generate(id, rng)?;
        self.pairs.push(pair);
        Ok(Some(id))
    }
}
