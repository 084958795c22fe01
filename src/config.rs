//! Game tuning and world geometry
//!
//! Supplied once at session construction. Every field has a tuned default so
//! partial JSON documents only override what they name.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// What happens when the body touches the ceiling or the ground
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Body is clamped, momentum is killed, run continues
    #[default]
    Clamp,
    /// Boundary contact ends the run
    Fatal,
}

impl BoundaryPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryPolicy::Clamp => "clamp",
            BoundaryPolicy::Fatal => "fatal",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "clamp" => Some(BoundaryPolicy::Clamp),
            "fatal" | "kill" => Some(BoundaryPolicy::Fatal),
            _ => None,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Physics ===
    /// Downward acceleration (units/s²)
    pub gravity: f32,
    /// Velocity set on thrust (negative is up)
    pub fly_force: f32,
    /// Obstacle scroll speed (units/s)
    pub move_speed: f32,
    /// Terminal fall speed (units/s)
    pub max_fall_speed: f32,

    // === Obstacles ===
    pub min_gap_size: f32,
    pub spawn_interval_ms: u32,
    pub obstacle_width: f32,
    /// Pairs whose x drops below this are retired
    pub retire_x: f32,

    // === World ===
    pub world_width: f32,
    pub world_height: f32,
    pub ground_level_fraction: f32,
    pub ceiling_level_fraction: f32,
    pub boundary_policy: BoundaryPolicy,

    // === Player ===
    pub body_radius: f32,
    pub body_x_fraction: f32,
    /// Start position, measured up from the ground line
    pub body_start_height: f32,
    pub hover_speed: f32,
    pub hover_amplitude: f32,

    // === Clock ===
    pub min_dt_ms: f32,
    pub max_dt_ms: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            fly_force: FLY_FORCE,
            move_speed: MOVE_SPEED,
            max_fall_speed: MAX_FALL_SPEED,

            min_gap_size: MIN_GAP_SIZE,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            obstacle_width: OBSTACLE_WIDTH,
            retire_x: RETIRE_X,

            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            ground_level_fraction: GROUND_LEVEL,
            ceiling_level_fraction: CEILING_LEVEL,
            boundary_policy: BoundaryPolicy::Clamp,

            body_radius: BODY_RADIUS,
            body_x_fraction: BODY_X_FRACTION,
            body_start_height: BODY_START_HEIGHT,
            hover_speed: HOVER_SPEED,
            hover_amplitude: HOVER_AMPLITUDE,

            min_dt_ms: MIN_DT_MS,
            max_dt_ms: MAX_DT_MS,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Ceiling line (world y grows downward)
    #[inline]
    pub fn ceiling_y(&self) -> f32 {
        self.world_height * self.ceiling_level_fraction
    }

    /// Ground line
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.world_height * self.ground_level_fraction
    }

    #[inline]
    pub fn body_x(&self) -> f32 {
        self.world_width * self.body_x_fraction
    }

    #[inline]
    pub fn body_start_y(&self) -> f32 {
        self.ground_y() - self.body_start_height
    }

    /// New pairs appear just past the right edge
    #[inline]
    pub fn spawn_x(&self) -> f32 {
        self.world_width + self.obstacle_width / 2.0
    }

    #[inline]
    pub fn spawn_interval_secs(&self) -> f32 {
        self.spawn_interval_ms as f32 / 1000.0
    }

    /// Reject configurations the simulation cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("gravity", self.gravity),
            ("fly_force", self.fly_force),
            ("move_speed", self.move_speed),
            ("max_fall_speed", self.max_fall_speed),
            ("min_gap_size", self.min_gap_size),
            ("obstacle_width", self.obstacle_width),
            ("retire_x", self.retire_x),
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("ground_level_fraction", self.ground_level_fraction),
            ("ceiling_level_fraction", self.ceiling_level_fraction),
            ("body_radius", self.body_radius),
            ("body_x_fraction", self.body_x_fraction),
            ("body_start_height", self.body_start_height),
            ("hover_speed", self.hover_speed),
            ("hover_amplitude", self.hover_amplitude),
            ("min_dt_ms", self.min_dt_ms),
            ("max_dt_ms", self.max_dt_ms),
        ];
        if let Some(&(name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { name });
        }

        let positive = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("min_gap_size", self.min_gap_size),
            ("obstacle_width", self.obstacle_width),
            ("body_radius", self.body_radius),
            ("move_speed", self.move_speed),
            ("max_fall_speed", self.max_fall_speed),
            ("min_dt_ms", self.min_dt_ms),
            ("spawn_interval_ms", self.spawn_interval_ms as f32),
        ];
        if let Some(&(name, value)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(ConfigError::NonPositive { name, value });
        }

        for (name, value) in [
            ("ground_level_fraction", self.ground_level_fraction),
            ("ceiling_level_fraction", self.ceiling_level_fraction),
            ("body_x_fraction", self.body_x_fraction),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidFraction { name, value });
            }
        }

        if self.min_dt_ms > self.max_dt_ms {
            return Err(ConfigError::InvalidStepBounds {
                min_ms: self.min_dt_ms,
                max_ms: self.max_dt_ms,
            });
        }

        let (ceiling, ground) = (self.ceiling_y(), self.ground_y());
        if ceiling >= ground {
            return Err(ConfigError::InvertedBounds { ceiling, ground });
        }

        let available = ground - ceiling;
        if self.body_radius * 2.0 > available {
            return Err(ConfigError::BodyTooLarge {
                diameter: self.body_radius * 2.0,
                available,
            });
        }

        let (min_y, max_y) = (ceiling + self.body_radius, ground - self.body_radius);
        let start = self.body_start_y();
        let (top, bottom) = (
            start - self.hover_amplitude.abs(),
            start + self.hover_amplitude.abs(),
        );
        if top < min_y || bottom > max_y {
            return Err(ConfigError::StartOutOfBounds {
                top,
                bottom,
                min_y,
                max_y,
            });
        }

        // A pair scores once its trailing edge is behind the body
        let scoring_x = self.body_x() - self.obstacle_width / 2.0;
        if self.retire_x >= scoring_x {
            return Err(ConfigError::RetireBeforeScoring {
                retire_x: self.retire_x,
                scoring_x,
            });
        }

        crate::sim::generator::gap_center_range(ceiling, ground, self.min_gap_size)?;
        Ok(())
    }
}
