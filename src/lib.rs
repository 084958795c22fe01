//! Candle Flap - a flappy-style obstacle dodging game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `session`: The driver-facing session (input latch, clock, listeners)
//! - `config`: Data-driven game tuning
//! - `report`: Score-reporting port for the hosting chat platform
//! - `web`: Browser bindings (wasm32 only)

pub mod config;
pub mod error;
pub mod report;
pub mod session;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{BoundaryPolicy, GameConfig};
pub use error::{ConfigError, ReportError};
pub use report::{LogReporter, MemoryReporter, ReportingListener, ScoreReport, ScoreReporter};
pub use session::{NullListener, Session, SessionListener, ThrustHandle};

/// Tuned gameplay defaults
pub mod consts {
    /// Downward acceleration (units/s²)
    pub const GRAVITY: f32 = 900.0;
    /// Vertical velocity set by a thrust (negative is up)
    pub const FLY_FORCE: f32 = -350.0;
    /// Obstacle scroll speed (units/s)
    pub const MOVE_SPEED: f32 = 200.0;
    /// Terminal fall speed (units/s)
    pub const MAX_FALL_SPEED: f32 = 400.0;

    /// Play field, as fractions of world height
    pub const GROUND_LEVEL: f32 = 0.85;
    pub const CEILING_LEVEL: f32 = 0.05;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 360.0;
    pub const WORLD_HEIGHT: f32 = 640.0;

    /// Player block is 50 units square
    pub const BODY_RADIUS: f32 = 25.0;
    /// Horizontal body position as a fraction of world width
    pub const BODY_X_FRACTION: f32 = 0.3;
    /// Start height above the ground line
    pub const BODY_START_HEIGHT: f32 = 200.0;

    /// Obstacle (candle) geometry
    pub const OBSTACLE_WIDTH: f32 = 50.0;
    pub const MIN_GAP_SIZE: f32 = 180.0;
    pub const SPAWN_INTERVAL_MS: u32 = 3000;
    /// Pairs left of this x are retired
    pub const RETIRE_X: f32 = -50.0;

    /// Idle hover animation
    pub const HOVER_SPEED: f32 = 2.0;
    pub const HOVER_AMPLITUDE: f32 = 20.0;

    /// Frame delta bounds (milliseconds)
    pub const MIN_DT_MS: f32 = 8.0;
    pub const MAX_DT_MS: f32 = 100.0;
}
