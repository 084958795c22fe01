//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Bounded timestep only
//! - Seeded RNG only
//! - Stable iteration order (by creation)
//! - No rendering, platform, or I/O dependencies

pub mod autopilot;
pub mod body;
pub mod clock;
pub mod collision;
pub mod field;
pub mod generator;
pub mod state;
pub mod tick;

pub use body::{BoundaryContact, Physics, PlayerBody};
pub use clock::Stepper;
pub use collision::{Judge, Verdict};
pub use field::ObstacleField;
pub use generator::{ObstacleGenerator, gap_center_range};
pub use state::{
    BodyView, CollisionCause, GameEvent, GamePhase, GameState, ObstacleId, ObstaclePair,
    ObstacleRect, ObstacleView, Snapshot, Span,
};
pub use tick::{TickInput, tick};
