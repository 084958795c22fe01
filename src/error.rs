//! Error types
//!
//! Configuration errors are the only failures the simulation itself can
//! produce. Reporting errors belong to the glue that forwards final scores.

use thiserror::Error;

/// Geometrically infeasible or malformed game configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The play field cannot fit the minimum gap.
    #[error("minimum gap {min_gap} exceeds available play field height {available}")]
    InfeasibleGap {
        /// Requested minimum gap size.
        min_gap: f32,
        /// Distance between ceiling and ground.
        available: f32,
    },

    /// The play field cannot fit the player body.
    #[error("body diameter {diameter} exceeds available play field height {available}")]
    BodyTooLarge { diameter: f32, available: f32 },

    /// The start position or its hover band leaves the play field.
    #[error("body start band [{top}, {bottom}] must lie within [{min_y}, {max_y}]")]
    StartOutOfBounds {
        /// Highest hover position.
        top: f32,
        /// Lowest hover position.
        bottom: f32,
        /// Highest legal body center.
        min_y: f32,
        /// Lowest legal body center.
        max_y: f32,
    },

    /// Pairs would be retired before the body can clear them.
    #[error("retire line {retire_x} must be left of the scoring line {scoring_x}")]
    RetireBeforeScoring { retire_x: f32, scoring_x: f32 },

    /// A level fraction fell outside [0, 1].
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidFraction { name: &'static str, value: f32 },

    /// Ceiling is not above the ground.
    #[error("ceiling {ceiling} must be above ground {ground}")]
    InvertedBounds { ceiling: f32, ground: f32 },

    /// A quantity that must be strictly positive was not.
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    /// A NaN or infinite constant.
    #[error("{name} must be finite")]
    NonFinite { name: &'static str },

    /// Frame delta floor above its ceiling.
    #[error("frame delta floor {min_ms}ms exceeds ceiling {max_ms}ms")]
    InvalidStepBounds { min_ms: f32, max_ms: f32 },

    /// Malformed configuration document.
    #[error("invalid configuration document: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure forwarding a final score out of process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// The receiving service refused the score.
    #[error("score rejected: {0}")]
    Rejected(String),

    /// The score never reached the receiving service.
    #[error("transport failure: {0}")]
    Transport(String),
}
