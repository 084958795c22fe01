//! Game state and core simulation types
//!
//! Everything a replay needs lives here: config, seed, RNG, body, obstacles.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{BoundaryContact, Physics, PlayerBody};
use super::collision::Judge;
use super::field::ObstacleField;
use super::generator::ObstacleGenerator;
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Body hovering, waiting for the first thrust
    Idle,
    /// Active run
    Playing,
    /// Run ended; waiting for input to return to Idle
    GameOver,
}

/// Stable identifier for an obstacle pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObstacleId(pub u32);

/// A vertical extent [start, end] in world units (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub start: f32,
    pub end: f32,
}

impl Span {
    #[inline]
    pub fn length(&self) -> f32 {
        self.end - self.start
    }
}

/// A top/bottom obstacle sharing one x and one gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePair {
    pub id: ObstacleId,
    /// Horizontal center, decreasing as the pair scrolls
    pub x: f32,
    pub gap_center_y: f32,
    pub gap_size: f32,
    /// Set once the body has fully passed this pair
    pub scored: bool,
}

impl ObstaclePair {
    /// Upper edge of the gap
    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.gap_center_y - self.gap_size / 2.0
    }

    /// Lower edge of the gap
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_center_y + self.gap_size / 2.0
    }

    /// Collidable span above the gap, if it has positive length
    pub fn top_span(&self, ceiling_y: f32) -> Option<Span> {
        let span = Span {
            start: ceiling_y,
            end: self.gap_top(),
        };
        (span.length() > 0.0).then_some(span)
    }

    /// Collidable span below the gap, if it has positive length
    pub fn bottom_span(&self, ground_y: f32) -> Option<Span> {
        let span = Span {
            start: self.gap_bottom(),
            end: ground_y,
        };
        (span.length() > 0.0).then_some(span)
    }
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionCause {
    /// Touched the ceiling or the ground under `BoundaryPolicy::Fatal`
    Boundary(BoundaryContact),
    /// Hit a member of this obstacle pair
    Obstacle(ObstacleId),
}

/// Notifications produced by a tick, in the order they happened
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Idle -> Playing
    Started,
    /// Score incremented to `score`
    ScoreChanged { score: u32 },
    /// Playing -> GameOver
    GameOver { final_score: u32, cause: CollisionCause },
    /// GameOver -> Idle
    Reset,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub config: GameConfig,
    pub phase: GamePhase,
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub body: PlayerBody,
    /// Live obstacle pairs, ordered by creation
    pub field: ObstacleField,
    pub physics: Physics,
    pub generator: ObstacleGenerator,
    pub judge: Judge,
    /// Idle hover animation phase (radians)
    pub hover_phase: f32,
    pub rng: Pcg32,
}

impl GameState {
    /// Create a new game state in `Idle`
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let state = Self {
            seed,
            phase: GamePhase::Idle,
            score: 0,
            time_ticks: 0,
            body: PlayerBody::new(config.body_x(), config.body_start_y(), config.body_radius),
            field: ObstacleField::from_config(&config),
            physics: Physics::from_config(&config),
            generator: ObstacleGenerator::from_config(&config),
            judge: Judge::from_config(&config),
            hover_phase: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            config,
        };
        Ok(state)
    }

    /// Back to `Idle`: score zeroed, obstacles cleared, body home, spawn timer re-armed
    pub fn reset(&mut self) {
        self.phase = GamePhase::Idle;
        self.score = 0;
        self.hover_phase = 0.0;
        self.body.reset(self.config.body_start_y());
        self.field.clear();
        self.field.rearm();
    }

    /// Read-only view for renderers and glue
    pub fn snapshot(&self) -> Snapshot {
        let width = self.config.obstacle_width;
        let (ceiling_y, ground_y) = (self.config.ceiling_y(), self.config.ground_y());

        let obstacles = self
            .field
            .pairs()
            .iter()
            .map(|pair| {
                let rect = |span: Span| ObstacleRect {
                    min: Vec2::new(pair.x - width / 2.0, span.start),
                    max: Vec2::new(pair.x + width / 2.0, span.end),
                };
                ObstacleView {
                    id: pair.id,
                    x: pair.x,
                    gap_center_y: pair.gap_center_y,
                    gap_size: pair.gap_size,
                    scored: pair.scored,
                    top: pair.top_span(ceiling_y).map(rect),
                    bottom: pair.bottom_span(ground_y).map(rect),
                }
            })
            .collect();

        Snapshot {
            phase: self.phase,
            score: self.score,
            body: BodyView {
                pos: self.body.pos,
                vel_y: self.body.vel.y,
                radius: self.body.radius,
            },
            obstacles,
            ceiling_y,
            ground_y,
        }
    }
}

/// Axis-aligned rectangle of one obstacle member
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObstacleRect {
    pub min: Vec2,
    pub max: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObstacleView {
    pub id: ObstacleId,
    pub x: f32,
    pub gap_center_y: f32,
    pub gap_size: f32,
    pub scored: bool,
    /// `None` when the gap sits on the ceiling
    pub top: Option<ObstacleRect>,
    /// `None` when the gap sits on the ground
    pub bottom: Option<ObstacleRect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyView {
    pub pos: Vec2,
    pub vel_y: f32,
    pub radius: f32,
}

/// Per-frame render snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub body: BodyView,
    pub obstacles: Vec<ObstacleView>,
    pub ceiling_y: f32,
    pub ground_y: f32,
}
