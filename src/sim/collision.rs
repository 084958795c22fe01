//! Collision detection and pass-through scoring
//!
//! The body is tested against world boundaries first, then against every
//! live pair. Collision always wins over scoring: a tick that both exits and
//! hits a pair reports the hit, and no pair scores on a colliding tick.

use super::body::{BoundaryContact, PlayerBody};
use super::state::{CollisionCause, ObstacleId, ObstaclePair};
use crate::config::{BoundaryPolicy, GameConfig};

/// Outcome of judging one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing happened
    Continue,
    /// These pairs were passed this tick (each is worth one point)
    Scored(Vec<ObstacleId>),
    /// The run ends
    Collided(CollisionCause),
}

/// Horizontal overlap between the body and a pair's column
#[inline]
pub fn overlaps_horizontally(body: &PlayerBody, pair: &ObstaclePair, obstacle_width: f32) -> bool {
    (body.pos.x - pair.x).abs() < (obstacle_width + body.radius * 2.0) / 2.0
}

/// Body pokes out of the gap above or below
#[inline]
pub fn outside_gap(body: &PlayerBody, pair: &ObstaclePair) -> bool {
    body.pos.y + body.radius > pair.gap_bottom() || body.pos.y - body.radius < pair.gap_top()
}

/// Body overlaps a member of the pair
#[inline]
pub fn body_pair_collision(body: &PlayerBody, pair: &ObstaclePair, obstacle_width: f32) -> bool {
    overlaps_horizontally(body, pair, obstacle_width) && outside_gap(body, pair)
}

/// Body center is past the pair's trailing edge
#[inline]
pub fn has_passed(body: &PlayerBody, pair: &ObstaclePair, obstacle_width: f32) -> bool {
    body.pos.x > pair.x + obstacle_width / 2.0
}

/// Collision and scoring judge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Judge {
    pub obstacle_width: f32,
    pub boundary_policy: BoundaryPolicy,
}

impl Judge {
    pub fn new(obstacle_width: f32, boundary_policy: BoundaryPolicy) -> Self {
        Self {
            obstacle_width,
            boundary_policy,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.obstacle_width, config.boundary_policy)
    }

    /// Judge the body against boundaries and pairs
    ///
    /// `contact` is the clamp reported by this tick's integration. Pairs that
    /// score are marked so they never score twice.
    pub fn evaluate(
        &self,
        body: &PlayerBody,
        contact: Option<BoundaryContact>,
        pairs: &mut [ObstaclePair],
    ) -> Verdict {
        if let (Some(contact), BoundaryPolicy::Fatal) = (contact, self.boundary_policy) {
            return Verdict::Collided(CollisionCause::Boundary(contact));
        }

        if let Some(hit) = pairs
            .iter()
            .find(|pair| body_pair_collision(body, pair, self.obstacle_width))
        {
            return Verdict::Collided(CollisionCause::Obstacle(hit.id));
        }

        let mut scored = Vec::new();
        for pair in pairs.iter_mut() {
            if !pair.scored && has_passed(body, pair, self.obstacle_width) {
                pair.scored = true;
                scored.push(pair.id);
            }
        }

        if scored.is_empty() {
            Verdict::Continue
        } else {
            Verdict::Scored(scored)
        }
    }
}
