//! Player body physics
//!
//! Explicit Euler on the vertical axis only. The step is bounded by the
//! clock, so the integrator's error stays within gameplay tolerance.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Which world boundary the body was clamped against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryContact {
    Ceiling,
    Ground,
}

/// Physical constants for body integration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    pub gravity: f32,
    pub fly_force: f32,
    pub max_fall_speed: f32,
    pub ceiling_y: f32,
    pub ground_y: f32,
}

impl Physics {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            gravity: config.gravity,
            fly_force: config.fly_force,
            max_fall_speed: config.max_fall_speed,
            ceiling_y: config.ceiling_y(),
            ground_y: config.ground_y(),
        }
    }
}

/// The player-controlled object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBody {
    /// x is fixed for the life of the session; y is integrated
    pub pos: Vec2,
    /// Only the y component is ever non-zero
    pub vel: Vec2,
    /// Collision half-extent
    pub radius: f32,
}

impl PlayerBody {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            radius,
        }
    }

    /// Return to the start height at rest
    pub fn reset(&mut self, start_y: f32) {
        self.pos.y = start_y;
        self.vel = Vec2::ZERO;
    }

    /// Advance one step
    ///
    /// Thrust sets the velocity outright so every flap has the same height.
    /// Hitting a boundary clamps the position and kills momentum; the contact
    /// is returned so the judge can apply the boundary policy.
    pub fn integrate(&mut self, dt: f32, thrust: bool, physics: &Physics) -> Option<BoundaryContact> {
        if thrust {
            self.vel.y = physics.fly_force;
        } else {
            self.vel.y = (self.vel.y + physics.gravity * dt).min(physics.max_fall_speed);
        }

        self.pos.y += self.vel.y * dt;

        let top = physics.ceiling_y + self.radius;
        let bottom = physics.ground_y - self.radius;
        if self.pos.y > bottom {
            self.pos.y = bottom;
            self.vel.y = 0.0;
            Some(BoundaryContact::Ground)
        } else if self.pos.y < top {
            self.pos.y = top;
            self.vel.y = 0.0;
            Some(BoundaryContact::Ceiling)
        } else {
            None
        }
    }

    /// Idle bobbing; visual only, velocity stays zero
    pub fn hover(&mut self, base_y: f32, phase: f32, amplitude: f32) {
        self.pos.y = base_y + phase.sin() * amplitude;
        self.vel = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn open_field(gravity: f32) -> Physics {
        Physics {
            gravity,
            fly_force: -350.0,
            max_fall_speed: 400.0,
            ceiling_y: 0.0,
            ground_y: 1000.0,
        }
    }

    #[test]
    fn test_gravity_step() {
        let mut body = PlayerBody::new(108.0, 300.0, 25.0);
        let contact = body.integrate(0.1, false, &open_field(900.0));
        assert_eq!(contact, None);
        assert!((body.vel.y - 90.0).abs() < 0.001);
        assert!((body.pos.y - 309.0).abs() < 0.001);
    }

    #[test]
    fn test_fall_speed_capped() {
        let mut body = PlayerBody::new(108.0, 300.0, 25.0);
        body.vel.y = 390.0;
        body.integrate(0.1, false, &open_field(900.0));
        assert_eq!(body.vel.y, 400.0);
        assert!((body.pos.y - 340.0).abs() < 0.001);
    }

    #[test]
    fn test_thrust_sets_velocity() {
        let physics = open_field(900.0);
        let mut falling = PlayerBody::new(108.0, 500.0, 25.0);
        falling.vel.y = 400.0;
        let mut resting = PlayerBody::new(108.0, 500.0, 25.0);

        falling.integrate(0.016, true, &physics);
        resting.integrate(0.016, true, &physics);

        // Same flap regardless of prior fall speed
        assert_eq!(falling.vel.y, -350.0);
        assert_eq!(resting.vel.y, -350.0);
        assert_eq!(falling.pos.y, resting.pos.y);
    }

    #[test]
    fn test_ground_clamp_kills_velocity() {
        let physics = Physics {
            gravity: 0.0,
            fly_force: -350.0,
            max_fall_speed: 400.0,
            ceiling_y: 0.0,
            ground_y: 500.0,
        };
        let mut body = PlayerBody::new(108.0, 505.0, 25.0);
        body.vel.y = 50.0;
        // Pre-clamp y = 510
        let contact = body.integrate(0.1, false, &physics);
        assert_eq!(contact, Some(BoundaryContact::Ground));
        assert_eq!(body.pos.y, 475.0);
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn test_ceiling_clamp_kills_velocity() {
        let physics = Physics {
            ceiling_y: 32.0,
            ..open_field(900.0)
        };
        let mut body = PlayerBody::new(108.0, 60.0, 25.0);
        let contact = body.integrate(0.1, true, &physics);
        assert_eq!(contact, Some(BoundaryContact::Ceiling));
        assert_eq!(body.pos.y, 57.0);
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn test_hover() {
        let mut body = PlayerBody::new(108.0, 344.0, 25.0);
        body.vel.y = 12.0;
        body.hover(344.0, std::f32::consts::FRAC_PI_2, 20.0);
        assert!((body.pos.y - 364.0).abs() < 0.001);
        assert_eq!(body.vel, Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn prop_position_stays_in_bounds(
            start in 57.0f32..519.0,
            vel in -2000.0f32..2000.0,
            steps in prop::collection::vec((0.008f32..0.1, any::<bool>()), 1..200),
        ) {
            let physics = Physics {
                gravity: 900.0,
                fly_force: -350.0,
                max_fall_speed: 400.0,
                ceiling_y: 32.0,
                ground_y: 544.0,
            };
            let mut body = PlayerBody::new(108.0, start, 25.0);
            body.vel.y = vel;

            for (dt, thrust) in steps {
                let contact = body.integrate(dt, thrust, &physics);
                prop_assert!(body.pos.y >= 57.0 && body.pos.y <= 519.0);
                prop_assert!(body.vel.y <= 400.0);
                if contact.is_some() {
                    prop_assert_eq!(body.vel.y, 0.0);
                }
            }
        }
    }
}
