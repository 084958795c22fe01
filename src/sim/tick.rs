//! Simulation tick
//!
//! Advances the state machine by one bounded step:
//! Idle -> Playing on thrust, Playing -> GameOver on collision,
//! GameOver -> Idle on thrust.

use super::collision::Verdict;
use super::state::{GameEvent, GamePhase, GameState};

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// A thrust edge arrived since the previous tick
    pub thrust: bool,
}

impl TickInput {
    pub fn thrust() -> Self {
        Self { thrust: true }
    }
}

/// Advance the game state by `dt` seconds
///
/// Returns the events produced, in order.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::Idle => {
            if input.thrust {
                // The starting input only starts; it does not flap
                state.phase = GamePhase::Playing;
                log::info!("Run started (seed {})", state.seed);
                events.push(GameEvent::Started);
                return events;
            }

            state.hover_phase += state.config.hover_speed * dt;
            state.body.hover(
                state.config.body_start_y(),
                state.hover_phase,
                state.config.hover_amplitude,
            );
        }

        GamePhase::Playing => {
            state.time_ticks += 1;

            let contact = state.body.integrate(dt, input.thrust, &state.physics);

            let retired = state.field.advance(dt, state.config.move_speed);
            if !retired.is_empty() {
                log::debug!("Retired pairs {:?}", retired);
            }

            match state.field.maybe_spawn(dt, &state.generator, &mut state.rng) {
                Ok(Some(id)) => log::debug!("Spawned pair {:?}", id),
                Ok(None) => {}
                // Validation rules this out; keep the run going without a spawn
                Err(e) => log::error!("Obstacle generation failed: {}", e),
            }

            match state.judge.evaluate(&state.body, contact, state.field.pairs_mut()) {
                Verdict::Continue => {}
                Verdict::Scored(ids) => {
                    for _ in ids {
                        state.score += 1;
                        events.push(GameEvent::ScoreChanged { score: state.score });
                    }
                }
                Verdict::Collided(cause) => {
                    state.phase = GamePhase::GameOver;
                    log::info!("Game over: score {} ({:?})", state.score, cause);
                    events.push(GameEvent::GameOver {
                        final_score: state.score,
                        cause,
                    });
                }
            }
        }

        GamePhase::GameOver => {
            // Frozen until input
            if input.thrust {
                state.reset();
                log::info!("Session reset");
                events.push(GameEvent::Reset);
            }
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BoundaryPolicy, GameConfig};
    use crate::sim::body::BoundaryContact;
    use crate::sim::state::{CollisionCause, ObstaclePair};
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    /// Zero gravity keeps the body parked at its start height
    fn floating_config() -> GameConfig {
        GameConfig {
            gravity: 0.0,
            ..Default::default()
        }
    }

    fn start(state: &mut GameState) {
        let events = tick(state, &TickInput::thrust(), DT);
        assert_eq!(events, vec![GameEvent::Started]);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_idle_to_playing() {
        let mut state = GameState::new(GameConfig::default(), 12345).unwrap();
        assert_eq!(state.phase, GamePhase::Idle);

        // No input - stays Idle, hovering
        let events = tick(&mut state, &TickInput::default(), DT);
        assert!(events.is_empty());
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.body.vel.y, 0.0);
        assert!(state.field.is_empty());

        let y_before = state.body.pos.y;
        start(&mut state);
        // Starting input does not apply thrust
        assert_eq!(state.body.vel.y, 0.0);
        assert_eq!(state.body.pos.y, y_before);
        assert!(state.field.is_empty());
    }

    #[test]
    fn test_hover_is_bounded() {
        let mut state = GameState::new(GameConfig::default(), 1).unwrap();
        let base = state.config.body_start_y();
        for _ in 0..600 {
            tick(&mut state, &TickInput::default(), DT);
            assert!((state.body.pos.y - base).abs() <= 20.0 + 0.001);
        }
    }

    #[test]
    fn test_first_playing_tick_spawns() {
        let mut state = GameState::new(GameConfig::default(), 1).unwrap();
        start(&mut state);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.field.len(), 1);
        let pair = &state.field.pairs()[0];
        // Spawned after this tick's scroll, so still on the spawn line
        assert_eq!(pair.x, 385.0);
        assert!(pair.gap_center_y >= 32.0 + 90.0 && pair.gap_center_y <= 544.0 - 90.0);
    }

    #[test]
    fn test_thrust_is_edge_triggered() {
        let mut state = GameState::new(GameConfig::default(), 1).unwrap();
        start(&mut state);

        tick(&mut state, &TickInput::thrust(), DT);
        assert_eq!(state.body.vel.y, -350.0);

        // No new thrust: gravity takes over
        tick(&mut state, &TickInput::default(), DT);
        assert!((state.body.vel.y - (-350.0 + 900.0 * DT)).abs() < 0.001);
    }

    #[test]
    fn test_score_on_pass_through() {
        let mut state = GameState::new(floating_config(), 1).unwrap();
        start(&mut state);
        state.field.clear();
        let id = state.field.next_id();
        // Gap centered on the body, just ahead of it
        state.field.push(ObstaclePair {
            id,
            x: 200.0,
            gap_center_y: state.body.pos.y,
            gap_size: 180.0,
            scored: false,
        });

        let mut scores = Vec::new();
        for _ in 0..60 {
            for event in tick(&mut state, &TickInput::default(), DT) {
                if let GameEvent::ScoreChanged { score } = event {
                    scores.push(score);
                }
            }
        }

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(scores, vec![1]);
        assert_eq!(state.score, 1);
        assert!(state.field.get(id).map(|p| p.scored).unwrap_or(true));
    }

    #[test]
    fn test_obstacle_collision_ends_run() {
        let mut state = GameState::new(floating_config(), 1).unwrap();
        start(&mut state);
        state.field.clear();
        let id = state.field.next_id();
        // Gap far below the body
        state.field.push(ObstaclePair {
            id,
            x: 200.0,
            gap_center_y: 450.0,
            gap_size: 180.0,
            scored: false,
        });

        let mut game_over = None;
        for _ in 0..60 {
            for event in tick(&mut state, &TickInput::default(), DT) {
                if let GameEvent::GameOver { final_score, cause } = event {
                    game_over = Some((final_score, cause));
                }
            }
        }

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(game_over, Some((0, CollisionCause::Obstacle(id))));
    }

    #[test]
    fn test_game_over_freezes_then_resets() {
        let mut state = GameState::new(floating_config(), 1).unwrap();
        start(&mut state);
        tick(&mut state, &TickInput::default(), DT);
        state.phase = GamePhase::GameOver;
        state.score = 4;

        let frozen_body = state.body.clone();
        let frozen_pairs = state.field.pairs().to_vec();
        for _ in 0..10 {
            assert!(tick(&mut state, &TickInput::default(), DT).is_empty());
        }
        assert_eq!(state.body, frozen_body);
        assert_eq!(state.field.pairs(), frozen_pairs.as_slice());

        let events = tick(&mut state, &TickInput::thrust(), DT);
        assert_eq!(events, vec![GameEvent::Reset]);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert!(state.field.is_empty());
        assert_eq!(state.body.pos.y, state.config.body_start_y());

        // Spawn timer re-armed: first tick of the next run spawns
        start(&mut state);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.field.len(), 1);
    }

    #[test]
    fn test_boundary_clamp_policy_keeps_playing() {
        let mut state = GameState::new(GameConfig::default(), 1).unwrap();
        start(&mut state);
        // Free fall onto the ground (lands after ~0.66s)
        for _ in 0..60 {
            tick(&mut state, &TickInput::default(), DT);
            if state.phase != GamePhase::Playing {
                break;
            }
        }
        // The first pair only reaches the body after ~1.1s
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.body.pos.y, 544.0 - 25.0);
        assert_eq!(state.body.vel.y, 0.0);
    }

    #[test]
    fn test_boundary_fatal_policy_ends_run() {
        let config = GameConfig {
            boundary_policy: BoundaryPolicy::Fatal,
            ..Default::default()
        };
        let mut state = GameState::new(config, 1).unwrap();
        start(&mut state);

        let mut cause = None;
        for _ in 0..120 {
            for event in tick(&mut state, &TickInput::default(), DT) {
                if let GameEvent::GameOver { cause: c, .. } = event {
                    cause = Some(c);
                }
            }
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(cause, Some(CollisionCause::Boundary(BoundaryContact::Ground)));
    }

    #[test]
    fn test_boundary_fatal_policy_ceiling() {
        let config = GameConfig {
            boundary_policy: BoundaryPolicy::Fatal,
            ..Default::default()
        };
        let mut state = GameState::new(config, 1).unwrap();
        start(&mut state);

        // Flap every frame; the ceiling is reached before the first pair arrives
        let mut cause = None;
        for _ in 0..90 {
            for event in tick(&mut state, &TickInput::thrust(), DT) {
                if let GameEvent::GameOver { cause: c, .. } = event {
                    cause = Some(c);
                }
            }
            if state.phase == GamePhase::GameOver {
                break;
            }
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(cause, Some(CollisionCause::Boundary(BoundaryContact::Ceiling)));
        assert!((state.body.pos.y - 57.0).abs() < 0.001);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(GameConfig::default(), 99999).unwrap();
        let mut state2 = GameState::new(GameConfig::default(), 99999).unwrap();

        let mut log1 = Vec::new();
        let mut log2 = Vec::new();
        for i in 0..2000u32 {
            let input = TickInput {
                thrust: i % 23 == 0,
            };
            let dt = 0.008 + (i % 7) as f32 * 0.004;
            log1.extend(tick(&mut state1, &input, dt));
            log2.extend(tick(&mut state2, &input, dt));
            assert_eq!(state1.body, state2.body);
        }

        assert_eq!(log1, log2);
        assert_eq!(state1.field, state2.field);
        assert_eq!(state1.time_ticks, state2.time_ticks);
    }

    proptest! {
        #[test]
        fn prop_same_inputs_same_run(
            seed in any::<u64>(),
            steps in prop::collection::vec((0.008f32..0.1, any::<bool>()), 1..300),
        ) {
            let mut a = GameState::new(GameConfig::default(), seed).unwrap();
            let mut b = GameState::new(GameConfig::default(), seed).unwrap();
            for (dt, thrust) in steps {
                let input = TickInput { thrust };
                prop_assert_eq!(tick(&mut a, &input, dt), tick(&mut b, &input, dt));
                prop_assert_eq!(&a.body, &b.body);
            }
            prop_assert_eq!(a.snapshot(), b.snapshot());
        }

        #[test]
        fn prop_score_monotonic(
            seed in any::<u64>(),
            steps in prop::collection::vec((0.008f32..0.1, any::<bool>()), 1..600),
        ) {
            let mut state = GameState::new(GameConfig::default(), seed).unwrap();
            let mut last_score = 0u32;

            for (dt, thrust) in steps {
                let phase_before = state.phase;
                for event in tick(&mut state, &TickInput { thrust }, dt) {
                    match event {
                        GameEvent::ScoreChanged { score } => {
                            prop_assert_eq!(score, last_score + 1);
                            last_score = score;
                        }
                        GameEvent::Reset => {
                            prop_assert_eq!(state.score, 0);
                            last_score = 0;
                        }
                        GameEvent::GameOver { final_score, .. } => {
                            prop_assert_eq!(final_score, last_score);
                        }
                        GameEvent::Started => {
                            prop_assert_eq!(phase_before, GamePhase::Idle);
                        }
                    }
                }
                prop_assert_eq!(state.score, last_score);
                prop_assert!(state.body.pos.y >= 57.0 && state.body.pos.y <= 519.0);
            }
        }
    }
}
