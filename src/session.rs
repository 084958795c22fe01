//! Driver-facing game session
//!
//! Wraps the deterministic simulation with the pieces a host needs: a clock
//! that bounds raw frame deltas, a thrust latch that input handlers can hit
//! between frames (or from other threads), and listener callbacks for score
//! changes and game over. `submit_thrust` and `tick` are the only ways to
//! mutate a session.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::sim::{GameEvent, GamePhase, GameState, Snapshot, Stepper, TickInput, tick};

/// Receives session notifications
pub trait SessionListener {
    /// Fired every time the score increments
    fn on_score_changed(&mut self, _score: u32) {}

    /// Fired once per run when it ends
    fn on_game_over(&mut self, _final_score: u32) {}
}

/// Listener that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullListener;

impl SessionListener for NullListener {}

impl<T: SessionListener + ?Sized> SessionListener for Box<T> {
    fn on_score_changed(&mut self, score: u32) {
        (**self).on_score_changed(score);
    }

    fn on_game_over(&mut self, final_score: u32) {
        (**self).on_game_over(final_score);
    }
}

/// Pending-thrust latch shared with input handlers
///
/// Any number of submissions before the next tick collapse into one.
#[derive(Debug, Clone, Default)]
pub struct ThrustHandle(Arc<AtomicBool>);

impl ThrustHandle {
    pub fn submit(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_pending(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Consume the pending thrust, if any
    fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

/// One game session: Idle -> Playing -> GameOver -> Idle
pub struct Session<L = NullListener> {
    state: GameState,
    stepper: Stepper,
    thrust: ThrustHandle,
    listener: L,
}

impl<L: SessionListener> Session<L> {
    /// Validate `config` and create an idle session
    pub fn new(config: GameConfig, seed: u64, listener: L) -> Result<Self, ConfigError> {
        let stepper = Stepper::from_config(&config);
        let state = GameState::new(config, seed)?;
        log::info!("Session created with seed {}", seed);

        Ok(Self {
            state,
            stepper,
            thrust: ThrustHandle::default(),
            listener,
        })
    }

    /// Request a thrust; consumed by the next tick
    pub fn submit_thrust(&self) {
        self.thrust.submit();
    }

    /// Latch handle for input sources that outlive a borrow of the session
    pub fn thrust_handle(&self) -> ThrustHandle {
        self.thrust.clone()
    }

    /// Advance by a raw frame delta in milliseconds
    ///
    /// The delta is clamped before use. Score and game-over events are
    /// forwarded to the listener before being returned.
    pub fn tick(&mut self, raw_dt_ms: f32) -> Vec<GameEvent> {
        let dt = self.stepper.step(raw_dt_ms);
        let input = TickInput {
            thrust: self.thrust.take(),
        };

        let events = tick(&mut self.state, &input, dt);
        for event in &events {
            match *event {
                GameEvent::ScoreChanged { score } => self.listener.on_score_changed(score),
                GameEvent::GameOver { final_score, .. } => self.listener.on_game_over(final_score),
                GameEvent::Started | GameEvent::Reset => {}
            }
        }
        events
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn seed(&self) -> u64 {
        self.state.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.state.config
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }
}
