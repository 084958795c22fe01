//! Demo autopilot
//!
//! Reads only the render snapshot, like any other input source, and answers
//! whether a thrust should be submitted this frame.

use super::state::{GamePhase, Snapshot};
use crate::config::GameConfig;

/// Decide whether to thrust this frame
///
/// Starts runs from Idle. While playing, steers toward the next gap the body
/// has not cleared yet, or the middle of the field when none is on screen.
/// Never restarts from GameOver; that is the caller's call.
pub fn wants_thrust(snapshot: &Snapshot, config: &GameConfig) -> bool {
    match snapshot.phase {
        GamePhase::Idle => true,
        GamePhase::GameOver => false,
        GamePhase::Playing => {
            let body = &snapshot.body;
            let next_gap = snapshot
                .obstacles
                .iter()
                .filter(|o| o.x + config.obstacle_width / 2.0 + body.radius >= body.pos.x)
                .min_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal))
                .map(|o| o.gap_center_y);

            // A flap overshoots upward, so aim one radius low
            let target = match next_gap {
                Some(center) => center + body.radius,
                None => (snapshot.ceiling_y + snapshot.ground_y) / 2.0,
            };

            body.pos.y > target && body.vel_y > -50.0
        }
    }
}
