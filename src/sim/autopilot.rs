//! Demo autopilot
//!
//! Plays the game from session state alone, so a headless run has something
//! to do. Flaps whenever the bird starts to fall and steers toward the
//! nearest platform above its feet.

use std::cmp::Ordering;

use super::state::Session;
use super::tick::TickInput;
use crate::consts::WIDTH;

/// Horizontal slack before the autopilot bothers steering
const STEER_DEADZONE: f32 = 6.0;

/// Pick this tick's keys for the demo bird
pub fn autopilot(state: &Session) -> TickInput {
    let player = &state.player;
    let feet = player.pos.y;

    let target = state
        .platforms
        .iter()
        .filter(|p| p.rect.top() < feet)
        .min_by(|a, b| {
            (feet - a.rect.top())
                .partial_cmp(&(feet - b.rect.top()))
                .unwrap_or(Ordering::Equal)
        });

    let mut input = TickInput {
        jump: player.vel.y >= 0.0,
        ..Default::default()
    };

    if let Some(platform) = target {
        let dx = wrapped_dx(player.pos.x, platform.rect.center_x());
        if dx < -STEER_DEADZONE {
            input.left = true;
        } else if dx > STEER_DEADZONE {
            input.right = true;
        }
    }

    input
}

/// Shortest signed horizontal distance, going through the screen edge if shorter
fn wrapped_dx(from: f32, to: f32) -> f32 {
    let mut dx = to - from;
    if dx > WIDTH / 2.0 {
        dx -= WIDTH;
    } else if dx < -WIDTH / 2.0 {
        dx += WIDTH;
    }
    dx
}
