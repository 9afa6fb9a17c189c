//! Fixed timestep simulation tick
//!
//! Core game loop that advances a session deterministically.

use rand::Rng;

use super::autopilot::autopilot;
use super::collision::{
    below_screen, platform_hits, reached_scroll_line, scrolled_off_bottom, scrolled_off_top,
    within_columns,
};
use super::rect::Rect;
use super::state::{EndReason, Session, SessionPhase};
use crate::consts::*;

/// Held keys for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Demo mode - the autopilot picks the keys
    pub demo: bool,
}

/// Advance the session by one fixed timestep
///
/// Step order matters: player motion, landing, scroll-up, fall-through,
/// termination, then respawn.
pub fn tick(state: &mut Session, input: &TickInput, dt: f32) {
    if state.phase == SessionPhase::Ended {
        return;
    }

    state.time_ticks += 1;
    state.elapsed += dt as f64;

    let input = if input.demo { autopilot(state) } else { *input };
    state.player.update(&input);

    // Platforms only count while the bird is rising through them
    if state.player.vel.y < 0.0 {
        let hits = platform_hits(&state.player.rect(), &state.platforms);
        if !hits.is_empty() {
            state.platforms.retain(|p| !hits.contains(&p.id));
            state.score += hits.len() as u32;
            log::trace!("Collected {} platform(s), score {}", hits.len(), state.score);
        }
        if state.best_score < state.score {
            state.best_score = state.score;
        }
    }

    // Bird reached the top quarter: move the camera up
    if reached_scroll_line(&state.player.rect()) {
        let dist = state.player.vel.y.abs();
        scroll_down(state, dist);
    }

    // Bird dropped out the bottom: the world falls away
    if below_screen(&state.player.rect()) {
        let dist = state.player.vel.y.max(FALL_SCROLL_MIN);
        scroll_up(state, dist);
    }

    if state.platforms.is_empty() {
        end_session(state, EndReason::OutOfPlatforms);
    } else if SESSION_SECONDS - state.elapsed <= 0.0 {
        end_session(state, EndReason::TimeUp);
    }

    respawn_platforms(state);
}

/// Shift everything down by `dist`, dropping platforms pushed past the bottom
fn scroll_down(state: &mut Session, dist: f32) {
    state.player.pos.y += dist;
    for platform in &mut state.platforms {
        platform.rect.y += dist;
    }
    state.platforms.retain(|p| !scrolled_off_bottom(&p.rect));
}

/// Shift everything up by `dist`, dropping platforms pushed past the top
fn scroll_up(state: &mut Session, dist: f32) {
    // The bird is below the screen here, so it can never clear the top edge
    state.player.pos.y -= dist;
    for platform in &mut state.platforms {
        platform.rect.y -= dist;
    }
    state.platforms.retain(|p| !scrolled_off_top(&p.rect));
}

fn end_session(state: &mut Session, reason: EndReason) {
    state.phase = SessionPhase::Ended;
    state.end_reason = Some(reason);
    log::info!(
        "Session ended ({:?}) after {} ticks: score {}, best {}",
        reason,
        state.time_ticks,
        state.score,
        state.best_score
    );
}

/// Top the live set back up to `MIN_PLATFORMS`, spawning above the view
pub fn respawn_platforms(state: &mut Session) {
    while state.platforms.len() < MIN_PLATFORMS {
        let rect = random_spawn_rect(state);
        state.add_platform(rect);
    }
}

fn random_spawn_rect(state: &mut Session) -> Rect {
    let width = state.rng.random_range(SPAWN_WIDTH_MIN..SPAWN_WIDTH_MAX);
    let x = state.rng.random_range(0..WIDTH as i32 - width);
    let y = state.rng.random_range(SPAWN_Y_MIN..SPAWN_Y_MAX);
    let rect = Rect::new(x as f32, y as f32, width as f32, SPAWN_HEIGHT);
    debug_assert!(within_columns(&rect));
    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn jump() -> TickInput {
        TickInput {
            jump: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_first_tick_tops_up_platforms() {
        let mut state = Session::new(12345, 0);
        assert_eq!(state.platforms.len(), 5);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.platforms.len(), MIN_PLATFORMS);
        assert_eq!(state.phase, SessionPhase::Playing);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_spawned_platforms_in_range() {
        let mut state = Session::new(42, 0);
        state.platforms.clear();
        respawn_platforms(&mut state);
        assert_eq!(state.platforms.len(), MIN_PLATFORMS);
        for p in &state.platforms {
            assert!(p.rect.w >= SPAWN_WIDTH_MIN as f32 && p.rect.w < SPAWN_WIDTH_MAX as f32);
            assert!(p.rect.x >= 0.0 && p.rect.x < WIDTH - p.rect.w);
            assert!(p.rect.y >= SPAWN_Y_MIN as f32 && p.rect.y < SPAWN_Y_MAX as f32);
            assert_eq!(p.rect.h, SPAWN_HEIGHT);
            assert!(within_columns(&p.rect));
        }
    }

    #[test]
    fn test_landing_while_rising_scores() {
        let mut state = Session::new(1, 0);
        let target = state.platforms[1].id;
        // Just under the 100x20 platform at y = 600
        state.player.pos = Vec2::new(WIDTH / 2.0, 625.0);

        tick(&mut state, &jump(), SIM_DT);

        assert_eq!(state.score, 1);
        assert_eq!(state.best_score, 1);
        assert!(state.platforms.iter().all(|p| p.id != target));
        // 4 layout platforms remain, respawn adds 4 more
        assert_eq!(state.platforms.len(), MIN_PLATFORMS);
        assert_eq!(state.platforms.iter().filter(|p| p.id <= 5).count(), 4);
    }

    #[test]
    fn test_rising_into_ground_platform_scores() {
        let mut state = Session::new(1, 0);
        let ground = state.platforms[0].id;
        assert_eq!(state.platforms[0].rect, Rect::new(0.0, 760.0, 640.0, 40.0));
        // Bird hangs out the bottom edge, under the ground platform
        state.player.pos = Vec2::new(WIDTH / 2.0, 830.0);

        tick(&mut state, &jump(), SIM_DT);

        // vel.y = -9.2, bird rect top at 781.2 overlaps the ground
        assert_eq!(state.score, 1);
        assert!(state.platforms.iter().all(|p| p.id != ground));
        // Still below the bottom edge, so the rest of the layout shifts up by 10
        let mid = state.platforms.iter().find(|p| p.id == 2).map(|p| p.rect.y);
        assert_eq!(mid, Some(590.0));
        assert_eq!(state.phase, SessionPhase::Playing);
        assert_eq!(state.platforms.len(), MIN_PLATFORMS);
    }

    #[test]
    fn test_landing_while_falling_does_not_score() {
        let mut state = Session::new(1, 0);
        // Overlapping the platform at y = 600 but moving down
        state.player.pos = Vec2::new(WIDTH / 2.0, 610.0);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.player.vel.y > 0.0);
        assert_eq!(state.score, 0);
        assert!(state.platforms.iter().any(|p| p.id == 2));
    }

    #[test]
    fn test_multiple_hits_score_each() {
        let mut state = Session::new(1, 3);
        state.platforms.clear();
        state.add_platform(Rect::new(300.0, 580.0, 30.0, 20.0));
        state.add_platform(Rect::new(320.0, 590.0, 30.0, 20.0));
        state.player.pos = Vec2::new(WIDTH / 2.0, 625.0);

        tick(&mut state, &jump(), SIM_DT);

        assert_eq!(state.score, 2);
        // Best score only moves once the current score passes it
        assert_eq!(state.best_score, 3);
        // Live set was emptied by collection, so the round is over
        assert_eq!(state.phase, SessionPhase::Ended);
        assert_eq!(state.end_reason, Some(EndReason::OutOfPlatforms));
    }

    #[test]
    fn test_camera_scroll_moves_platforms() {
        let mut state = Session::new(1, 0);
        state.platforms.clear();
        state.add_platform(Rect::new(10.0, 300.0, 30.0, 20.0));
        state.add_platform(Rect::new(100.0, HEIGHT - 3.0, 30.0, 20.0));

        // Bird rect top at 196 <= HEIGHT / 4 with vel.y = -5
        state.player.pos = Vec2::new(WIDTH / 2.0, 236.0);
        state.player.vel.y = -5.0;
        let dist = state.player.vel.y.abs();
        scroll_down(&mut state, dist);

        assert_eq!(state.platforms.len(), 1);
        assert_eq!(state.platforms[0].rect.y, 305.0);
        assert_eq!(state.player.pos.y, 241.0);
    }

    #[test]
    fn test_scroll_triggered_in_tick() {
        let mut state = Session::new(1, 0);
        state.platforms.clear();
        state.add_platform(Rect::new(600.0, 100.0, 30.0, 20.0));
        state.add_platform(Rect::new(0.0, HEIGHT - 2.0, 30.0, 20.0));
        state.player.pos = Vec2::new(WIDTH / 2.0, 230.0);
        state.player.vel = Vec2::new(0.0, -5.8);

        tick(&mut state, &TickInput::default(), SIM_DT);

        // vel.y = -5.0 after gravity
        assert!((state.player.vel.y + 5.0).abs() < 1e-5);
        let first = state.platforms.iter().find(|p| p.id > 5).map(|p| p.rect.y);
        assert!((first.unwrap_or_default() - 105.0).abs() < 1e-4);
        // The platform near the bottom was pushed off and replaced
        assert!(state.platforms.iter().all(|p| p.rect.top() < HEIGHT));
        assert_eq!(state.platforms.len(), MIN_PLATFORMS);
    }

    #[test]
    fn test_fall_through_scrolls_world_up() {
        let mut state = Session::new(1, 0);
        state.platforms.clear();
        state.add_platform(Rect::new(0.0, -12.0, 30.0, 20.0));
        state.add_platform(Rect::new(100.0, 400.0, 30.0, 20.0));
        state.player.pos = Vec2::new(WIDTH / 2.0, HEIGHT + 20.0);
        state.player.vel = Vec2::new(0.0, 2.0);

        tick(&mut state, &TickInput::default(), SIM_DT);

        // vel.y = 2.8 < 10, so everything shifts by 10
        assert_eq!(state.platforms.iter().filter(|p| p.id <= 7).count(), 1);
        let survivor = state.platforms.iter().find(|p| p.id == 7).map(|p| p.rect.y);
        assert_eq!(survivor, Some(390.0));
    }

    #[test]
    fn test_fall_through_uses_fast_velocity() {
        let mut state = Session::new(1, 0);
        state.platforms.clear();
        state.add_platform(Rect::new(100.0, 400.0, 30.0, 20.0));
        state.player.pos = Vec2::new(WIDTH / 2.0, HEIGHT + 100.0);
        state.player.vel = Vec2::new(0.0, 19.2);

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert!((state.platforms[0].rect.y - 380.0).abs() < 1e-3);
    }

    #[test]
    fn test_falling_eventually_ends_session() {
        let mut state = Session::new(9, 0);
        state.player.pos = Vec2::new(WIDTH / 2.0, HEIGHT + 50.0);
        for _ in 0..2000 {
            tick(&mut state, &TickInput::default(), SIM_DT);
            if state.phase == SessionPhase::Ended {
                break;
            }
        }
        assert_eq!(state.phase, SessionPhase::Ended);
        assert_eq!(state.end_reason, Some(EndReason::OutOfPlatforms));
    }

    #[test]
    fn test_timeout_ends_session() {
        let mut state = Session::new(1, 0);
        state.elapsed = SESSION_SECONDS;
        tick(&mut state, &TickInput::default(), 0.0);
        assert!(!state.platforms.is_empty());
        assert_eq!(state.phase, SessionPhase::Ended);
        assert_eq!(state.end_reason, Some(EndReason::TimeUp));
    }

    #[test]
    fn test_timer_runs_out_after_sixty_seconds() {
        let mut state = Session::new(3, 0);
        let mut ticks = 0u64;
        while state.phase == SessionPhase::Playing && ticks < 10_000 {
            // Keep the bird on screen by flapping
            let input = if state.player.vel.y > 0.0 { jump() } else { TickInput::default() };
            state.player.pos.y = state.player.pos.y.clamp(300.0, 500.0);
            tick(&mut state, &input, SIM_DT);
            ticks += 1;
        }
        assert_eq!(state.end_reason, Some(EndReason::TimeUp));
        assert!(state.elapsed >= SESSION_SECONDS);
        assert!(ticks <= FPS as u64 * 60 + 1);
    }

    #[test]
    fn test_ended_session_is_frozen() {
        let mut state = Session::new(1, 0);
        state.elapsed = SESSION_SECONDS;
        tick(&mut state, &TickInput::default(), SIM_DT);
        let ticks = state.time_ticks;
        let pos = state.player.pos;
        tick(&mut state, &jump(), SIM_DT);
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.player.pos, pos);
    }

    #[test]
    fn test_demo_input_uses_autopilot() {
        let mut manual = Session::new(11, 0);
        let mut demo = Session::new(11, 0);
        manual.player.vel.y = 2.0;
        demo.player.vel.y = 2.0;

        // Falling bird: the autopilot flaps
        let expected = autopilot(&demo);
        assert!(expected.jump);
        tick(&mut manual, &expected, SIM_DT);
        let input = TickInput {
            demo: true,
            ..Default::default()
        };
        tick(&mut demo, &input, SIM_DT);

        assert_eq!(manual.player.pos, demo.player.pos);
        assert_eq!(manual.player.vel, demo.player.vel);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = Session::new(99999, 0);
        let mut state2 = Session::new(99999, 0);

        let inputs = [
            TickInput { left: true, ..Default::default() },
            jump(),
            TickInput { right: true, jump: true, ..Default::default() },
            TickInput::default(),
        ];

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut state1, input, SIM_DT);
                tick(&mut state2, input, SIM_DT);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.player.pos, state2.player.pos);
        let rects1: Vec<_> = state1.platforms.iter().map(|p| p.rect).collect();
        let rects2: Vec<_> = state2.platforms.iter().map(|p| p.rect).collect();
        assert_eq!(rects1, rects2);
    }

    fn arb_input() -> impl Strategy<Value = TickInput> {
        (any::<bool>(), any::<bool>(), any::<bool>())
            .prop_map(|(left, right, jump)| TickInput { left, right, jump, demo: false })
    }

    proptest! {
        #[test]
        fn prop_tick_invariants(seed in any::<u64>(), inputs in prop::collection::vec(arb_input(), 1..300)) {
            let mut state = Session::new(seed, 0);
            let mut last_score = 0;
            let mut last_elapsed = 0.0;
            for input in &inputs {
                tick(&mut state, input, SIM_DT);
                prop_assert!(state.player.pos.x >= 0.0 && state.player.pos.x < WIDTH);
                prop_assert!(state.score >= last_score);
                prop_assert!(state.elapsed >= last_elapsed);
                prop_assert!(state.platforms.len() >= MIN_PLATFORMS);
                prop_assert!(state.best_score >= state.score);
                last_score = state.score;
                last_elapsed = state.elapsed;
            }
        }
    }
}
