//! Session state and core simulation types
//!
//! Everything a round needs to replay deterministically lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::rect::Rect;
use super::tick::TickInput;
use crate::consts::*;
use crate::wrap_x;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Active gameplay
    Playing,
    /// Round over (terminal)
    Ended,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Every platform was collected or purged
    OutOfPlatforms,
    /// The round timer ran out
    TimeUp,
}

/// The bird
#[derive(Debug, Clone)]
pub struct Player {
    /// Bottom-center anchor
    pub pos: Vec2,
    pub vel: Vec2,
    /// Recomputed every tick from gravity, input and friction
    pub acc: Vec2,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(WIDTH / 2.0, HEIGHT / 2.0),
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
        }
    }
}

impl Player {
    /// Bounding box derived from the anchor and the sprite size
    pub fn rect(&self) -> Rect {
        Rect::from_midbottom(self.pos, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Launch upward. No grounded check: the bird can flap mid-air.
    pub fn jump(&mut self) {
        self.vel.y = -PLAYER_JUMP;
    }

    /// Advance one tick of motion
    pub fn update(&mut self, input: &TickInput) {
        self.acc = Vec2::new(0.0, PLAYER_GRAVITY);
        // Right is read after left, so it wins when both are held
        if input.left {
            self.acc.x = -PLAYER_ACC;
        }
        if input.right {
            self.acc.x = PLAYER_ACC;
        }
        if input.jump {
            self.jump();
        }

        self.acc.x += self.vel.x * PLAYER_FRICTION;

        // Equations of motion
        self.vel += self.acc;
        self.pos += self.vel + 0.5 * self.acc;

        self.pos.x = wrap_x(self.pos.x);
    }
}

/// A star platform
#[derive(Debug, Clone)]
pub struct Platform {
    pub id: u32,
    pub rect: Rect,
}

/// Borrowed view of any drawable entity, in draw order
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Player(&'a Player),
    Platform(&'a Platform),
}

impl EntityRef<'_> {
    pub fn rect(&self) -> Rect {
        match self {
            EntityRef::Player(player) => player.rect(),
            EntityRef::Platform(platform) => platform.rect,
        }
    }
}

/// Final result of a session, handed back to the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    pub score: u32,
    pub best_score: u32,
    pub ticks: u64,
    pub reason: EndReason,
}

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct Session {
    /// Seed the spawn RNG was built from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Platforms crossed this round
    pub score: u32,
    /// Best score seen so far, including earlier sessions
    pub best_score: u32,
    /// Seconds since the round started
    pub elapsed: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: SessionPhase,
    pub end_reason: Option<EndReason>,
    pub player: Player,
    /// Live platforms, in spawn order
    pub platforms: Vec<Platform>,
    next_id: u32,
}

impl Session {
    /// Start a fresh round; `best_score` carries over from earlier rounds
    pub fn new(seed: u64, best_score: u32) -> Self {
        let mut session = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            best_score,
            elapsed: 0.0,
            time_ticks: 0,
            phase: SessionPhase::Playing,
            end_reason: None,
            player: Player::default(),
            platforms: Vec::with_capacity(MIN_PLATFORMS + 4),
            next_id: 1,
        };

        for &(x, y, w, h) in PLATFORM_LAYOUT.iter() {
            session.add_platform(Rect::new(x, y, w, h));
        }

        session
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a platform to the live set, returning its id
    pub fn add_platform(&mut self, rect: Rect) -> u32 {
        debug_assert!(rect.w > 0.0 && rect.h > 0.0);
        let id = self.next_entity_id();
        self.platforms.push(Platform { id, rect });
        id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Whole seconds left on the round timer, as shown on the HUD
    pub fn remaining_secs(&self) -> i64 {
        SESSION_SECONDS as i64 - self.elapsed.floor() as i64
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_ended(&self) -> bool {
        self.phase == SessionPhase::Ended
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Every live entity in draw order: the bird first, then platforms
    pub fn entities(&self) -> impl Iterator<Item = EntityRef<'_>> {
        std::iter::once(EntityRef::Player(&self.player))
            .chain(self.platforms.iter().map(EntityRef::Platform))
    }

    /// Summary for the shell; `None` while still playing
    pub fn outcome(&self) -> Option<SessionOutcome> {
        self.end_reason.map(|reason| SessionOutcome {
            score: self.score,
            best_score: self.best_score,
            ticks: self.time_ticks,
            reason,
        })
    }

    /// Advance the session by one fixed timestep
    pub fn tick(&mut self, input: &TickInput, dt: f32) {
        super::tick::tick(self, input, dt);
    }
}
