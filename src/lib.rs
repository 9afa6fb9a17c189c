//! StarBird - a bird bouncing between scrolling star platforms
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, session state)
//! - `render`: Draw command lists handed to the render collaborator
//! - `host`: Input/render/audio/frame-pacing collaborator traits
//! - `shell`: Process-wide loop that runs sessions back to back
//! - `settings`: Data-driven configuration

pub mod assets;
pub mod audio;
pub mod error;
pub mod host;
pub mod render;
pub mod scores;
pub mod settings;
pub mod shell;
pub mod sim;

pub use error::StartupError;
pub use scores::ScoreBoard;
pub use settings::Settings;
pub use shell::GameShell;

/// Game configuration constants
pub mod consts {
    /// Screen dimensions (pixels)
    pub const WIDTH: f32 = 640.0;
    pub const HEIGHT: f32 = 800.0;

    /// Target tick rate
    pub const FPS: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / FPS as f32;

    /// Round length in seconds
    pub const SESSION_SECONDS: f64 = 60.0;

    /// Player physics (pixels/tick² for accelerations, pixels/tick for velocities)
    pub const PLAYER_ACC: f32 = 0.5;
    pub const PLAYER_FRICTION: f32 = -0.12;
    pub const PLAYER_GRAVITY: f32 = 0.8;
    pub const PLAYER_JUMP: f32 = 10.0;
    /// Bird sprite size
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;

    /// Live platforms kept on screen
    pub const MIN_PLATFORMS: usize = 8;
    /// Spawn ranges (half-open, whole pixels)
    pub const SPAWN_WIDTH_MIN: i32 = 10;
    pub const SPAWN_WIDTH_MAX: i32 = 40;
    pub const SPAWN_Y_MIN: i32 = -75;
    pub const SPAWN_Y_MAX: i32 = -30;
    pub const SPAWN_HEIGHT: f32 = 20.0;

    /// Minimum per-tick shift while the bird falls out of view
    pub const FALL_SCROLL_MIN: f32 = 10.0;

    /// Starting platforms as (x, y, w, h)
    pub const PLATFORM_LAYOUT: [(f32, f32, f32, f32); 5] = [
        (0.0, HEIGHT - 40.0, WIDTH, 40.0),
        (WIDTH / 2.0 - 50.0, HEIGHT * 3.0 / 4.0, 100.0, 20.0),
        (125.0, HEIGHT - 350.0, 100.0, 20.0),
        (350.0, 200.0, 100.0, 20.0),
        (175.0, 100.0, 50.0, 20.0),
    ];
}

/// Wrap a horizontal coordinate into [0, WIDTH)
#[inline]
pub fn wrap_x(x: f32) -> f32 {
    let wrapped = x.rem_euclid(consts::WIDTH);
    // rem_euclid can round up to the modulus for tiny negatives
    if wrapped >= consts::WIDTH { 0.0 } else { wrapped }
}
