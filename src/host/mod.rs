//! Host abstraction layer
//!
//! The shell talks to the outside world only through these traits:
//! - Input polling and the terminate request
//! - Presenting frames
//! - Background music
//! - Frame pacing
//!
//! `native` has headless implementations used by the binary and by tests.
//! `terminal` layers keyboard control and the quit keys on top of them.

pub mod native;
pub mod terminal;

use std::path::Path;

use crate::error::StartupError;
use crate::render::Frame;
use crate::sim::TickInput;

/// Input state sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostEvents {
    /// Keys currently held
    pub keys: TickInput,
    /// Window close or equivalent; consumed once
    pub quit_requested: bool,
}

pub trait InputSource {
    fn poll(&mut self) -> HostEvents;
}

pub trait Renderer {
    fn present(&mut self, frame: &Frame);

    /// Release the render surface
    fn shutdown(&mut self) {}
}

pub trait AudioBackend {
    /// Start a track looping forever at `volume` (0.0 - 1.0)
    fn play_looping(&mut self, track: &Path, volume: f32) -> Result<(), StartupError>;

    fn stop(&mut self);
}

pub trait FramePacer {
    /// Block until the next tick boundary; returns the tick length in seconds
    fn wait_next_tick(&mut self) -> f32;
}
