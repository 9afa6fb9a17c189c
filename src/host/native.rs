//! Headless host implementations
//!
//! No window toolkit is bundled, so the binary runs the game in demo mode:
//! the autopilot flies the bird, frames are summarized to the log, and
//! music is validated but not played. `terminal::TerminalInput` adds the
//! keyboard on top of `DemoInput`.

use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use super::{AudioBackend, FramePacer, HostEvents, InputSource, Renderer};
use crate::error::StartupError;
use crate::render::{Frame, SpriteKind};
use crate::sim::TickInput;

/// Autopilot input with an optional tick budget
#[derive(Debug, Clone, Default)]
pub struct DemoInput {
    ticks: u64,
    limit: Option<u64>,
}

impl DemoInput {
    pub fn new(limit: Option<u64>) -> Self {
        Self { ticks: 0, limit }
    }
}

impl InputSource for DemoInput {
    fn poll(&mut self) -> HostEvents {
        self.ticks += 1;
        let quit_requested = self.limit.is_some_and(|limit| self.ticks >= limit);
        if quit_requested {
            log::info!("Demo tick limit reached after {} ticks", self.ticks);
        }
        HostEvents {
            keys: TickInput {
                demo: true,
                ..Default::default()
            },
            quit_requested,
        }
    }
}

/// Logs a one-line frame summary once per `every` frames
#[derive(Debug, Clone)]
pub struct LogRenderer {
    frames: u64,
    every: u64,
}

impl LogRenderer {
    pub fn new(every: u64) -> Self {
        Self {
            frames: 0,
            every: every.max(1),
        }
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn present(&mut self, frame: &Frame) {
        self.frames += 1;
        if self.frames % self.every == 0 {
            let hud: Vec<&str> = frame.texts.iter().map(|t| t.label.as_str()).collect();
            log::debug!(
                "frame {}: {} star(s) | {}",
                self.frames,
                frame.sprite_count(SpriteKind::Star),
                hud.join(" ")
            );
        } else {
            log::trace!("frame {}: {} sprite(s)", self.frames, frame.sprites.len());
        }
    }

    fn shutdown(&mut self) {
        log::info!("Renderer shut down after {} frames", self.frames);
    }
}

/// Audio sink that checks the track exists and stays quiet
#[derive(Debug, Clone, Default)]
pub struct SilentAudio {
    playing: bool,
}

impl SilentAudio {
    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl AudioBackend for SilentAudio {
    fn play_looping(&mut self, track: &Path, volume: f32) -> Result<(), StartupError> {
        if !track.is_file() {
            return Err(StartupError::Audio(format!(
                "track {} not found",
                track.display()
            )));
        }
        log::info!("Looping {} at volume {:.2} (silent)", track.display(), volume);
        self.playing = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.playing = false;
    }
}

/// Sleeps until the next tick boundary
#[derive(Debug, Clone)]
pub struct SleepPacer {
    period: Duration,
    next: Option<Instant>,
}

impl SleepPacer {
    /// `tick_seconds` is the fixed tick length, see `Settings::tick_seconds`
    pub fn new(tick_seconds: f32) -> Self {
        Self {
            period: Duration::from_secs_f32(tick_seconds.max(0.0)),
            next: None,
        }
    }
}

impl FramePacer for SleepPacer {
    fn wait_next_tick(&mut self) -> f32 {
        let now = Instant::now();
        let next = self.next.unwrap_or(now);
        if next > now {
            thread::sleep(next - now);
        }
        // Don't try to catch up after a stall
        let after = Instant::now();
        self.next = Some(if after > next + self.period {
            after + self.period
        } else {
            next + self.period
        });
        self.period.as_secs_f32()
    }
}

/// Returns a fixed dt immediately; for tests and fast headless runs
#[derive(Debug, Clone, Copy)]
pub struct FixedPacer {
    pub dt: f32,
}

impl FramePacer for FixedPacer {
    fn wait_next_tick(&mut self) -> f32 {
        self.dt
    }
}
