//! Background music
//!
//! One looping track, started when the shell starts and stopped at teardown.

use std::path::{Path, PathBuf};

use crate::error::StartupError;
use crate::host::AudioBackend;

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    music_volume: f32,
    current: Option<PathBuf>,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B, music_volume: f32) -> Self {
        Self {
            backend,
            music_volume: music_volume.clamp(0.0, 1.0),
            current: None,
        }
    }

    /// Start the background loop; a no-op if `track` is already playing
    pub fn play_music(&mut self, track: &Path) -> Result<(), StartupError> {
        if self.current.as_deref() == Some(track) {
            return Ok(());
        }
        self.backend.play_looping(track, self.music_volume)?;
        self.current = Some(track.to_path_buf());
        Ok(())
    }

    pub fn is_playing(&self) -> bool {
        self.current.is_some()
    }

    /// Stop playback
    pub fn stop(&mut self) {
        if self.current.take().is_some() {
            self.backend.stop();
            log::info!("Music stopped");
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
