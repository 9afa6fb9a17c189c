//! Game settings
//!
//! Read once at startup from a JSON file next to the binary. Game rules
//! (screen size, physics, layout) are compile-time constants in `consts`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::assets::AssetManifest;
use crate::consts::FPS;
use crate::error::StartupError;

/// Default settings file name
pub const SETTINGS_FILE: &str = "starbird.json";

/// Process-wide configuration handed to the shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Frame pacing target
    pub target_fps: u32,
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Session seed source; `None` picks a random one per process
    pub seed: Option<u64>,
    /// Stop a headless demo run after this many ticks
    pub demo_tick_limit: Option<u64>,
    /// Asset locations
    pub assets: AssetManifest,
    /// Directory relative asset paths resolve against; `None` means the
    /// working directory
    pub asset_root: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "StarBird".to_string(),
            target_fps: FPS,
            music_volume: 0.05,
            seed: None,
            demo_tick_limit: None,
            assets: AssetManifest::default(),
            asset_root: None,
        }
    }
}

impl Settings {
    /// Music volume clamped into range
    pub fn effective_music_volume(&self) -> f32 {
        self.music_volume.clamp(0.0, 1.0)
    }

    /// Seconds per tick at the target frame rate
    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }

    /// Asset paths with `asset_root` applied
    pub fn asset_manifest(&self) -> AssetManifest {
        match &self.asset_root {
            Some(root) => self.assets.rooted_at(root),
            None => self.assets.clone(),
        }
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load(path: &Path) -> Self {
        match Self::load_strict(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    /// Load settings; a missing file yields defaults, a broken one an error
    pub fn load_strict(path: &Path) -> Result<Self, StartupError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(StartupError::SettingsIo {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let settings = serde_json::from_str(&json).map_err(|source| StartupError::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
