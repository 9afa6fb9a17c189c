//! Asset manifest and startup loading
//!
//! The bird sprite, star sprite and music track are read once before the
//! shell starts. A missing or empty file is fatal.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StartupError;

/// Where each asset lives on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    pub bird_sprite: PathBuf,
    pub star_sprite: PathBuf,
    pub music: PathBuf,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            bird_sprite: PathBuf::from("assets/bird.png"),
            star_sprite: PathBuf::from("assets/star.png"),
            music: PathBuf::from("assets/music1.ogg"),
        }
    }
}

impl AssetManifest {
    /// Resolve every path against `root` (relative paths only)
    pub fn rooted_at(&self, root: &Path) -> Self {
        let join = |p: &PathBuf| {
            if p.is_absolute() {
                p.clone()
            } else {
                root.join(p)
            }
        };
        Self {
            bird_sprite: join(&self.bird_sprite),
            star_sprite: join(&self.star_sprite),
            music: join(&self.music),
        }
    }
}

/// Raw asset bytes, decoded by whichever backend consumes them
#[derive(Debug, Clone)]
pub struct Assets {
    pub bird_sprite: Vec<u8>,
    pub star_sprite: Vec<u8>,
    pub music_path: PathBuf,
    pub music: Vec<u8>,
}

impl Assets {
    /// Read every asset in the manifest
    pub fn load(manifest: &AssetManifest) -> Result<Self, StartupError> {
        let assets = Self {
            bird_sprite: read_asset(&manifest.bird_sprite)?,
            star_sprite: read_asset(&manifest.star_sprite)?,
            music_path: manifest.music.clone(),
            music: read_asset(&manifest.music)?,
        };
        log::info!(
            "Loaded assets: bird {} B, star {} B, music {} B",
            assets.bird_sprite.len(),
            assets.star_sprite.len(),
            assets.music.len()
        );
        Ok(assets)
    }
}

fn read_asset(path: &Path) -> Result<Vec<u8>, StartupError> {
    let bytes = fs::read(path).map_err(|source| StartupError::MissingAsset {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes.is_empty() {
        return Err(StartupError::EmptyAsset {
            path: path.to_path_buf(),
        });
    }
    Ok(bytes)
}
