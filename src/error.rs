//! Startup errors
//!
//! Everything that can go wrong happens before the first tick. Once the
//! shell is running, ticks cannot fail.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to load asset {}: {source}", .path.display())]
    MissingAsset {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("asset {} is empty", .path.display())]
    EmptyAsset { path: PathBuf },
    #[error("failed to read settings file {}: {source}", .path.display())]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings file {}: {source}", .path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to start audio: {0}")]
    Audio(String),
    #[error("failed to take over the terminal: {0}")]
    Terminal(#[source] io::Error),
}
