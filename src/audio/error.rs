//! Audio playback errors.

use std::path::PathBuf;

/// Errors that can occur while playing a clip.
///
/// Overlays never propagate these; a failed cue is logged and the
/// sequence carries on.
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("Sound file not found: {path}")]
    MissingAsset { path: PathBuf },

    #[error("No audio player available. Install ffplay, paplay, or aplay, or use the bell backend.")]
    NoToolAvailable,

    #[error("Audio player '{tool}' failed: {message}")]
    ToolFailed { tool: &'static str, message: String },

    #[error("Failed to start audio player: {0}")]
    Spawn(#[from] std::io::Error),
}
