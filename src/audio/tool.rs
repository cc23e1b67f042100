//! PlayerTool trait and player identifiers.

use std::path::Path;
use std::process::Command;

/// Which external program plays the clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMethod {
    /// macOS built-in player
    Afplay,
    /// Linux PulseAudio / PipeWire
    Paplay,
    /// FFmpeg player, any format
    Ffplay,
    /// Linux ALSA (wav only)
    Aplay,
}

impl PlayerMethod {
    /// Tool name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Afplay => "afplay",
            Self::Paplay => "paplay",
            Self::Ffplay => "ffplay",
            Self::Aplay => "aplay",
        }
    }
}

/// An external program that can play a sound file.
///
/// Each implementation wraps one OS tool and knows its command line.
pub trait PlayerTool: Send + Sync {
    fn method(&self) -> PlayerMethod;

    /// Human-readable name for error messages.
    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Check if this tool is installed. Should be fast.
    fn is_available(&self) -> bool;

    /// Whether the tool can decode the file's format.
    fn supports(&self, _path: &Path) -> bool {
        true
    }

    /// Command that plays `path` once and exits.
    fn command(&self, path: &Path) -> Command;
}

/// Check if a binary is on PATH.
pub(crate) fn binary_exists(name: &str) -> bool {
    Command::new("which")
        .arg(name)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
