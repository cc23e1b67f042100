//! PulseAudio paplay player.

use crate::audio::tool::{binary_exists, PlayerMethod, PlayerTool};
use std::path::Path;
use std::process::Command;

/// Linux PulseAudio / PipeWire player.
///
/// Plays anything libsndfile reads (wav, ogg, flac).
pub struct Paplay;

impl Paplay {
    pub fn new() -> Self {
        Self
    }
}

impl PlayerTool for Paplay {
    fn method(&self) -> PlayerMethod {
        PlayerMethod::Paplay
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && binary_exists("paplay")
    }

    fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new("paplay");
        cmd.arg(path);
        cmd
    }
}

impl Default for Paplay {
    fn default() -> Self {
        Self::new()
    }
}
