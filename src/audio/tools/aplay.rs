//! ALSA aplay player.

use super::afplay::extension;
use crate::audio::tool::{binary_exists, PlayerMethod, PlayerTool};
use std::path::Path;
use std::process::Command;

/// Linux ALSA player. Only understands wav.
pub struct Aplay;

impl Aplay {
    pub fn new() -> Self {
        Self
    }
}

impl PlayerTool for Aplay {
    fn method(&self) -> PlayerMethod {
        PlayerMethod::Aplay
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && binary_exists("aplay")
    }

    fn supports(&self, path: &Path) -> bool {
        matches!(extension(path).as_deref(), Some("wav"))
    }

    fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new("aplay");
        cmd.arg("-q").arg(path);
        cmd
    }
}

impl Default for Aplay {
    fn default() -> Self {
        Self::new()
    }
}
