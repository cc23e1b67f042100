//! macOS afplay player.

use crate::audio::tool::{binary_exists, PlayerMethod, PlayerTool};
use std::path::Path;
use std::process::Command;

/// macOS built-in command line player.
pub struct Afplay;

impl Afplay {
    pub fn new() -> Self {
        Self
    }
}

impl PlayerTool for Afplay {
    fn method(&self) -> PlayerMethod {
        PlayerMethod::Afplay
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos") && binary_exists("afplay")
    }

    fn supports(&self, path: &Path) -> bool {
        // Core Audio has no Vorbis decoder
        !matches!(extension(path).as_deref(), Some("ogg"))
    }

    fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new("afplay");
        cmd.arg(path);
        cmd
    }
}

impl Default for Afplay {
    fn default() -> Self {
        Self::new()
    }
}

pub(super) fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}
