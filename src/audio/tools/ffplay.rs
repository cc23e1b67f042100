//! FFmpeg ffplay player.

use crate::audio::tool::{binary_exists, PlayerMethod, PlayerTool};
use std::path::Path;
use std::process::Command;

/// Headless ffplay. Decodes every format in the catalogue.
pub struct Ffplay;

impl Ffplay {
    pub fn new() -> Self {
        Self
    }
}

impl PlayerTool for Ffplay {
    fn method(&self) -> PlayerMethod {
        PlayerMethod::Ffplay
    }

    fn is_available(&self) -> bool {
        binary_exists("ffplay")
    }

    fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new("ffplay");
        cmd.args(["-nodisp", "-autoexit", "-loglevel", "quiet"]).arg(path);
        cmd
    }
}

impl Default for Ffplay {
    fn default() -> Self {
        Self::new()
    }
}
