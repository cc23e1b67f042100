//! Audio handles.
//!
//! An `AudioHandle` is what overlays and the show hold on to: play, pause,
//! rewind. Three implementations exist: a muted handle, the terminal bell,
//! and a cue backed by an external player process.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Child, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::error::AudioError;
use super::tool::PlayerTool;

/// Playback control for one named clip.
pub trait AudioHandle {
    /// Start playing from the current position.
    fn play(&mut self) -> Result<(), AudioError>;

    fn pause(&mut self);

    /// Rewind so the next `play` starts from the beginning.
    fn seek_to_start(&mut self);

    /// Housekeeping between frames (restarting looping clips).
    fn poll(&mut self) {}
}

/// Handle that accepts every call and plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Muted;

impl AudioHandle for Muted {
    fn play(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    fn pause(&mut self) {}

    fn seek_to_start(&mut self) {}
}

/// Rings the terminal bell once per `play`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Bell;

impl AudioHandle for Bell {
    fn play(&mut self) -> Result<(), AudioError> {
        let mut stdout = std::io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()?;
        Ok(())
    }

    fn pause(&mut self) {}

    fn seek_to_start(&mut self) {}
}

/// A looping player that exits sooner than this is not restarted.
pub const MIN_LOOP_RUN: Duration = Duration::from_millis(500);

/// Clip played by spawning an external player.
///
/// Pausing kills the player; the next `play` starts the file over, so a
/// rewind only has to forget the paused state. A looping clip whose player
/// fails or exits almost immediately stops looping instead of respawning
/// every frame.
pub struct ProcessCue {
    tool: Option<Arc<dyn PlayerTool>>,
    path: PathBuf,
    looping: bool,
    playing: bool,
    child: Option<Child>,
    spawned_at: Option<Instant>,
}

impl ProcessCue {
    pub fn new(tool: Option<Arc<dyn PlayerTool>>, path: PathBuf, looping: bool) -> Self {
        Self {
            tool,
            path,
            looping,
            playing: false,
            child: None,
            spawned_at: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    fn spawn(&mut self) -> Result<(), AudioError> {
        let tool = self.tool.as_ref().ok_or(AudioError::NoToolAvailable)?;
        if !self.path.is_file() {
            return Err(AudioError::MissingAsset {
                path: self.path.clone(),
            });
        }
        let child = tool
            .command(&self.path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| AudioError::ToolFailed {
                tool: tool.name(),
                message: e.to_string(),
            })?;
        self.child = Some(child);
        self.spawned_at = Some(Instant::now());
        Ok(())
    }

    fn kill(&mut self) {
        if let Some(mut child) = self.child.take() {
            // The player may have exited on its own already
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl AudioHandle for ProcessCue {
    fn play(&mut self) -> Result<(), AudioError> {
        self.kill();
        self.spawn()?;
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
        self.kill();
    }

    fn seek_to_start(&mut self) {
        if !self.playing {
            self.kill();
        }
    }

    fn poll(&mut self) {
        if !(self.looping && self.playing) {
            return;
        }
        let status = match self.child.as_mut() {
            Some(child) => match child.try_wait() {
                Ok(Some(status)) => Some(status),
                Ok(None) => return,
                Err(_) => None,
            },
            None => None,
        };
        self.child = None;

        let ran_for = self.spawned_at.map(|t| t.elapsed()).unwrap_or_default();
        let healthy = status.is_some_and(|s| s.success()) && ran_for >= MIN_LOOP_RUN;
        if !healthy {
            tracing::warn!(
                path = %self.path.display(),
                ?status,
                ran_ms = ran_for.as_millis() as u64,
                "looping clip stopped: player exited early"
            );
            self.playing = false;
            return;
        }

        if let Err(e) = self.spawn() {
            tracing::warn!(path = %self.path.display(), "looping clip stopped: {}", e);
            self.playing = false;
        }
    }
}

impl Drop for ProcessCue {
    fn drop(&mut self) {
        self.kill();
    }
}
