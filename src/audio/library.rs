//! Clip library: picks a playback backend and hands out handles.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::clip::Clip;
use super::handle::{AudioHandle, Bell, Muted, ProcessCue};
use super::tool::{PlayerMethod, PlayerTool};
use super::tools::platform_tools;

/// Backend requested in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioBackend {
    /// External player when a sounds directory and a player exist, else bell
    #[default]
    Auto,
    /// Terminal bell for every cue
    Bell,
    /// No sound at all
    Off,
}

/// Backend actually in use after probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    Muted,
    Bell,
    Player(PlayerMethod),
}

impl PlaybackMode {
    pub fn label(&self) -> &'static str {
        match self {
            PlaybackMode::Muted => "muted",
            PlaybackMode::Bell => "bell",
            PlaybackMode::Player(method) => method.name(),
        }
    }
}

/// One clip the preloader has to confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRequest {
    pub clip: Clip,
    /// File to check; `None` for clips that need no file
    pub path: Option<PathBuf>,
}

/// Anything that hands out a fresh playback handle per clip.
pub trait CueSource {
    fn cue(&self, clip: Clip) -> Box<dyn AudioHandle>;
}

/// Resolves clips to handles for the chosen backend.
pub struct AudioLibrary {
    mode: PlaybackMode,
    sounds_dir: Option<PathBuf>,
    tools: Vec<Arc<dyn PlayerTool>>,
}

impl AudioLibrary {
    /// Probe the platform players and resolve the backend.
    pub fn new(backend: AudioBackend, sounds_dir: Option<PathBuf>) -> Self {
        Self::with_tools(backend, sounds_dir, platform_tools())
    }

    /// Resolve the backend against specific tools (for testing).
    pub fn with_tools(
        backend: AudioBackend,
        sounds_dir: Option<PathBuf>,
        tools: Vec<Box<dyn PlayerTool>>,
    ) -> Self {
        let available: Vec<Arc<dyn PlayerTool>> = match (backend, &sounds_dir) {
            (AudioBackend::Auto, Some(_)) => tools
                .into_iter()
                .filter(|t| t.is_available())
                .map(Arc::from)
                .collect(),
            _ => Vec::new(),
        };

        let mode = match backend {
            AudioBackend::Off => PlaybackMode::Muted,
            AudioBackend::Bell => PlaybackMode::Bell,
            AudioBackend::Auto => match available.first() {
                Some(tool) => PlaybackMode::Player(tool.method()),
                None => {
                    if sounds_dir.is_some() {
                        tracing::warn!("no audio player found, falling back to the terminal bell");
                    }
                    PlaybackMode::Bell
                }
            },
        };
        tracing::info!(mode = mode.label(), "audio backend resolved");

        Self {
            mode,
            sounds_dir,
            tools: available,
        }
    }

    /// A library that never makes a sound.
    pub fn muted() -> Self {
        Self {
            mode: PlaybackMode::Muted,
            sounds_dir: None,
            tools: Vec::new(),
        }
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn sounds_dir(&self) -> Option<&Path> {
        self.sounds_dir.as_deref()
    }

    /// File backing `clip`, if the backend plays files.
    pub fn asset_path(&self, clip: Clip) -> Option<PathBuf> {
        match self.mode {
            PlaybackMode::Player(_) => self.sounds_dir.as_ref().map(|d| d.join(clip.file_name())),
            _ => None,
        }
    }

    /// What the preloader has to check, one entry per clip.
    pub fn preload_plan(&self) -> Vec<AssetRequest> {
        Clip::ALL
            .iter()
            .map(|&clip| AssetRequest {
                clip,
                path: self.asset_path(clip),
            })
            .collect()
    }

    /// A fresh handle for `clip`.
    pub fn handle(&self, clip: Clip) -> Box<dyn AudioHandle> {
        match self.mode {
            PlaybackMode::Muted => Box::new(Muted),
            // A bell every frame of a looping clip would be unbearable
            PlaybackMode::Bell if clip.is_looping() => Box::new(Muted),
            PlaybackMode::Bell => Box::new(Bell),
            PlaybackMode::Player(_) => {
                let path = self.asset_path(clip).unwrap_or_else(|| PathBuf::from(clip.file_name()));
                let tool = self.tools.iter().find(|t| t.supports(&path)).cloned();
                Box::new(ProcessCue::new(tool, path, clip.is_looping()))
            }
        }
    }
}

impl CueSource for AudioLibrary {
    fn cue(&self, clip: Clip) -> Box<dyn AudioHandle> {
        self.handle(clip)
    }
}
