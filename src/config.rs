//! Configuration management for hacktyper.
//!
//! Settings live in `~/.config/hacktyper/config.toml` (or the platform
//! equivalent). Every field has a default, so a missing file or a partial
//! file is always valid.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::audio::AudioBackend;

/// Errors that can occur when loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config: {message}")]
    Invalid { message: String },

    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub typewriter: TypewriterConfig,
    #[serde(default)]
    pub cursor: CursorConfig,
    #[serde(default)]
    pub overlay: OverlayConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypewriterConfig {
    /// Characters revealed per keypress
    #[serde(default = "default_step_size")]
    pub step_size: usize,
    /// Quiet time before the cursor blinks again
    #[serde(default = "default_resume_delay_ms")]
    pub resume_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CursorConfig {
    #[serde(default = "default_blink_period_ms")]
    pub blink_period_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// How long the hacking alert stays up
    #[serde(default = "default_alert_auto_close_ms")]
    pub alert_auto_close_ms: u64,
    /// Wait after starting a close cue before the overlay disappears
    #[serde(default = "default_close_settle_ms")]
    pub close_settle_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Hacked buy-button clicks before the terminal game over
    #[serde(default = "default_threshold")]
    pub threshold: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Directory holding the sound files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sounds_dir: Option<PathBuf>,
    /// Give up waiting for sound files after this long
    #[serde(default = "default_preload_timeout_ms")]
    pub preload_timeout_ms: u64,
    /// Pause between "loaded" and the start button
    #[serde(default = "default_ready_delay_ms")]
    pub ready_delay_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioConfig {
    #[serde(default)]
    pub backend: AudioBackend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Color theme: matrix, classic or amber
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_step_size() -> usize {
    2
}

fn default_resume_delay_ms() -> u64 {
    500
}

fn default_blink_period_ms() -> u64 {
    500
}

fn default_alert_auto_close_ms() -> u64 {
    2000
}

fn default_close_settle_ms() -> u64 {
    1000
}

fn default_threshold() -> u32 {
    10
}

fn default_preload_timeout_ms() -> u64 {
    5000
}

fn default_ready_delay_ms() -> u64 {
    2000
}

fn default_theme() -> String {
    "matrix".to_string()
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            step_size: default_step_size(),
            resume_delay_ms: default_resume_delay_ms(),
        }
    }
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            blink_period_ms: default_blink_period_ms(),
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            alert_auto_close_ms: default_alert_auto_close_ms(),
            close_settle_ms: default_close_settle_ms(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            sounds_dir: None,
            preload_timeout_ms: default_preload_timeout_ms(),
            ready_delay_ms: default_ready_delay_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

impl Config {
    /// Path to the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("hacktyper").join("config.toml"))
    }

    /// Load from the default path, falling back to defaults if absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|e| match e {
            ParseFailure::Toml(source) => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            ParseFailure::Invalid(err) => err,
        })?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parse and validate TOML content.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content).map_err(|e| match e {
            ParseFailure::Toml(source) => ConfigError::Parse {
                path: PathBuf::from("<inline>"),
                source,
            },
            ParseFailure::Invalid(err) => err,
        })
    }

    fn parse(content: &str) -> Result<Self, ParseFailure> {
        let config: Config = toml::from_str(content).map_err(ParseFailure::Toml)?;
        config.validate().map_err(ParseFailure::Invalid)?;
        Ok(config)
    }

    /// Save to the default path.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.typewriter.step_size == 0 {
            return Err(invalid("typewriter.step_size must be at least 1"));
        }
        if self.game.threshold == 0 {
            return Err(invalid("game.threshold must be at least 1"));
        }
        if self.cursor.blink_period_ms < 50 {
            return Err(invalid("cursor.blink_period_ms must be at least 50"));
        }
        Ok(())
    }

    pub fn blink_period(&self) -> Duration {
        Duration::from_millis(self.cursor.blink_period_ms)
    }

    pub fn resume_delay(&self) -> Duration {
        Duration::from_millis(self.typewriter.resume_delay_ms)
    }

    pub fn alert_auto_close(&self) -> Duration {
        Duration::from_millis(self.overlay.alert_auto_close_ms)
    }

    pub fn close_settle(&self) -> Duration {
        Duration::from_millis(self.overlay.close_settle_ms)
    }

    pub fn preload_timeout(&self) -> Duration {
        Duration::from_millis(self.assets.preload_timeout_ms)
    }

    pub fn ready_delay(&self) -> Duration {
        Duration::from_millis(self.assets.ready_delay_ms)
    }
}

enum ParseFailure {
    Toml(toml::de::Error),
    Invalid(ConfigError),
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::Invalid {
        message: message.to_string(),
    }
}
