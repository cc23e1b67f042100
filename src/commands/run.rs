//! Run the show

use std::path::PathBuf;

use anyhow::{Context, Result};

use hacktyper::audio::{AudioBackend, AudioLibrary};
use hacktyper::show::{run_show, ShowResult};
use hacktyper::source::load_source;
use hacktyper::Config;

/// Command-line overrides for one run.
#[derive(Debug, Default)]
pub struct RunOptions {
    pub source: Option<PathBuf>,
    pub speed: Option<usize>,
    pub sounds: Option<PathBuf>,
    pub mute: bool,
}

/// Fold command-line overrides into the loaded config.
pub fn apply_overrides(mut config: Config, options: &RunOptions) -> Result<Config> {
    if let Some(speed) = options.speed {
        config.typewriter.step_size = speed;
    }
    if let Some(dir) = &options.sounds {
        config.assets.sounds_dir = Some(dir.clone());
    }
    if options.mute {
        config.audio.backend = AudioBackend::Off;
    }
    config.validate()?;
    Ok(config)
}

#[cfg(not(tarpaulin_include))]
pub fn handle(config: Config, options: RunOptions) -> Result<()> {
    let config = apply_overrides(config, &options)?;
    let source = load_source(options.source.as_deref())?;
    let audio = AudioLibrary::new(config.audio.backend, config.assets.sounds_dir.clone());

    let result = run_show(&config, &source, audio).context("Show failed")?;
    if result == ShowResult::Terminated {
        tracing::info!("terminated by signal");
    }
    Ok(())
}
