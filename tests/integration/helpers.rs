//! Shared test fixtures.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use hacktyper::audio::{AudioError, AudioHandle, AudioLibrary, Clip, CueSource};
use hacktyper::show::{AssetPreloader, ShowState};
use hacktyper::Config;
use rand::rngs::SmallRng;
use rand::SeedableRng;

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Audio handle that records every call into a shared log.
#[derive(Clone)]
pub struct RecordingCue {
    pub name: &'static str,
    pub log: Rc<RefCell<Vec<String>>>,
}

impl RecordingCue {
    pub fn new(name: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Box<dyn AudioHandle> {
        Box::new(Self {
            name,
            log: Rc::clone(log),
        })
    }
}

impl AudioHandle for RecordingCue {
    fn play(&mut self) -> Result<(), AudioError> {
        self.log.borrow_mut().push(format!("{}:play", self.name));
        Ok(())
    }

    fn pause(&mut self) {
        self.log.borrow_mut().push(format!("{}:pause", self.name));
    }

    fn seek_to_start(&mut self) {
        self.log.borrow_mut().push(format!("{}:seek", self.name));
    }
}

/// Cue source whose handles all log into one shared list, named by clip.
pub struct RecordingLibrary {
    pub log: Rc<RefCell<Vec<String>>>,
}

impl RecordingLibrary {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl CueSource for RecordingLibrary {
    fn cue(&self, clip: Clip) -> Box<dyn AudioHandle> {
        let name = match clip {
            Clip::Alarm => "alarm",
            Clip::RobotTransmission => "robot-transmission",
            Clip::SpaceshipInterface => "spaceship-interface",
            Clip::AmbientBackground => "ambient",
            Clip::LevelUp => "level-up",
            Clip::PowerUp => "power-up",
        };
        RecordingCue::new(name, &self.log)
    }
}

/// A show whose cues are recorded, with nothing to preload.
pub fn recorded_show(config: &Config, source: &str) -> (ShowState, Rc<RefCell<Vec<String>>>) {
    let library = RecordingLibrary::new();
    let log = Rc::clone(&library.log);
    let show = ShowState::new(
        config,
        source,
        library,
        AssetPreloader::ready(),
        SmallRng::seed_from_u64(1234),
    );
    (show, log)
}

/// A muted show with nothing to preload.
pub fn new_show(config: &Config, source: &str) -> ShowState {
    ShowState::new(
        config,
        source,
        AudioLibrary::muted(),
        AssetPreloader::ready(),
        SmallRng::seed_from_u64(1234),
    )
}
