//! The catalogue of named sound clips.

/// Every clip the show can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Clip {
    /// Hacking alert siren
    Alarm,
    /// Product overlay entry
    RobotTransmission,
    /// Product and game-over overlay exit
    SpaceshipInterface,
    /// Looping background hum while the program runs
    AmbientBackground,
    /// Overlay console exit (buy button hacked)
    LevelUp,
    /// Game-over overlay entry
    PowerUp,
}

impl Clip {
    /// All clips, in preload order.
    pub const ALL: [Clip; 6] = [
        Clip::RobotTransmission,
        Clip::SpaceshipInterface,
        Clip::Alarm,
        Clip::AmbientBackground,
        Clip::LevelUp,
        Clip::PowerUp,
    ];

    /// File name looked up inside the sounds directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Clip::Alarm => "alarm.wav",
            Clip::RobotTransmission => "robot-transmission.ogg",
            Clip::SpaceshipInterface => "spaceship-interface.wav",
            Clip::AmbientBackground => "ambient-bg.wav",
            Clip::LevelUp => "lushlife-levelup.wav",
            Clip::PowerUp => "powerup.flac",
        }
    }

    /// Whether the clip restarts when it ends.
    pub fn is_looping(&self) -> bool {
        matches!(self, Clip::AmbientBackground)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_has_six_unique_files() {
        let mut names: Vec<_> = Clip::ALL.iter().map(Clip::file_name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn only_ambient_loops() {
        let looping: Vec<_> = Clip::ALL.iter().filter(|c| c.is_looping()).collect();
        assert_eq!(looping, vec![&Clip::AmbientBackground]);
    }
}
