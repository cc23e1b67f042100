//! Sound cues for the show.
//!
//! Clips are played through whichever external player the platform has
//! (afplay, paplay, ffplay, aplay), with the terminal bell as fallback.
//! Callers treat playback as best effort: a failing cue never interrupts
//! overlay sequencing.

mod clip;
mod error;
mod handle;
mod library;
mod tool;
pub mod tools;

pub use clip::Clip;
pub use error::AudioError;
pub use handle::{AudioHandle, Bell, Muted, ProcessCue};
pub use library::{AssetRequest, AudioBackend, AudioLibrary, CueSource, PlaybackMode};
pub use tool::{PlayerMethod, PlayerTool};
