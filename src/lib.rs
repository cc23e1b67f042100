//! hacktyper - a fake hacking console for the terminal
//!
//! Every keypress reveals the next few characters of a source file while a
//! cursor blinks, alerts flash and a shop with an irresistibly hackable buy
//! button pops up.
//!
//! # Modules
//!
//! - `engine`: typewriter, cursor, overlay sequencing, timers, input router
//! - `audio`: sound cues via external players or the terminal bell
//! - `show`: the full program on top of the engine
//! - `config`: TOML configuration
//! - `tui`: terminal setup, theme and layout helpers

pub mod audio;
pub mod cli;
pub mod config;
pub mod engine;
pub mod logging;
pub mod show;
pub mod source;
pub mod tui;

pub use config::Config;
