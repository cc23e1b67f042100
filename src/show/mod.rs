//! The hacker show.
//!
//! Wires the engine components into the full program: loading splash,
//! start button, main console, hacking alert, shop overlay and the
//! buy-button mini-game.
//!
//! # Architecture
//!
//! - `state`: `ShowState`, the context every handler goes through
//! - `game`: attempt counter, flavor text and popup placement
//! - `preload`: background check of the sound files
//! - `input/`: keyboard and mouse handling
//! - `render/`: ratatui drawing and click regions
//! - `native`: terminal main loop

pub mod game;
pub(crate) mod input;
mod native;
pub mod preload;
pub mod render;
pub mod state;

pub use game::{Escalation, GameOverCounter};
pub use native::{run_show, ShowResult};
pub use preload::AssetPreloader;
pub use state::{ClickTarget, InputResult, KeyHandler, ShowAction, ShowState, Stage};
