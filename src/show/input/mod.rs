//! Input handling for the show.
//!
//! Translates crossterm events into show operations and returns control
//! flow signals to the main loop.

mod keyboard;
mod mouse;

pub use keyboard::{handle_key_event, input_code};
pub use mouse::handle_mouse_event;

use crossterm::event::Event;

use crate::show::state::{InputResult, ShowState};

/// Handle any input event, dispatching to the appropriate handler.
pub fn handle_event(event: Event, show: &mut ShowState) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, show),
        Event::Mouse(mouse) => handle_mouse_event(mouse, show),
        Event::Resize(cols, rows) => {
            show.handle_resize(cols, rows);
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, paste, etc.
    }
}
