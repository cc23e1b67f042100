//! Keyboard input handling for the show.
//!
//! Function keys drive the show itself; everything else is translated to
//! an `InputCode` and handed to whichever console holds the router slot.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::engine::InputCode;
use crate::show::state::{ClickTarget, InputResult, ShowState};

/// Map a key to the typewriter's input vocabulary.
pub fn input_code(key: &KeyEvent) -> InputCode {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return InputCode::Other;
    }
    match key.code {
        KeyCode::Char(c) => InputCode::Printable(c),
        KeyCode::Tab => InputCode::Printable('\t'),
        KeyCode::Backspace | KeyCode::Delete => InputCode::Erase,
        KeyCode::Enter => InputCode::Confirm,
        _ => InputCode::Other,
    }
}

/// Handle a keyboard event.
pub fn handle_key_event(key: KeyEvent, show: &mut ShowState) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    // === Quit ===
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return InputResult::Quit
        }
        KeyCode::F(10) => return InputResult::Quit,
        _ => {}
    }

    // If help is showing, any key closes it
    if show.show_help() {
        show.toggle_help();
        return InputResult::Continue;
    }

    match key.code {
        KeyCode::F(1) => show.toggle_help(),
        KeyCode::F(2) => show.click(ClickTarget::SecretButton),
        KeyCode::F(3) => show.click(ClickTarget::BuyButton),
        KeyCode::F(5) => show.step_up(),
        KeyCode::F(6) => show.step_down(),
        KeyCode::Esc => show.close_topmost(),
        _ => show.handle_key(input_code(&key)),
    }
    InputResult::Continue
}
