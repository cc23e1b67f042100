//! A typewriter buffer paired with its cursor.
//!
//! Typing stops the cursor immediately and restarts it once input has
//! been quiet for the buffer's resume delay. Every keypress re-arms the
//! single resume timer, so the restart is debounced.

use super::cursor::Cursor;
use super::router::InputCode;
use super::surface::{RenderTarget, Surface};
use super::timer::{TimerArena, TimerOwner};
use super::typewriter::TypewriterBuffer;

#[derive(Debug)]
pub struct Console<R = Surface> {
    pub buffer: TypewriterBuffer<R>,
    pub cursor: Cursor<R>,
}

impl<R: RenderTarget> Console<R> {
    pub fn new(buffer: TypewriterBuffer<R>, cursor: Cursor<R>) -> Self {
        Self { buffer, cursor }
    }

    /// Feed one input event to the console.
    ///
    /// Unrecognised codes are ignored and leave the cursor alone.
    pub fn on_input(&mut self, code: InputCode, timers: &mut TimerArena) -> bool {
        if code == InputCode::Other {
            return false;
        }
        self.cursor.stop(timers);
        self.buffer.handle_input(code);
        timers.arm_once(
            TimerOwner::Resume(self.cursor.id()),
            self.buffer.resume_delay(),
        );
        true
    }

    /// Resume timer fired.
    pub fn on_resume(&mut self, timers: &mut TimerArena) {
        self.cursor.start(timers);
    }

    /// Stop the cursor and drop any pending resume.
    pub fn suspend(&mut self, timers: &mut TimerArena) {
        timers.cancel(TimerOwner::Resume(self.cursor.id()));
        self.cursor.stop(timers);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::engine::cursor::DEFAULT_BLINK_PERIOD;
    use crate::engine::timer::CursorId;

    fn console() -> Console {
        let buffer = TypewriterBuffer::new("some kernel source", 2, Surface::shown())
            .with_resume_delay(Duration::from_millis(500));
        let cursor = Cursor::new(CursorId(0), Surface::hidden(), DEFAULT_BLINK_PERIOD);
        Console::new(buffer, cursor)
    }

    fn advance(console: &mut Console, timers: &mut TimerArena, to_ms: u64) {
        let target = Duration::from_millis(to_ms);
        while let Some(fired) = timers.pop_expired(target) {
            match fired.owner {
                TimerOwner::Blink(_) => console.cursor.on_blink(),
                TimerOwner::Resume(_) => console.on_resume(timers),
                _ => {}
            }
        }
        timers.settle(target);
    }

    #[test]
    fn typing_stops_cursor_and_advances() {
        let mut timers = TimerArena::new();
        let mut console = console();
        console.cursor.start(&mut timers);

        assert!(console.on_input(InputCode::Printable('a'), &mut timers));
        assert!(!console.cursor.is_active());
        assert!(!console.cursor.target().is_visible());
        assert_eq!(console.buffer.reveal_count(), 2);
    }

    #[test]
    fn cursor_resumes_after_quiet_period() {
        let mut timers = TimerArena::new();
        let mut console = console();
        console.on_input(InputCode::Printable('a'), &mut timers);

        advance(&mut console, &mut timers, 499);
        assert!(!console.cursor.is_active());
        advance(&mut console, &mut timers, 500);
        assert!(console.cursor.is_active());
        assert!(console.cursor.target().is_visible());
    }

    #[test]
    fn each_keypress_restarts_the_resume_wait() {
        let mut timers = TimerArena::new();
        let mut console = console();

        console.on_input(InputCode::Printable('a'), &mut timers);
        advance(&mut console, &mut timers, 400);
        console.on_input(InputCode::Printable('b'), &mut timers);
        advance(&mut console, &mut timers, 800);
        assert!(!console.cursor.is_active());

        advance(&mut console, &mut timers, 900);
        assert!(console.cursor.is_active());
        // Exactly one blink loop after the resume
        assert_eq!(timers.pending(), 1);
    }

    #[test]
    fn unknown_input_leaves_cursor_blinking() {
        let mut timers = TimerArena::new();
        let mut console = console();
        console.cursor.start(&mut timers);

        assert!(!console.on_input(InputCode::Other, &mut timers));
        assert!(console.cursor.is_active());
    }

    #[test]
    fn suspend_cancels_pending_resume() {
        let mut timers = TimerArena::new();
        let mut console = console();
        console.on_input(InputCode::Erase, &mut timers);
        console.suspend(&mut timers);

        advance(&mut console, &mut timers, 5000);
        assert!(!console.cursor.is_active());
        assert_eq!(timers.pending(), 0);
    }
}
