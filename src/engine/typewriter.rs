//! Typewriter text reveal.
//!
//! A `TypewriterBuffer` owns a fixed text and reveals a growing prefix of
//! it, `step_size` characters per keypress. Positions are counted in
//! chars, not bytes, and are clamped on every mutation.

use std::time::Duration;

use super::router::InputCode;
use super::surface::{escape_for_display, RenderTarget, Surface};

/// Default characters revealed per keypress.
pub const DEFAULT_STEP_SIZE: usize = 2;

/// Default inactivity delay before the cursor resumes blinking.
pub const DEFAULT_RESUME_DELAY: Duration = Duration::from_millis(500);

/// Replace tabs with two spaces.
pub fn normalize_tabs(text: &str) -> String {
    text.replace('\t', "  ")
}

/// Character-by-character text reveal bound to a render target.
#[derive(Debug)]
pub struct TypewriterBuffer<R = Surface> {
    chars: Vec<char>,
    reveal_count: usize,
    step_size: usize,
    resume_delay: Duration,
    target: R,
}

impl<R: RenderTarget> TypewriterBuffer<R> {
    /// Create a buffer over `text` with nothing revealed.
    pub fn new(text: &str, step_size: usize, target: R) -> Self {
        Self::with_start(text, step_size, 0, target)
    }

    /// Create a buffer with `start` characters already revealed.
    ///
    /// The offset is clamped to the text length and rendered immediately.
    pub fn with_start(text: &str, step_size: usize, start: usize, target: R) -> Self {
        let chars: Vec<char> = normalize_tabs(text).chars().collect();
        let mut buffer = Self {
            reveal_count: start.min(chars.len()),
            chars,
            step_size: step_size.max(1),
            resume_delay: DEFAULT_RESUME_DELAY,
            target,
        };
        buffer.render();
        buffer
    }

    /// Set the cursor resume delay (builder style).
    pub fn with_resume_delay(mut self, delay: Duration) -> Self {
        self.resume_delay = delay;
        self
    }

    pub fn resume_delay(&self) -> Duration {
        self.resume_delay
    }

    /// Length of the full text in chars.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn reveal_count(&self) -> usize {
        self.reveal_count
    }

    /// Whether the whole text is revealed.
    pub fn is_complete(&self) -> bool {
        self.reveal_count == self.chars.len()
    }

    pub fn step_size(&self) -> usize {
        self.step_size
    }

    /// Change the step size. Applies from the next advance or retreat.
    /// Zero is coerced to one.
    pub fn set_step_size(&mut self, step_size: usize) {
        self.step_size = step_size.max(1);
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    /// Reveal the next `step_size` characters.
    pub fn advance(&mut self) -> usize {
        self.reveal_count = (self.reveal_count + self.step_size).min(self.chars.len());
        self.render();
        self.reveal_count
    }

    /// Hide the last `step_size` characters.
    pub fn retreat(&mut self) -> usize {
        self.reveal_count = self.reveal_count.saturating_sub(self.step_size);
        self.render();
        self.reveal_count
    }

    /// Hide everything.
    pub fn reset(&mut self) {
        self.reveal_count = 0;
        self.render();
    }

    /// Raw revealed prefix.
    pub fn visible_text(&self) -> String {
        self.chars[..self.reveal_count].iter().collect()
    }

    /// Escaped revealed prefix, ready for display.
    pub fn rendered(&self) -> String {
        escape_for_display(&self.visible_text())
    }

    /// Push the escaped prefix to the render target.
    pub fn render(&mut self) {
        let text = self.rendered();
        self.target.set_text(&text, true);
    }

    /// Apply one input event.
    ///
    /// Characters and confirm advance, erase retreats, everything else is
    /// ignored. Returns whether the event was consumed.
    pub fn handle_input(&mut self, code: InputCode) -> bool {
        match code {
            InputCode::Printable(_) | InputCode::Confirm => {
                self.advance();
                true
            }
            InputCode::Erase => {
                self.retreat();
                true
            }
            InputCode::Other => false,
        }
    }
}
