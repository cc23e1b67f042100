//! Keypress routing.
//!
//! Exactly one keypress handler is live at a time. The router is a single
//! slot: binding a new handler replaces the old one in one assignment, so
//! no input event can ever see two handlers or a half-finished swap.

/// Logical input codes the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCode {
    /// Ordinary character key
    Printable(char),
    /// Backspace or delete
    Erase,
    /// Enter / submit
    Confirm,
    /// Anything else (ignored by consumers)
    Other,
}

/// Single-slot register of the live keypress handler.
#[derive(Debug, Clone)]
pub struct InputRouter<H> {
    slot: Option<H>,
}

impl<H> Default for InputRouter<H> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<H: Copy + PartialEq + std::fmt::Debug> InputRouter<H> {
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// The handler that receives the next input event.
    pub fn current(&self) -> Option<H> {
        self.slot
    }

    /// Bind `handler`, returning whatever was bound before.
    pub fn bind(&mut self, handler: H) -> Option<H> {
        let previous = self.slot.replace(handler);
        tracing::debug!(?previous, ?handler, "input handler bound");
        previous
    }

    /// Unbind the live handler.
    pub fn unbind(&mut self) -> Option<H> {
        let previous = self.slot.take();
        tracing::debug!(?previous, "input handler unbound");
        previous
    }

    /// Replace `expected` with `next` only if `expected` is still bound.
    ///
    /// Used when an overlay hands input back: if something else took the
    /// slot in the meantime, it keeps it.
    pub fn swap_if(&mut self, expected: H, next: Option<H>) -> bool {
        if self.slot != Some(expected) {
            return false;
        }
        self.slot = next;
        tracing::debug!(?expected, ?next, "input handler swapped");
        true
    }
}
