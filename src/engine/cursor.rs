//! Blinking cursor.

use std::time::Duration;

use super::surface::{RenderTarget, Surface};
use super::timer::{CursorId, TimerArena, TimerOwner};

/// Default blink period.
pub const DEFAULT_BLINK_PERIOD: Duration = Duration::from_millis(500);

/// A cursor that toggles its render target on a fixed interval.
///
/// While inactive the target is hidden and no blink timer is armed.
#[derive(Debug)]
pub struct Cursor<R = Surface> {
    id: CursorId,
    target: R,
    visible: bool,
    active: bool,
    period: Duration,
}

impl<R: RenderTarget> Cursor<R> {
    /// Create an inactive cursor bound to `target`.
    pub fn new(id: CursorId, mut target: R, period: Duration) -> Self {
        target.set_visible(false);
        Self {
            id,
            target,
            visible: false,
            active: false,
            period,
        }
    }

    pub fn id(&self) -> CursorId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    /// Show the cursor and start blinking.
    ///
    /// Calling this while already active restarts the blink phase; the
    /// arena replaces the old timer so only one blink loop ever runs.
    pub fn start(&mut self, timers: &mut TimerArena) {
        self.active = true;
        self.set_visible(true);
        timers.arm_every(TimerOwner::Blink(self.id), self.period);
    }

    /// Stop blinking and hide the cursor.
    pub fn stop(&mut self, timers: &mut TimerArena) {
        self.active = false;
        timers.cancel(TimerOwner::Blink(self.id));
        self.set_visible(false);
    }

    /// Blink timer tick.
    pub fn on_blink(&mut self) {
        if self.active {
            self.set_visible(!self.visible);
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.target.set_visible(visible);
    }
}
