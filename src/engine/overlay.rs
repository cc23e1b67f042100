//! Modal overlay sequencing.
//!
//! An overlay moves `Closed -> Open -> (Closing) -> Closed`. Opening plays
//! the optional open cue and may arm an auto-close. Closing silences the
//! open cue and, when a close cue exists, plays it and keeps the overlay on
//! screen for the settle delay before finalising. Finalising hides the
//! surface and hands the `on_close` action back to the caller.
//!
//! Auto-close and close-settle share the overlay's single timer slot, so
//! at most one of them is ever armed.

use std::fmt;
use std::time::Duration;

use super::surface::{RenderTarget, Surface};
use super::timer::{TimerArena, TimerOwner};
use crate::audio::AudioHandle;

/// Default wait between starting the close cue and hiding the overlay.
pub const DEFAULT_CLOSE_SETTLE: Duration = Duration::from_millis(1000);

/// Identifies one overlay inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    Closed,
    Open,
    /// Close cue playing, still on screen
    Closing,
}

/// What a close request (or a timer) did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseOutcome<A> {
    /// Overlay is hidden; carries the `on_close` action if one is set
    Finalized(Option<A>),
    /// Close cue started, finalise pending
    Settling,
    /// Nothing to do (already closed or already settling)
    Ignored,
}

impl<A> CloseOutcome<A> {
    /// The completion action, if this outcome finalised the overlay.
    pub fn into_action(self) -> Option<A> {
        match self {
            CloseOutcome::Finalized(action) => action,
            _ => None,
        }
    }
}

pub struct OverlaySequencer<A, R = Surface> {
    id: OverlayId,
    phase: OverlayPhase,
    surface: R,
    open_sound: Option<Box<dyn AudioHandle>>,
    close_sound: Option<Box<dyn AudioHandle>>,
    auto_close: Option<Duration>,
    close_settle: Duration,
    on_close: Option<A>,
    closable: bool,
}

impl<A: fmt::Debug, R: fmt::Debug> fmt::Debug for OverlaySequencer<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlaySequencer")
            .field("id", &self.id)
            .field("phase", &self.phase)
            .field("surface", &self.surface)
            .field("open_sound", &self.open_sound.is_some())
            .field("close_sound", &self.close_sound.is_some())
            .field("auto_close", &self.auto_close)
            .field("close_settle", &self.close_settle)
            .field("on_close", &self.on_close)
            .field("closable", &self.closable)
            .finish()
    }
}

impl<A: Clone, R: RenderTarget> OverlaySequencer<A, R> {
    /// A closed overlay with no cues, no auto-close and a close button.
    pub fn new(id: OverlayId, mut surface: R) -> Self {
        surface.set_visible(false);
        Self {
            id,
            phase: OverlayPhase::Closed,
            surface,
            open_sound: None,
            close_sound: None,
            auto_close: None,
            close_settle: DEFAULT_CLOSE_SETTLE,
            on_close: None,
            closable: true,
        }
    }

    pub fn with_open_sound(mut self, sound: Option<Box<dyn AudioHandle>>) -> Self {
        self.open_sound = sound;
        self
    }

    /// Close cue plus how long to keep the overlay up while it plays.
    pub fn with_close_sound(mut self, sound: Option<Box<dyn AudioHandle>>, settle: Duration) -> Self {
        self.close_sound = sound;
        self.close_settle = settle;
        self
    }

    pub fn with_auto_close(mut self, delay: Option<Duration>) -> Self {
        self.auto_close = delay;
        self
    }

    pub fn with_on_close(mut self, action: Option<A>) -> Self {
        self.on_close = action;
        self
    }

    /// Overlay without a close button (only timers or code can close it).
    pub fn without_close_button(mut self) -> Self {
        self.closable = false;
        self
    }

    pub fn id(&self) -> OverlayId {
        self.id
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// Whether the overlay is on screen (open or settling).
    pub fn is_visible(&self) -> bool {
        self.phase != OverlayPhase::Closed
    }

    pub fn is_closable(&self) -> bool {
        self.closable
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    pub fn on_close(&self) -> Option<&A> {
        self.on_close.as_ref()
    }

    /// Replace the completion action, returning the old one.
    pub fn set_on_close(&mut self, action: Option<A>) -> Option<A> {
        std::mem::replace(&mut self.on_close, action)
    }

    /// Open the overlay. Returns false if it was not closed.
    pub fn open(&mut self, timers: &mut TimerArena) -> bool {
        if self.phase != OverlayPhase::Closed {
            tracing::debug!(id = ?self.id, phase = ?self.phase, "redundant open ignored");
            return false;
        }

        if let Some(sound) = self.open_sound.as_mut() {
            if let Err(e) = sound.play() {
                tracing::debug!(id = ?self.id, "open cue failed: {}", e);
            }
        }
        self.surface.set_visible(true);
        self.phase = OverlayPhase::Open;

        if let Some(delay) = self.auto_close {
            timers.arm_once(TimerOwner::Overlay(self.id), delay);
        }
        tracing::debug!(id = ?self.id, "overlay opened");
        true
    }

    /// Close the overlay.
    ///
    /// Without a close cue the overlay is hidden and the `on_close` action
    /// returned before this call returns.
    pub fn close(&mut self, timers: &mut TimerArena) -> CloseOutcome<A> {
        if self.phase != OverlayPhase::Open {
            tracing::debug!(id = ?self.id, phase = ?self.phase, "redundant close ignored");
            return CloseOutcome::Ignored;
        }

        if let Some(sound) = self.open_sound.as_mut() {
            sound.pause();
            sound.seek_to_start();
        }

        match self.close_sound.as_mut() {
            Some(sound) => {
                if let Err(e) = sound.play() {
                    tracing::debug!(id = ?self.id, "close cue failed: {}", e);
                }
                self.phase = OverlayPhase::Closing;
                timers.arm_once(TimerOwner::Overlay(self.id), self.close_settle);
                CloseOutcome::Settling
            }
            None => {
                timers.cancel(TimerOwner::Overlay(self.id));
                CloseOutcome::Finalized(self.finalize())
            }
        }
    }

    /// The overlay's timer fired: auto-close while open, finalise while
    /// settling.
    pub fn on_timer(&mut self, timers: &mut TimerArena) -> CloseOutcome<A> {
        match self.phase {
            OverlayPhase::Open => self.close(timers),
            OverlayPhase::Closing => CloseOutcome::Finalized(self.finalize()),
            OverlayPhase::Closed => CloseOutcome::Ignored,
        }
    }

    fn finalize(&mut self) -> Option<A> {
        self.surface.set_visible(false);
        self.phase = OverlayPhase::Closed;
        tracing::debug!(id = ?self.id, "overlay closed");
        self.on_close.clone()
    }
}
