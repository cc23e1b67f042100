//! Timer arena for the animation engine.
//!
//! Every delayed or repeating action in the engine (cursor blink, cursor
//! resume, overlay auto-close, overlay close-settle, stage transitions) is
//! an entry in a single `TimerArena`, keyed by the role that owns it.
//! Arming a timer for an owner replaces whatever that owner had pending,
//! so there is never more than one live timer per owner.
//!
//! The arena runs on a virtual clock. The main loop feeds it wall-clock
//! deltas; tests feed it exact durations.

use std::collections::HashMap;
use std::time::Duration;

use super::overlay::OverlayId;

/// Identifies one cursor inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CursorId(pub u32);

/// The role a timer plays. One slot per owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimerOwner {
    /// Repeating visibility toggle of a cursor
    Blink(CursorId),
    /// Deferred cursor restart after typing stops
    Resume(CursorId),
    /// Auto-close or close-settle of an overlay (never both)
    Overlay(OverlayId),
    /// Application stage transitions (preload timeout, ready delay)
    Stage,
}

/// Opaque handle for one arming of a timer.
///
/// Re-arming an owner produces a new id, which makes stale handles
/// distinguishable in logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// A timer that reached its due time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub owner: TimerOwner,
    pub id: TimerId,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    id: TimerId,
    due: Duration,
    period: Option<Duration>,
}

/// Owner-keyed timer storage with cancel-before-rearm semantics.
#[derive(Debug, Default)]
pub struct TimerArena {
    now: Duration,
    next_id: u64,
    entries: HashMap<TimerOwner, Entry>,
}

impl TimerArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Arm a one-shot timer, replacing any timer the owner already had.
    pub fn arm_once(&mut self, owner: TimerOwner, delay: Duration) -> TimerId {
        self.insert(owner, delay, None)
    }

    /// Arm a repeating timer, replacing any timer the owner already had.
    ///
    /// A zero period would fire forever within one advance; it is bumped
    /// to one millisecond.
    pub fn arm_every(&mut self, owner: TimerOwner, period: Duration) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        self.insert(owner, period, Some(period))
    }

    fn insert(&mut self, owner: TimerOwner, delay: Duration, period: Option<Duration>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let replaced = self.entries.insert(
            owner,
            Entry {
                id,
                due: self.now + delay,
                period,
            },
        );
        if replaced.is_some() {
            tracing::trace!(?owner, "timer re-armed");
        }
        id
    }

    /// Cancel the owner's timer. Returns true if one was pending.
    pub fn cancel(&mut self, owner: TimerOwner) -> bool {
        self.entries.remove(&owner).is_some()
    }

    /// Whether the owner has a pending timer.
    pub fn is_armed(&self, owner: TimerOwner) -> bool {
        self.entries.contains_key(&owner)
    }

    /// Id of the owner's pending timer, if any.
    pub fn armed_id(&self, owner: TimerOwner) -> Option<TimerId> {
        self.entries.get(&owner).map(|e| e.id)
    }

    /// Total number of pending timers.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Time until the earliest pending timer, measured from `now`.
    ///
    /// Used by the main loop as an upper bound for its input poll.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.entries
            .values()
            .map(|e| e.due.saturating_sub(self.now))
            .min()
    }

    /// Pop the earliest timer due at or before `target`.
    ///
    /// The clock moves to the timer's due time so handlers observe the
    /// time they were scheduled for. Repeating timers are re-armed one
    /// period later under the same id. Call repeatedly until `None`, then
    /// call `settle(target)`.
    pub fn pop_expired(&mut self, target: Duration) -> Option<Fired> {
        let (owner, entry) = self
            .entries
            .iter()
            .filter(|(_, e)| e.due <= target)
            .min_by_key(|(owner, e)| (e.due, e.id.0, **owner))
            .map(|(owner, e)| (*owner, *e))?;

        self.now = self.now.max(entry.due);
        match entry.period {
            Some(period) => {
                if let Some(e) = self.entries.get_mut(&owner) {
                    e.due = entry.due + period;
                }
            }
            None => {
                self.entries.remove(&owner);
            }
        }

        Some(Fired {
            owner,
            id: entry.id,
        })
    }

    /// Move the clock to `target` once every due timer has been popped.
    pub fn settle(&mut self, target: Duration) {
        self.now = self.now.max(target);
    }
}
