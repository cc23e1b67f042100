//! The buy-button mini-game.
//!
//! Once the buy button is hacked, each click counts as an attempt. Below
//! the threshold a small game-over popup appears somewhere random on the
//! screen; at the threshold the terminal game-over screen takes over.

use rand::Rng;

/// Default number of attempts before the terminal game over.
pub const DEFAULT_THRESHOLD: u32 = 10;

/// Escalating popup copy, one line per attempt. The last line repeats.
pub const FLAVOR_LINES: &[&str] = &[
    "You hacked the shop! The Lamborghini is yours for $0.",
    "Order confirmed. Again. Still $0.",
    "Warehouse reports a suspicious number of Lamborghinis leaving.",
    "Your garage is now full. Please stop.",
    "The neighbours are asking questions.",
    "Interpol has entered the chat.",
    "Firewall status: on fire.",
    "The shop owner is crying in the break room.",
    "This is your final warning. Probably.",
];

/// What a hacked-button click should open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escalation {
    /// Small popup for the given attempt number (1-based)
    Minor { attempt: u32 },
    /// Terminal game over
    Terminal { attempt: u32 },
}

/// Counts hacked-button clicks for the whole run. Never reset.
#[derive(Debug, Clone)]
pub struct GameOverCounter {
    attempts: u32,
    threshold: u32,
}

impl GameOverCounter {
    pub fn new(threshold: u32) -> Self {
        Self {
            attempts: 0,
            threshold: threshold.max(1),
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Count one click and decide which overlay it earns.
    pub fn record_attempt(&mut self) -> Escalation {
        self.attempts = self.attempts.saturating_add(1);
        if self.attempts < self.threshold {
            Escalation::Minor {
                attempt: self.attempts,
            }
        } else {
            Escalation::Terminal {
                attempt: self.attempts,
            }
        }
    }
}

impl Default for GameOverCounter {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

/// Flavor text for a minor popup.
pub fn flavor_line(attempt: u32) -> &'static str {
    let idx = (attempt.saturating_sub(1) as usize).min(FLAVOR_LINES.len() - 1);
    FLAVOR_LINES[idx]
}

/// Top-left corner of a popup, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub top: u16,
    pub left: u16,
}

pub const TOP_RANGE: (u16, u16) = (1, 12);
pub const LEFT_RANGE: (u16, u16) = (2, 30);

/// Pick a random popup position.
///
/// `top` and `left` are drawn uniformly from [`TOP_RANGE`] and
/// [`LEFT_RANGE`]. With a viewport width, `left` is capped so the popup
/// fits horizontally; a popup wider than the viewport sits at the minimum.
pub fn place_overlay<R: Rng + ?Sized>(
    rng: &mut R,
    viewport_width: Option<u16>,
    overlay_width: u16,
) -> Placement {
    let top = rng.random_range(TOP_RANGE.0..=TOP_RANGE.1);

    let mut left_max = LEFT_RANGE.1;
    if let Some(width) = viewport_width {
        left_max = left_max.min(width.saturating_sub(overlay_width));
    }
    let left = if left_max <= LEFT_RANGE.0 {
        LEFT_RANGE.0
    } else {
        rng.random_range(LEFT_RANGE.0..=left_max)
    };

    Placement { top, left }
}
