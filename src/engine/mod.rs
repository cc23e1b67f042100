//! Animation engine.
//!
//! The timer-driven core behind the show: a typewriter buffer that reveals
//! text per keypress, a blinking cursor, overlays with audio-gated close
//! sequencing, and the single-slot input router.
//!
//! # Architecture
//!
//! - `timer`: owner-keyed `TimerArena` on a virtual clock
//! - `surface`: `RenderTarget` trait, in-memory `Surface`, display escaping
//! - `cursor`: blinking `Cursor`
//! - `typewriter`: `TypewriterBuffer` reveal/retreat/reset
//! - `console`: buffer + cursor with debounced cursor resume
//! - `overlay`: `OverlaySequencer` open/close state machine
//! - `router`: `InputCode` and the `InputRouter` slot
//!
//! Nothing in here reads the clock or the terminal. Components mutate
//! their render targets and arm timers; the caller pops expired timers from
//! the arena and dispatches them back to the owning component.

pub mod console;
pub mod cursor;
pub mod overlay;
pub mod router;
pub mod surface;
pub mod timer;
pub mod typewriter;

pub use console::Console;
pub use cursor::{Cursor, DEFAULT_BLINK_PERIOD};
pub use overlay::{CloseOutcome, OverlayId, OverlayPhase, OverlaySequencer, DEFAULT_CLOSE_SETTLE};
pub use router::{InputCode, InputRouter};
pub use surface::{escape_for_display, RenderTarget, Surface};
pub use timer::{CursorId, Fired, TimerArena, TimerId, TimerOwner};
pub use typewriter::{TypewriterBuffer, DEFAULT_RESUME_DELAY, DEFAULT_STEP_SIZE};
