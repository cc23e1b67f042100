//! Engine behaviour through the public API.

use std::cell::RefCell;
use std::rc::Rc;

use hacktyper::engine::{
    CloseOutcome, Cursor, CursorId, InputCode, InputRouter, OverlayId, OverlayPhase,
    OverlaySequencer, Surface, TimerArena, TimerOwner, TypewriterBuffer,
};

use crate::helpers::{ms, RecordingCue};

#[derive(Debug, Clone, PartialEq)]
enum Done {
    Closed(&'static str),
}

fn drain(overlay: &mut OverlaySequencer<Done>, timers: &mut TimerArena, to_ms: u64) -> Vec<Done> {
    let target = ms(to_ms);
    let mut fired = Vec::new();
    while let Some(f) = timers.pop_expired(target) {
        if f.owner == TimerOwner::Overlay(overlay.id()) {
            if let Some(action) = overlay.on_timer(timers).into_action() {
                fired.push(action);
            }
        }
    }
    timers.settle(target);
    fired
}

// ============================================================================
// Typewriter
// ============================================================================

#[test]
fn hello_reveals_in_steps_of_two() {
    let mut buffer = TypewriterBuffer::new("HELLO", 2, Surface::shown());
    let mut seen = Vec::new();
    for _ in 0..4 {
        buffer.advance();
        seen.push(buffer.target().text().to_string());
    }
    assert_eq!(seen, vec!["HE", "HELL", "HELLO", "HELLO"]);
}

#[test]
fn advance_reaches_end_in_ceil_steps() {
    for (len, step) in [(1usize, 1usize), (7, 3), (10, 5), (11, 4)] {
        let text = "x".repeat(len);
        let mut buffer = TypewriterBuffer::new(&text, step, Surface::shown());
        for _ in 0..len.div_ceil(step) {
            buffer.advance();
        }
        assert_eq!(buffer.reveal_count(), len, "len {} step {}", len, step);
        buffer.advance();
        assert_eq!(buffer.reveal_count(), len);
    }
}

#[test]
fn control_characters_never_reach_the_screen() {
    let mut buffer = TypewriterBuffer::new("a\x1b[2Jb", 10, Surface::shown());
    buffer.handle_input(InputCode::Confirm);
    let text = buffer.target().text();
    assert!(!text.contains('\x1b'));
    assert!(text.contains("^["));
}

// ============================================================================
// Cursor
// ============================================================================

#[test]
fn double_start_keeps_one_blink_timer() {
    let mut timers = TimerArena::new();
    let mut cursor = Cursor::new(CursorId(7), Surface::hidden(), ms(500));
    cursor.start(&mut timers);
    cursor.start(&mut timers);
    assert_eq!(timers.pending(), 1);

    let mut toggles = 0;
    while timers.pop_expired(ms(2000)).is_some() {
        cursor.on_blink();
        toggles += 1;
    }
    assert_eq!(toggles, 4);
}

// ============================================================================
// Overlays
// ============================================================================

#[test]
fn close_without_cue_is_synchronous() {
    let mut timers = TimerArena::new();
    let mut overlay = OverlaySequencer::new(OverlayId(1), Surface::hidden())
        .with_on_close(Some(Done::Closed("alert")));

    overlay.open(&mut timers);
    let outcome = overlay.close(&mut timers);
    assert_eq!(outcome, CloseOutcome::Finalized(Some(Done::Closed("alert"))));
    assert!(!overlay.is_visible());
}

#[test]
fn close_cue_defers_hide_and_finalises_once() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut timers = TimerArena::new();
    let mut overlay = OverlaySequencer::new(OverlayId(2), Surface::hidden())
        .with_open_sound(Some(RecordingCue::new("open", &log)))
        .with_close_sound(Some(RecordingCue::new("close", &log)), ms(1000))
        .with_on_close(Some(Done::Closed("shop")));

    overlay.open(&mut timers);
    assert_eq!(overlay.close(&mut timers), CloseOutcome::Settling);
    assert_eq!(overlay.close(&mut timers), CloseOutcome::Ignored);

    assert!(drain(&mut overlay, &mut timers, 999).is_empty());
    assert!(overlay.is_visible());
    assert_eq!(overlay.phase(), OverlayPhase::Closing);

    assert_eq!(
        drain(&mut overlay, &mut timers, 5000),
        vec![Done::Closed("shop")]
    );
    assert!(!overlay.is_visible());
    assert_eq!(
        *log.borrow(),
        vec!["open:play", "open:pause", "open:seek", "close:play"]
    );
}

#[test]
fn redundant_open_does_not_replay_sound() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut timers = TimerArena::new();
    let mut overlay: OverlaySequencer<Done> = OverlaySequencer::new(OverlayId(3), Surface::hidden())
        .with_open_sound(Some(RecordingCue::new("open", &log)));

    assert!(overlay.open(&mut timers));
    assert!(!overlay.open(&mut timers));
    assert_eq!(*log.borrow(), vec!["open:play"]);
}

// ============================================================================
// Router
// ============================================================================

#[test]
fn router_holds_exactly_one_handler() {
    let mut router = InputRouter::new();
    assert_eq!(router.bind("main"), None);
    assert_eq!(router.bind("overlay"), Some("main"));
    assert!(!router.swap_if("main", Some("other")));
    assert!(router.swap_if("overlay", Some("main")));
    assert_eq!(router.current(), Some("main"));
}
