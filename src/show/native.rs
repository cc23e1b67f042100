//! The show's main loop.
//!
//! Owns the terminal for the lifetime of the show: feeds wall-clock time
//! into the virtual clock, draws when something changed and sleeps in the
//! input poll until the next timer is due.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::input::handle_event;
use super::preload::AssetPreloader;
use super::render::{render_show, HitRegions};
use super::state::{InputResult, ShowState};
use crate::audio::AudioLibrary;
use crate::config::Config;
use crate::tui::setup_terminal;

/// Upper bound on one input poll, so the preloader and looping clips are
/// serviced even when no timer is due.
const MAX_POLL: Duration = Duration::from_millis(50);

/// How the show ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowResult {
    /// User quit (Ctrl+C or F10)
    Quit,
    /// SIGTERM received
    Terminated,
}

/// Run the show until the user quits.
pub fn run_show(config: &Config, source: &str, audio: AudioLibrary) -> Result<ShowResult> {
    tracing::info!(mode = audio.mode().label(), "starting show");
    let preloader = AssetPreloader::spawn(audio.preload_plan());
    let mut show = ShowState::new(config, source, audio, preloader, SmallRng::from_os_rng());

    let terminated = Arc::new(AtomicBool::new(false));
    #[cfg(unix)]
    signal_hook::flag::register(signal_hook::consts::SIGTERM, Arc::clone(&terminated))
        .context("Failed to register SIGTERM handler")?;

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let size = terminal.size()?;
    show.handle_resize(size.width, size.height);

    let mut last_tick = Instant::now();
    let result = loop {
        if terminated.load(Ordering::Relaxed) {
            break ShowResult::Terminated;
        }

        let now = Instant::now();
        show.advance(now.duration_since(last_tick));
        last_tick = now;

        if show.needs_render {
            let mut regions = HitRegions::new();
            terminal.draw(|frame| regions = render_show(frame, &show))?;
            show.set_hit_regions(regions);
            show.needs_render = false;
        }

        let timeout = show
            .time_until_next_timer()
            .map_or(MAX_POLL, |next| next.min(MAX_POLL));
        if event::poll(timeout)? && handle_event(event::read()?, &mut show) == InputResult::Quit {
            break ShowResult::Quit;
        }
    };

    show.shutdown();
    guard.restore();
    tracing::info!(?result, "show finished");
    Ok(result)
}
