//! Show state management
//!
//! `ShowState` is the application context: it owns every engine component,
//! the timer arena, the input router and the mini-game counter, and it is
//! the only thing the main loop talks to. Input handlers and timer
//! dispatch both go through it, so no component reaches another behind
//! its back.

use std::time::Duration;

use rand::rngs::SmallRng;
use ratatui::layout::Rect;

use crate::audio::{AudioHandle, Clip, CueSource};
use crate::config::Config;
use crate::engine::{
    CloseOutcome, Console, Cursor, CursorId, Fired, InputCode, InputRouter, OverlayId,
    OverlayPhase, OverlaySequencer, RenderTarget, Surface, TimerArena, TimerOwner, TypewriterBuffer,
};
use crate::show::game::{flavor_line, place_overlay, Escalation, GameOverCounter, Placement};
use crate::show::preload::AssetPreloader;

pub const MAIN_CURSOR: CursorId = CursorId(0);
pub const PRODUCT_CURSOR: CursorId = CursorId(1);

pub const ALERT: OverlayId = OverlayId(1);
pub const PRODUCT: OverlayId = OverlayId(2);
pub const PRODUCT_CONSOLE: OverlayId = OverlayId(3);
pub const GAME_OVER: OverlayId = OverlayId(4);
const FIRST_POPUP_ID: u32 = 100;

/// Largest step the speed keys go up to.
pub const MAX_STEP: usize = 64;

/// Width of a game-over popup, used for placement.
pub const POPUP_WIDTH: u16 = 44;

/// Characters each keypress reveals in the overlay console.
const PRODUCT_CONSOLE_STEP: usize = 2;

/// Where the program is in its startup sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Splash screen while sound files are checked
    Loading {
        /// Preload finished (or timed out); waiting out the ready delay
        assets_ready: bool,
    },
    /// Start button shown
    Ready,
    /// Hacker console running
    Running,
}

/// Which keypress handler is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyHandler {
    MainConsole,
    ProductConsole,
}

/// Completion actions overlays hand back when they close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowAction {
    /// The hacking alert leads into the product overlay
    OpenProduct,
    /// The overlay console gives input back to the main console
    RestoreMainInput,
    /// A game-over popup is gone for good
    DismissPopup(OverlayId),
}

/// Clickable things on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Start,
    SecretButton,
    BuyButton,
    Close(OverlayId),
}

/// One minor game-over popup.
#[derive(Debug)]
pub struct Popup {
    pub overlay: OverlaySequencer<ShowAction>,
    pub placement: Placement,
    pub attempt: u32,
}

/// Result of processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue running
    Continue,
    /// Exit the program
    Quit,
}

pub struct ShowState {
    stage: Stage,
    timers: TimerArena,
    router: InputRouter<KeyHandler>,

    main: Console,
    product_console: Console,

    alert: OverlaySequencer<ShowAction>,
    product: OverlaySequencer<ShowAction>,
    console_overlay: OverlaySequencer<ShowAction>,
    game_over: OverlaySequencer<ShowAction>,
    popups: Vec<Popup>,
    next_popup_id: u32,

    counter: GameOverCounter,
    buy_hacked: bool,

    audio: Box<dyn CueSource>,
    ambient: Box<dyn AudioHandle>,
    preloader: AssetPreloader,
    rng: SmallRng,

    close_settle: Duration,
    ready_delay: Duration,

    show_help: bool,
    viewport: (u16, u16),
    hit_regions: Vec<(Rect, ClickTarget)>,

    /// True when the screen needs to be redrawn
    pub needs_render: bool,
}

impl ShowState {
    /// Build the show and start the preload timeout.
    ///
    /// Every overlay and the ambient loop take their handles from `audio`.
    pub fn new(
        config: &Config,
        source: &str,
        audio: impl CueSource + 'static,
        preloader: AssetPreloader,
        rng: SmallRng,
    ) -> Self {
        let mut timers = TimerArena::new();
        let close_settle = config.close_settle();

        let main = Console::new(
            TypewriterBuffer::new(source, config.typewriter.step_size, Surface::shown())
                .with_resume_delay(config.resume_delay()),
            Cursor::new(MAIN_CURSOR, Surface::hidden(), config.blink_period()),
        );
        let mut product_console = Console::new(
            TypewriterBuffer::new(source, PRODUCT_CONSOLE_STEP, Surface::shown())
                .with_resume_delay(config.resume_delay()),
            Cursor::new(PRODUCT_CURSOR, Surface::hidden(), config.blink_period()),
        );
        // The overlay console's cursor blinks from the start
        product_console.cursor.start(&mut timers);

        let mut alert = OverlaySequencer::new(ALERT, Surface::hidden())
            .with_open_sound(Some(audio.cue(Clip::Alarm)))
            .with_auto_close(Some(config.alert_auto_close()))
            .with_on_close(Some(ShowAction::OpenProduct));
        alert
            .surface_mut()
            .set_text("INTRUSION DETECTED\nTracing connection...", false);

        let mut product = OverlaySequencer::new(PRODUCT, Surface::hidden())
            .with_open_sound(Some(audio.cue(Clip::RobotTransmission)))
            .with_close_sound(Some(audio.cue(Clip::SpaceshipInterface)), close_settle);
        product.surface_mut().set_text(
            "LAMBORGHINI AVENTADOR\nV12, 770 hp, 0-100 in 2.8 s\nPrice: $417,826",
            false,
        );

        let console_overlay = OverlaySequencer::new(PRODUCT_CONSOLE, Surface::hidden())
            .with_close_sound(Some(audio.cue(Clip::LevelUp)), close_settle);

        let mut game_over = OverlaySequencer::new(GAME_OVER, Surface::hidden())
            .with_open_sound(Some(audio.cue(Clip::Alarm)))
            .without_close_button();
        game_over.surface_mut().set_text(
            "GAME OVER\nThe shop has been hacked beyond repair.\nYou own every Lamborghini on Earth.",
            false,
        );

        let ambient = audio.cue(Clip::AmbientBackground);

        timers.arm_once(TimerOwner::Stage, config.preload_timeout());

        Self {
            stage: Stage::Loading {
                assets_ready: false,
            },
            timers,
            router: InputRouter::new(),
            main,
            product_console,
            alert,
            product,
            console_overlay,
            game_over,
            popups: Vec::new(),
            next_popup_id: FIRST_POPUP_ID,
            counter: GameOverCounter::new(config.game.threshold),
            buy_hacked: false,
            audio: Box::new(audio),
            ambient,
            preloader,
            rng,
            close_settle,
            ready_delay: config.ready_delay(),
            show_help: false,
            viewport: (80, 24),
            hit_regions: Vec::new(),
            needs_render: true,
        }
    }

    // === Accessors ===

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn timers(&self) -> &TimerArena {
        &self.timers
    }

    pub fn active_handler(&self) -> Option<KeyHandler> {
        self.router.current()
    }

    pub fn main_console(&self) -> &Console {
        &self.main
    }

    pub fn product_console(&self) -> &Console {
        &self.product_console
    }

    pub fn alert(&self) -> &OverlaySequencer<ShowAction> {
        &self.alert
    }

    pub fn product(&self) -> &OverlaySequencer<ShowAction> {
        &self.product
    }

    pub fn console_overlay(&self) -> &OverlaySequencer<ShowAction> {
        &self.console_overlay
    }

    pub fn game_over(&self) -> &OverlaySequencer<ShowAction> {
        &self.game_over
    }

    pub fn popups(&self) -> &[Popup] {
        &self.popups
    }

    pub fn counter(&self) -> &GameOverCounter {
        &self.counter
    }

    pub fn is_buy_hacked(&self) -> bool {
        self.buy_hacked
    }

    pub fn preloader(&self) -> &AssetPreloader {
        &self.preloader
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn viewport(&self) -> (u16, u16) {
        self.viewport
    }

    /// Whether any overlay is on screen (the backdrop dims).
    pub fn any_overlay_visible(&self) -> bool {
        self.alert.is_visible()
            || self.product.is_visible()
            || self.console_overlay.is_visible()
            || self.game_over.is_visible()
            || self.popups.iter().any(|p| p.overlay.is_visible())
    }

    // === Clock ===

    /// Advance the virtual clock by `delta`, firing every due timer.
    pub fn advance(&mut self, delta: Duration) {
        if let Stage::Loading {
            assets_ready: false,
        } = self.stage
        {
            if self.preloader.poll() {
                tracing::info!(total = self.preloader.total(), "assets preloaded");
                self.open_asset_gate();
            }
        }

        self.ambient.poll();

        let target = self.timers.now() + delta;
        while let Some(fired) = self.timers.pop_expired(target) {
            self.dispatch_timer(fired);
        }
        self.timers.settle(target);
    }

    /// Time until the next timer is due.
    pub fn time_until_next_timer(&self) -> Option<Duration> {
        self.timers.time_until_next()
    }

    fn dispatch_timer(&mut self, fired: Fired) {
        self.needs_render = true;
        match fired.owner {
            TimerOwner::Blink(MAIN_CURSOR) => self.main.cursor.on_blink(),
            TimerOwner::Blink(PRODUCT_CURSOR) => self.product_console.cursor.on_blink(),
            TimerOwner::Resume(MAIN_CURSOR) => self.main.on_resume(&mut self.timers),
            TimerOwner::Resume(PRODUCT_CURSOR) => {
                self.product_console.on_resume(&mut self.timers)
            }
            TimerOwner::Overlay(id) => {
                let outcome = self.with_overlay(id, |overlay, timers| overlay.on_timer(timers));
                self.finish(outcome);
            }
            TimerOwner::Stage => self.on_stage_timer(),
            other => tracing::warn!(?other, "timer with no owner fired"),
        }
    }

    // === Stages ===

    fn open_asset_gate(&mut self) {
        self.stage = Stage::Loading { assets_ready: true };
        self.timers.arm_once(TimerOwner::Stage, self.ready_delay);
        self.needs_render = true;
    }

    fn on_stage_timer(&mut self) {
        match self.stage {
            Stage::Loading {
                assets_ready: false,
            } => {
                tracing::warn!(
                    ready = self.preloader.ready_count(),
                    total = self.preloader.total(),
                    failed = ?self.preloader.failed().collect::<Vec<_>>(),
                    "asset preload timed out, continuing without them"
                );
                self.open_asset_gate();
            }
            Stage::Loading { assets_ready: true } => {
                tracing::info!("program ready");
                self.stage = Stage::Ready;
            }
            Stage::Ready | Stage::Running => {}
        }
    }

    fn start_program(&mut self) {
        if self.stage != Stage::Ready {
            return;
        }
        tracing::info!("program started");
        self.stage = Stage::Running;
        if let Err(e) = self.ambient.play() {
            tracing::debug!("ambient clip failed: {}", e);
        }
        self.main.cursor.start(&mut self.timers);
        self.router.bind(KeyHandler::MainConsole);
        self.needs_render = true;
    }

    /// Stop every cursor and the ambient clip before exit.
    pub fn shutdown(&mut self) {
        self.main.suspend(&mut self.timers);
        self.product_console.suspend(&mut self.timers);
        self.ambient.pause();
        self.router.unbind();
        tracing::debug!("show stopped");
    }

    // === Input ===

    /// Handle one logical key.
    pub fn handle_key(&mut self, code: InputCode) {
        self.needs_render = true;

        if self.show_help {
            self.show_help = false;
            return;
        }

        match self.stage {
            Stage::Loading { .. } => {}
            Stage::Ready => {
                if code == InputCode::Confirm {
                    self.start_program();
                }
            }
            Stage::Running => match self.router.current() {
                Some(KeyHandler::MainConsole) => {
                    self.main.on_input(code, &mut self.timers);
                }
                Some(KeyHandler::ProductConsole) => self.product_console_key(code),
                None => {}
            },
        }
    }

    fn product_console_key(&mut self, code: InputCode) {
        if code == InputCode::Confirm {
            self.product_console.suspend(&mut self.timers);
            let outcome = self.console_overlay.close(&mut self.timers);
            if outcome != CloseOutcome::Ignored {
                tracing::info!("buy button hacked");
                self.buy_hacked = true;
            }
            self.finish(outcome);
            return;
        }
        self.product_console.on_input(code, &mut self.timers);
    }

    /// Handle a click on a screen element.
    pub fn click(&mut self, target: ClickTarget) {
        self.needs_render = true;
        match target {
            ClickTarget::Start => self.start_program(),
            ClickTarget::SecretButton => {
                if self.stage == Stage::Running {
                    self.alert.open(&mut self.timers);
                }
            }
            ClickTarget::BuyButton => {
                if self.stage == Stage::Running && self.product.is_visible() {
                    self.click_buy();
                }
            }
            ClickTarget::Close(id) => self.close_overlay(id),
        }
    }

    fn click_buy(&mut self) {
        if self.buy_hacked {
            self.escalate();
            return;
        }
        if self.console_overlay.open(&mut self.timers) {
            self.console_overlay
                .set_on_close(Some(ShowAction::RestoreMainInput));
            self.router.bind(KeyHandler::ProductConsole);
        }
    }

    fn escalate(&mut self) {
        match self.counter.record_attempt() {
            Escalation::Minor { attempt } => {
                let id = OverlayId(self.next_popup_id);
                self.next_popup_id += 1;
                let placement = place_overlay(&mut self.rng, Some(self.viewport.0), POPUP_WIDTH);

                let mut overlay = OverlaySequencer::new(id, Surface::hidden())
                    .with_open_sound(Some(self.audio.cue(Clip::PowerUp)))
                    .with_close_sound(
                        Some(self.audio.cue(Clip::SpaceshipInterface)),
                        self.close_settle,
                    )
                    .with_on_close(Some(ShowAction::DismissPopup(id)));
                overlay.surface_mut().set_text(flavor_line(attempt), false);
                overlay.open(&mut self.timers);

                tracing::debug!(attempt, ?placement, "game-over popup");
                self.popups.push(Popup {
                    overlay,
                    placement,
                    attempt,
                });
            }
            Escalation::Terminal { attempt } => {
                if self.game_over.open(&mut self.timers) {
                    tracing::info!(attempt, "game over");
                }
            }
        }
    }

    /// Close the overlay with `id` if it has a close button.
    pub fn close_overlay(&mut self, id: OverlayId) {
        let outcome = self.with_overlay(id, |overlay, timers| {
            if overlay.is_closable() {
                overlay.close(timers)
            } else {
                CloseOutcome::Ignored
            }
        });
        self.finish(outcome);
    }

    /// Close the topmost closable overlay (Esc).
    pub fn close_topmost(&mut self) {
        if let Some(id) = self.topmost_closable() {
            self.close_overlay(id);
        }
    }

    fn topmost_closable(&self) -> Option<OverlayId> {
        self.popups
            .iter()
            .rev()
            .map(|p| &p.overlay)
            .chain([&self.console_overlay, &self.product, &self.alert])
            .find(|o| o.phase() == OverlayPhase::Open && o.is_closable())
            .map(|o| o.id())
    }

    fn with_overlay(
        &mut self,
        id: OverlayId,
        f: impl FnOnce(&mut OverlaySequencer<ShowAction>, &mut TimerArena) -> CloseOutcome<ShowAction>,
    ) -> CloseOutcome<ShowAction> {
        let overlay = match id {
            ALERT => Some(&mut self.alert),
            PRODUCT => Some(&mut self.product),
            PRODUCT_CONSOLE => Some(&mut self.console_overlay),
            GAME_OVER => Some(&mut self.game_over),
            _ => self
                .popups
                .iter_mut()
                .find(|p| p.overlay.id() == id)
                .map(|p| &mut p.overlay),
        };
        match overlay {
            Some(overlay) => f(overlay, &mut self.timers),
            None => CloseOutcome::Ignored,
        }
    }

    fn finish(&mut self, outcome: CloseOutcome<ShowAction>) {
        if let Some(action) = outcome.into_action() {
            self.run_action(action);
        }
    }

    fn run_action(&mut self, action: ShowAction) {
        tracing::debug!(?action, "overlay action");
        match action {
            ShowAction::OpenProduct => {
                self.product.open(&mut self.timers);
            }
            ShowAction::RestoreMainInput => {
                self.router
                    .swap_if(KeyHandler::ProductConsole, Some(KeyHandler::MainConsole));
            }
            ShowAction::DismissPopup(id) => {
                self.popups.retain(|p| p.overlay.id() != id);
            }
        }
        self.needs_render = true;
    }

    // === Settings ===

    /// Change how many characters each keypress reveals.
    pub fn set_step_size(&mut self, step: usize) {
        self.main.buffer.set_step_size(step);
        self.needs_render = true;
    }

    pub fn step_up(&mut self) {
        let step = self.main.buffer.step_size();
        // A configured step above the cap is left alone
        if step < MAX_STEP {
            self.set_step_size(step + 1);
        }
    }

    pub fn step_down(&mut self) {
        let step = self.main.buffer.step_size();
        self.set_step_size(step.saturating_sub(1));
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }

    // === Layout ===

    pub fn handle_resize(&mut self, cols: u16, rows: u16) {
        self.viewport = (cols, rows);
        self.needs_render = true;
    }

    /// Record clickable regions from the last frame, bottom-most first.
    pub fn set_hit_regions(&mut self, regions: Vec<(Rect, ClickTarget)>) {
        self.hit_regions = regions;
    }

    /// The topmost clickable region containing the cell.
    pub fn target_at(&self, column: u16, row: u16) -> Option<ClickTarget> {
        self.hit_regions
            .iter()
            .rev()
            .find(|(rect, _)| {
                column >= rect.x
                    && column < rect.x.saturating_add(rect.width)
                    && row >= rect.y
                    && row < rect.y.saturating_add(rect.height)
            })
            .map(|(_, target)| *target)
    }
}

impl std::fmt::Debug for ShowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShowState")
            .field("stage", &self.stage)
            .field("handler", &self.router.current())
            .field("attempts", &self.counter.attempts())
            .field("buy_hacked", &self.buy_hacked)
            .field("popups", &self.popups.len())
            .finish_non_exhaustive()
    }
}
