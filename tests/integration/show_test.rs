//! Whole-show scripts driven through `ShowState` on the virtual clock.

use hacktyper::engine::{InputCode, OverlayPhase};
use hacktyper::show::state::{ClickTarget, KeyHandler, Stage, GAME_OVER, PRODUCT_CONSOLE};
use hacktyper::show::ShowState;
use hacktyper::Config;

use crate::helpers::{ms, new_show, recorded_show};

const SOURCE: &str = "void hack(void) {\n\tpwn();\n}\n";

fn start(config: &Config) -> ShowState {
    let mut show = new_show(config, SOURCE);
    show.advance(ms(0));
    show.advance(config.ready_delay());
    assert_eq!(show.stage(), Stage::Ready);
    show.click(ClickTarget::Start);
    assert_eq!(show.stage(), Stage::Running);
    show
}

fn hack_buy_button(show: &mut ShowState) {
    show.click(ClickTarget::SecretButton);
    show.advance(ms(2000));
    assert!(show.product().is_visible());
    show.click(ClickTarget::BuyButton);
    show.handle_key(InputCode::Confirm);
    show.advance(ms(1000));
    assert!(show.is_buy_hacked());
}

#[test]
fn full_script_from_splash_to_game_over() {
    let config = Config::default();
    let mut show = start(&config);

    // Type a little into the main console
    for c in "abc".chars() {
        show.handle_key(InputCode::Printable(c));
    }
    assert_eq!(show.main_console().buffer.reveal_count(), 6);

    hack_buy_button(&mut show);
    assert_eq!(show.active_handler(), Some(KeyHandler::MainConsole));

    for _ in 0..9 {
        show.click(ClickTarget::BuyButton);
    }
    assert_eq!(show.popups().len(), 9);
    assert!(!show.game_over().is_visible());

    show.click(ClickTarget::BuyButton);
    assert!(show.game_over().is_visible());
    assert_eq!(show.counter().attempts(), 10);
}

#[test]
fn typing_goes_to_exactly_one_console() {
    let config = Config::default();
    let mut show = start(&config);
    show.click(ClickTarget::SecretButton);
    show.advance(ms(2000));
    show.click(ClickTarget::BuyButton);

    show.handle_key(InputCode::Printable('x'));
    show.handle_key(InputCode::Printable('y'));
    assert_eq!(show.product_console().buffer.reveal_count(), 4);
    assert_eq!(show.main_console().buffer.reveal_count(), 0);

    show.handle_key(InputCode::Erase);
    assert_eq!(show.product_console().buffer.reveal_count(), 2);
}

#[test]
fn overlay_console_close_button_restores_input_without_hacking() {
    let config = Config::default();
    let mut show = start(&config);
    show.click(ClickTarget::SecretButton);
    show.advance(ms(2000));
    show.click(ClickTarget::BuyButton);

    show.click(ClickTarget::Close(PRODUCT_CONSOLE));
    assert_eq!(show.console_overlay().phase(), OverlayPhase::Closing);
    show.advance(ms(1000));

    assert!(!show.is_buy_hacked());
    assert_eq!(show.active_handler(), Some(KeyHandler::MainConsole));
}

#[test]
fn custom_threshold_is_honoured() {
    let mut config = Config::default();
    config.game.threshold = 3;
    let mut show = start(&config);
    hack_buy_button(&mut show);

    show.click(ClickTarget::BuyButton);
    show.click(ClickTarget::BuyButton);
    assert!(!show.game_over().is_visible());
    show.click(ClickTarget::BuyButton);
    assert!(show.game_over().is_visible());
    assert_eq!(show.popups().len(), 2);
}

#[test]
fn game_over_survives_escape() {
    let mut config = Config::default();
    config.game.threshold = 1;
    let mut show = start(&config);
    hack_buy_button(&mut show);

    show.click(ClickTarget::BuyButton);
    assert!(show.game_over().is_visible());
    show.close_overlay(GAME_OVER);
    show.close_topmost();
    show.advance(ms(10_000));
    assert!(show.game_over().is_visible());
}

#[test]
fn popups_land_inside_configured_ranges() {
    let config = Config::default();
    let mut show = start(&config);
    show.handle_resize(200, 50);
    hack_buy_button(&mut show);

    for _ in 0..9 {
        show.click(ClickTarget::BuyButton);
    }
    for popup in show.popups() {
        assert!((1..=12).contains(&popup.placement.top));
        assert!((2..=30).contains(&popup.placement.left));
    }
}

#[test]
fn cursor_resumes_after_typing_stops() {
    let config = Config::default();
    let mut show = start(&config);

    show.handle_key(InputCode::Printable('a'));
    show.advance(ms(300));
    show.handle_key(InputCode::Printable('b'));
    show.advance(ms(300));
    assert!(!show.main_console().cursor.is_active());
    show.advance(ms(200));
    assert!(show.main_console().cursor.is_active());
}

#[test]
fn shorter_delays_come_from_config() {
    let mut config = Config::default();
    config.assets.ready_delay_ms = 10;
    config.overlay.alert_auto_close_ms = 100;
    let mut show = start(&config);

    show.click(ClickTarget::SecretButton);
    show.advance(ms(100));
    assert!(!show.alert().is_visible());
    assert!(show.product().is_visible());
}

#[test]
fn every_overlay_plays_its_own_cues() {
    let mut config = Config::default();
    config.game.threshold = 2;
    let (mut show, log) = recorded_show(&config, SOURCE);
    show.advance(ms(0));
    show.advance(config.ready_delay());
    show.click(ClickTarget::Start);
    assert_eq!(*log.borrow(), ["ambient:play"]);

    // Alert auto-closes into the product overlay
    show.click(ClickTarget::SecretButton);
    show.advance(ms(2000));
    assert_eq!(
        log.borrow()[1..],
        [
            "alarm:play",
            "alarm:pause",
            "alarm:seek",
            "robot-transmission:play",
        ]
    );

    log.borrow_mut().clear();
    show.click(ClickTarget::BuyButton);
    assert!(log.borrow().is_empty(), "overlay console opens silently");
    show.handle_key(InputCode::Confirm);
    show.advance(ms(1000));
    assert_eq!(*log.borrow(), ["level-up:play"]);

    log.borrow_mut().clear();
    show.click(ClickTarget::BuyButton);
    show.click(ClickTarget::BuyButton);
    assert!(show.game_over().is_visible());
    assert_eq!(*log.borrow(), ["power-up:play", "alarm:play"]);

    // Esc skips the game-over screen and closes the popup, then the product
    log.borrow_mut().clear();
    show.close_topmost();
    show.advance(ms(1000));
    show.close_topmost();
    assert_eq!(
        *log.borrow(),
        [
            "power-up:pause",
            "power-up:seek",
            "spaceship-interface:play",
            "robot-transmission:pause",
            "robot-transmission:seek",
            "spaceship-interface:play",
        ]
    );
}
