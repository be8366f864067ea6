// Browser tests: mount the game on a generated page and drive it through
// real clicks and real gloo timers.
// Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};
use whack_a_mole::{DelayTable, GameConfig, web};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn build_page() {
    let body = document().body().unwrap();
    let mut html = String::from(
        "<button id='start'>Start</button>\
         <button id='difficultyButton'>Difficulty: easy</button>\
         <span id='score'>0</span><span id='timerDisplay'>0</span>",
    );
    for _ in 0..9 {
        html.push_str("<div class='hole'><div class='mole'></div></div>");
    }
    body.set_inner_html(&html);
}

fn showing_holes() -> Vec<usize> {
    let holes = document().query_selector_all(".hole").unwrap();
    (0..holes.length())
        .filter_map(|i| holes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .enumerate()
        .filter(|(_, el)| el.class_list().contains("show"))
        .map(|(i, _)| i)
        .collect()
}

fn click(selector: &str, index: u32) {
    let el: HtmlElement = document()
        .query_selector_all(selector)
        .unwrap()
        .item(index)
        .unwrap()
        .dyn_into()
        .unwrap();
    el.click();
}

fn text_of(id: &str) -> Option<String> {
    document().get_element_by_id(id).unwrap().text_content()
}

#[wasm_bindgen_test]
fn start_whack_stop() {
    build_page();
    web::mount(GameConfig::default()).unwrap();

    assert_eq!(whack_a_mole::start_game().unwrap(), "game started");
    assert_eq!(showing_holes().len(), 1);
    assert_eq!(whack_a_mole::remaining_time().unwrap(), 16);

    assert_eq!(whack_a_mole::whack(0).unwrap(), 1);
    assert_eq!(text_of("score").as_deref(), Some("1"));

    assert_eq!(whack_a_mole::cycle_difficulty().unwrap(), "normal");
    assert_eq!(whack_a_mole::stop_game().unwrap(), "game stopped");
    assert!(showing_holes().is_empty());
}

#[wasm_bindgen_test]
fn remount_keeps_one_handler_per_click() {
    build_page();
    web::mount(GameConfig::default()).unwrap();
    whack_a_mole::mount_game().unwrap();

    click(".mole", 0);
    assert_eq!(whack_a_mole::points().unwrap(), 1);
    assert_eq!(text_of("score").as_deref(), Some("1"));

    click("#difficultyButton", 0);
    assert_eq!(text_of("difficultyButton").as_deref(), Some("Difficulty: normal"));

    click("#start", 0);
    assert_eq!(showing_holes().len(), 1);
    assert_eq!(whack_a_mole::points().unwrap(), 0);
    whack_a_mole::stop_game().unwrap();
}

#[wasm_bindgen_test]
fn failed_mount_keeps_previous_game() {
    build_page();
    web::mount(GameConfig::default()).unwrap();
    document().get_element_by_id("start").unwrap().remove();

    assert!(web::mount(GameConfig::default()).is_err());
    // The previous game stays mounted and wired.
    click(".mole", 1);
    assert_eq!(whack_a_mole::points().unwrap(), 1);
}

#[wasm_bindgen_test]
async fn rounds_and_countdown_run_on_real_timers() {
    build_page();
    let config = GameConfig {
        session_seconds: 2,
        tick_interval_ms: 300,
        delays: DelayTable { easy_ms: 100, ..DelayTable::default() },
        ..GameConfig::default()
    };
    web::mount(config).unwrap();
    whack_a_mole::start_game().unwrap();
    assert_eq!(text_of("timerDisplay").as_deref(), Some("2"));

    let first = showing_holes();
    assert_eq!(first.len(), 1);

    // First mole hides at 100 ms and the next one is up until 200 ms.
    TimeoutFuture::new(150).await;
    let second = showing_holes();
    assert_eq!(second.len(), 1);
    assert_ne!(first, second);

    // First tick at 300 ms.
    TimeoutFuture::new(250).await;
    assert_eq!(text_of("timerDisplay").as_deref(), Some("1"));

    // Clock reaches zero at 600 ms; the round in display then hides and the session ends.
    TimeoutFuture::new(500).await;
    assert_eq!(text_of("timerDisplay").as_deref(), Some("0"));
    assert_eq!(whack_a_mole::remaining_time().unwrap(), 0);
    assert!(showing_holes().is_empty());

    // Nothing re-arms after the stop.
    TimeoutFuture::new(300).await;
    assert!(showing_holes().is_empty());
}
