//! Browser glue: builds the [`Game`] over the page's holes, audio clips and
//! gloo timers, keeps it in a thread-local cell and wires the click listeners.
//!
//! Expected page structure:
//! - `.hole` elements (one per slot, toggled with the `show` class)
//! - `.mole` elements in the same order (click targets)
//! - `#start`, `#difficultyButton`, `#score`, `#timerDisplay`

use std::cell::RefCell;

use log::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, window};

use crate::config::{DIFFICULTY_BUTTON_ID, GameConfig, MOLE_SELECTOR, START_BUTTON_ID};
use crate::error::{GameError, GameResult};
use crate::game::{Game, GameEvent, Slot, Stage};

mod audio;
mod dom;
mod timers;

pub use audio::HtmlAudioDeck;
pub use dom::DomStage;
pub use timers::GlooTimers;

pub type BrowserGame = Game<DomStage, HtmlAudioDeck, GlooTimers>;

type ClickClosure = Closure<dyn FnMut(web_sys::MouseEvent)>;

/// A click handler attached to a page element, kept so a re-mount can detach it.
struct Listener {
    target: Element,
    closure: ClickClosure,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("click", self.closure.as_ref().unchecked_ref());
    }
}

thread_local! {
    static GAME: RefCell<Option<BrowserGame>> = const { RefCell::new(None) };
    static LISTENERS: RefCell<Vec<Listener>> = const { RefCell::new(Vec::new()) };
}

/// Run `f` against the mounted game.
pub fn with_game<T>(f: impl FnOnce(&mut BrowserGame) -> T) -> GameResult<T> {
    GAME.with(|cell| {
        let mut slot = cell.borrow_mut();
        let game = slot.as_mut().ok_or(GameError::NotMounted)?;
        Ok(f(game))
    })
}

/// Timer callbacks hand their event to a microtask so the game is never
/// borrowed from inside a gloo closure that the game itself may drop.
pub(crate) fn dispatch_later(event: GameEvent) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = with_game(|game| game.handle(event)) {
            debug!("timer event {:?} dropped: {}", event, err);
        }
    });
}

/// Build the game over the current page and wire its click handlers.
/// Mounting again replaces the previous game and its handlers.
pub fn mount(config: GameConfig) -> GameResult<()> {
    let doc = window()
        .and_then(|w| w.document())
        .ok_or_else(|| GameError::MissingElement("document".into()))?;
    // Resolve every element before touching the mounted state.
    let stage = DomStage::from_document(&doc)?;
    let moles = dom::query_all(&doc, MOLE_SELECTOR)?;
    let start = dom::by_id(&doc, START_BUTTON_ID)?;
    let difficulty_button = dom::by_id(&doc, DIFFICULTY_BUTTON_ID)?;
    let game = Game::new(config, stage, HtmlAudioDeck::load()?, GlooTimers::default())?;
    let slots = game.stage().slot_count();

    LISTENERS.with(|cell| cell.borrow_mut().clear());
    let previous = GAME.with(|cell| cell.replace(Some(game)));
    if let Some(mut old) = previous {
        if old.is_running() {
            old.stop_game();
        }
    }

    let listeners = set_event_listeners(moles, start, difficulty_button, slots)?;
    LISTENERS.with(|cell| *cell.borrow_mut() = listeners);
    debug!("mounted with {} holes", slots);
    Ok(())
}

fn set_event_listeners(
    moles: Vec<Element>,
    start: Element,
    difficulty_button: Element,
    slots: usize,
) -> GameResult<Vec<Listener>> {
    let mut listeners = Vec::with_capacity(moles.len() + 2);

    // One whack listener per mole; the mole's position is its slot.
    for (index, mole) in moles.into_iter().enumerate() {
        if index >= slots {
            debug!("mole {} has no matching hole; not wiring it", index);
            continue;
        }
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            let _ = with_game(|game| game.whack(Slot::new(index)));
        }) as Box<dyn FnMut(_)>);
        listeners.push(listen(mole, closure)?);
    }

    let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
        let _ = with_game(|game| game.start_game());
    }) as Box<dyn FnMut(_)>);
    listeners.push(listen(start, closure)?);

    let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
        let _ = with_game(|game| game.cycle_difficulty());
    }) as Box<dyn FnMut(_)>);
    listeners.push(listen(difficulty_button, closure)?);

    Ok(listeners)
}

fn listen(target: Element, closure: ClickClosure) -> GameResult<Listener> {
    target
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(|err| GameError::MissingElement(format!("cannot listen for clicks: {:?}", err)))?;
    Ok(Listener { target, closure })
}
