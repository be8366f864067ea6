// DOM-backed stage: `.hole` elements toggled with the `show` class plus the
// score, countdown and difficulty labels.
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::config::{
    DIFFICULTY_BUTTON_ID, HOLE_SELECTOR, SCORE_ID, SHOW_CLASS, TIMER_DISPLAY_ID,
};
use crate::error::{GameError, GameResult};
use crate::game::{Difficulty, Slot, Stage};

pub struct DomStage {
    holes: Vec<Element>,
    score: Element,
    timer_display: Element,
    difficulty_button: Element,
}

impl DomStage {
    pub fn from_document(doc: &Document) -> GameResult<Self> {
        Ok(Self {
            holes: query_all(doc, HOLE_SELECTOR)?,
            score: by_id(doc, SCORE_ID)?,
            timer_display: by_id(doc, TIMER_DISPLAY_ID)?,
            difficulty_button: by_id(doc, DIFFICULTY_BUTTON_ID)?,
        })
    }
}

impl Stage for DomStage {
    fn slot_count(&self) -> usize {
        self.holes.len()
    }

    fn toggle_visible(&mut self, slot: Slot) {
        let Some(hole) = self.holes.get(slot.index()) else {
            warn!("no hole for slot {}", slot.index());
            return;
        };
        if let Err(err) = hole.class_list().toggle(SHOW_CLASS) {
            warn!("could not toggle hole {}: {:?}", slot.index(), err);
        }
    }

    fn show_score(&mut self, points: u32) {
        self.score.set_text_content(Some(&points.to_string()));
    }

    fn show_countdown(&mut self, seconds: u32) {
        self.timer_display.set_text_content(Some(&seconds.to_string()));
    }

    fn show_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty_button
            .set_text_content(Some(&format!("Difficulty: {}", difficulty)));
    }
}

pub(crate) fn by_id(doc: &Document, id: &str) -> GameResult<Element> {
    doc.get_element_by_id(id)
        .ok_or_else(|| GameError::MissingElement(format!("#{}", id)))
}

pub(crate) fn query_all(doc: &Document, selector: &str) -> GameResult<Vec<Element>> {
    let list = doc
        .query_selector_all(selector)
        .map_err(|_| GameError::MissingElement(selector.to_string()))?;
    let elements: Vec<Element> = (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();
    if elements.is_empty() {
        return Err(GameError::MissingElement(selector.to_string()));
    }
    Ok(elements)
}
