//! `HtmlAudioElement` clips. Playback is fire-and-forget: a rejected `play()`
//! promise is logged from a spawned task and never reaches the game.

use log::{error, warn};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use crate::config::{GRUNT_CLIP_URL, HIT_CLIP_URL, SONG_CLIP_URL};
use crate::error::{GameError, GameResult};
use crate::game::{AudioDeck, Clip};

pub struct HtmlAudioDeck {
    hit: HtmlAudioElement,
    grunt: HtmlAudioElement,
    song: HtmlAudioElement,
}

impl HtmlAudioDeck {
    pub fn load() -> GameResult<Self> {
        Ok(Self {
            hit: load_clip(HIT_CLIP_URL)?,
            grunt: load_clip(GRUNT_CLIP_URL)?,
            song: load_clip(SONG_CLIP_URL)?,
        })
    }

    fn element(&self, clip: Clip) -> &HtmlAudioElement {
        match clip {
            Clip::Hit => &self.hit,
            Clip::Grunt => &self.grunt,
            Clip::Song => &self.song,
        }
    }
}

fn load_clip(url: &str) -> GameResult<HtmlAudioElement> {
    HtmlAudioElement::new_with_src(url)
        .map_err(|err| GameError::Audio(format!("cannot load {}: {:?}", url, err)))
}

impl AudioDeck for HtmlAudioDeck {
    fn play(&mut self, clip: Clip) -> GameResult<()> {
        let promise = self
            .element(clip)
            .play()
            .map_err(|err| GameError::Audio(format!("{:?}", err)))?;
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                error!("audio playback failed for {:?}: {:?}", clip, err);
            }
        });
        Ok(())
    }

    fn pause(&mut self, clip: Clip) {
        if let Err(err) = self.element(clip).pause() {
            warn!("could not pause {:?}: {:?}", clip, err);
        }
    }

    fn seek_to_start(&mut self, clip: Clip) {
        self.element(clip).set_current_time(0.0);
    }

    fn set_loop(&mut self, clip: Clip, looping: bool) {
        self.element(clip).set_loop(looping);
    }
}
