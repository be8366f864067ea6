//! Error type shared by the game core and the browser glue.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("stage has no slots")]
    NoSlots,

    #[error("unknown difficulty '{0}'")]
    UnknownDifficulty(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("configuration could not be parsed: {0}")]
    Config(String),

    #[error("missing page element: {0}")]
    MissingElement(String),

    #[error("audio playback failed: {0}")]
    Audio(String),

    #[error("game is not mounted on this page")]
    NotMounted,
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type GameResult<T> = Result<T, GameError>;
