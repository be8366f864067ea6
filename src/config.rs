//! Game configuration: timing constants and the tunable `GameConfig`.

use crate::error::{GameError, GameResult};
use crate::game::Difficulty;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Session timing
/// One extra second so the countdown shows 15 playable seconds after the first tick.
pub const SESSION_SECONDS: u32 = 16;
pub const TICK_INTERVAL_MS: u32 = 1000;

// Round delays per difficulty
pub const EASY_DELAY_MS: u32 = 1500;
pub const NORMAL_DELAY_MS: u32 = 1000;
pub const HARD_DELAY_MIN_MS: u32 = 600;
pub const HARD_DELAY_MAX_MS: u32 = 1200;
/// Used when a difficulty label cannot be recognized.
pub const BASELINE_DELAY_MS: u32 = NORMAL_DELAY_MS;

// Page wiring
pub const HOLE_SELECTOR: &str = ".hole";
pub const MOLE_SELECTOR: &str = ".mole";
pub const SHOW_CLASS: &str = "show";
pub const START_BUTTON_ID: &str = "start";
pub const SCORE_ID: &str = "score";
pub const TIMER_DISPLAY_ID: &str = "timerDisplay";
pub const DIFFICULTY_BUTTON_ID: &str = "difficultyButton";

// Audio assets
pub const HIT_CLIP_URL: &str = "../assets/hit.mp3";
pub const GRUNT_CLIP_URL: &str = "../assets/zombie-grunt.mp3";
pub const SONG_CLIP_URL: &str = "../assets/zombie-song.mp3";

/// How long a mole stays up for each difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DelayTable {
    pub easy_ms: u32,
    pub normal_ms: u32,
    pub hard_min_ms: u32,
    pub hard_max_ms: u32,
}

impl Default for DelayTable {
    fn default() -> Self {
        Self {
            easy_ms: EASY_DELAY_MS,
            normal_ms: NORMAL_DELAY_MS,
            hard_min_ms: HARD_DELAY_MIN_MS,
            hard_max_ms: HARD_DELAY_MAX_MS,
        }
    }
}

/// Which clicks earn a point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScoringPolicy {
    /// Any click on any mole scores, showing or not.
    #[default]
    Permissive,
    /// Only a click on the mole currently showing in a running session scores.
    RequireVisible,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub session_seconds: u32,
    pub tick_interval_ms: u32,
    pub delays: DelayTable,
    pub difficulty: Difficulty,
    pub scoring: ScoringPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            session_seconds: SESSION_SECONDS,
            tick_interval_ms: TICK_INTERVAL_MS,
            delays: DelayTable::default(),
            difficulty: Difficulty::Easy,
            scoring: ScoringPolicy::Permissive,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> GameResult<()> {
        if self.session_seconds == 0 {
            return Err(GameError::InvalidConfig(
                "session_seconds must be greater than zero".into(),
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(GameError::InvalidConfig(
                "tick_interval_ms must be greater than zero".into(),
            ));
        }
        if self.delays.hard_min_ms > self.delays.hard_max_ms {
            return Err(GameError::InvalidConfig(format!(
                "hard delay range {}..={} is inverted",
                self.delays.hard_min_ms, self.delays.hard_max_ms
            )));
        }
        Ok(())
    }

    /// Parse a (possibly partial) JSON document; absent fields keep their defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(text: &str) -> GameResult<Self> {
        let config: GameConfig =
            serde_json::from_str(text).map_err(|e| GameError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
