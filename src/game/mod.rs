//! Whack-a-mole game core.
//!
//! [`Game`] owns one session's state (score, countdown, difficulty, round
//! state machine) and drives three narrow collaborators:
//! - [`Stage`]: the fixed set of holes plus the score / countdown / difficulty labels
//! - [`AudioDeck`]: hit, grunt and background song clips
//! - [`Timers`]: one-shot and repeating deferred actions that deliver a
//!   [`GameEvent`] back through [`Game::handle`]
//!
//! Nothing here touches the browser directly, so the whole lifecycle can be
//! exercised natively with scripted collaborators.

use std::fmt;

use log::{debug, error, info};
use rand::Rng;
use rand::rngs::ThreadRng;

use crate::config::{GameConfig, ScoringPolicy};
use crate::error::GameResult;

pub mod clock;
pub mod difficulty;
pub mod rng;
pub mod round;
pub mod score;
pub mod slots;

pub use clock::SessionClock;
pub use difficulty::{Difficulty, set_delay};
pub use rng::{random_integer, random_integer_thread};
pub use round::{RoundDecision, RoundOutcome, RoundState, decide};
pub use score::Scoreboard;
pub use slots::{Slot, SlotSelector};

// --- Collaborator contracts --------------------------------------------------

/// Handle to a scheduled deferred action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Events delivered by [`Timers`]. `session` is the generation that armed them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    RoundElapsed { session: u32, slot: Slot },
    ClockTick { session: u32 },
}

/// Host scheduler. Implementations must not call back into the game
/// synchronously from `set_timeout` / `set_interval`.
pub trait Timers {
    fn set_timeout(&mut self, delay_ms: u32, event: GameEvent) -> TimerId;
    fn set_interval(&mut self, interval_ms: u32, event: GameEvent) -> TimerId;
    /// Cancel a pending action. Clearing a fired or unknown id is a no-op.
    fn clear(&mut self, id: TimerId);
}

/// Presentation surface: the holes and the read-outs around them.
pub trait Stage {
    fn slot_count(&self) -> usize;
    fn toggle_visible(&mut self, slot: Slot);
    fn show_score(&mut self, points: u32);
    fn show_countdown(&mut self, seconds: u32);
    fn show_difficulty(&mut self, difficulty: Difficulty);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Clip {
    Hit,
    Grunt,
    Song,
}

/// Fire-and-forget playback. Only `play` can report a failure.
pub trait AudioDeck {
    fn play(&mut self, clip: Clip) -> GameResult<()>;
    fn pause(&mut self, clip: Clip);
    fn seek_to_start(&mut self, clip: Clip);
    fn set_loop(&mut self, clip: Clip, looping: bool);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Started,
    Stopped,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Started => f.write_str("game started"),
            SessionStatus::Stopped => f.write_str("game stopped"),
        }
    }
}

// --- Session controller ------------------------------------------------------

pub struct Game<S: Stage, A: AudioDeck, T: Timers, R: Rng = ThreadRng> {
    config: GameConfig,
    stage: S,
    audio: A,
    timers: T,
    rng: R,
    difficulty: Difficulty,
    selector: SlotSelector,
    clock: SessionClock,
    score: Scoreboard,
    round: RoundState,
    clock_timer: Option<TimerId>,
    // generation of the current session; events from older ones are stale
    session: u32,
}

impl<S: Stage, A: AudioDeck, T: Timers> Game<S, A, T, ThreadRng> {
    pub fn new(config: GameConfig, stage: S, audio: A, timers: T) -> GameResult<Self> {
        Self::with_rng(config, stage, audio, timers, rand::thread_rng())
    }
}

impl<S: Stage, A: AudioDeck, T: Timers, R: Rng> Game<S, A, T, R> {
    pub fn with_rng(config: GameConfig, stage: S, audio: A, timers: T, rng: R) -> GameResult<Self> {
        config.validate()?;
        let selector = SlotSelector::new(stage.slot_count())?;
        let mut game = Self {
            difficulty: config.difficulty,
            config,
            stage,
            audio,
            timers,
            rng,
            selector,
            clock: SessionClock::default(),
            score: Scoreboard::default(),
            round: RoundState::Idle,
            clock_timer: None,
            session: 0,
        };
        game.stage.show_difficulty(game.difficulty);
        Ok(game)
    }

    // --- accessors ---

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut T {
        &mut self.timers
    }

    pub fn points(&self) -> u32 {
        self.score.points()
    }

    pub fn remaining_time(&self) -> u32 {
        self.clock.remaining()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn round_state(&self) -> RoundState {
        self.round
    }

    pub fn clock_timer(&self) -> Option<TimerId> {
        self.clock_timer
    }

    pub fn session(&self) -> u32 {
        self.session
    }

    pub fn is_running(&self) -> bool {
        self.clock_timer.is_some()
    }

    // --- session lifecycle ---

    pub fn start_game(&mut self) -> SessionStatus {
        if self.is_running() {
            debug!("restarting session {}", self.session);
            self.stop_game();
        }
        self.session = self.session.wrapping_add(1);
        self.round = RoundState::Idle;
        self.selector.reset();
        self.clear_score();
        self.set_duration(self.config.session_seconds);
        self.show_up();
        self.start_timer();
        self.audio.set_loop(Clip::Song, true);
        self.play_clip(Clip::Song);
        info!(
            "session {} started: {}s on {}",
            self.session, self.config.session_seconds, self.difficulty
        );
        SessionStatus::Started
    }

    pub fn stop_game(&mut self) -> SessionStatus {
        self.audio.pause(Clip::Song);
        self.audio.seek_to_start(Clip::Song);
        if let Some(id) = self.clock_timer.take() {
            self.timers.clear(id);
        }
        // A direct stop can land mid-round: drop the pending hide and hide now.
        if let RoundState::Showing { slot, timer } = self.round {
            self.timers.clear(timer);
            self.stage.toggle_visible(slot);
        }
        self.round = RoundState::Stopped;
        info!("session {} stopped with {} points", self.session, self.points());
        SessionStatus::Stopped
    }

    /// Swap in a new configuration. A running session is stopped first.
    pub fn reconfigure(&mut self, config: GameConfig) -> GameResult<()> {
        config.validate()?;
        if self.is_running() {
            self.stop_game();
        }
        let difficulty = config.difficulty;
        self.config = config;
        self.set_difficulty(difficulty);
        Ok(())
    }

    pub fn set_duration(&mut self, seconds: u32) -> u32 {
        let remaining = self.clock.set_duration(seconds);
        self.stage.show_countdown(remaining);
        remaining
    }

    // --- rounds ---

    /// Start a round with the current difficulty's delay in a fresh slot.
    pub fn show_up(&mut self) -> TimerId {
        let delay = self.difficulty.delay_ms(&self.config.delays, &mut self.rng);
        let slot = self.selector.choose(&mut self.rng);
        self.show_and_hide(slot, delay)
    }

    /// Show `slot` now and arm the timer that hides it after `delay_ms`.
    pub fn show_and_hide(&mut self, slot: Slot, delay_ms: u32) -> TimerId {
        self.stage.toggle_visible(slot);
        let timer = self.timers.set_timeout(
            delay_ms,
            GameEvent::RoundElapsed { session: self.session, slot },
        );
        self.round = RoundState::Showing { slot, timer };
        debug!("mole up in slot {} for {} ms", slot.index(), delay_ms);
        timer
    }

    /// Round continuation: another round while time remains, otherwise stop.
    pub fn game_over(&mut self) -> RoundOutcome {
        match decide(self.clock.remaining()) {
            RoundDecision::NextRound => RoundOutcome::Continued(self.show_up()),
            RoundDecision::Stop => {
                self.stop_game();
                RoundOutcome::Stopped
            }
        }
    }

    fn round_elapsed(&mut self, slot: Slot) -> Option<RoundOutcome> {
        match self.round {
            RoundState::Showing { slot: showing, timer } if showing == slot => {
                self.timers.clear(timer);
                self.stage.toggle_visible(slot);
                self.round = RoundState::Hidden { slot };
                Some(self.game_over())
            }
            other => {
                debug!("ignoring round timer for slot {} in {:?}", slot.index(), other);
                None
            }
        }
    }

    // --- session clock ---

    pub fn start_timer(&mut self) -> TimerId {
        if let Some(previous) = self.clock_timer.take() {
            self.timers.clear(previous);
        }
        let id = self.timers.set_interval(
            self.config.tick_interval_ms,
            GameEvent::ClockTick { session: self.session },
        );
        self.clock_timer = Some(id);
        id
    }

    pub fn update_timer(&mut self) -> u32 {
        if self.clock.expired() {
            return 0;
        }
        let remaining = self.clock.tick();
        self.stage.show_countdown(remaining);
        remaining
    }

    // --- scoring ---

    pub fn update_score(&mut self) -> u32 {
        let points = self.score.increment();
        self.stage.show_score(points);
        points
    }

    pub fn clear_score(&mut self) -> u32 {
        let points = self.score.clear();
        self.stage.show_score(points);
        points
    }

    /// Click on the mole in `slot`. Returns the point total.
    pub fn whack(&mut self, slot: Slot) -> u32 {
        debug!("whack on slot {}", slot.index());
        self.play_clip(Clip::Hit);
        self.play_clip(Clip::Grunt);
        let scores = match self.config.scoring {
            ScoringPolicy::Permissive => true,
            ScoringPolicy::RequireVisible => {
                self.is_running() && self.round.visible_slot() == Some(slot)
            }
        };
        if scores {
            self.update_score()
        } else {
            self.points()
        }
    }

    // --- difficulty ---

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.stage.show_difficulty(difficulty);
    }

    /// Advance the difficulty toggle. Applies from the next round.
    pub fn cycle_difficulty(&mut self) -> Difficulty {
        let next = self.difficulty.next();
        self.set_difficulty(next);
        next
    }

    // --- event delivery ---

    /// Deliver a timer event. Returns the round outcome when a round ended.
    pub fn handle(&mut self, event: GameEvent) -> Option<RoundOutcome> {
        match event {
            GameEvent::RoundElapsed { session, slot } if session == self.session => {
                self.round_elapsed(slot)
            }
            GameEvent::ClockTick { session } if session == self.session && self.is_running() => {
                self.update_timer();
                None
            }
            stale => {
                debug!("dropping stale {:?} (current session {})", stale, self.session);
                None
            }
        }
    }

    fn play_clip(&mut self, clip: Clip) {
        if let Err(err) = self.audio.play(clip) {
            error!("{:?}: {}", clip, err);
        }
    }
}
