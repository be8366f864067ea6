//! Round state machine.
//!
//! A round shows a mole in one slot, waits for its delay, hides it and then
//! asks [`decide`] whether another round follows or the session ends.
//!
//! ```text
//! Idle --show--> Showing --elapsed--> Hidden --decide--> Showing | Stopped
//! ```

use std::fmt;

use super::TimerId;
use super::slots::Slot;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoundState {
    #[default]
    Idle,
    /// A mole is up; `timer` will hide it.
    Showing { slot: Slot, timer: TimerId },
    /// The mole was hidden and the next transition has not run yet.
    Hidden { slot: Slot },
    Stopped,
}

impl RoundState {
    pub fn visible_slot(&self) -> Option<Slot> {
        match self {
            RoundState::Showing { slot, .. } => Some(*slot),
            _ => None,
        }
    }

    pub fn round_timer(&self) -> Option<TimerId> {
        match self {
            RoundState::Showing { timer, .. } => Some(*timer),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundDecision {
    NextRound,
    Stop,
}

/// What follows a hidden mole, given the seconds left in the session.
pub fn decide(remaining_seconds: u32) -> RoundDecision {
    if remaining_seconds > 0 {
        RoundDecision::NextRound
    } else {
        RoundDecision::Stop
    }
}

/// Result of the round continuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// A new round was armed with this timer.
    Continued(TimerId),
    Stopped,
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundOutcome::Continued(timer) => write!(f, "round armed ({})", timer.get()),
            RoundOutcome::Stopped => f.write_str("game stopped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decide_continues_while_time_remains() {
        assert_eq!(decide(3), RoundDecision::NextRound);
        assert_eq!(decide(1), RoundDecision::NextRound);
        assert_eq!(decide(0), RoundDecision::Stop);
    }

    #[test]
    fn only_showing_has_a_visible_slot() {
        let slot = Slot::new(2);
        let showing = RoundState::Showing { slot, timer: TimerId::new(1) };
        assert_eq!(showing.visible_slot(), Some(slot));
        assert_eq!(showing.round_timer(), Some(TimerId::new(1)));
        assert_eq!(RoundState::Hidden { slot }.visible_slot(), None);
        assert_eq!(RoundState::Idle.round_timer(), None);
    }

    #[test]
    fn stopped_outcome_reads_game_stopped() {
        assert_eq!(RoundOutcome::Stopped.to_string(), "game stopped");
    }
}
