//! Difficulty levels and the mole display delay each one implies.

use std::fmt;
use std::str::FromStr;

use log::warn;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::rng::random_integer;
use crate::config::{BASELINE_DELAY_MS, DelayTable};
use crate::error::GameError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    #[default]
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    /// Next setting of the difficulty toggle (easy -> normal -> hard -> easy).
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    /// Milliseconds a mole stays up. Hard re-samples on every call.
    pub fn delay_ms<R: Rng>(self, table: &DelayTable, rng: &mut R) -> u32 {
        match self {
            Difficulty::Easy => table.easy_ms,
            Difficulty::Normal => table.normal_ms,
            Difficulty::Hard => random_integer(rng, table.hard_min_ms, table.hard_max_ms),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GameError::UnknownDifficulty(s.to_string()))
    }
}

/// Delay for a textual difficulty label. Unknown labels fall back to the baseline delay.
pub fn set_delay<R: Rng>(label: &str, table: &DelayTable, rng: &mut R) -> u32 {
    match label.parse::<Difficulty>() {
        Ok(difficulty) => difficulty.delay_ms(table, rng),
        Err(err) => {
            warn!("{}; using baseline delay of {} ms", err, BASELINE_DELAY_MS);
            BASELINE_DELAY_MS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn fixed_delays() {
        let mut rng = StdRng::seed_from_u64(0);
        let table = DelayTable::default();
        assert_eq!(set_delay("easy", &table, &mut rng), 1500);
        assert_eq!(set_delay("normal", &table, &mut rng), 1000);
    }

    #[test]
    fn hard_delay_is_resampled_within_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let table = DelayTable::default();
        let samples: Vec<u32> = (0..500).map(|_| set_delay("hard", &table, &mut rng)).collect();
        assert!(samples.iter().all(|d| (600..=1200).contains(d)));
        // re-sampled, not a constant
        assert!(samples.iter().any(|d| *d != samples[0]));
    }

    #[test]
    fn unknown_label_falls_back_to_baseline() {
        let mut rng = StdRng::seed_from_u64(0);
        let table = DelayTable::default();
        assert_eq!(set_delay("nightmare", &table, &mut rng), BASELINE_DELAY_MS);
        assert_eq!(set_delay("", &table, &mut rng), BASELINE_DELAY_MS);
    }

    #[test]
    fn parse_is_case_insensitive_and_trimmed() {
        assert_eq!(" Hard ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "extreme".parse::<Difficulty>(),
            Err(GameError::UnknownDifficulty("extreme".into()))
        );
    }

    #[test]
    fn toggle_cycles_through_all_levels() {
        let mut d = Difficulty::Easy;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(d);
            d = d.next();
        }
        assert_eq!(seen, Difficulty::ALL);
        assert_eq!(d, Difficulty::Easy);
        assert_eq!(Difficulty::Normal.to_string(), "normal");
    }
}
