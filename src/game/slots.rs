//! Slot identifiers and the repeat-avoiding slot selector.

use rand::Rng;

use super::rng::random_integer;
use crate::error::{GameError, GameResult};

/// A fixed position (hole) where a mole may appear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot(usize);

impl Slot {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Picks the slot for each round, never the same one twice in a row when
/// more than one slot exists.
#[derive(Clone, Debug)]
pub struct SlotSelector {
    count: usize,
    last: Option<Slot>,
}

impl SlotSelector {
    pub fn new(count: usize) -> GameResult<Self> {
        if count == 0 {
            return Err(GameError::NoSlots);
        }
        Ok(Self { count, last: None })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn last(&self) -> Option<Slot> {
        self.last
    }

    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn choose<R: Rng>(&mut self, rng: &mut R) -> Slot {
        let index = match self.last {
            // Single slot: nothing to alternate with.
            _ if self.count == 1 => 0,
            None => random_integer(rng, 0, (self.count - 1) as u32) as usize,
            // Draw among the other count-1 slots, stepping over the last one.
            Some(last) => {
                let drawn = random_integer(rng, 0, (self.count - 2) as u32) as usize;
                if drawn >= last.index() { drawn + 1 } else { drawn }
            }
        };
        let slot = Slot(index);
        self.last = Some(slot);
        slot
    }
}
