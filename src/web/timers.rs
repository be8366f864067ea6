// gloo-timers backed scheduler. Dropping a `Timeout` / `Interval` cancels it,
// so `clear` only has to forget the handle.
use std::collections::HashMap;

use gloo_timers::callback::{Interval, Timeout};

use crate::game::{GameEvent, TimerId, Timers};

enum Pending {
    Once { _handle: Timeout },
    Every { _handle: Interval },
}

#[derive(Default)]
pub struct GlooTimers {
    next_id: u64,
    pending: HashMap<TimerId, Pending>,
}

impl GlooTimers {
    fn allocate(&mut self) -> TimerId {
        self.next_id += 1;
        TimerId::new(self.next_id)
    }
}

impl Timers for GlooTimers {
    fn set_timeout(&mut self, delay_ms: u32, event: GameEvent) -> TimerId {
        let id = self.allocate();
        let handle = Timeout::new(delay_ms, move || super::dispatch_later(event));
        self.pending.insert(id, Pending::Once { _handle: handle });
        id
    }

    fn set_interval(&mut self, interval_ms: u32, event: GameEvent) -> TimerId {
        let id = self.allocate();
        let handle = Interval::new(interval_ms, move || super::dispatch_later(event));
        self.pending.insert(id, Pending::Every { _handle: handle });
        id
    }

    fn clear(&mut self, id: TimerId) {
        self.pending.remove(&id);
    }
}
