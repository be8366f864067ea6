/// Countdown of the seconds left in a session. Only `tick` decreases it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionClock {
    remaining: u32,
}

impl SessionClock {
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn set_duration(&mut self, seconds: u32) -> u32 {
        self.remaining = seconds;
        self.remaining
    }

    /// One second elapsed. Stays at zero once reached.
    pub fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    pub fn expired(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_to_zero_and_stays() {
        let mut clock = SessionClock::default();
        clock.set_duration(5);
        for expected in (0..5).rev() {
            assert_eq!(clock.tick(), expected);
        }
        assert!(clock.expired());
        for _ in 0..3 {
            assert_eq!(clock.tick(), 0);
        }
    }

    #[test]
    fn fresh_clock_is_expired() {
        assert!(SessionClock::default().expired());
    }
}
