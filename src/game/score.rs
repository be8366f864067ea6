/// Point counter for the current session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    points: u32,
}

impl Scoreboard {
    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn increment(&mut self) -> u32 {
        self.points = self.points.saturating_add(1);
        self.points
    }

    pub fn clear(&mut self) -> u32 {
        self.points = 0;
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_from_reset() {
        let mut score = Scoreboard::default();
        for k in 1..=7 {
            assert_eq!(score.increment(), k);
        }
        assert_eq!(score.clear(), 0);
        assert_eq!(score.points(), 0);
    }
}
