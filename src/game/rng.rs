// Random integer helpers shared by the difficulty policy and slot selector.
use rand::Rng;

/// Uniformly distributed integer in `[min, max]` (both inclusive).
///
/// Panics when `min > max`, as `Rng::gen_range` does for an empty range.
pub fn random_integer<R: Rng>(rng: &mut R, min: u32, max: u32) -> u32 {
    rng.gen_range(min..=max)
}

/// `random_integer` backed by the thread-local RNG.
pub fn random_integer_thread(min: u32, max: u32) -> u32 {
    random_integer(&mut rand::thread_rng(), min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn stays_in_range_and_hits_both_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let (mut saw_min, mut saw_max) = (false, false);
        for _ in 0..2_000 {
            let v = random_integer(&mut rng, 3, 9);
            assert!((3..=9).contains(&v), "{} out of range", v);
            saw_min |= v == 3;
            saw_max |= v == 9;
        }
        assert!(saw_min && saw_max);
    }

    #[test]
    fn degenerate_range_returns_the_bound() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_integer(&mut rng, 42, 42), 42);
    }

    #[test]
    fn thread_variant_is_in_range() {
        for _ in 0..100 {
            let v = random_integer_thread(0, 8);
            assert!(v <= 8);
        }
    }

    #[test]
    #[should_panic]
    fn inverted_range_panics() {
        let mut rng = StdRng::seed_from_u64(1);
        random_integer(&mut rng, 5, 4);
    }
}
