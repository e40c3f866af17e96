use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded random source for a single game. The same seed reproduces the same
/// food and wall placements.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_gives_same_sequence() {
        let mut first = SessionRng::new(7);
        let mut second = SessionRng::new(7);
        for _ in 0..20 {
            assert_eq!(first.random_range(0..1000u32), second.random_range(0..1000u32));
        }
    }

    #[test]
    fn test_seed_is_kept() {
        assert_eq!(SessionRng::new(42).seed(), 42);
    }
}
