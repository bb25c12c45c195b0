use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// ## Source of `RANDOM` draws
///
/// Wraps any `rand` generator so tests can seed or replace it.

pub struct Dice {
    rng: Box<dyn RngCore>,
}

impl std::fmt::Debug for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Dice")
    }
}

impl Default for Dice {
    fn default() -> Self {
        Dice::from_entropy()
    }
}

impl Dice {
    pub fn from_entropy() -> Dice {
        Dice::from_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Dice {
        Dice::from_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_rng<R: RngCore + 'static>(rng: R) -> Dice {
        Dice { rng: Box::new(rng) }
    }

    /// Uniform over `[0, bound)`.
    pub fn int(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }

    /// Uniform over `[0, bound]`, drawn as a whole step then scaled back.
    pub fn extent(&mut self, bound: u32) -> f64 {
        if bound == 0 {
            return 0.0;
        }
        let step = self.rng.gen_range(0..=bound);
        let fraction = step as f64 / bound as f64;
        fraction * bound as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_bounds() {
        let mut dice = Dice::seeded(7);
        for _ in 0..1000 {
            assert!(dice.int(256) < 256);
            let e = dice.extent(500);
            assert!(e >= 0.0 && e <= 500.0);
            assert_eq!(e.fract(), 0.0);
        }
    }

    #[test]
    fn test_seeded_is_repeatable() {
        let mut a = Dice::seeded(99);
        let mut b = Dice::seeded(99);
        for _ in 0..20 {
            assert_eq!(a.int(3), b.int(3));
            assert_eq!(a.extent(800), b.extent(800));
        }
    }

    #[test]
    fn test_injected_rng() {
        let mut dice = Dice::from_rng(StepRng::new(0, 0));
        assert_eq!(dice.int(10), 0);
        assert_eq!(dice.extent(600), 0.0);
        assert_eq!(dice.int(0), 0);
    }
}
