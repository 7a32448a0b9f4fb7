// Random battery step source
use crate::application::ports::BatteryStep;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct RandomStep<R = StdRng> {
    rng: R,
}

impl RandomStep<StdRng> {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng)
    }
}

impl<R: Rng + Send> RandomStep<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> BatteryStep for RandomStep<R> {
    fn next_delta(&mut self) -> i8 {
        if self.rng.gen_bool(0.5) { 1 } else { -1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_unit() {
        let mut step = RandomStep::new(None);
        for _ in 0..1000 {
            let delta = step.next_delta();
            assert!(delta == 1 || delta == -1);
        }
    }

    #[test]
    fn test_seeded_steps_repeat() {
        let mut a = RandomStep::new(Some(42));
        let mut b = RandomStep::with_rng(StdRng::seed_from_u64(42));
        let left: Vec<i8> = (0..64).map(|_| a.next_delta()).collect();
        let right: Vec<i8> = (0..64).map(|_| b.next_delta()).collect();
        assert_eq!(left, right);
        // both directions show up
        assert!(left.contains(&1) && left.contains(&-1));
    }
}
