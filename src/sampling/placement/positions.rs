use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of candidate coordinates for placement.
///
/// Injected into the sampler so callers can control the sequence of draws.
pub trait PositionSource {
    /// Returns an integer drawn uniformly from `0..=upper`.
    fn draw(&mut self, upper: u32) -> u32;
}

/// [`PositionSource`] backed by any `rand` generator.
pub struct RandomPositions<R: Rng> {
    rng: R,
}

impl RandomPositions<StdRng> {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible placements for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomPositions<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PositionSource for RandomPositions<R> {
    fn draw(&mut self, upper: u32) -> u32 {
        if upper == 0 {
            return 0;
        }
        self.rng.random_range(0..=upper)
    }
}
