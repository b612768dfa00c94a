//! Candidate pair sampling for comparison rounds.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws the two candidate indices for one comparison round.
///
/// Implementations must return indices in `[0, population_size)` and may
/// assume `population_size >= 1`.
pub trait Sampler: Send {
    fn sample(&mut self, population_size: usize) -> (usize, usize);
}

/// Two independent uniform draws. The pair may collide, so the same pet can
/// appear on both sides of a round.
pub struct UniformSampler<R = StdRng> {
    rng: R,
}

impl UniformSampler<StdRng> {
    pub fn new() -> Self {
        UniformSampler {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for UniformSampler<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> UniformSampler<R> {
    /// Build from a caller-supplied RNG (seedable for deterministic tests).
    pub fn from_rng(rng: R) -> Self {
        UniformSampler { rng }
    }
}

impl<R: Rng + Send> Sampler for UniformSampler<R> {
    fn sample(&mut self, population_size: usize) -> (usize, usize) {
        (
            self.rng.random_range(0..population_size),
            self.rng.random_range(0..population_size),
        )
    }
}

/// Uniform draws without replacement: the pair is distinct whenever the
/// population holds at least two candidates. For a population of one the
/// only possible pair is `(0, 0)`.
pub struct DistinctSampler<R = StdRng> {
    rng: R,
}

impl DistinctSampler<StdRng> {
    pub fn new() -> Self {
        DistinctSampler {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for DistinctSampler<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> DistinctSampler<R> {
    /// Build from a caller-supplied RNG (seedable for deterministic tests).
    pub fn from_rng(rng: R) -> Self {
        DistinctSampler { rng }
    }
}

impl<R: Rng + Send> Sampler for DistinctSampler<R> {
    fn sample(&mut self, population_size: usize) -> (usize, usize) {
        let first = self.rng.random_range(0..population_size);
        if population_size < 2 {
            return (first, first);
        }
        loop {
            let second = self.rng.random_range(0..population_size);
            if second != first {
                return (first, second);
            }
        }
    }
}
