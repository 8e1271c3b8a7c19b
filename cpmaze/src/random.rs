use std::collections::VecDeque;

use rand::{thread_rng, Rng as _, SeedableRng as _};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Creates the generator for one run. Without a seed, a fresh one is drawn from the thread RNG.
///
/// Returns the seed too, so a run can be reproduced later.
pub fn seeded(seed: Option<u64>) -> (Random, u64) {
    let seed = seed.unwrap_or_else(|| thread_rng().gen());
    (Random::seed_from_u64(seed), seed)
}

/// Source of uniform integers over small ranges.
pub trait RandomSource {
    /// Uniform integer in `0..bound`. `bound` must not be zero.
    fn below(&mut self, bound: usize) -> usize;
}

impl RandomSource for Random {
    fn below(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }
}

/// Replays a fixed sequence of draws (each reduced modulo the bound), then counts upwards.
///
/// Once the script runs out, consecutive draws cycle through every residue,
/// so rejection sampling over four directions always finishes.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    script: VecDeque<usize>,
    counter: usize,
}

impl ScriptedRandom {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            counter: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&mut self, bound: usize) -> usize {
        match self.script.pop_front() {
            Some(value) => value % bound,
            None => {
                let value = self.counter % bound;
                self.counter = self.counter.wrapping_add(1);
                value
            }
        }
    }
}
