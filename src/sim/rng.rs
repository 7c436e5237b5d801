//! Seeded RNG for coin respawn sampling
//!
//! One `SpawnRng` per episode. It is threaded through every step by the
//! caller and never recreated mid-episode, so the pick sequence is a pure
//! function of (seed, call count).

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

#[derive(Debug, Clone)]
pub struct SpawnRng {
    rng: Pcg32,
    draws: u64,
}

impl SpawnRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            draws: 0,
        }
    }

    /// Number of picks consumed so far
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Pick one candidate uniformly.
    ///
    /// Panics on an empty candidate set.
    pub fn pick(&mut self, candidates: &[usize]) -> usize {
        assert!(
            !candidates.is_empty(),
            "spawn sampling needs at least one candidate"
        );
        let i = self.rng.random_range(0..candidates.len());
        self.draws += 1;
        candidates[i]
    }

    /// Pick uniformly from `0..count`, skipping `excluded`
    pub fn pick_excluding(&mut self, count: usize, excluded: usize) -> usize {
        let candidates: Vec<usize> = (0..count).filter(|&i| i != excluded).collect();
        self.pick(&candidates)
    }
}
