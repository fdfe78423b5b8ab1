//! Deterministic per-trial and root RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each trial gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (trial_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive trial indices uniformly across the seed space.
//! This means:
//!
//! - Trials never share RNG state, so the trial loop may run on any number
//!   of Rayon workers and still produce the same dataset.
//! - Appending trials does not disturb the seeds of existing ones.
//! - No global or thread-local randomness is used anywhere.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── TrialRng ──────────────────────────────────────────────────────────────────

/// Per-trial deterministic RNG.
///
/// Created once per trial and moved into the worker that runs it.
pub struct TrialRng(SmallRng);

impl TrialRng {
    /// Seed deterministically from the run's global seed and a trial index.
    pub fn new(global_seed: u64, trial: usize) -> Self {
        let seed = global_seed ^ (trial as u64).wrapping_mul(MIXING_CONSTANT);
        TrialRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform point in the square `[-half_width, half_width]²`.
    pub fn position(&mut self, half_width: f64) -> (f64, f64) {
        let x = self.gen_range(-half_width..=half_width);
        let y = self.gen_range(-half_width..=half_width);
        (x, y)
    }

    /// Uniform index in `0..len`.  Returns `None` if `len == 0`.
    #[inline]
    pub fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.gen_range(0..len))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Root RNG for one-off draws outside the trial loop (e.g. shuffling trial
/// order for a train/validation split).
///
/// Used only in single-threaded contexts.  Parallel work should use
/// [`TrialRng`].
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
