//! Pivot index generators for the randomized quicksort.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Picks the pivot position for a partition step.
pub trait PivotSource {
    /// Returns an index in `0..len` of the sub-slice about to be partitioned. `len` is at
    /// least 2.
    fn pivot_index(&mut self, len: usize) -> usize;
}

impl<P: PivotSource + ?Sized> PivotSource for &mut P {
    #[inline]
    fn pivot_index(&mut self, len: usize) -> usize {
        (**self).pivot_index(len)
    }
}

/// Uniform draw over the whole range.
#[derive(Debug, Clone)]
pub struct RandomPivot<R = ThreadRng> {
    rng: R,
}

impl RandomPivot<ThreadRng> {
    pub fn new() -> Self {
        Self::from_rng(rand::thread_rng())
    }
}

impl Default for RandomPivot<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPivot<StdRng> {
    /// Reproducible pivot choices.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomPivot<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PivotSource for RandomPivot<R> {
    #[inline]
    fn pivot_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Draws from `0..len - 1`, never the last position of the range.
///
/// Matches the classic `rand(end - start) + start` formulation, which is handy when comparing
/// partition traces against it.
#[derive(Debug, Clone)]
pub struct LegacyPivot<R = ThreadRng> {
    rng: R,
}

impl LegacyPivot<ThreadRng> {
    pub fn new() -> Self {
        Self::from_rng(rand::thread_rng())
    }
}

impl Default for LegacyPivot<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl LegacyPivot<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> LegacyPivot<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PivotSource for LegacyPivot<R> {
    #[inline]
    fn pivot_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len - 1)
    }
}

/// Replays a fixed list of pivot picks, each reduced modulo the range length.
///
/// Cycles once exhausted. An empty script always picks the first position.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPivot {
    picks: Vec<usize>,
    next: usize,
}

impl ScriptedPivot {
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, next: 0 }
    }

    /// Number of picks handed out so far.
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl PivotSource for ScriptedPivot {
    fn pivot_index(&mut self, len: usize) -> usize {
        if self.picks.is_empty() {
            self.next += 1;
            return 0;
        }

        let pick = self.picks[self.next % self.picks.len()];
        self.next += 1;

        pick % len
    }
}
