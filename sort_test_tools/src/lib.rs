use std::cmp::Ordering;

/// Uniform entry point used by the shared test suite and the benchmarks.
///
/// Implementations whose name contains "unstable" are not checked for stability. Allocating sorts
/// implement this by writing their result back into `arr`.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}

pub mod config;
pub mod patterns;
