//! In-place quicksort with a randomly chosen pivot and a two-sided partition.
//!
//! Recursion only descends into the smaller partition, the larger one is handled by the loop, so
//! the stack depth stays within `O(log(n))` even when every pivot choice is bad.

use std::cmp::Ordering;
use std::mem;

use crate::pivot::{PivotSource, RandomPivot};

sort_impl!("quicksort_random_pivot_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_with(v, &mut RandomPivot::new());
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by_with(v, &mut RandomPivot::new(), compare);
}

/// Same as [`sort`], but the pivot positions come from `pivots`.
#[inline]
pub fn sort_with<T, P>(v: &mut [T], pivots: &mut P)
where
    T: Ord,
    P: PivotSource + ?Sized,
{
    unstable_sort(v, pivots, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by_with<T, P, F>(v: &mut [T], pivots: &mut P, mut compare: F)
where
    P: PivotSource + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, pivots, |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Default)]
struct PartitionStats {
    partitions: usize,
    degenerate: usize,
}

#[inline]
fn unstable_sort<T, P, F>(v: &mut [T], pivots: &mut P, mut is_less: F)
where
    P: PivotSource + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut stats = PartitionStats::default();
    quicksort(v, pivots, &mut is_less, &mut stats);

    log::debug!(
        "quicksort len: {len}, partitions: {}, degenerate: {}",
        stats.partitions,
        stats.degenerate
    );
}

fn quicksort<T, P, F>(
    mut v: &mut [T],
    pivots: &mut P,
    is_less: &mut F,
    stats: &mut PartitionStats,
) where
    P: PivotSource + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    while v.len() >= 2 {
        let len = v.len();
        let pivot_pos = partition(v, pivots, is_less);

        stats.partitions += 1;
        if pivot_pos == 0 || pivot_pos == len - 1 {
            stats.degenerate += 1;
        }

        let (left, right) = mem::take(&mut v).split_at_mut(pivot_pos);
        // `right[0]` is the pivot, already in its final place.
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, pivots, is_less, stats);
            v = right;
        } else {
            quicksort(right, pivots, is_less, stats);
            v = left;
        }
    }
}

/// Partitions `v` around a pivot picked by `pivots` and returns the pivot's final position.
///
/// Afterwards everything before that position is `<=` the pivot and everything after it is `>`.
/// Requires `v.len() >= 2`.
fn partition<T, P, F>(v: &mut [T], pivots: &mut P, is_less: &mut F) -> usize
where
    P: PivotSource + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(len >= 2);

    let pivot_pos = pivots.pivot_index(len);
    debug_assert!(pivot_pos < len);

    // Park the pivot at the front for the duration of the scans.
    v.swap(0, pivot_pos);

    let mut left = 1;
    let mut right = len - 1;

    loop {
        // Find the leftmost element greater than the pivot.
        while left <= right && !is_less(&v[0], &v[left]) {
            left += 1;
        }

        // Find the rightmost element not greater than the pivot.
        while left <= right && is_less(&v[0], &v[right]) {
            right -= 1;
        }

        if left >= right {
            break;
        }

        v.swap(left, right);
        left += 1;
        right -= 1;
    }

    // `v[right]` is `<=` the pivot, or the pivot itself when `right == 0`.
    v.swap(0, right);

    right
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pivot::ScriptedPivot;

    fn partition_with(v: &mut [i32], pick: usize) -> usize {
        let mut pivots = ScriptedPivot::new(vec![pick]);
        partition(v, &mut pivots, &mut |a: &i32, b: &i32| a < b)
    }

    fn assert_partitioned(v: &[i32], pivot_pos: usize) {
        let pivot = v[pivot_pos];
        assert!(v[..pivot_pos].iter().all(|x| *x <= pivot), "{v:?} @ {pivot_pos}");
        assert!(v[pivot_pos + 1..].iter().all(|x| *x > pivot), "{v:?} @ {pivot_pos}");
    }

    #[test]
    fn partition_places_pivot() {
        let mut v = [5, 3, 8, 1, 9, 2];
        let pivot_pos = partition_with(&mut v, 0);

        assert_eq!(v[pivot_pos], 5);
        assert_eq!(pivot_pos, 3);
        assert_partitioned(&v, pivot_pos);
    }

    #[test]
    fn partition_every_pivot_choice() {
        let input = [4, 7, 1, 7, 3, 3, 9, 0, 4, 6];

        for pick in 0..input.len() {
            let mut v = input;
            let pivot_pos = partition_with(&mut v, pick);

            assert_eq!(v[pivot_pos], input[pick]);
            assert_partitioned(&v, pivot_pos);

            let mut sorted_v = v;
            sorted_v.sort();
            let mut sorted_input = input;
            sorted_input.sort();
            assert_eq!(sorted_v, sorted_input);
        }
    }

    #[test]
    fn partition_extremes() {
        let mut v = [3, 1, 2, 0];
        assert_eq!(partition_with(&mut v, 3), 0);
        assert_eq!(v[0], 0);

        let mut v = [3, 1, 2, 0];
        assert_eq!(partition_with(&mut v, 0), 3);
        assert_eq!(v[3], 3);

        let mut v = [6, 6, 6, 6];
        assert_eq!(partition_with(&mut v, 1), 3);
    }

    #[test]
    fn partition_two_elements() {
        let mut v = [2, 1];
        let pivot_pos = partition_with(&mut v, 1);
        assert_eq!(v, [1, 2]);
        assert_eq!(pivot_pos, 0);

        let mut v = [2, 1];
        let pivot_pos = partition_with(&mut v, 0);
        assert_eq!(v, [1, 2]);
        assert_eq!(pivot_pos, 1);
    }

    #[test]
    fn first_pivot_on_sorted_input_is_degenerate_but_shallow() {
        // Always picking the first element is the worst case for sorted input, every partition
        // peels off a single element. The loop keeps this from recursing `len` deep.
        let mut v: Vec<i32> = (0..5_000).collect();
        let mut pivots = ScriptedPivot::default();

        sort_with(&mut v, &mut pivots);

        assert!(v.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(pivots.drawn(), 4_999);
    }

    #[test]
    fn seeded_pivots_reproduce_the_same_order() {
        let input: Vec<(i32, usize)> = (0..300).map(|i| ((i * 7919) % 13, i as usize)).collect();

        let run = |seed| {
            let mut v = input.clone();
            sort_by_with(&mut v, &mut RandomPivot::seeded(seed), |a, b| a.0.cmp(&b.0));
            v
        };

        assert_eq!(run(5), run(5));
    }
}
