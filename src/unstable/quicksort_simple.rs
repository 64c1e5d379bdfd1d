//! Quicksort that builds new buckets instead of partitioning in place.
//!
//! The first element is always the pivot, so sorted and reverse sorted inputs take quadratic time.
//! Pending buckets live on an explicit work stack, which keeps those inputs from exhausting the
//! call stack.

use std::cmp::Ordering;

sort_impl!("quicksort_simple_unstable", returns_vec);

/// Returns a sorted copy of `v`, `v` itself is left untouched.
#[inline]
pub fn sort<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    quicksort(v.to_vec(), &mut |a, b| a.lt(b))
}

#[inline]
pub fn sort_by<T, F>(v: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v.to_vec(), &mut |a, b| compare(a, b) == Ordering::Less)
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

enum Work<T> {
    /// A bucket that still has to be sorted.
    Sort(Vec<T>),
    /// A pivot whose bucket to the left has already been emitted.
    Emit(T),
}

fn quicksort<T, F>(v: Vec<T>, is_less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        // These inputs are always sorted.
        return v;
    }

    let len = v.len();
    let mut sorted = Vec::with_capacity(len);

    // Popped in order: less bucket, pivot, greater or equal bucket.
    let mut work = vec![Work::Sort(v)];
    let mut peak_work = work.len();

    while let Some(item) = work.pop() {
        match item {
            Work::Emit(pivot) => sorted.push(pivot),
            Work::Sort(bucket) if bucket.len() < 2 => sorted.extend(bucket),
            Work::Sort(bucket) => {
                let (pivot, less, greater_or_equal) = partition(bucket, is_less);

                work.push(Work::Sort(greater_or_equal));
                work.extend(pivot.map(Work::Emit));
                work.push(Work::Sort(less));

                peak_work = peak_work.max(work.len());
            }
        }
    }

    log::debug!("quicksort_simple len: {len}, peak work stack: {peak_work}");

    sorted
}

/// Splits `bucket` into its first element and the rest, divided into the elements less than that
/// pivot and those greater or equal. Both buckets keep the scan order.
fn partition<T, F>(bucket: Vec<T>, is_less: &mut F) -> (Option<T>, Vec<T>, Vec<T>)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut elems = bucket.into_iter();
    let Some(pivot) = elems.next() else {
        return (None, Vec::new(), Vec::new());
    };

    let (less, greater_or_equal): (Vec<T>, Vec<T>) =
        elems.partition(|elem| is_less(elem, &pivot));

    (Some(pivot), less, greater_or_equal)
}
