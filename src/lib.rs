//! Classic comparison sorts: insertion, selection, merge, and two flavors of quicksort.
//!
//! In-place sorts take `&mut [T]` and return nothing. Allocating sorts take `&[T]`, leave it
//! untouched and return a new `Vec<T>`.

/// Implements `sort_test_tools::Sort` for the `sort` / `sort_by` pair of the calling module.
///
/// The `returns_vec` form is for allocating sorts, their result is moved back into the slice.
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
    ($name:expr, returns_vec) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                let sorted = sort(arr);
                crate::write_back(arr, sorted);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> Ordering,
            {
                let sorted = sort_by(arr, compare);
                crate::write_back(arr, sorted);
            }
        }
    };
}

pub mod pivot;
pub mod stable;
pub mod unstable;

pub use pivot::{LegacyPivot, PivotSource, RandomPivot, ScriptedPivot};

/// Moves the elements of `sorted` into `dst`, dropping the previous contents.
fn write_back<T>(dst: &mut [T], sorted: Vec<T>) {
    debug_assert_eq!(dst.len(), sorted.len());

    for (slot, val) in dst.iter_mut().zip(sorted) {
        *slot = val;
    }
}
