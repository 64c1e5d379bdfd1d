//! Top-down merge sort into a freshly allocated `Vec`.
//!
//! Every element is cloned exactly once on entry, after that the halves are moved, not copied,
//! through the recursion.

use std::cmp::Ordering;

sort_impl!("merge_sort_stable", returns_vec);

/// Returns a sorted copy of `v`, `v` itself is left untouched.
#[inline]
pub fn sort<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    merge_sort(v.to_vec(), &mut |a, b| a.lt(b))
}

#[inline]
pub fn sort_by<T, F>(v: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v.to_vec(), &mut |a, b| compare(a, b) == Ordering::Less)
}

fn merge_sort<T, F>(mut v: Vec<T>, is_less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        // These inputs are always sorted.
        return v;
    }

    let mid = v.len() / 2;
    let right = v.split_off(mid);

    let left = merge_sort(v, is_less);
    let right = merge_sort(right, is_less);

    merge(left, right, is_less)
}

/// Merges two sorted runs. On ties the element of `left` goes first.
fn merge<T, F>(left: Vec<T>, right: Vec<T>, is_less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    if left.is_empty() {
        return right;
    }

    if right.is_empty() {
        return left;
    }

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => is_less(r, l),
            _ => break,
        };

        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }

    // At most one of them still has elements.
    merged.extend(left);
    merged.extend(right);

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_left_on_ties() {
        let left = vec![(1, 'l'), (3, 'l')];
        let right = vec![(1, 'r'), (2, 'r'), (3, 'r')];

        let merged = merge(left, right, &mut |a: &(i32, char), b: &(i32, char)| a.0 < b.0);

        assert_eq!(merged, [(1, 'l'), (1, 'r'), (2, 'r'), (3, 'l'), (3, 'r')]);
    }

    #[test]
    fn merge_appends_remainder() {
        let merged = merge(vec![1, 2, 3], vec![10, 11], &mut |a: &i32, b: &i32| a < b);
        assert_eq!(merged, [1, 2, 3, 10, 11]);

        let merged = merge(vec![7, 8], Vec::new(), &mut |a: &i32, b: &i32| a < b);
        assert_eq!(merged, [7, 8]);
    }

    #[test]
    fn input_is_not_mutated() {
        let input = [5, 3, 8, 1, 9, 2];
        let sorted = sort(&input);

        assert_eq!(sorted, [1, 2, 3, 5, 8, 9]);
        assert_eq!(input, [5, 3, 8, 1, 9, 2]);
    }

    #[test]
    fn tagged_duplicates_stay_in_order() {
        let input = [(2, 'a'), (2, 'b'), (1, 'c'), (1, 'd')];
        let sorted = sort_by(&input, |x, y| x.0.cmp(&y.0));

        assert_eq!(sorted, [(1, 'c'), (1, 'd'), (2, 'a'), (2, 'b')]);
    }
}
