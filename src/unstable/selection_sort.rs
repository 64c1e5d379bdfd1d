//! Selection sort, one swap per position.

use std::cmp::Ordering;

sort_impl!("selection_sort_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // Everything before `i` is sorted and no larger than anything after it.
    for i in 0..len {
        let mut smallest = i;
        for j in (i + 1)..len {
            if is_less(&v[j], &v[smallest]) {
                smallest = j;
            }
        }

        v.swap(i, smallest);
    }
}
