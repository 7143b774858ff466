use std::cmp::Ordering;

use crate::tally::Tally;

sort_impl!("selection_unstable");

/// Sorts the slice with selection sort.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place and performs *n*(*n* - 1)/2
/// comparisons regardless of the input order, but at most *n* - 1 swaps.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, &mut T::lt, &());
}

/// Sorts the slice with a comparator function, see [`sort`].
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut |a, b| compare(a, b) == Ordering::Less, &());
}

pub(crate) fn selection_sort<T, F, Y>(v: &mut [T], is_less: &mut F, tally: &Y)
where
    F: FnMut(&T, &T) -> bool,
    Y: Tally,
{
    let len = v.len();

    // Once `v[..len - 1]` holds the smallest elements in order, the last one is in place too.
    for i in 0..len.saturating_sub(1) {
        let mut min = i;
        for j in (i + 1)..len {
            if is_less(&v[j], &v[min]) {
                min = j;
            }
        }

        if min != i {
            v.swap(i, min);
            tally.swapped(1);
        }
    }
}
