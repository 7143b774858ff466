use std::cmp::Ordering;

use crate::tally::Tally;
use crate::unstable::quicksort::quicksort;

sort_impl!("quicksort_lomuto_unstable");

/// Sorts the slice with quicksort using the single-scan prev/cur partition and the leftmost
/// element as pivot.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place and *O*(*n*^2) worst-case,
/// which sorted and all-equal inputs hit.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort_lomuto(v, &mut T::lt, &());
}

/// Sorts the slice with a comparator function, see [`sort`].
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort_lomuto(v, &mut |a, b| compare(a, b) == Ordering::Less, &());
}

pub(crate) fn quicksort_lomuto<T, F, Y>(v: &mut [T], is_less: &mut F, tally: &Y)
where
    F: FnMut(&T, &T) -> bool,
    Y: Tally,
{
    quicksort(v, partition, is_less, tally);
}

/// Partitions around `v[0]`: less than the pivot to the left, the rest to the right.
///
/// `cur` scans forward once. `v[1..=prev]` holds the elements found to be less than the pivot so
/// far, each hit grows that prefix by swapping the element to its end. Finally the pivot trades
/// places with the last element of the prefix.
fn partition<T, F, Y>(v: &mut [T], is_less: &mut F, tally: &Y) -> usize
where
    F: FnMut(&T, &T) -> bool,
    Y: Tally,
{
    let mut prev = 0;

    for cur in 1..v.len() {
        if is_less(&v[cur], &v[0]) {
            prev += 1;
            if prev != cur {
                v.swap(prev, cur);
                tally.swapped(1);
            }
        }
    }

    if prev != 0 {
        v.swap(0, prev);
        tally.swapped(1);
    }

    prev
}
