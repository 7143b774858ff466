use std::cmp::Ordering;

use crate::tally::Tally;
use crate::unstable::quicksort::quicksort;

sort_impl!("quicksort_hoare_unstable");

/// Sorts the slice with quicksort using Hoare's two-scan partition and the leftmost element as
/// pivot.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place and *O*(*n*^2) worst-case,
/// which sorted and all-equal inputs hit.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort_hoare(v, &mut T::lt, &());
}

/// Sorts the slice with a comparator function, see [`sort`].
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort_hoare(v, &mut |a, b| compare(a, b) == Ordering::Less, &());
}

pub(crate) fn quicksort_hoare<T, F, Y>(v: &mut [T], is_less: &mut F, tally: &Y)
where
    F: FnMut(&T, &T) -> bool,
    Y: Tally,
{
    quicksort(v, partition, is_less, tally);
}

/// Partitions around `v[0]`: not greater than the pivot to the left, greater to the right.
///
/// Two indices move inwards, each skipping elements that already sit on their side. When both
/// stop the pair straddles the split and gets swapped. The right scan runs first, so the meeting
/// point holds an element that is not greater than the pivot and can trade places with it.
fn partition<T, F, Y>(v: &mut [T], is_less: &mut F, tally: &Y) -> usize
where
    F: FnMut(&T, &T) -> bool,
    Y: Tally,
{
    let (mut i, mut j) = (0, v.len() - 1);

    while i < j {
        while i < j && is_less(&v[0], &v[j]) {
            j -= 1;
        }

        while i < j && !is_less(&v[0], &v[i]) {
            i += 1;
        }

        if i < j {
            v.swap(i, j);
            tally.swapped(1);
        }
    }

    if i != 0 {
        v.swap(0, i);
        tally.swapped(1);
    }

    i
}
