use std::cmp::Ordering;

use crate::gap::insert_gapped;
use crate::tally::Tally;

sort_impl!("insertion_stable");

/// Sorts the slice with insertion sort.
///
/// This sort is stable (i.e., does not reorder equal elements), in-place and *O*(*n*^2)
/// worst-case, *O*(*n*) on already sorted input.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, &mut T::lt, &());
}

/// Sorts the slice with a comparator function, see [`sort`].
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less, &());
}

pub(crate) fn insertion_sort<T, F, Y>(v: &mut [T], is_less: &mut F, tally: &Y)
where
    F: FnMut(&T, &T) -> bool,
    Y: Tally,
{
    let v_base = v.as_mut_ptr();

    // `v[..tail]` is sorted at the start of every iteration.
    for tail in 1..v.len() {
        // SAFETY: 0 < 1 <= tail < len.
        unsafe {
            insert_gapped(v_base, tail, 1, is_less, tally);
        }
    }
}
