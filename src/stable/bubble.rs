use std::cmp::Ordering;

use crate::tally::Tally;

sort_impl!("bubble_stable");

/// Sorts the slice with bubble sort.
///
/// This sort is stable (i.e., does not reorder equal elements), in-place and *O*(*n*^2)
/// worst-case. A pass that swaps nothing ends the sort, so already sorted input takes a single
/// pass of *n* - 1 comparisons.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut T::lt, &());
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
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less, &());
}

/// Sorts the slice and returns the number of passes it took.
///
/// Slices shorter than two elements take no pass at all.
pub fn sort_counting_passes<T>(v: &mut [T]) -> usize
where
    T: Ord,
{
    bubble_sort(v, &mut T::lt, &())
}

pub(crate) fn bubble_sort<T, F, Y>(v: &mut [T], is_less: &mut F, tally: &Y) -> usize
where
    F: FnMut(&T, &T) -> bool,
    Y: Tally,
{
    let len = v.len();
    let mut passes = 0;

    // After each pass the greatest element of `v[..=end]` has bubbled up to `end`.
    for end in (1..len).rev() {
        passes += 1;
        let mut swapped = false;

        for i in 0..end {
            // Only strictly greater predecessors move, which keeps the sort stable.
            if is_less(&v[i + 1], &v[i]) {
                v.swap(i, i + 1);
                tally.swapped(1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }

    passes
}
