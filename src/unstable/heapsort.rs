use std::cmp::Ordering;

use crate::tally::Tally;

sort_impl!("heapsort_unstable");

/// Sorts `v` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
///
/// This sort is unstable (i.e., may reorder equal elements) and in-place.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    heapsort(v, &mut T::lt, &());
}

/// Sorts the slice with a comparator function, see [`sort`].
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    heapsort(v, &mut |a, b| compare(a, b) == Ordering::Less, &());
}

pub(crate) fn heapsort<T, F, Y>(v: &mut [T], is_less: &mut F, tally: &Y)
where
    F: FnMut(&T, &T) -> bool,
    Y: Tally,
{
    let len = v.len();

    // Build the heap bottom-up, starting at the last parent `len / 2 - 1`.
    for node in (0..len / 2).rev() {
        sift_down(v, node, is_less, tally);
    }

    // Pop maximal elements from the heap.
    for end in (1..len).rev() {
        v.swap(0, end);
        tally.swapped(1);
        sift_down(&mut v[..end], 0, is_less, tally);
    }
}

// This binary heap respects the invariant `parent >= child`. The children of `node` are
// `2 * node + 1` and `2 * node + 2`.
fn sift_down<T, F, Y>(v: &mut [T], mut node: usize, is_less: &mut F, tally: &Y)
where
    F: FnMut(&T, &T) -> bool,
    Y: Tally,
{
    let len = v.len();

    loop {
        let mut child = 2 * node + 1;
        if child >= len {
            break;
        }

        // Choose the greater child.
        if child + 1 < len && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }

        // Stop if the invariant holds at `node`.
        if !is_less(&v[node], &v[child]) {
            break;
        }

        v.swap(node, child);
        tally.swapped(1);
        node = child;
    }
}
