use std::cmp::Ordering;

use crate::gap::insert_gapped;
use crate::tally::Tally;

sort_impl!("shell_unstable");

/// Sorts the slice with shell sort, using the halving gap sequence `len / 2, len / 4, .., 1`.
///
/// This sort is unstable (i.e., may reorder equal elements) and in-place. The final pass with gap
/// 1 is a plain insertion sort, so the result is correct for any gap sequence ending in 1, the
/// sequence only affects how much work is left for that pass. With halving gaps the worst case is
/// *O*(*n*^2).
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    shell_sort(v, &mut T::lt, &());
}

/// Sorts the slice with a comparator function, see [`sort`].
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    shell_sort(v, &mut |a, b| compare(a, b) == Ordering::Less, &());
}

pub(crate) fn shell_sort<T, F, Y>(v: &mut [T], is_less: &mut F, tally: &Y)
where
    F: FnMut(&T, &T) -> bool,
    Y: Tally,
{
    let len = v.len();
    let v_base = v.as_mut_ptr();

    let mut gap = len / 2;
    while gap > 0 {
        for tail in gap..len {
            // SAFETY: gap <= tail < len, so every index the chain visits is in-bounds.
            unsafe {
                insert_gapped(v_base, tail, gap, is_less, tally);
            }
        }

        gap /= 2;
    }
}
