use core::mem::ManuallyDrop;
use core::ptr;
use std::cmp::Ordering;

use crate::gap::GapGuard;
use crate::tally::Tally;
use crate::unstable::quicksort::quicksort;

sort_impl!("quicksort_hole_unstable");

/// Sorts the slice with quicksort using the hole-filling partition and the leftmost element as
/// pivot.
///
/// Instead of swapping pairs, every misplaced element is written straight into the hole the
/// previous move left behind, which is one write per move instead of three.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place and *O*(*n*^2) worst-case,
/// which sorted and all-equal inputs hit.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort_hole(v, &mut T::lt, &());
}

/// Sorts the slice with a comparator function, see [`sort`].
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort_hole(v, &mut |a, b| compare(a, b) == Ordering::Less, &());
}

pub(crate) fn quicksort_hole<T, F, Y>(v: &mut [T], is_less: &mut F, tally: &Y)
where
    F: FnMut(&T, &T) -> bool,
    Y: Tally,
{
    quicksort(v, partition, is_less, tally);
}

/// Partitions around `v[0]`: not greater than the pivot to the left, greater to the right.
///
/// The pivot is read out, leaving a hole at the left end. The right scan looks for an element
/// that belongs left and moves it into the hole, which moves the hole to the right end of the
/// unscanned range. The left scan then fills that hole with an element that belongs right, and
/// so on until the scans meet at the hole, which receives the pivot.
fn partition<T, F, Y>(v: &mut [T], is_less: &mut F, tally: &Y) -> usize
where
    F: FnMut(&T, &T) -> bool,
    Y: Tally,
{
    let (mut i, mut j) = (0, v.len() - 1);
    let v_base = v.as_mut_ptr();

    // SAFETY: `i` and `j` stay within `0..len`. The hole is always at `i` during the right scan
    // and at `j` during the left scan, so every element read is initialized and every copy goes
    // into the hole. If `is_less` panics, `hole` writes the pivot back into the current hole and
    // `v` holds every original element exactly once.
    unsafe {
        let pivot = ManuallyDrop::new(v_base.read());
        let mut hole = GapGuard {
            src: &*pivot,
            dst: v_base,
        };

        while i < j {
            while i < j && is_less(&*pivot, &*v_base.add(j)) {
                j -= 1;
            }

            if i < j {
                ptr::copy_nonoverlapping(v_base.add(j), v_base.add(i), 1);
                hole.dst = v_base.add(j);
                tally.swapped(1);
                i += 1;
            }

            while i < j && !is_less(&*pivot, &*v_base.add(i)) {
                i += 1;
            }

            if i < j {
                ptr::copy_nonoverlapping(v_base.add(i), v_base.add(j), 1);
                hole.dst = v_base.add(i);
                tally.swapped(1);
                j -= 1;
            }
        }

        // The scans met at the hole, dropping the guard puts the pivot there.
        drop(hole);
        tally.swapped(1);
    }

    i
}
