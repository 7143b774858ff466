use core::mem::ManuallyDrop;
use core::ptr;

use crate::tally::Tally;

/// When dropped, copies from `src` into `dst`.
///
/// Strategies that lift an element out of the slice (insertion, shell, the hole partition) keep
/// one of these alive for as long as the slice has a gap. If the comparator panics the lifted
/// element is written back into the gap, so the slice still holds every element exactly once.
pub(crate) struct GapGuard<T> {
    pub(crate) src: *const T,
    pub(crate) dst: *mut T,
}

impl<T> Drop for GapGuard<T> {
    fn drop(&mut self) {
        // SAFETY: `src` points to the lifted element which is never dropped on its own, `dst` is
        // the in-bounds gap it was moved out of or a gap created later.
        unsafe {
            ptr::copy_nonoverlapping(self.src, self.dst, 1);
        }
    }
}

/// Inserts `v[tail]` into the chain `.., tail - 2 * gap, tail - gap`, which is already sorted.
///
/// Only strictly greater chain members move up, so with `gap == 1` this is a stable insertion
/// step.
///
/// # Safety
///
/// `v_base` must be valid for reads and writes of `tail + 1` initialized elements and
/// `0 < gap <= tail`.
pub(crate) unsafe fn insert_gapped<T, F, Y>(
    v_base: *mut T,
    tail: usize,
    gap: usize,
    is_less: &mut F,
    tally: &Y,
) where
    F: FnMut(&T, &T) -> bool,
    Y: Tally,
{
    // SAFETY: every index visited is in `0..=tail`. The lifted element is read once and from
    // then on only reachable through `tmp`, the guard puts it into the current gap when the
    // insertion point is found or `is_less` panics.
    unsafe {
        let mut sift = tail - gap;
        if !is_less(&*v_base.add(tail), &*v_base.add(sift)) {
            return;
        }

        let tmp = ManuallyDrop::new(v_base.add(tail).read());
        let mut gap_guard = GapGuard {
            src: &*tmp,
            dst: v_base.add(tail),
        };

        loop {
            ptr::copy_nonoverlapping(v_base.add(sift), gap_guard.dst, 1);
            gap_guard.dst = v_base.add(sift);
            tally.swapped(1);

            if sift < gap {
                break;
            }

            sift -= gap;
            if !is_less(&*tmp, &*v_base.add(sift)) {
                break;
            }
        }
    }
}
