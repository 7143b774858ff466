use core::mem;
use core::ptr;
use std::cmp::Ordering;

use crate::tally::Tally;

sort_impl!("merge_stable");

/// Sorts the slice with top-down merge sort.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*))
/// worst-case. It allocates one buffer of `len / 2` elements for the whole call, which holds a copy
/// of the left run during each merge.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_sort(v, &mut T::lt, &());
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
    merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less, &());
}

pub(crate) fn merge_sort<T, F, Y>(v: &mut [T], is_less: &mut F, tally: &Y)
where
    F: FnMut(&T, &T) -> bool,
    Y: Tally,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if mem::size_of::<T>() == 0 {
        return;
    }

    let len = v.len();
    if len < 2 {
        return;
    }

    // Length stays 0, `buf` only ever holds bitwise copies that `v` still owns. Splitting at
    // `len / 2` makes the left run the shorter one at every depth, so it always fits.
    let mut buf = Vec::<T>::with_capacity(len / 2);

    recurse(v, buf.as_mut_ptr(), is_less, tally);
}

fn recurse<T, F, Y>(v: &mut [T], buf: *mut T, is_less: &mut F, tally: &Y)
where
    F: FnMut(&T, &T) -> bool,
    Y: Tally,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    recurse(&mut v[..mid], buf, is_less, tally);
    recurse(&mut v[mid..], buf, is_less, tally);

    // SAFETY: 0 < mid <= len - mid, `buf` has room for `len / 2 >= mid` elements and `T` is not
    // zero-sized.
    unsafe {
        merge(v, mid, buf, is_less);
    }
    tally.swapped(len);
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` into `v`.
///
/// The left run is moved out to `buf` and merged back from the front. Ties take the left element,
/// which keeps the sort stable.
///
/// # Safety
///
/// `0 < mid <= v.len() - mid`, `buf` must be valid for writes of `mid` elements and not overlap
/// `v`, and `T` must not be a zero-sized type.
unsafe fn merge<T, F>(v: &mut [T], mid: usize, buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let v_base = v.as_mut_ptr();

    // SAFETY: `out` trails `right` by exactly the number of left elements still in `buf`, so a
    // write through `out` never lands on an unconsumed right element. Whatever is left in `buf`
    // when the loop ends, or when `is_less` panics, is exactly the size of the gap `run` copies
    // it into.
    unsafe {
        ptr::copy_nonoverlapping(v_base, buf, mid);
        let mut run = LeftRun {
            next: buf,
            end: buf.add(mid),
            out: v_base,
        };

        let mut right = v_base.add(mid);
        let right_end = v_base.add(len);

        while run.next < run.end && right < right_end {
            let take_right = is_less(&*right, &*run.next);
            let src = if take_right { right } else { run.next };
            ptr::copy_nonoverlapping(src, run.out, 1);

            run.out = run.out.add(1);
            right = right.add(take_right as usize);
            run.next = run.next.add(!take_right as usize);
        }

        // Remaining right elements are already in place, dropping `run` moves the remaining left
        // ones in front of them.
    }
}

/// The unmerged rest `next..end` of the left run, copied to `out` on drop.
struct LeftRun<T> {
    next: *mut T,
    end: *mut T,
    out: *mut T,
}

impl<T> Drop for LeftRun<T> {
    fn drop(&mut self) {
        // SAFETY: `next..end` lies within `buf` with `next <= end`, `out` has room for that many
        // elements, see `merge`.
        unsafe {
            let rest = self.end.offset_from(self.next) as usize;
            ptr::copy_nonoverlapping(self.next, self.out, rest);
        }
    }
}
