use crate::tally::Tally;

/// Partitions `v` around its first element and returns the index the pivot ends up at. Elements
/// left of that index never compare greater than the pivot, elements right of it never compare
/// less. Only called with `v.len() >= 2`.
pub(crate) type PartitionFn<T, F, Y> = fn(&mut [T], &mut F, &Y) -> usize;

/// Sorts `v` with quicksort, always choosing the leftmost element as pivot.
///
/// The fixed pivot makes sorted, reverse sorted and all-equal input take *O*(*n*^2) time. The
/// call stack stays at *O*(log(*n*)) regardless, by recursing into the shorter side and looping
/// on the longer one.
pub(crate) fn quicksort<T, F, Y>(
    mut v: &mut [T],
    partition: PartitionFn<T, F, Y>,
    is_less: &mut F,
    tally: &Y,
) where
    F: FnMut(&T, &T) -> bool,
    Y: Tally,
{
    loop {
        if v.len() <= 1 {
            return;
        }

        let mid = partition(v, is_less, tally);

        // Split the slice into `left`, `pivot`, and `right`, the pivot is in its final place.
        let (left, right) = v.split_at_mut(mid);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, partition, is_less, tally);
            v = right;
        } else {
            quicksort(right, partition, is_less, tally);
            v = left;
        }
    }
}
