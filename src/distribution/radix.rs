use crate::error::SortError;
use crate::tally::Tally;
use crate::Element;

const RADIX: usize = 10;

/// Sorts the slice of non-negative integers with least significant digit radix sort, base 10.
///
/// Each decimal digit, starting with the ones, gets one stable counting sort pass. The number of
/// passes is the number of digits of the largest value. This sort is stable and allocates one
/// scratch copy of the slice plus a fixed ten slot count array.
///
/// # Errors
///
/// Returns [`SortError::NegativeKey`] for the first negative value, before modifying `v`.
pub fn sort(v: &mut [Element]) -> Result<(), SortError> {
    radix_sort(v, &mut |&value: &Element| value, &())
}

/// Sorts the slice by the non-negative integer key `key` extracts, see [`sort`].
///
/// `key` is called several times per element and must return the same key every time.
pub fn sort_by_key<T, K>(v: &mut [T], mut key: K) -> Result<(), SortError>
where
    T: Clone,
    K: FnMut(&T) -> Element,
{
    radix_sort(v, &mut key, &())
}

pub(crate) fn radix_sort<T, K, Y>(v: &mut [T], key: &mut K, tally: &Y) -> Result<(), SortError>
where
    T: Clone,
    K: FnMut(&T) -> Element,
    Y: Tally,
{
    let mut max = 0;
    for (index, elem) in v.iter().enumerate() {
        let value = key(elem);
        if value < 0 {
            return Err(SortError::NegativeKey { index, value });
        }
        max = max.max(value);
    }

    if v.len() < 2 {
        return Ok(());
    }

    // i64 so that the exponent can step past the largest i32 without overflowing.
    let max = i64::from(max);
    let mut buf = v.to_vec();

    let mut exp: i64 = 1;
    while max / exp > 0 {
        counting_pass(v, &mut buf, exp, key, tally);
        exp *= RADIX as i64;
    }

    Ok(())
}

#[inline]
fn digit(value: Element, exp: i64) -> usize {
    ((i64::from(value) / exp) % RADIX as i64) as usize
}

/// Stable counting sort of `v` on the digit selected by `exp`, using `buf` as output.
fn counting_pass<T, K, Y>(v: &mut [T], buf: &mut [T], exp: i64, key: &mut K, tally: &Y)
where
    T: Clone,
    K: FnMut(&T) -> Element,
    Y: Tally,
{
    let mut counts = [0usize; RADIX];
    for elem in v.iter() {
        counts[digit(key(elem), exp)] += 1;
    }

    // Turn the counts into the end position of each digit's range in the output.
    for d in 1..RADIX {
        counts[d] += counts[d - 1];
    }

    // Filling each range back to front keeps elements with equal digits in their current order.
    for elem in v.iter().rev() {
        let d = digit(key(elem), exp);
        counts[d] -= 1;
        buf[counts[d]] = elem.clone();
    }

    v.clone_from_slice(buf);
    tally.swapped(v.len());
}
