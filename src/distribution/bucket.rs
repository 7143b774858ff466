use crate::error::SortError;
use crate::stable::insertion::insertion_sort;
use crate::tally::Tally;
use crate::Element;

/// Sorts the slice with bucket sort over `bucket_count` equal-width value ranges.
///
/// The value range `min..=max` of the input is split into buckets of width
/// `(max - min) / bucket_count + 1`. Every element goes into the bucket covering its value, each
/// bucket is sorted with insertion sort, and the buckets are written back in order. This sort is
/// stable and allocates *O*(*n*) scratch space.
///
/// # Errors
///
/// Returns [`SortError::InvalidBucketCount`] if `bucket_count` is zero, regardless of the input.
pub fn sort(v: &mut [Element], bucket_count: usize) -> Result<(), SortError> {
    bucket_sort(v, bucket_count, &mut Element::lt, &())
}

pub(crate) fn bucket_sort<F, Y>(
    v: &mut [Element],
    bucket_count: usize,
    is_less: &mut F,
    tally: &Y,
) -> Result<(), SortError>
where
    F: FnMut(&Element, &Element) -> bool,
    Y: Tally,
{
    if bucket_count == 0 {
        return Err(SortError::InvalidBucketCount(bucket_count));
    }

    let Some((min, max)) = min_max(v) else {
        return Ok(());
    };

    // At most `len` buckets can be non-empty. Fewer, wider buckets keep the same order between
    // buckets and bound the allocation by the input instead of the caller's count.
    let bucket_count = bucket_count.min(v.len());

    // i64 so that `max - min` can't overflow for any pair of i32.
    let min = i64::from(min);
    let width = (i64::from(max) - min) / bucket_count as i64 + 1;

    let mut buckets: Vec<Vec<Element>> = vec![Vec::new(); bucket_count];
    for &value in v.iter() {
        let index = ((i64::from(value) - min) / width) as usize;
        buckets[index.min(bucket_count - 1)].push(value);
    }

    let mut out = 0;
    for mut bucket in buckets {
        insertion_sort(&mut bucket, is_less, tally);

        v[out..out + bucket.len()].copy_from_slice(&bucket);
        tally.swapped(bucket.len());
        out += bucket.len();
    }

    Ok(())
}

fn min_max(v: &[Element]) -> Option<(Element, Element)> {
    let (&first, rest) = v.split_first()?;

    Some(
        rest.iter()
            .fold((first, first), |(min, max), &x| (min.min(x), max.max(x))),
    )
}
