use sort_collection::distribution::{bucket, radix};
use sort_collection::SortError;
use sort_test_tools::patterns;

fn std_sorted(v: &[i32]) -> Vec<i32> {
    let mut expected = v.to_vec();
    expected.sort();
    expected
}

#[test]
fn bucket_classic() {
    let mut v = vec![34, 2, 23, 67, 100, 88];
    bucket::sort(&mut v, 3).unwrap();
    assert_eq!(v, [2, 23, 34, 67, 88, 100]);
}

#[test]
fn bucket_zero_count() {
    let mut v = vec![3, 1, 2];
    assert_eq!(
        bucket::sort(&mut v, 0),
        Err(SortError::InvalidBucketCount(0))
    );
    assert_eq!(v, [3, 1, 2]);

    let mut empty: Vec<i32> = Vec::new();
    assert_eq!(
        bucket::sort(&mut empty, 0),
        Err(SortError::InvalidBucketCount(0))
    );
}

#[test]
fn bucket_short() {
    let mut empty: Vec<i32> = Vec::new();
    bucket::sort(&mut empty, 10).unwrap();
    assert!(empty.is_empty());

    let mut single = vec![-7];
    bucket::sort(&mut single, 10).unwrap();
    assert_eq!(single, [-7]);
}

#[test]
fn bucket_single_bucket() {
    let mut v = vec![5, -3, 9, 0, 5, 1];
    bucket::sort(&mut v, 1).unwrap();
    assert_eq!(v, [-3, 0, 1, 5, 5, 9]);
}

#[test]
fn bucket_more_buckets_than_elements() {
    let mut v = vec![8, 3, 5];
    bucket::sort(&mut v, 1_000_000).unwrap();
    assert_eq!(v, [3, 5, 8]);
}

#[test]
fn bucket_all_equal() {
    let mut v = vec![4; 50];
    bucket::sort(&mut v, 7).unwrap();
    assert_eq!(v, vec![4; 50]);
}

#[test]
fn bucket_extremes() {
    let mut v = vec![i32::MAX, 0, i32::MIN, -1, 1, i32::MIN, i32::MAX];
    let expected = std_sorted(&v);
    bucket::sort(&mut v, 4).unwrap();
    assert_eq!(v, expected);
}

#[test]
fn bucket_random() {
    for len in [2, 10, 100, 1_000, 10_000] {
        for bucket_count in [1, 3, 10, 64, len] {
            let mut v = patterns::random(len);
            let expected = std_sorted(&v);
            bucket::sort(&mut v, bucket_count).unwrap();
            assert_eq!(
                v,
                expected,
                "len: {len} buckets: {bucket_count} seed: {}",
                patterns::random_init_seed()
            );
        }
    }
}

#[test]
fn radix_classic() {
    let mut v = vec![170, 45, 75, 90, 802, 24, 2, 66];
    radix::sort(&mut v).unwrap();
    assert_eq!(v, [2, 24, 45, 66, 75, 90, 170, 802]);
}

#[test]
fn radix_negative_key() {
    let mut v = vec![3, 1, -4, 1, -5];
    assert_eq!(
        radix::sort(&mut v),
        Err(SortError::NegativeKey {
            index: 2,
            value: -4
        })
    );
    assert_eq!(v, [3, 1, -4, 1, -5]);

    let mut single = vec![-1];
    assert!(matches!(
        radix::sort(&mut single),
        Err(SortError::NegativeKey { index: 0, .. })
    ));
}

#[test]
fn radix_short() {
    let mut empty: Vec<i32> = Vec::new();
    radix::sort(&mut empty).unwrap();
    assert!(empty.is_empty());

    let mut single = vec![42];
    radix::sort(&mut single).unwrap();
    assert_eq!(single, [42]);
}

#[test]
fn radix_zeros() {
    let mut v = vec![0, 0, 0];
    radix::sort(&mut v).unwrap();
    assert_eq!(v, [0, 0, 0]);
}

#[test]
fn radix_max_value() {
    let mut v = vec![i32::MAX, 0, 1_000_000_000, i32::MAX - 1, 7];
    radix::sort(&mut v).unwrap();
    assert_eq!(v, [0, 7, 1_000_000_000, i32::MAX - 1, i32::MAX]);
}

#[test]
fn radix_random() {
    for len in [2, 10, 100, 1_000, 10_000] {
        let mut v = patterns::random_uniform(len, 0..i32::MAX);
        let expected = std_sorted(&v);
        radix::sort(&mut v).unwrap();
        assert_eq!(v, expected, "len: {len} seed: {}", patterns::random_init_seed());
    }
}

#[test]
fn radix_stable_by_key() {
    let mut v: Vec<(i32, usize)> = [5, 3, 5, 1, 5, 13, 3]
        .into_iter()
        .enumerate()
        .map(|(i, key)| (key, i))
        .collect();

    radix::sort_by_key(&mut v, |&(key, _)| key).unwrap();

    assert_eq!(v, [(1, 3), (3, 1), (3, 6), (5, 0), (5, 2), (5, 4), (13, 5)]);
}

#[test]
fn radix_stable_random_keys() {
    let keys = patterns::random_uniform(5_000, 0..100);
    let mut v: Vec<(i32, usize)> = keys.iter().copied().zip(0..).collect();

    radix::sort_by_key(&mut v, |&(key, _)| key).unwrap();

    // Equal keys keep their original relative order.
    assert!(v.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn radix_accepts_saw_pattern() {
    for len in [2, 100, 10_000] {
        let mut v = patterns::saw_ascending(len, 8);
        assert!(v.iter().all(|&x| x >= 0));

        let expected = std_sorted(&v);
        radix::sort(&mut v).unwrap();
        assert_eq!(v, expected, "len: {len} seed: {}", patterns::random_init_seed());
    }
}
