use sort_collection::harness::{self, first_inversion, is_sorted};
use sort_collection::registry::{self, Strategy};
use sort_collection::stable::bubble;
use sort_collection::{SortConfig, SortError};
use sort_test_tools::patterns;

#[test]
fn registry_order() {
    let names: Vec<&str> = registry::names().collect();
    assert_eq!(
        names,
        [
            "bubble",
            "insertion",
            "selection",
            "shell",
            "quicksort_hoare",
            "quicksort_hole",
            "quicksort_lomuto",
            "merge",
            "heap",
            "bucket",
            "radix",
        ]
    );
}

#[test]
fn registry_find() {
    let merge = registry::find("merge").unwrap();
    assert_eq!(merge.name, "merge");
    assert!(merge.stable);
    assert!(!merge.in_place);

    assert_eq!(
        registry::find("bogo").unwrap_err(),
        SortError::UnknownStrategy("bogo".into())
    );
}

#[test]
fn registry_demos_sort() {
    let config = SortConfig::with_bucket_count(3);
    for strategy in registry::strategies() {
        let mut v = strategy.demo.to_vec();
        strategy.sort(&mut v, &config).unwrap();

        let mut expected = strategy.demo.to_vec();
        expected.sort();
        assert_eq!(v, expected, "{}", strategy.name);
    }
}

#[test]
fn run_random() {
    let input = patterns::random_uniform(2_000, 0..i32::MAX);
    let config = SortConfig::default();

    for (strategy, result) in harness::run_all(&input, &config) {
        let result = result.unwrap();
        assert_eq!(result.algorithm, strategy.name);
        assert_eq!(result.len, input.len());
        assert!(result.sorted, "{}", strategy.name);
        assert!(result.intact, "{}", strategy.name);
        assert!(result.passed());
    }
}

#[test]
fn run_leaves_input_alone() {
    let input = vec![3, 2, 1];
    let result = harness::run(registry::find("heap").unwrap(), &input, &SortConfig::default());
    assert!(result.unwrap().passed());
    assert_eq!(input, [3, 2, 1]);
}

#[test]
fn run_counts_bubble_on_sorted() {
    let input = patterns::ascending(100);
    let result = harness::run(
        registry::find("bubble").unwrap(),
        &input,
        &SortConfig::default(),
    )
    .unwrap();

    assert_eq!(result.comparisons, 99);
    assert_eq!(result.swaps, 0);
}

#[test]
fn run_counts_bubble_on_descending() {
    let input = vec![4, 3, 2, 1];
    let result = harness::run(
        registry::find("bubble").unwrap(),
        &input,
        &SortConfig::default(),
    )
    .unwrap();

    assert_eq!(result.comparisons, 6);
    assert_eq!(result.swaps, 6);
}

#[test]
fn run_counts_radix_without_comparisons() {
    let input = vec![170, 45, 75, 90, 802, 24, 2, 66];
    let result = harness::run(
        registry::find("radix").unwrap(),
        &input,
        &SortConfig::default(),
    )
    .unwrap();

    assert_eq!(result.comparisons, 0);
    // Three digits, one pass over all elements each.
    assert_eq!(result.swaps, 3 * 8);
    assert!(result.passed());
}

#[test]
fn run_rejected_input() {
    let bucket = registry::find("bucket").unwrap();
    assert_eq!(
        harness::run(bucket, &[2, 1], &SortConfig::with_bucket_count(0)),
        Err(SortError::InvalidBucketCount(0))
    );

    let radix = registry::find("radix").unwrap();
    assert!(matches!(
        harness::run(radix, &[2, -1], &SortConfig::default()),
        Err(SortError::NegativeKey { index: 1, value: -1 })
    ));
}

#[test]
fn run_all_with_negatives() {
    let input = vec![5, -2, 9, 0, -7, 3];

    for (strategy, result) in harness::run_all(&input, &SortConfig::default()) {
        if strategy.name == "radix" {
            assert!(result.is_err());
        } else {
            assert!(result.unwrap().passed(), "{}", strategy.name);
        }
    }
}

#[test]
fn run_flags_unsorted_output() {
    let reverse = Strategy::new("reverse", false, true, false, &[], |v, _probe, _config| {
        v.reverse();
        Ok(())
    });

    let result = harness::run(&reverse, &[1, 2, 3], &SortConfig::default()).unwrap();
    assert!(!result.sorted);
    assert!(result.intact);
    assert!(!result.passed());
    assert!(result.to_string().ends_with("NOT SORTED"));
}

#[test]
fn run_flags_lost_elements() {
    let clobber = Strategy::new("clobber", false, true, false, &[], |v, _probe, _config| {
        v.fill(0);
        Ok(())
    });

    let result = harness::run(&clobber, &[1, 2, 3], &SortConfig::default()).unwrap();
    assert!(result.sorted);
    assert!(!result.intact);
    assert!(!result.passed());
    assert!(result.to_string().ends_with("ELEMENTS CHANGED"));
}

#[test]
fn result_formats() {
    let result = harness::run(
        registry::find("shell").unwrap(),
        &[9, 8, 3, 7, 5, 6, 4, 1],
        &SortConfig::default(),
    )
    .unwrap();

    let line = result.to_string();
    assert!(line.starts_with("shell"));
    assert!(line.ends_with("ok"));

    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(json["algorithm"], "shell");
    assert_eq!(json["len"], 8);
    assert_eq!(json["sorted"], true);
    assert!(json["elapsed_ns"].is_u64());
}

#[test]
fn inversions() {
    assert_eq!(first_inversion::<i32>(&[]), None);
    assert_eq!(first_inversion(&[1]), None);
    assert_eq!(first_inversion(&[1, 1, 2, 3]), None);
    assert_eq!(first_inversion(&[1, 3, 2, 4]), Some(2));
    assert_eq!(first_inversion(&[2, 1]), Some(1));

    assert!(is_sorted(&[-5, 0, 0, 7]));
    assert!(!is_sorted(&[0, -5]));
}

#[test]
fn bubble_passes() {
    assert_eq!(bubble::sort_counting_passes::<i32>(&mut []), 0);
    assert_eq!(bubble::sort_counting_passes(&mut [1]), 0);
    assert_eq!(bubble::sort_counting_passes(&mut [1, 2, 3, 4, 5, 6]), 1);

    let mut v = [6, 5, 4, 3, 2, 1];
    assert_eq!(bubble::sort_counting_passes(&mut v), 5);
    assert_eq!(v, [1, 2, 3, 4, 5, 6]);
}
