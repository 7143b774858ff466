use sort_test_tools::{instantiate_sort_tests, instantiate_stable_sort_tests};

// Quadratic strategies, and the quicksorts whose fixed leftmost pivot turns sorted and all-equal
// input quadratic, are capped so the suite finishes in reasonable time.

mod bubble {
    use super::*;
    instantiate_stable_sort_tests!(sort_collection::stable::bubble::SortImpl, max_len = 1_000);
}

mod insertion {
    use super::*;
    instantiate_stable_sort_tests!(sort_collection::stable::insertion::SortImpl, max_len = 1_000);
}

mod merge {
    use super::*;
    instantiate_stable_sort_tests!(sort_collection::stable::merge::SortImpl);
}

mod selection {
    use super::*;
    instantiate_sort_tests!(sort_collection::unstable::selection::SortImpl, max_len = 1_000);
}

mod shell {
    use super::*;
    instantiate_sort_tests!(sort_collection::unstable::shell::SortImpl, max_len = 100_000);
}

mod heapsort {
    use super::*;
    instantiate_sort_tests!(sort_collection::unstable::heapsort::SortImpl);
}

mod quicksort_hoare {
    use super::*;
    instantiate_sort_tests!(
        sort_collection::unstable::quicksort_hoare::SortImpl,
        max_len = 10_000
    );
}

mod quicksort_hole {
    use super::*;
    instantiate_sort_tests!(
        sort_collection::unstable::quicksort_hole::SortImpl,
        max_len = 10_000
    );
}

mod quicksort_lomuto {
    use super::*;
    instantiate_sort_tests!(
        sort_collection::unstable::quicksort_lomuto::SortImpl,
        max_len = 10_000
    );
}
