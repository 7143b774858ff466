//! Shared tooling for the sort collection: the `Sort` trait every comparison strategy exposes,
//! seedable input patterns and the generic test suite instantiated per strategy.

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;

#[doc(hidden)]
#[macro_export]
macro_rules! instantiate_sort_test_inner {
    ($sort_impl:ty, $max_len:expr, $($test_fn:ident),* $(,)?) => {
        $(
            #[test]
            fn $test_fn() {
                $crate::tests::$test_fn::<$sort_impl>($max_len);
            }
        )*
    };
}

/// Generates one `#[test]` per generic test for `$sort_impl`.
///
/// Quadratic strategies pass `max_len = N` to skip the lengths they can't sort in reasonable time.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests!($sort_impl, max_len = usize::MAX);
    };
    ($sort_impl:ty, max_len = $max_len:expr) => {
        $crate::instantiate_sort_test_inner!(
            $sort_impl,
            $max_len,
            basic,
            classic_inputs,
            random,
            random_dense,
            random_zipf,
            random_narrow,
            all_equal,
            ascending,
            descending,
            saw_ascending,
            int_edge,
            sort_by_reverse,
            idempotent,
            panic_retain_original_set,
            compare_in_bounds,
        );
    };
}

/// Same as [`instantiate_sort_tests`] plus the tests that only stable sorts pass.
#[macro_export]
macro_rules! instantiate_stable_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_stable_sort_tests!($sort_impl, max_len = usize::MAX);
    };
    ($sort_impl:ty, max_len = $max_len:expr) => {
        $crate::instantiate_sort_tests!($sort_impl, max_len = $max_len);
        $crate::instantiate_sort_test_inner!(
            $sort_impl,
            $max_len,
            stability,
            stability_with_patterns,
        );
    };
}
