//! Classic sorting algorithms behind one contract, plus a harness that runs, counts and verifies
//! them.
//!
//! Comparison strategies live in [`stable`] and [`unstable`], each module exposing `sort` and
//! `sort_by` plus a `SortImpl` implementing [`sort_test_tools::Sort`]. The integer-only
//! distribution strategies live in [`distribution`]. [`registry`] maps names to all of them and
//! [`harness`] drives the registry.

/// Generates `SortImpl`, the [`sort_test_tools::Sort`] implementation forwarding to the
/// surrounding module's `sort` and `sort_by`.
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

mod gap;

pub mod config;
pub mod distribution;
pub mod error;
pub mod harness;
pub mod registry;
pub mod stable;
pub mod tally;
pub mod unstable;

pub use config::SortConfig;
pub use error::SortError;
pub use harness::RunResult;
pub use registry::Strategy;

/// The element type of the distribution strategies, the registry and the harness.
pub type Element = i32;
