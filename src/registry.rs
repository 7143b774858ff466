//! Name to strategy mapping over [`Element`] slices.
//!
//! Every algorithm of the collection is registered here once, callers only ever go through
//! [`strategies`] or [`find`], so adding an algorithm means adding a record.

use std::fmt;

use once_cell::sync::Lazy;

use crate::config::SortConfig;
use crate::distribution::{bucket, radix};
use crate::error::SortError;
use crate::stable::{bubble, insertion, merge};
use crate::tally::Probe;
use crate::unstable::{
    heapsort, quicksort_hoare, quicksort_hole, quicksort_lomuto, selection, shell,
};
use crate::Element;

/// The uniform sort contract. Comparisons go through the probe's counting predicate, exchanges
/// through the probe's tally.
pub type RunFn = fn(&mut [Element], &Probe, &SortConfig) -> Result<(), SortError>;

/// A registered sorting algorithm.
pub struct Strategy {
    pub name: &'static str,
    pub stable: bool,
    pub in_place: bool,
    /// *O*(*n*^2) on typical input, not just on adversarial input.
    pub quadratic: bool,
    /// The fixed input the demonstration walks through.
    pub demo: &'static [Element],
    run: RunFn,
}

impl Strategy {
    pub const fn new(
        name: &'static str,
        stable: bool,
        in_place: bool,
        quadratic: bool,
        demo: &'static [Element],
        run: RunFn,
    ) -> Self {
        Self {
            name,
            stable,
            in_place,
            quadratic,
            demo,
            run,
        }
    }

    pub fn sort(&self, v: &mut [Element], config: &SortConfig) -> Result<(), SortError> {
        self.sort_probed(v, &Probe::new(), config)
    }

    pub fn sort_probed(
        &self,
        v: &mut [Element],
        probe: &Probe,
        config: &SortConfig,
    ) -> Result<(), SortError> {
        (self.run)(v, probe, config)
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Strategy")
            .field("name", &self.name)
            .field("stable", &self.stable)
            .field("in_place", &self.in_place)
            .field("quadratic", &self.quadratic)
            .finish_non_exhaustive()
    }
}

const CLASSIC: &[Element] = &[40, 20, 30, 60, 10, 50];
const INSERTION: &[Element] = &[40, 20, 30, 50, 10];
const PREV_CUR: &[Element] = &[30, 40, 60, 10, 20, 50];
const SHELL: &[Element] = &[9, 8, 3, 7, 5, 6, 4, 1];
const MERGE_HEAP: &[Element] = &[12, 11, 13, 5, 6, 7];
const BUCKET: &[Element] = &[34, 2, 23, 67, 100, 88];
const RADIX: &[Element] = &[170, 45, 75, 90, 802, 24, 2, 66];

macro_rules! comparison_strategy {
    (
        $name:literal,
        $sort_fn:path,
        stable: $stable:expr,
        in_place: $in_place:expr,
        quadratic: $quadratic:expr,
        demo: $demo:expr $(,)?
    ) => {
        Strategy::new($name, $stable, $in_place, $quadratic, $demo, |v, probe, _config| {
            $sort_fn(v, &mut probe.is_less::<Element>(), probe);
            Ok(())
        })
    };
}

static STRATEGIES: Lazy<Vec<Strategy>> = Lazy::new(|| {
    vec![
        comparison_strategy!(
            "bubble",
            bubble::bubble_sort,
            stable: true,
            in_place: true,
            quadratic: true,
            demo: CLASSIC,
        ),
        comparison_strategy!(
            "insertion",
            insertion::insertion_sort,
            stable: true,
            in_place: true,
            quadratic: true,
            demo: INSERTION,
        ),
        comparison_strategy!(
            "selection",
            selection::selection_sort,
            stable: false,
            in_place: true,
            quadratic: true,
            demo: CLASSIC,
        ),
        comparison_strategy!(
            "shell",
            shell::shell_sort,
            stable: false,
            in_place: true,
            quadratic: false,
            demo: SHELL,
        ),
        comparison_strategy!(
            "quicksort_hoare",
            quicksort_hoare::quicksort_hoare,
            stable: false,
            in_place: true,
            quadratic: false,
            demo: CLASSIC,
        ),
        comparison_strategy!(
            "quicksort_hole",
            quicksort_hole::quicksort_hole,
            stable: false,
            in_place: true,
            quadratic: false,
            demo: CLASSIC,
        ),
        comparison_strategy!(
            "quicksort_lomuto",
            quicksort_lomuto::quicksort_lomuto,
            stable: false,
            in_place: true,
            quadratic: false,
            demo: PREV_CUR,
        ),
        comparison_strategy!(
            "merge",
            merge::merge_sort,
            stable: true,
            in_place: false,
            quadratic: false,
            demo: MERGE_HEAP,
        ),
        comparison_strategy!(
            "heap",
            heapsort::heapsort,
            stable: false,
            in_place: true,
            quadratic: false,
            demo: MERGE_HEAP,
        ),
        Strategy::new("bucket", true, false, false, BUCKET, |v, probe, config| {
            bucket::bucket_sort(v, config.bucket_count, &mut probe.is_less::<Element>(), probe)
        }),
        Strategy::new("radix", true, false, false, RADIX, |v, probe, _config| {
            radix::radix_sort(v, &mut |&value: &Element| value, probe)
        }),
    ]
});

/// All strategies, in a fixed order.
pub fn strategies() -> &'static [Strategy] {
    &STRATEGIES
}

pub fn names() -> impl Iterator<Item = &'static str> {
    strategies().iter().map(|strategy| strategy.name)
}

pub fn find(name: &str) -> Result<&'static Strategy, SortError> {
    strategies()
        .iter()
        .find(|strategy| strategy.name == name)
        .ok_or_else(|| SortError::UnknownStrategy(name.to_owned()))
}
