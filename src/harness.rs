//! Runs registered strategies over an input and checks what comes out.
//!
//! A strategy that returns an unsorted or incomplete result is reported through
//! [`RunResult::sorted`] and [`RunResult::intact`], never by panicking. Such a result always
//! means the strategy is broken, there is no input for which it is a legitimate outcome.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};
use tracing::{debug, error};

use crate::config::SortConfig;
use crate::error::SortError;
use crate::registry::{self, Strategy};
use crate::tally::Probe;
use crate::Element;

/// The outcome of running one strategy over one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunResult {
    pub algorithm: &'static str,
    pub len: usize,
    #[serde(rename = "elapsed_ns", serialize_with = "serialize_nanos")]
    pub elapsed: Duration,
    pub comparisons: u64,
    /// Exchanges, or element moves for the strategies that shift, merge or distribute.
    pub swaps: u64,
    /// The output is non-decreasing.
    pub sorted: bool,
    /// The output holds exactly the input elements.
    pub intact: bool,
}

impl RunResult {
    pub fn passed(&self) -> bool {
        self.sorted && self.intact
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = match (self.sorted, self.intact) {
            (true, true) => "ok",
            (false, _) => "NOT SORTED",
            (true, false) => "ELEMENTS CHANGED",
        };

        write!(
            f,
            "{:<18} len: {:<9} time: {:>12.3?} comparisons: {:<12} swaps: {:<12} {verdict}",
            self.algorithm, self.len, self.elapsed, self.comparisons, self.swaps,
        )
    }
}

fn serialize_nanos<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX))
}

/// Sorts a copy of `input` with `strategy`, measuring and verifying the run.
///
/// # Errors
///
/// Returns the strategy's error if it rejects the input or the config, e.g. negative values for
/// radix sort.
pub fn run(
    strategy: &Strategy,
    input: &[Element],
    config: &SortConfig,
) -> Result<RunResult, SortError> {
    let mut output = input.to_vec();
    let probe = Probe::new();

    let start = Instant::now();
    strategy.sort_probed(&mut output, &probe, config)?;
    let elapsed = start.elapsed();

    let inversion = first_inversion(&output);
    if let Some(index) = inversion {
        error!(
            algorithm = strategy.name,
            len = input.len(),
            index,
            "output is not sorted"
        );
    }

    let intact = is_permutation(input, &output);
    if !intact {
        error!(
            algorithm = strategy.name,
            len = input.len(),
            "output does not hold the input elements"
        );
    }

    let result = RunResult {
        algorithm: strategy.name,
        len: input.len(),
        elapsed,
        comparisons: probe.comparisons(),
        swaps: probe.swaps(),
        sorted: inversion.is_none(),
        intact,
    };
    debug!(
        algorithm = result.algorithm,
        len = result.len,
        comparisons = result.comparisons,
        swaps = result.swaps,
        elapsed = ?result.elapsed,
        "run finished"
    );

    Ok(result)
}

/// [`run`] for every registered strategy, in registry order.
pub fn run_all(
    input: &[Element],
    config: &SortConfig,
) -> Vec<(&'static Strategy, Result<RunResult, SortError>)> {
    registry::strategies()
        .iter()
        .map(|strategy| (strategy, run(strategy, input, config)))
        .collect()
}

/// Returns the index of the first element that is less than its predecessor.
pub fn first_inversion<T: Ord>(v: &[T]) -> Option<usize> {
    v.windows(2).position(|w| w[1] < w[0]).map(|i| i + 1)
}

pub fn is_sorted<T: Ord>(v: &[T]) -> bool {
    first_inversion(v).is_none()
}

fn is_permutation(a: &[Element], b: &[Element]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();

    a == b
}
