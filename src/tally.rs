use std::cell::Cell;

/// Receives the element exchanges and moves a strategy performs.
///
/// The unit type is the no-op tally used by the public `sort` functions, every call on it
/// compiles down to nothing. The harness passes a [`Probe`].
pub trait Tally {
    /// `count` elements were exchanged or written into a new position.
    #[inline(always)]
    fn swapped(&self, count: usize) {
        let _ = count;
    }
}

impl Tally for () {}

/// Counts comparisons and swaps for a single harness run.
///
/// Comparisons are counted by the predicate returned from [`Probe::is_less`], swaps through the
/// [`Tally`] impl. Both only need a shared borrow, so a strategy can hold the predicate and the
/// tally at the same time.
#[derive(Debug, Default)]
pub struct Probe {
    comparisons: Cell<u64>,
    swaps: Cell<u64>,
}

impl Probe {
    pub fn new() -> Self {
        Self::default()
    }

    /// The default `<` ordering, counting every call.
    pub fn is_less<T: Ord>(&self) -> impl FnMut(&T, &T) -> bool + '_ {
        move |a, b| {
            self.compared();
            a.lt(b)
        }
    }

    #[inline]
    pub fn compared(&self) {
        self.comparisons.set(self.comparisons.get() + 1);
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons.get()
    }

    pub fn swaps(&self) -> u64 {
        self.swaps.get()
    }
}

impl Tally for Probe {
    #[inline]
    fn swapped(&self, count: usize) {
        self.swaps.set(self.swaps.get() + count as u64);
    }
}
