// Unstable comparison sorts: equal elements may be reordered.

pub mod heapsort;

// Quicksort driver shared by the three partition schemes below.
mod quicksort;

// Two inward scans, straddling pairs swapped.
pub mod quicksort_hoare;

// The pivot is lifted out and the hole it leaves wanders between both ends.
pub mod quicksort_hole;

// Single forward scan with a `prev` boundary, also known as the prev/cur pointer scheme.
pub mod quicksort_lomuto;

pub mod selection;

pub mod shell;
