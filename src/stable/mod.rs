// Stable comparison sorts: equal elements keep their relative order.

pub mod bubble;

pub mod insertion;

// Top-down merge sort, the only allocating comparison sort.
pub mod merge;
