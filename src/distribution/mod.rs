// Distribution sorts: elements are placed by their value rather than by comparing pairs. Both
// work on integers only and validate their input up front.

pub mod bucket;

pub mod radix;
