use serde::Serialize;

/// Bucket count used when the caller doesn't pick one.
pub const DEFAULT_BUCKET_COUNT: usize = 10;

/// Bucket count of the bucket sort demonstration.
pub const DEMO_BUCKET_COUNT: usize = 3;

/// Parameters of the strategies that need more than a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortConfig {
    pub bucket_count: usize,
}

impl SortConfig {
    pub fn with_bucket_count(bucket_count: usize) -> Self {
        Self { bucket_count }
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
        }
    }
}
