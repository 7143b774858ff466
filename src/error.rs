use thiserror::Error;

use crate::Element;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("bucket count must be positive, got {0}")]
    InvalidBucketCount(usize),
    #[error("radix sort requires non-negative keys, found {value} at index {index}")]
    NegativeKey { index: usize, value: Element },
    #[error("unknown strategy `{0}`")]
    UnknownStrategy(String),
}
