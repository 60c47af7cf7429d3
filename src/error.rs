use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("could not allocate {requested} bytes of key storage")]
    AllocFailed { requested: usize },
    #[error("bucket index {index} out of range (table has {buckets} buckets)")]
    BucketOutOfRange { index: usize, buckets: usize },
}
