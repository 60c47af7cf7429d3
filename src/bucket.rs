//! Bucket selection: a fixed bucket count and the shift-xor key hash.
//!
//! The hash is a deterministic mixing function, not a keyed or
//! collision-resistant one. Every key with the same last byte modulo 8
//! shares a bucket, so chains absorb the collisions.

use crate::error::MapError;

/// Number of chains in every table. Never changes after construction.
pub const BUCKETS: usize = 8;

/// Starting accumulator for [`bucket_index`].
pub const SEED: u32 = 123_456;

/// Hash `key` and reduce it modulo `buckets`.
///
/// Each byte shifts the accumulator left by 3 and is XORed in as an
/// unsigned value. An absent key lands in bucket 0.
pub fn bucket_index(key: Option<&[u8]>, buckets: usize) -> usize {
    let Some(bytes) = key else {
        return 0;
    };
    let hash = bytes
        .iter()
        .fold(SEED, |acc, &b| (acc << 3) ^ u32::from(b));
    hash as usize % buckets
}

/// An in-range bucket index for a table of [`BUCKETS`] chains.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Bucket(usize);

impl Bucket {
    /// Bucket the given key hashes to.
    pub fn of<'k>(key: impl Into<Option<&'k str>>) -> Self {
        let key: Option<&str> = key.into();
        Bucket(bucket_index(key.map(str::as_bytes), BUCKETS))
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// All buckets in ascending order.
    pub fn all() -> impl DoubleEndedIterator<Item = Bucket> + ExactSizeIterator {
        (0..BUCKETS).map(Bucket)
    }
}

impl TryFrom<usize> for Bucket {
    type Error = MapError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index < BUCKETS {
            Ok(Bucket(index))
        } else {
            Err(MapError::BucketOutOfRange {
                index,
                buckets: BUCKETS,
            })
        }
    }
}

impl From<Bucket> for usize {
    fn from(b: Bucket) -> usize {
        b.0
    }
}
