//! ChainMap: fixed-bucket separate chaining over an entry arena.

use crate::bucket::{Bucket, BUCKETS};
use crate::error::MapError;
use crate::iter::{Chain, Iter};
use crate::key_buffer::KeyBuffer;
use core::fmt;
use slotmap::{DefaultKey, SlotMap};

/// Stable reference to one entry of a [`ChainMap`].
///
/// Entries are never removed individually, so a handle stays valid for as
/// long as the map that issued it. Resolving a handle against a different
/// map is not detected and may return an unrelated entry or `None`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Handle(DefaultKey);

impl Handle {
    pub(crate) fn new(k: DefaultKey) -> Self {
        Handle(k)
    }
    pub(crate) fn raw_handle(&self) -> DefaultKey {
        self.0
    }

    pub fn key<'a>(&self, map: &'a ChainMap) -> Option<&'a str> {
        map.slots.get(self.0).map(|e| e.key.as_str())
    }

    pub fn value(&self, map: &ChainMap) -> Option<i32> {
        map.slots.get(self.0).map(|e| e.value)
    }

    pub fn value_mut<'a>(&self, map: &'a mut ChainMap) -> Option<&'a mut i32> {
        map.slots.get_mut(self.0).map(|e| &mut e.value)
    }
}

#[derive(Debug)]
pub(crate) struct Entry {
    pub(crate) key: KeyBuffer,
    pub(crate) value: i32,
    pub(crate) prev: Option<DefaultKey>,
    pub(crate) next: Option<DefaultKey>,
}

/// Head and tail of one bucket's chain.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct Ends {
    pub(crate) head: Option<DefaultKey>,
    pub(crate) tail: Option<DefaultKey>,
}

/// Map from string keys to `i32` values with [`BUCKETS`] chains.
///
/// New keys append to the tail of their bucket's chain; updates overwrite
/// the value in place. There is no removal of single entries, so `size`
/// only grows until the whole map is destroyed.
pub struct ChainMap {
    slots: SlotMap<DefaultKey, Entry>,
    chains: [Ends; BUCKETS],
    count: usize,
}

impl ChainMap {
    pub fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
            chains: [Ends::default(); BUCKETS],
            count: 0,
        }
    }

    /// Insert `key` or overwrite its value. Returns the entry's handle.
    ///
    /// `None` is stored as the empty key. On `Err` the map is unchanged.
    pub fn put<'k>(
        &mut self,
        key: impl Into<Option<&'k str>>,
        value: i32,
    ) -> Result<Handle, MapError> {
        let key: Option<&str> = key.into();
        let bucket = Bucket::of(key);
        if let Some(h) = self.find(key.unwrap_or(""), bucket) {
            self.slots[h.raw_handle()].value = value;
            return Ok(h);
        }

        // Key storage is the only fallible allocation; take it before linking.
        let key = KeyBuffer::create_from(key)?;
        let ends = self.chains[bucket.index()];
        let k = self.slots.insert(Entry {
            key,
            value,
            prev: ends.tail,
            next: None,
        });
        match ends.tail {
            Some(tail) => self.slots[tail].next = Some(k),
            None => self.chains[bucket.index()].head = Some(k),
        }
        self.chains[bucket.index()].tail = Some(k);
        self.count += 1;
        debug_assert_eq!(self.count, self.slots.len());
        tracing::trace!(bucket = bucket.index(), count = self.count, "inserted entry");
        Ok(Handle::new(k))
    }

    /// Value stored for `key`, or `default` when it is absent.
    pub fn get<'k>(&self, key: impl Into<Option<&'k str>>, default: i32) -> i32 {
        let key: Option<&str> = key.into();
        self.find(key.unwrap_or(""), Bucket::of(key))
            .and_then(|h| h.value(self))
            .unwrap_or(default)
    }

    /// Scan `bucket`'s chain for an entry whose key equals `key`.
    ///
    /// Takes a precomputed bucket so callers holding one skip rehashing.
    /// Searching a bucket other than `Bucket::of(key)` finds nothing.
    pub fn find(&self, key: &str, bucket: Bucket) -> Option<Handle> {
        self.chain(bucket)
            .find(|&(_, k, _)| k == key)
            .map(|(h, _, _)| h)
    }

    pub fn bucket_of<'k>(&self, key: impl Into<Option<&'k str>>) -> Bucket {
        Bucket::of(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key, Bucket::of(key)).is_some()
    }

    pub fn size(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub const fn buckets(&self) -> usize {
        BUCKETS
    }

    pub fn chain_len(&self, bucket: Bucket) -> usize {
        self.chain(bucket).count()
    }

    /// Entries of one bucket in insertion order; reversible via `prev` links.
    pub fn chain(&self, bucket: Bucket) -> Chain<'_> {
        let ends = self.chains[bucket.index()];
        Chain::new(&self.slots, ends.head, ends.tail)
    }

    /// Cursor over every entry, bucket by bucket, chain order within each.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Write the [`Display`](fmt::Display) dump to stdout.
    pub fn print(&self) {
        print!("{self}");
    }

    /// Release every entry and the map itself.
    pub fn destroy(self) {
        tracing::debug!(entries = self.count, "destroying table");
        drop(self);
    }

    pub(crate) fn head(&self, bucket: usize) -> Option<DefaultKey> {
        self.chains[bucket].head
    }

    pub(crate) fn entry(&self, k: DefaultKey) -> &Entry {
        &self.slots[k]
    }
}

impl Default for ChainMap {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a ChainMap {
    type Item = (Handle, &'a str, i32);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ChainMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hash Map Count: {}", self.count)?;
        writeln!(f, "Buckets: {}", BUCKETS)?;
        for bucket in Bucket::all() {
            for (_, key, value) in self.chain(bucket) {
                writeln!(f, "{key} = {value} [{}]", bucket.index())?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ChainMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(_, k, v)| (k, v)))
            .finish()
    }
}
