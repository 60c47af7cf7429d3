//! Cursors over a [`ChainMap`]: the whole-table [`Iter`] and the
//! single-bucket [`Chain`].

use crate::bucket::{Bucket, BUCKETS};
use crate::chain_map::{ChainMap, Entry, Handle};
use core::iter::FusedIterator;
use slotmap::{DefaultKey, SlotMap};

/// Walks every bucket in ascending order and each chain from head to tail.
///
/// Borrows the map, so it cannot outlive it and the map cannot be mutated
/// while it is alive.
pub struct Iter<'a> {
    map: &'a ChainMap,
    // `BUCKETS` once exhausted.
    bucket: usize,
    current: Option<DefaultKey>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(map: &'a ChainMap) -> Self {
        Self {
            map,
            bucket: 0,
            current: map.head(0),
        }
    }

    /// Bucket the cursor is positioned in, or `None` once exhausted.
    pub fn bucket(&self) -> Option<Bucket> {
        Bucket::try_from(self.bucket).ok()
    }

    /// Discard the cursor. The map is unaffected.
    pub fn release(self) {}
}

impl<'a> Iterator for Iter<'a> {
    type Item = (Handle, &'a str, i32);

    fn next(&mut self) -> Option<Self::Item> {
        while self.current.is_none() {
            if self.bucket + 1 >= BUCKETS {
                self.bucket = BUCKETS;
                return None;
            }
            self.bucket += 1;
            self.current = self.map.head(self.bucket);
        }
        let k = self.current?;
        let map = self.map;
        let entry = map.entry(k);
        self.current = entry.next;
        Some((Handle::new(k), entry.key.as_str(), entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.bucket >= BUCKETS {
            (0, Some(0))
        } else {
            (0, Some(self.map.size()))
        }
    }
}

impl FusedIterator for Iter<'_> {}

/// One bucket's chain, walkable from either end.
pub struct Chain<'a> {
    slots: &'a SlotMap<DefaultKey, Entry>,
    front: Option<DefaultKey>,
    back: Option<DefaultKey>,
}

impl<'a> Chain<'a> {
    pub(crate) fn new(
        slots: &'a SlotMap<DefaultKey, Entry>,
        head: Option<DefaultKey>,
        tail: Option<DefaultKey>,
    ) -> Self {
        Self {
            slots,
            front: head,
            back: tail,
        }
    }

    // Advance one end; when both ends sat on the same entry the walk is done.
    fn advance(&mut self, step: Option<DefaultKey>, forward: bool) {
        if self.front == self.back {
            self.front = None;
            self.back = None;
        } else if forward {
            self.front = step;
        } else {
            self.back = step;
        }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = (Handle, &'a str, i32);

    fn next(&mut self) -> Option<Self::Item> {
        let k = self.front?;
        let slots = self.slots;
        let entry = &slots[k];
        self.advance(entry.next, true);
        Some((Handle::new(k), entry.key.as_str(), entry.value))
    }
}

impl<'a> DoubleEndedIterator for Chain<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let k = self.back?;
        let slots = self.slots;
        let entry = &slots[k];
        self.advance(entry.prev, false);
        Some((Handle::new(k), entry.key.as_str(), entry.value))
    }
}

impl FusedIterator for Chain<'_> {}
