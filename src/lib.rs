//! chain-map: a small, single-threaded map from string keys to `i32`
//! values built on separate chaining over a fixed number of buckets.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a minimal embeddable key-value store for small in-memory
//!   workloads, with chain structure that can be inspected directly.
//! - Layers:
//!   - `bucket`: the shift-xor key hash and a `Bucket` index type that is
//!     always in range.
//!   - `KeyBuffer`: map-owned key storage that grows in fixed steps and
//!     reports allocation failure instead of aborting.
//!   - `ChainMap`: one head/tail pair per bucket, entries linked
//!     `prev`/`next` in insertion order, all stored in a slot arena.
//!   - `Iter`/`Chain`: borrowing cursors over the whole map or one bucket.
//!
//! Constraints
//! - `BUCKETS` is fixed at 8; there is no rehashing.
//! - Keys are unique by full byte equality. Inserting an existing key
//!   overwrites its value in place and keeps its chain position.
//! - `size()` equals the number of distinct keys ever inserted and the
//!   sum of all chain lengths.
//! - Chain links are arena keys, not pointers, so no link can dangle.
//!
//! Ownership
//! - The map owns every entry and key. Cursors borrow the map, so they
//!   cannot outlive `destroy` and the map cannot change under them.
//! - Mutation requires `&mut ChainMap`; sharing across threads needs
//!   external synchronization.
//!
//! Failure
//! - Only key storage is reserved fallibly. A failed `put` returns
//!   `MapError::AllocFailed` and leaves the map as it was.
//!
//! Notes and non-goals
//! - No removal of single entries, no resizing.
//! - The hash is not keyed and is unsuitable for adversarial input.

mod bucket;
mod chain_map;
#[cfg(test)]
mod chain_map_proptest;
mod error;
mod iter;
mod key_buffer;

// Public surface
pub use bucket::{bucket_index, Bucket, BUCKETS, SEED};
pub use chain_map::{ChainMap, Handle};
pub use error::MapError;
pub use iter::{Chain, Iter};
pub use key_buffer::{KeyBuffer, GROWTH_STEP, INITIAL_CAPACITY};
