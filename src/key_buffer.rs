//! KeyBuffer: map-owned storage for a key's bytes.
//!
//! Capacity grows in fixed steps of [`GROWTH_STEP`] and always leaves at
//! least one spare slot past the stored bytes. Every reservation is
//! fallible, so an allocation failure is reported to the caller instead
//! of aborting.

use crate::error::MapError;
use core::fmt;

/// Capacity of a freshly created buffer.
pub const INITIAL_CAPACITY: usize = 10;

/// Linear growth increment.
pub const GROWTH_STEP: usize = 10;

pub struct KeyBuffer {
    data: String,
    // Logical capacity following the step policy; `data` may hold more.
    capacity: usize,
}

impl KeyBuffer {
    /// Copy `key` into a new buffer. `None` yields an empty buffer.
    pub fn create_from(key: Option<&str>) -> Result<Self, MapError> {
        let mut buf = KeyBuffer {
            data: String::new(),
            capacity: 0,
        };
        buf.reserve_exact_to(INITIAL_CAPACITY)?;
        if let Some(key) = key {
            buf.grow_to_fit(key.len())?;
            buf.data.push_str(key);
        }
        Ok(buf)
    }

    /// Make room for `additional` more bytes plus the spare slot, growing
    /// in whole steps.
    pub(crate) fn grow_to_fit(&mut self, additional: usize) -> Result<(), MapError> {
        let needed = self
            .data
            .len()
            .checked_add(additional)
            .and_then(|n| n.checked_add(1))
            .ok_or(MapError::AllocFailed {
                requested: usize::MAX,
            })?;
        if needed <= self.capacity {
            return Ok(());
        }
        let steps = (needed - self.capacity).div_ceil(GROWTH_STEP);
        let target = steps
            .checked_mul(GROWTH_STEP)
            .and_then(|n| n.checked_add(self.capacity))
            .ok_or(MapError::AllocFailed { requested: needed })?;
        tracing::trace!(from = self.capacity, to = target, "growing key buffer");
        self.reserve_exact_to(target)
    }

    fn reserve_exact_to(&mut self, target: usize) -> Result<(), MapError> {
        let additional = target - self.data.len();
        if let Err(e) = self.data.try_reserve_exact(additional) {
            tracing::warn!(requested = target, error = %e, "key buffer allocation failed");
            return Err(MapError::AllocFailed { requested: target });
        }
        self.capacity = target;
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl fmt::Debug for KeyBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.data, f)
    }
}

impl fmt::Display for KeyBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}
