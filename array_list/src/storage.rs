#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};

use tracing::trace;

/// Fixed-size slot array backing an [`ArrayList`](crate::ArrayList).
///
/// - Every slot is either occupied or `None`
/// - `capacity()` is the slot count, never rounded
/// - Growth doubles the slot count, starting from 1
#[derive(Debug, Clone)]
pub struct SlotStorage<T> {
    slots: Box<[Option<T>]>,
}

impl<T> SlotStorage<T> {
    /// Allocates `capacity` empty slots.
    pub fn with_capacity(capacity: usize) -> Self {
        SlotStorage {
            slots: (0..capacity).map(|_| None).collect(),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Moves every slot into a new array of `max(1, capacity * 2)` slots.
    pub fn grow(&mut self) {
        let old = self.slots.len();
        let new = core::cmp::max(1, old.saturating_mul(2));

        let mut grown: Vec<Option<T>> = Vec::with_capacity(new);
        grown.extend(core::mem::take(&mut self.slots).into_vec());
        grown.resize_with(new, || None);
        self.slots = grown.into_boxed_slice();

        trace!(from = old, to = new, "grew array list slots");
    }

    /// Value in slot `index`, `None` if vacant or past capacity.
    #[inline]
    pub fn slot(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    #[inline]
    pub fn slot_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Writes `value` into slot `index`, returning what was there.
    ///
    /// `index` must be below `capacity()`.
    #[inline]
    pub fn put(&mut self, index: usize, value: T) -> Option<T> {
        self.slots[index].replace(value)
    }

    /// Empties slot `index`.
    #[inline]
    pub fn take(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Shifts `[index + 1, end)` down by one so the vacant slot at `index`
    /// ends up at `end - 1`.
    pub fn close_gap(&mut self, index: usize, end: usize) {
        if index < end {
            self.slots[index..end].rotate_left(1);
        }
    }

    /// The first `len` slots.
    #[inline]
    pub fn prefix(&self, len: usize) -> &[Option<T>] {
        &self.slots[..len]
    }

    #[inline]
    pub fn prefix_mut(&mut self, len: usize) -> &mut [Option<T>] {
        &mut self.slots[..len]
    }

    /// Consumes the storage, keeping the first `len` slots.
    pub fn into_prefix(self, len: usize) -> Vec<Option<T>> {
        let mut slots = self.slots.into_vec();
        slots.truncate(len);
        slots
    }
}

impl<T> Default for SlotStorage<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
