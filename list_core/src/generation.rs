//! Generation counter for fail-fast iteration.
//!
//! A list owns one [`Generation`] and bumps it on every mutation. A cursor
//! snapshots it into a [`GenerationGuard`] when created and compares against
//! the live value on every step.

use crate::ListError;

/// Monotonic mutation counter owned by a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Generation(u64);

impl Generation {
    #[inline]
    pub const fn new() -> Self {
        Generation(0)
    }

    /// Current counter value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Records one mutation. Wraps on overflow.
    #[inline]
    pub fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    /// Snapshots the current value.
    #[inline]
    pub const fn guard(self) -> GenerationGuard {
        GenerationGuard { expected: self }
    }
}

/// Snapshot of a [`Generation`] taken when a cursor was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationGuard {
    expected: Generation,
}

impl GenerationGuard {
    /// The generation captured at creation.
    #[inline]
    pub const fn expected(&self) -> Generation {
        self.expected
    }

    /// Fails with [`ListError::ConcurrentModification`] if `live` moved on.
    #[inline]
    pub fn check(&self, live: Generation) -> Result<(), ListError> {
        if live == self.expected {
            Ok(())
        } else {
            Err(ListError::ConcurrentModification {
                expected: self.expected.get(),
                found: live.get(),
            })
        }
    }
}
