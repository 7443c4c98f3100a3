//! Fail-fast cursor over a [`LinkedList`].
//!
//! Unlike the array list cursor, `has_next` here only asks whether a current
//! node is held and never consults the list. The generation check happens on
//! `next`, so a cursor over a changed list may still report `has_next() ==
//! true` and then fail on the following `next`.

use core::marker::PhantomData;

use list_core::{CursorState, Generation, GenerationGuard, ListError};
use tracing::debug;

use crate::LinkedList;

/// Single-pass, fail-fast position in a [`LinkedList`].
///
/// Created by [`LinkedList::cursor`]. A cursor must only be used with the
/// list that created it.
#[derive(Debug, Clone)]
pub struct Cursor<T> {
    current: Option<usize>,
    started: bool,
    guard: GenerationGuard,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Cursor<T> {
    pub(crate) fn new(head: Option<usize>, generation: Generation) -> Self {
        Cursor {
            current: head,
            started: false,
            guard: generation.guard(),
            _marker: PhantomData,
        }
    }

    /// Whether the cursor still holds a node.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the current node's element and moves to its successor.
    ///
    /// # Errors
    ///
    /// - `ListError::ConcurrentModification` if `list` changed
    /// - `ListError::IterationExhausted` if no node is left
    #[allow(clippy::should_implement_trait)]
    pub fn next<'a>(&mut self, list: &'a LinkedList<T>) -> Result<&'a T, ListError> {
        self.guard.check(list.generation()).inspect_err(|err| {
            debug!(%err, "linked list cursor invalidated");
        })?;

        let slot = self.current.ok_or(ListError::IterationExhausted)?;
        let value = list
            .arena()
            .value(slot)
            .ok_or(ListError::IterationExhausted)?;
        self.current = list.arena().next(slot);
        self.started = true;
        Ok(value)
    }

    pub fn state(&self) -> CursorState {
        match (self.current, self.started) {
            (None, _) => CursorState::Exhausted,
            (Some(_), false) => CursorState::NotStarted,
            (Some(_), true) => CursorState::Iterating,
        }
    }
}
