//! Fail-fast cursor over an [`ArrayList`].
//!
//! A cursor does not borrow the list. It remembers a position and the list
//! generation it was created at; each step takes the list as an argument and
//! fails with [`ListError::ConcurrentModification`] once the list has changed.

use core::marker::PhantomData;

use list_core::{CursorState, Generation, GenerationGuard, List, ListError};
use tracing::debug;

use crate::ArrayList;

/// Single-pass, fail-fast position in an [`ArrayList`].
///
/// Created by [`ArrayList::cursor`]. A cursor must only be used with the
/// list that created it.
#[derive(Debug, Clone)]
pub struct Cursor<T> {
    position: usize,
    guard: GenerationGuard,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Cursor<T> {
    pub(crate) fn new(generation: Generation) -> Self {
        Cursor {
            position: 0,
            guard: generation.guard(),
            _marker: PhantomData,
        }
    }

    /// Whether another element follows.
    ///
    /// # Errors
    ///
    /// `ListError::ConcurrentModification` if `list` changed since the cursor
    /// was created.
    pub fn has_next(&self, list: &ArrayList<T>) -> Result<bool, ListError> {
        self.check(list)?;
        Ok(self.position < list.len())
    }

    /// Returns the next element and advances.
    ///
    /// # Errors
    ///
    /// - `ListError::ConcurrentModification` if `list` changed
    /// - `ListError::IterationExhausted` if no element is left
    #[allow(clippy::should_implement_trait)]
    pub fn next<'a>(&mut self, list: &'a ArrayList<T>) -> Result<&'a T, ListError> {
        if !self.has_next(list)? {
            return Err(ListError::IterationExhausted);
        }
        let value = list.get(self.position)?;
        self.position += 1;
        Ok(value)
    }

    /// Where the cursor stands relative to `list`.
    pub fn state(&self, list: &ArrayList<T>) -> CursorState {
        if self.position >= list.len() {
            CursorState::Exhausted
        } else if self.position == 0 {
            CursorState::NotStarted
        } else {
            CursorState::Iterating
        }
    }

    fn check(&self, list: &ArrayList<T>) -> Result<(), ListError> {
        self.guard.check(list.generation()).inspect_err(|err| {
            debug!(position = self.position, %err, "array list cursor invalidated");
        })
    }
}
