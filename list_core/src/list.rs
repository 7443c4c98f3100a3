//! The list contract implemented by every container in the workspace.

use crate::ListError;

/// Validates `index` against a logical length.
///
/// # Examples
///
/// ```
/// use list_core::{ListError, check_index};
///
/// assert!(check_index(2, 3).is_ok());
/// assert_eq!(
///     check_index(3, 3),
///     Err(ListError::IndexOutOfBounds { index: 3, len: 3 })
/// );
/// ```
#[inline]
pub fn check_index(index: usize, len: usize) -> Result<(), ListError> {
    if index < len {
        Ok(())
    } else {
        Err(ListError::IndexOutOfBounds { index, len })
    }
}

/// Where a single-pass cursor is in its traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// No element has been returned yet.
    NotStarted,
    /// At least one element was returned and more may follow.
    Iterating,
    /// The cursor moved past the last element.
    Exhausted,
}

/// Indexed sequence with in-place sorting.
///
/// Every method that takes `&mut self` and changes the list advances the
/// list's generation, which invalidates cursors created earlier.
pub trait List<T> {
    /// Appends `value` to the end.
    fn add(&mut self, value: T);

    /// Returns the element at `index`.
    fn get(&self, index: usize) -> Result<&T, ListError>;

    /// Replaces the element at `index`, returning the old one.
    fn set(&mut self, index: usize, value: T) -> Result<T, ListError>;

    /// Removes and returns the element at `index`, shifting later elements down.
    fn remove(&mut self, index: usize) -> Result<T, ListError>;

    /// Number of elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element.
    fn clear(&mut self);

    /// Sorts ascending by `Ord`. The sort is stable.
    fn sort(&mut self)
    where
        T: Ord;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_index_bounds() {
        assert!(check_index(0, 1).is_ok());
        assert_eq!(
            check_index(0, 0),
            Err(ListError::IndexOutOfBounds { index: 0, len: 0 })
        );
        assert_eq!(
            check_index(usize::MAX, 5),
            Err(ListError::IndexOutOfBounds {
                index: usize::MAX,
                len: 5
            })
        );
    }
}
