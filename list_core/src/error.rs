#[cfg(feature = "std")]
use thiserror::Error;

/// Errors raised by list operations and cursors.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// `index` is not in `0..len`.
    #[cfg_attr(
        feature = "std",
        error("Index {index} is out of bounds for length {len}")
    )]
    IndexOutOfBounds { index: usize, len: usize },

    /// An end operation was called on an empty list.
    #[cfg_attr(feature = "std", error("list is empty"))]
    EmptyContainer,

    /// The list changed after the cursor was created.
    #[cfg_attr(
        feature = "std",
        error("list modified during iteration: expected generation {expected}, found {found}")
    )]
    ConcurrentModification { expected: u64, found: u64 },

    /// `next` was called with no remaining elements.
    #[cfg_attr(feature = "std", error("iteration exhausted"))]
    IterationExhausted,
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for ListError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ListError::IndexOutOfBounds { index, len } => {
                write!(f, "Index {} is out of bounds for length {}", index, len)
            }
            ListError::EmptyContainer => write!(f, "list is empty"),
            ListError::ConcurrentModification { expected, found } => write!(
                f,
                "list modified during iteration: expected generation {}, found {}",
                expected, found
            ),
            ListError::IterationExhausted => write!(f, "iteration exhausted"),
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::error::Error for ListError {}
