//! # linked_list
//!
//! A doubly linked list with O(1) end operations and fail-fast cursors.
//!
//! ```rust
//! use linked_list::{LinkedList, List};
//!
//! let mut list = LinkedList::new();
//! list.add_last(1);
//! list.add_last(2);
//! list.add_first(0);
//!
//! assert_eq!(list.get_first(), Ok(&0));
//! assert_eq!(list.get_last(), Ok(&2));
//! assert_eq!(list.get(1), Ok(&1));
//!
//! assert_eq!(list.remove_last(), Ok(2));
//! assert_eq!(list.get_last(), Ok(&1));
//! assert_eq!(list.len(), 2);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[doc(hidden)]
pub mod arena;
pub mod cursor;
pub mod iter;
pub mod list;

pub use arena::NodeArena;
pub use cursor::Cursor;
pub use iter::{IntoIter, Iter};
pub use list::LinkedList;
pub use list_core::{CursorState, List, ListError};
