//! # array_list
//!
//! A growable array list with fail-fast cursors.
//!
//! ```rust
//! use array_list::{ArrayList, List};
//!
//! let mut list = ArrayList::with_capacity(2);
//! list.add(5);
//! list.add(3);
//! list.add(9);
//! assert_eq!(list.capacity(), 4);
//!
//! list.sort();
//! assert_eq!(list.remove(0), Ok(3));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![5, 9]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod cursor;
pub mod iter;
pub mod list;
#[doc(hidden)]
pub mod storage;

pub use cursor::Cursor;
pub use iter::{IntoIter, Iter};
pub use list::ArrayList;
pub use list_core::{CursorState, List, ListError};
pub use storage::SlotStorage;
