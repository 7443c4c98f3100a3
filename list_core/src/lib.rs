//! # list_core
//!
//! The contract shared by the sequence containers in this workspace.
//!
//! ```rust
//! use list_core::{Generation, ListError};
//!
//! let mut live = Generation::new();
//! let guard = live.guard();
//! assert!(guard.check(live).is_ok());
//!
//! live.bump();
//! assert!(matches!(
//!     guard.check(live),
//!     Err(ListError::ConcurrentModification { expected: 0, found: 1 })
//! ));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod generation;
pub mod list;

pub use error::ListError;
pub use generation::{Generation, GenerationGuard};
pub use list::{CursorState, List, check_index};
