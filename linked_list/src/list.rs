use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use list_core::{Generation, List, ListError, check_index};

use crate::{Cursor, IntoIter, Iter, NodeArena};

/// Doubly linked list.
///
/// Nodes live in a [`NodeArena`] and link to their neighbours by slot, so
/// the chain from `head` reaches `tail` in exactly `len` steps in both
/// directions and no node owns another.
///
/// - End operations (`add_first`, `remove_last`, ...) are O(1)
/// - Indexed operations walk from whichever end is nearer to the index
/// - Every mutation advances the list's [`Generation`]
///
/// # Examples
///
/// ```
/// use linked_list::{LinkedList, List, ListError};
///
/// let mut list: LinkedList<i32> = (1..=5).collect();
/// assert_eq!(list.remove(2), Ok(3));
/// assert_eq!(list.get(2), Ok(&4));
///
/// list.clear();
/// assert_eq!(list.remove_first(), Err(ListError::EmptyContainer));
/// ```
#[derive(Clone)]
pub struct LinkedList<T> {
    arena: NodeArena<T>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    generation: Generation,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list whose arena has room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        LinkedList {
            arena: NodeArena::with_capacity(capacity),
            head: None,
            tail: None,
            len: 0,
            generation: Generation::new(),
        }
    }

    /// Current mutation generation.
    #[inline]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Inserts `value` before the current head.
    pub fn add_first(&mut self, value: T) {
        let slot = self.arena.insert(value, None, self.head);
        match self.head {
            Some(head) => self.arena.set_prev(head, Some(slot)),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
        self.len += 1;
        self.generation.bump();
    }

    /// Inserts `value` after the current tail.
    pub fn add_last(&mut self, value: T) {
        let slot = self.arena.insert(value, self.tail, None);
        match self.tail {
            Some(tail) => self.arena.set_next(tail, Some(slot)),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
        self.generation.bump();
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// `ListError::EmptyContainer` if the list is empty.
    pub fn remove_first(&mut self) -> Result<T, ListError> {
        let head = self.head.ok_or(ListError::EmptyContainer)?;
        let next = self.arena.next(head);
        let value = self.arena.release(head).ok_or(ListError::EmptyContainer)?;

        self.head = next;
        match next {
            Some(next) => self.arena.set_prev(next, None),
            None => self.tail = None,
        }
        self.len -= 1;
        self.generation.bump();
        Ok(value)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// `ListError::EmptyContainer` if the list is empty.
    pub fn remove_last(&mut self) -> Result<T, ListError> {
        let tail = self.tail.ok_or(ListError::EmptyContainer)?;
        let prev = self.arena.prev(tail);
        let value = self.arena.release(tail).ok_or(ListError::EmptyContainer)?;

        self.tail = prev;
        match prev {
            Some(prev) => self.arena.set_next(prev, None),
            None => self.head = None,
        }
        self.len -= 1;
        self.generation.bump();
        Ok(value)
    }

    pub fn get_first(&self) -> Result<&T, ListError> {
        self.head
            .and_then(|head| self.arena.value(head))
            .ok_or(ListError::EmptyContainer)
    }

    pub fn get_last(&self) -> Result<&T, ListError> {
        self.tail
            .and_then(|tail| self.arena.value(tail))
            .ok_or(ListError::EmptyContainer)
    }

    /// Mutable access to the element at `index`.
    ///
    /// Counts as a mutation: open cursors are invalidated.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let slot = self.slot_at(index)?;
        self.generation.bump();
        let len = self.len;
        self.arena
            .value_mut(slot)
            .ok_or(ListError::IndexOutOfBounds { index, len })
    }

    /// Borrowing iterator from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.arena, self.head, self.len)
    }

    /// Fail-fast cursor positioned before the head.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_list::{LinkedList, ListError};
    ///
    /// let mut list: LinkedList<i32> = [1, 2].into_iter().collect();
    /// let mut cursor = list.cursor();
    /// assert_eq!(cursor.next(&list), Ok(&1));
    ///
    /// list.add_first(0);
    /// assert!(cursor.has_next());
    /// assert!(matches!(
    ///     cursor.next(&list),
    ///     Err(ListError::ConcurrentModification { .. })
    /// ));
    /// ```
    pub fn cursor(&self) -> Cursor<T> {
        Cursor::new(self.head, self.generation)
    }

    pub(crate) fn arena(&self) -> &NodeArena<T> {
        &self.arena
    }

    /// Slot of the node at `index`, walking from the nearer end.
    fn slot_at(&self, index: usize) -> Result<usize, ListError> {
        check_index(index, self.len)?;

        let found = if index < self.len / 2 {
            let mut current = self.head;
            for _ in 0..index {
                current = current.and_then(|slot| self.arena.next(slot));
            }
            current
        } else {
            let mut current = self.tail;
            for _ in index..self.len - 1 {
                current = current.and_then(|slot| self.arena.prev(slot));
            }
            current
        };

        found.ok_or(ListError::IndexOutOfBounds {
            index,
            len: self.len,
        })
    }

    fn out_of_bounds(&self, index: usize) -> ListError {
        ListError::IndexOutOfBounds {
            index,
            len: self.len,
        }
    }
}

impl<T> List<T> for LinkedList<T> {
    #[inline]
    fn add(&mut self, value: T) {
        self.add_last(value);
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        let slot = self.slot_at(index)?;
        self.arena
            .value(slot)
            .ok_or_else(|| self.out_of_bounds(index))
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        let slot = self.slot_at(index)?;
        let old = self
            .arena
            .replace(slot, value)
            .ok_or_else(|| self.out_of_bounds(index))?;
        self.generation.bump();
        Ok(old)
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        check_index(index, self.len)?;
        if index == 0 {
            return self.remove_first();
        }
        if index == self.len - 1 {
            return self.remove_last();
        }

        let slot = self.slot_at(index)?;
        let prev = self.arena.prev(slot);
        let next = self.arena.next(slot);
        let value = self
            .arena
            .release(slot)
            .ok_or_else(|| self.out_of_bounds(index))?;

        if let Some(prev) = prev {
            self.arena.set_next(prev, next);
        }
        if let Some(next) = next {
            self.arena.set_prev(next, prev);
        }
        self.len -= 1;
        self.generation.bump();
        Ok(value)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
        self.generation.bump();
    }

    /// Sorts the payloads in place; nodes and links stay where they are.
    fn sort(&mut self)
    where
        T: Ord,
    {
        if self.len <= 1 {
            return;
        }

        let mut values = Vec::with_capacity(self.len);
        let mut current = self.head;
        while let Some(slot) = current {
            values.extend(self.arena.take_value(slot));
            current = self.arena.next(slot);
        }

        values.sort();

        let mut current = self.head;
        for value in values {
            let Some(slot) = current else { break };
            self.arena.fill_value(slot, value);
            current = self.arena.next(slot);
        }
        self.generation.bump();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_last(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
