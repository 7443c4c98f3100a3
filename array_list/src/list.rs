use core::fmt;

use list_core::{Generation, List, ListError, check_index};

use crate::{Cursor, IntoIter, Iter, SlotStorage};

/// Growable array list.
///
/// Elements occupy slots `[0, len)` with no gaps. When an `add` finds every
/// slot occupied the slot array is reallocated at `max(1, 2 * capacity)`.
///
/// Every mutation advances the list's [`Generation`], so a [`Cursor`]
/// created before the change fails with [`ListError::ConcurrentModification`]
/// on its next step.
///
/// # Examples
///
/// ```
/// use array_list::{ArrayList, List, ListError};
///
/// let mut list = ArrayList::with_capacity(2);
/// list.add("a");
/// list.add("b");
///
/// assert_eq!(list.get(1), Ok(&"b"));
/// assert_eq!(list.set(0, "z"), Ok("a"));
/// assert_eq!(
///     list.get(2),
///     Err(ListError::IndexOutOfBounds { index: 2, len: 2 })
/// );
/// ```
#[derive(Clone)]
pub struct ArrayList<T> {
    storage: SlotStorage<T>,
    len: usize,
    generation: Generation,
}

impl<T> ArrayList<T> {
    /// Creates an empty list with no slots; the first `add` allocates one.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with `capacity` pre-allocated slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::{ArrayList, List};
    ///
    /// let mut list = ArrayList::with_capacity(3);
    /// for i in 0..3 {
    ///     list.add(i);
    /// }
    /// assert_eq!(list.capacity(), 3);
    ///
    /// list.add(3);
    /// assert_eq!(list.capacity(), 6);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        ArrayList {
            storage: SlotStorage::with_capacity(capacity),
            len: 0,
            generation: Generation::new(),
        }
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Current mutation generation.
    #[inline]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Mutable access to the element at `index`.
    ///
    /// Counts as a mutation: open cursors are invalidated.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        check_index(index, self.len)?;
        self.generation.bump();
        let len = self.len;
        self.storage
            .slot_mut(index)
            .ok_or(ListError::IndexOutOfBounds { index, len })
    }

    /// Borrowing iterator over the elements in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.storage.prefix(self.len))
    }

    /// Fail-fast cursor positioned before the first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::{ArrayList, List, ListError};
    ///
    /// let mut list: ArrayList<i32> = [1, 2].into_iter().collect();
    /// let mut cursor = list.cursor();
    /// assert_eq!(cursor.next(&list), Ok(&1));
    ///
    /// list.add(3);
    /// assert!(matches!(
    ///     cursor.next(&list),
    ///     Err(ListError::ConcurrentModification { .. })
    /// ));
    /// ```
    pub fn cursor(&self) -> Cursor<T> {
        Cursor::new(self.generation)
    }

    fn out_of_bounds(&self, index: usize) -> ListError {
        ListError::IndexOutOfBounds {
            index,
            len: self.len,
        }
    }
}

impl<T> List<T> for ArrayList<T> {
    fn add(&mut self, value: T) {
        if self.len == self.storage.capacity() {
            self.storage.grow();
        }
        self.storage.put(self.len, value);
        self.len += 1;
        self.generation.bump();
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&T, ListError> {
        check_index(index, self.len)?;
        self.storage
            .slot(index)
            .ok_or_else(|| self.out_of_bounds(index))
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        check_index(index, self.len)?;
        let old = self
            .storage
            .put(index, value)
            .ok_or_else(|| self.out_of_bounds(index))?;
        self.generation.bump();
        Ok(old)
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        check_index(index, self.len)?;
        let value = self
            .storage
            .take(index)
            .ok_or_else(|| self.out_of_bounds(index))?;
        self.storage.close_gap(index, self.len);
        self.len -= 1;
        self.generation.bump();
        Ok(value)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        for slot in self.storage.prefix_mut(self.len) {
            *slot = None;
        }
        self.len = 0;
        self.generation.bump();
    }

    fn sort(&mut self)
    where
        T: Ord,
    {
        self.storage.prefix_mut(self.len).sort();
        self.generation.bump();
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.storage.into_prefix(self.len))
    }
}
