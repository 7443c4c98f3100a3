//! Borrowing and owning iterators over a [`LinkedList`].

use list_core::List;

use crate::{LinkedList, NodeArena};

/// Iterator over `&T` from head to tail, created by [`LinkedList::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    arena: &'a NodeArena<T>,
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(arena: &'a NodeArena<T>, head: Option<usize>, len: usize) -> Self {
        Iter {
            arena,
            current: head,
            remaining: len,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            arena: self.arena,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.current?;
        self.current = self.arena.next(slot);
        self.remaining = self.remaining.saturating_sub(1);
        self.arena.value(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator, created by `LinkedList::into_iter`.
#[derive(Debug)]
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(list: LinkedList<T>) -> Self {
        IntoIter { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_follows_links_not_slots() {
        let mut list = LinkedList::new();
        list.add_last(2);
        list.add_first(1);
        list.add_last(3);

        let mut iter = list.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.clone().copied().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn ref_into_iter() {
        let list: LinkedList<_> = (1..=3).collect();
        let mut total = 0;
        for v in &list {
            total += v;
        }
        assert_eq!(total, 6);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn into_iter_moves_values() {
        let list: LinkedList<_> = ["a", "b"].map(String::from).into_iter().collect();
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next().as_deref(), Some("a"));
        assert_eq!(iter.next().as_deref(), Some("b"));
        assert_eq!(iter.next(), None);
    }
}
