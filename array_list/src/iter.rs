//! Borrowing and owning iterators.
//!
//! These hold the list (shared or by value) for their whole lifetime, so the
//! list cannot change underneath them and no generation check is needed.
//! For a traversal that tolerates interleaved access see [`Cursor`](crate::Cursor).

#[cfg(not(feature = "std"))]
use alloc::vec::{self, Vec};
#[cfg(feature = "std")]
use std::vec;

/// Iterator over `&T`, created by [`ArrayList::iter`](crate::ArrayList::iter).
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    slots: core::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [Option<T>]) -> Self {
        Iter {
            slots: slots.iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().find_map(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.slots.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator, created by `ArrayList::into_iter`.
#[derive(Debug)]
pub struct IntoIter<T> {
    slots: vec::IntoIter<Option<T>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(slots: Vec<Option<T>>) -> Self {
        IntoIter {
            slots: slots.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().flatten().next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.slots.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use crate::{ArrayList, List};

    #[test]
    fn iter_reports_exact_len() {
        let list: ArrayList<_> = (1..=4).collect();
        let mut iter = list.iter();
        assert_eq!(iter.len(), 4);
        iter.next();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.sum::<i32>(), 9);
    }

    #[test]
    fn iter_skips_unused_capacity() {
        let mut list = ArrayList::with_capacity(10);
        list.add(1);
        assert_eq!(list.iter().count(), 1);
        assert_eq!((&list).into_iter().copied().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn into_iter_drops_remaining() {
        let list: ArrayList<_> = ["a", "b", "c"].map(String::from).into_iter().collect();
        let mut iter = list.into_iter();
        assert_eq!(iter.next().as_deref(), Some("a"));
        assert_eq!(iter.len(), 2);
    }
}
