//! Property-based tests for linked_list, checked against `VecDeque` as a model.

use std::collections::VecDeque;

use linked_list::{LinkedList, List, ListError};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    AddFirst(i32),
    AddLast(i32),
    RemoveFirst,
    RemoveLast,
    Set(usize, i32),
    Remove(usize),
    Sort,
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i32>().prop_map(Op::AddFirst),
        3 => any::<i32>().prop_map(Op::AddLast),
        1 => Just(Op::RemoveFirst),
        1 => Just(Op::RemoveLast),
        2 => (any::<usize>(), any::<i32>()).prop_map(|(i, v)| Op::Set(i, v)),
        2 => any::<usize>().prop_map(Op::Remove),
        1 => Just(Op::Sort),
        1 => Just(Op::Clear),
    ]
}

fn empty_or<T>(value: Option<T>) -> Result<T, ListError> {
    value.ok_or(ListError::EmptyContainer)
}

//
// -----------------------------------------------------------------------------
// Model equivalence
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_matches_deque_model(ops in prop::collection::vec(op(), 0..200)) {
        let mut list = LinkedList::new();
        let mut model: VecDeque<i32> = VecDeque::new();

        for op in ops {
            match op {
                Op::AddFirst(v) => {
                    list.add_first(v);
                    model.push_front(v);
                }
                Op::AddLast(v) => {
                    list.add_last(v);
                    model.push_back(v);
                }
                Op::RemoveFirst => {
                    prop_assert_eq!(list.remove_first(), empty_or(model.pop_front()));
                }
                Op::RemoveLast => {
                    prop_assert_eq!(list.remove_last(), empty_or(model.pop_back()));
                }
                Op::Set(i, v) => {
                    if model.is_empty() {
                        prop_assert!(list.set(i, v).is_err());
                    } else {
                        let i = i % model.len();
                        let old = std::mem::replace(&mut model[i], v);
                        prop_assert_eq!(list.set(i, v), Ok(old));
                    }
                }
                Op::Remove(i) => {
                    if model.is_empty() {
                        prop_assert_eq!(
                            list.remove(i),
                            Err(ListError::IndexOutOfBounds { index: i, len: 0 })
                        );
                    } else {
                        let i = i % model.len();
                        prop_assert_eq!(list.remove(i).ok(), model.remove(i));
                    }
                }
                Op::Sort => {
                    list.sort();
                    model.make_contiguous().sort();
                }
                Op::Clear => {
                    list.clear();
                    model.clear();
                }
            }

            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.get_first().ok(), model.front());
            prop_assert_eq!(list.get_last().ok(), model.back());
        }

        let collected: Vec<i32> = list.iter().copied().collect();
        let expected: Vec<i32> = model.iter().copied().collect();
        prop_assert_eq!(&collected, &expected);
        for (i, v) in model.iter().enumerate() {
            prop_assert_eq!(list.get(i), Ok(v));
        }
    }
}

//
// -----------------------------------------------------------------------------
// Sorting
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_sort_orders_and_is_idempotent(values: Vec<i16>) {
        let mut list: LinkedList<i16> = values.iter().copied().collect();
        list.sort();
        let once: Vec<i16> = list.iter().copied().collect();

        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(&once, &expected);

        list.sort();
        let twice: Vec<i16> = list.iter().copied().collect();
        prop_assert_eq!(once, twice);
    }
}

//
// -----------------------------------------------------------------------------
// Cursors
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_cursor_visits_all_then_exhausts(values: Vec<u32>) {
        let list: LinkedList<u32> = values.iter().copied().collect();
        let mut cursor = list.cursor();
        let mut seen = Vec::new();

        while cursor.has_next() {
            seen.push(*cursor.next(&list).unwrap());
        }

        prop_assert_eq!(seen, values);
        prop_assert_eq!(cursor.next(&list), Err(ListError::IterationExhausted));
    }
}

proptest! {
    #[test]
    fn prop_structural_mutation_invalidates_cursor(values in prop::collection::vec(any::<u8>(), 2..50), pick in 0usize..6) {
        let mut list: LinkedList<u8> = values.into_iter().collect();
        let mut cursor = list.cursor();

        match pick {
            0 => list.add_first(0),
            1 => list.add_last(0),
            2 => { list.remove(1).unwrap(); }
            3 => { list.set(0, 1).unwrap(); }
            4 => list.sort(),
            _ => list.clear(),
        }

        let invalidated = matches!(
            cursor.next(&list),
            Err(ListError::ConcurrentModification { .. })
        );
        prop_assert!(invalidated);
    }
}
