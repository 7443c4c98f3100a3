#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use tracing::trace;

#[derive(Debug, Clone)]
struct Node<T> {
    value: Option<T>,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Slot arena holding the nodes of a [`LinkedList`](crate::LinkedList).
///
/// Nodes refer to their neighbours by slot index, so the list owns every node
/// through one `Vec` and no node owns another. Released slots are threaded
/// through their `next` link into a free list and reused by later inserts.
///
/// Accessors take any index; an index that names no live slot reads as `None`
/// and writes are ignored.
#[derive(Debug, Clone)]
pub struct NodeArena<T> {
    nodes: Vec<Node<T>>,
    free: Option<usize>,
}

impl<T> NodeArena<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
            free: None,
        }
    }

    /// Stores a node and returns its slot.
    pub fn insert(&mut self, value: T, prev: Option<usize>, next: Option<usize>) -> usize {
        let node = Node {
            value: Some(value),
            prev,
            next,
        };

        match self.free {
            Some(slot) => {
                self.free = self.nodes[slot].next;
                self.nodes[slot] = node;
                trace!(slot, "reused linked list node slot");
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Takes the value out of `slot`, clears its links and frees the slot.
    pub fn release(&mut self, slot: usize) -> Option<T> {
        let free = self.free;
        let node = self.nodes.get_mut(slot)?;
        let value = node.value.take()?;
        node.prev = None;
        node.next = free;
        self.free = Some(slot);
        Some(value)
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free = None;
    }

    #[inline]
    pub fn value(&self, slot: usize) -> Option<&T> {
        self.nodes.get(slot).and_then(|node| node.value.as_ref())
    }

    #[inline]
    pub fn value_mut(&mut self, slot: usize) -> Option<&mut T> {
        self.nodes.get_mut(slot).and_then(|node| node.value.as_mut())
    }

    /// Swaps the payload of a live slot, returning the old one.
    pub fn replace(&mut self, slot: usize, value: T) -> Option<T> {
        self.value_mut(slot)
            .map(|current| core::mem::replace(current, value))
    }

    /// Moves the payload out while leaving the node linked.
    pub fn take_value(&mut self, slot: usize) -> Option<T> {
        self.nodes.get_mut(slot).and_then(|node| node.value.take())
    }

    /// Refills a node emptied by [`take_value`](Self::take_value).
    pub fn fill_value(&mut self, slot: usize, value: T) {
        if let Some(node) = self.nodes.get_mut(slot) {
            node.value = Some(value);
        }
    }

    #[inline]
    pub fn prev(&self, slot: usize) -> Option<usize> {
        self.nodes.get(slot).and_then(|node| node.prev)
    }

    #[inline]
    pub fn next(&self, slot: usize) -> Option<usize> {
        self.nodes.get(slot).and_then(|node| node.next)
    }

    pub fn set_prev(&mut self, slot: usize, prev: Option<usize>) {
        if let Some(node) = self.nodes.get_mut(slot) {
            node.prev = prev;
        }
    }

    pub fn set_next(&mut self, slot: usize, next: Option<usize>) {
        if let Some(node) = self.nodes.get_mut(slot) {
            node.next = next;
        }
    }

    /// Number of allocated slots, live or free.
    #[inline]
    pub fn slots(&self) -> usize {
        self.nodes.len()
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
