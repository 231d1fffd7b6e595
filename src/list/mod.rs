//! Ordered doubly-linked list.
//!
//! Nodes live in an index arena. `next` links model ownership of the chain from
//! `head` forward; `prev` links are navigational only and exist for O(1) access to
//! the tail and for backward traversal. Vacated slots are recycled through a free
//! stack, so repeated add/remove cycles do not grow the arena.
//!
//! The chain is kept ascending by [`OrderedList::add_sorted`].
//! [`OrderedList::sort_descending_in_place`] swaps every node's links without
//! comparing values, turning the chain descending (and back again on a second call).

mod iter;

use std::fmt;
use std::mem;

pub use iter::Iter;

/// Direction of the chain when read from `head` to `tail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Non-decreasing from head to tail.
    #[default]
    Ascending,
    /// Non-increasing from head to tail.
    Descending,
}

impl Orientation {
    /// Returns the opposite orientation.
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<usize>,
    prev: Option<usize>,
}

/// A doubly-linked list kept in ascending order on insertion.
///
/// Duplicates are kept as separate nodes.
///
/// # Example
///
/// ```
/// use ordlist::OrderedList;
///
/// let mut list: OrderedList<i32> = [5, 1, 3].into_iter().collect();
/// list.add_sorted(3);
///
/// assert_eq!(list.forward().copied().collect::<Vec<_>>(), [1, 3, 3, 5]);
/// assert_eq!(list.backward().copied().collect::<Vec<_>>(), [5, 3, 3, 1]);
///
/// assert!(list.remove_last());
/// assert_eq!(list.last(), Some(&3));
/// ```
#[derive(Clone)]
pub struct OrderedList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    orientation: Orientation,
}

impl<T> OrderedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            orientation: Orientation::Ascending,
        }
    }

    /// Number of elements in the chain.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the chain has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current direction of the chain.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Value at the head of the chain.
    pub fn first(&self) -> Option<&T> {
        self.head.map(|idx| &self.node(idx).value)
    }

    /// Value at the tail of the chain.
    pub fn last(&self) -> Option<&T> {
        self.tail.map(|idx| &self.node(idx).value)
    }

    /// Double-ended iterator from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Walks `next` links from the head.
    pub fn forward(&self) -> Iter<'_, T> {
        self.iter()
    }

    /// Walks `prev` links from the tail.
    pub fn backward(&self) -> std::iter::Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    /// Reverses the chain by swapping each node's links, then head and tail.
    ///
    /// No values are compared. On an ascending chain the result reads descending
    /// from the head; a second call restores the original order.
    pub fn sort_descending_in_place(&mut self) {
        self.reverse_links();

        #[cfg(feature = "logging")]
        log::debug!(
            "reversed {} links, chain now {:?}",
            self.len,
            self.orientation
        );
    }

    /// Returns true if any element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Removes the tail element and returns it.
    pub fn pop_last(&mut self) -> Option<T> {
        let tail = self.tail?;
        let node = self.release(tail);

        match node.prev {
            Some(prev) => self.node_mut(prev).next = None,
            None => self.head = None,
        }
        self.tail = node.prev;
        self.len -= 1;

        #[cfg(feature = "logging")]
        log::trace!("removed tail slot {tail}, {} elements left", self.len);

        Some(node.value)
    }

    /// Removes the tail element. Returns false if the chain was already empty.
    pub fn remove_last(&mut self) -> bool {
        self.pop_last().is_some()
    }

    /// Drops every node and resets the chain to empty and ascending.
    pub fn clear(&mut self) {
        #[cfg(feature = "logging")]
        log::debug!("clearing {} elements", self.len);

        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
        self.orientation = Orientation::Ascending;
    }

    fn reverse_links(&mut self) {
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let node = self.node_mut(idx);
            mem::swap(&mut node.next, &mut node.prev);
            // `prev` now holds the old forward link.
            cursor = node.prev;
        }
        mem::swap(&mut self.head, &mut self.tail);
        self.orientation = self.orientation.flipped();
    }

    fn node(&self, idx: usize) -> &Node<T> {
        match &self.slots[idx] {
            Some(node) => node,
            None => unreachable!("link to vacant slot {idx}"),
        }
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        match &mut self.slots[idx] {
            Some(node) => node,
            None => unreachable!("link to vacant slot {idx}"),
        }
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        if let Some(idx) = self.free.pop() {
            self.slots[idx] = Some(node);
            idx
        } else {
            self.slots.push(Some(node));
            self.slots.len() - 1
        }
    }

    fn release(&mut self, idx: usize) -> Node<T> {
        match self.slots[idx].take() {
            Some(node) => {
                self.free.push(idx);
                node
            }
            None => unreachable!("release of vacant slot {idx}"),
        }
    }
}

impl<T: Ord> OrderedList<T> {
    /// Inserts `value`, keeping the chain ascending.
    ///
    /// Values not greater than the head go in front, values not less than the tail
    /// go at the back, anything else goes immediately before the first node that is
    /// strictly greater. Away from the head, a value therefore lands after any
    /// values equal to it.
    ///
    /// A descending chain is turned ascending again before inserting.
    pub fn add_sorted(&mut self, value: T) {
        if self.orientation == Orientation::Descending {
            #[cfg(feature = "logging")]
            log::debug!("restoring ascending order before insert");
            self.reverse_links();
        }

        let (Some(head), Some(tail)) = (self.head, self.tail) else {
            let idx = self.alloc(Node {
                value,
                next: None,
                prev: None,
            });
            self.head = Some(idx);
            self.tail = Some(idx);
            self.len = 1;
            return;
        };

        if value <= self.node(head).value {
            self.link_front(head, value);
        } else if value >= self.node(tail).value {
            self.link_back(tail, value);
        } else {
            let mut cursor = self.node(head).next;
            let successor = loop {
                match cursor {
                    Some(idx) if self.node(idx).value > value => break Some(idx),
                    Some(idx) => cursor = self.node(idx).next,
                    None => break None,
                }
            };
            match successor {
                Some(idx) => self.link_before(idx, value),
                // Unreachable for a lawful `Ord`: the tail is strictly greater.
                None => self.link_back(tail, value),
            }
        }
        self.len += 1;
    }

    fn link_front(&mut self, head: usize, value: T) {
        let idx = self.alloc(Node {
            value,
            next: Some(head),
            prev: None,
        });
        self.node_mut(head).prev = Some(idx);
        self.head = Some(idx);
    }

    fn link_back(&mut self, tail: usize, value: T) {
        let idx = self.alloc(Node {
            value,
            next: None,
            prev: Some(tail),
        });
        self.node_mut(tail).next = Some(idx);
        self.tail = Some(idx);
    }

    fn link_before(&mut self, successor: usize, value: T) {
        let Some(prev) = self.node(successor).prev else {
            return self.link_front(successor, value);
        };
        let idx = self.alloc(Node {
            value,
            next: Some(successor),
            prev: Some(prev),
        });
        self.node_mut(prev).next = Some(idx);
        self.node_mut(successor).prev = Some(idx);
    }
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for OrderedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Ord> Extend<T> for OrderedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_sorted(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
