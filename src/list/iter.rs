//! Borrowing traversal over the chain.

use std::iter::FusedIterator;

use super::OrderedList;

/// Double-ended iterator over the values of an [`OrderedList`].
///
/// Front and back cursors walk `next` and `prev` links respectively and stop when
/// they meet, so each element is yielded once even when both ends are consumed.
/// Created by [`OrderedList::iter`], [`OrderedList::forward`] and
/// [`OrderedList::backward`].
pub struct Iter<'a, T> {
    list: &'a OrderedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(list: &'a OrderedList<T>) -> Self {
        Self {
            list,
            front: list.head,
            back: list.tail,
            remaining: list.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meeting_in_the_middle() {
        let list: OrderedList<i32> = [1, 2, 3, 4, 5].into_iter().collect();
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_restartable() {
        let list: OrderedList<i32> = [2, 1].into_iter().collect();
        let first: Vec<_> = list.forward().collect();
        let second: Vec<_> = list.forward().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_clone_is_independent() {
        let list: OrderedList<i32> = [1, 2, 3].into_iter().collect();
        let mut iter = list.iter();
        iter.next();
        let rest: Vec<_> = iter.clone().collect();
        assert_eq!(rest, [&2, &3]);
        assert_eq!(iter.next(), Some(&2));
    }

    #[test]
    fn test_for_loop_over_reference() {
        let list: OrderedList<i32> = [3, 1, 2].into_iter().collect();
        let mut sum = 0;
        for value in &list {
            sum += value;
        }
        assert_eq!(sum, 6);
    }
}
