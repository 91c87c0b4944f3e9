//! Ascending traversal with mid-traversal removal
//!
//! A [`Cursor`] walks the queue from the minimum towards the maximum and can
//! remove the element it most recently produced without restarting the
//! traversal. The cursor holds an exclusive borrow of the queue storage, so
//! no other mutation can interleave with an active traversal; the removal
//! bookkeeping below is the whole consistency story.

use crate::queue::error::{QueueError, QueueResult};

/// Traversal handle over a queue's sorted storage.
///
/// Created by [`PriorityQueue::cursor`](crate::queue::PriorityQueue::cursor).
/// Elements are produced in ascending order. After [`advance`](Cursor::advance)
/// has produced an element, [`remove`](Cursor::remove) claims exactly that
/// element out of the queue and compacts the array; the traversal then
/// continues without skipping or repeating any element.
///
/// ```rust
/// use priqueue::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.insert_all([1, 2, 3]);
///
/// let mut cursor = queue.cursor();
/// assert_eq!(cursor.advance(), Some(&1));
/// assert_eq!(cursor.remove(), Ok(1));
/// assert_eq!(cursor.advance(), Some(&2));
/// drop(cursor);
///
/// assert_eq!(queue.len(), 2);
/// ```
pub struct Cursor<'a, T> {
    /// Borrowed queue storage, sorted ascending
    items: &'a mut Vec<T>,

    /// Index of the next element to produce
    next: usize,

    /// Whether the most recently produced element is still removable
    produced: bool,
}

impl<'a, T> Cursor<'a, T> {
    /// Create a cursor positioned before the first (minimum) element
    pub(crate) fn new(items: &'a mut Vec<T>) -> Self {
        Self {
            items,
            next: 0,
            produced: false,
        }
    }

    /// Produce the next element in ascending order.
    ///
    /// Returns `None` once the traversal is exhausted. Exhaustion does not
    /// disturb the removal state: the last produced element can still be
    /// claimed by [`remove`](Cursor::remove).
    pub fn advance(&mut self) -> Option<&T> {
        if self.next >= self.items.len() {
            return None;
        }
        let current = self.next;
        self.next += 1;
        self.produced = true;
        Some(&self.items[current])
    }

    /// Look at the upcoming element without producing it.
    ///
    /// Peeking never arms [`remove`](Cursor::remove); only
    /// [`advance`](Cursor::advance) does.
    pub fn peek(&self) -> Option<&T> {
        self.items.get(self.next)
    }

    /// Whether another call to [`advance`](Cursor::advance) would produce an element
    pub fn has_next(&self) -> bool {
        self.next < self.items.len()
    }

    /// Remove and return the most recently produced element.
    ///
    /// Each produced element can be removed at most once; calling this before
    /// the first [`advance`](Cursor::advance), or twice for the same element,
    /// fails with [`QueueError::InvalidIteratorState`]. Removal shifts the
    /// tail left by one slot, and the traversal position follows so the next
    /// [`advance`](Cursor::advance) produces the element that came after the
    /// removed one.
    pub fn remove(&mut self) -> QueueResult<T> {
        if !self.produced {
            return Err(QueueError::InvalidIteratorState);
        }
        self.produced = false;
        self.next -= 1;
        Ok(self.items.remove(self.next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_produces_ascending_order() {
        let mut items = vec![1, 3, 5, 8];
        let mut cursor = Cursor::new(&mut items);

        assert_eq!(cursor.advance(), Some(&1));
        assert_eq!(cursor.advance(), Some(&3));
        assert_eq!(cursor.advance(), Some(&5));
        assert_eq!(cursor.advance(), Some(&8));
        assert_eq!(cursor.advance(), None);
    }

    #[test]
    fn test_cursor_remove_without_advance_fails() {
        let mut items = vec![1, 2, 3];
        let mut cursor = Cursor::new(&mut items);

        assert_eq!(cursor.remove(), Err(QueueError::InvalidIteratorState));
    }

    #[test]
    fn test_cursor_remove_claims_produced_element() {
        let mut items = vec![1, 2, 3];
        let mut cursor = Cursor::new(&mut items);

        cursor.advance();
        assert_eq!(cursor.remove(), Ok(1));

        // Traversal continues with the element after the removed one
        assert_eq!(cursor.advance(), Some(&2));
        drop(cursor);

        assert_eq!(items, vec![2, 3]);
    }

    #[test]
    fn test_cursor_double_remove_fails() {
        let mut items = vec![1, 2, 3];
        let mut cursor = Cursor::new(&mut items);

        cursor.advance();
        assert_eq!(cursor.remove(), Ok(1));
        assert_eq!(cursor.remove(), Err(QueueError::InvalidIteratorState));
    }

    #[test]
    fn test_cursor_remove_after_exhaustion_claims_last() {
        let mut items = vec![1, 2];
        let mut cursor = Cursor::new(&mut items);

        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.advance(), None);

        // Exhaustion leaves the last produced element removable
        assert_eq!(cursor.remove(), Ok(2));
        assert_eq!(cursor.remove(), Err(QueueError::InvalidIteratorState));
        drop(cursor);

        assert_eq!(items, vec![1]);
    }

    #[test]
    fn test_cursor_peek_does_not_arm_removal() {
        let mut items = vec![7, 9];
        let mut cursor = Cursor::new(&mut items);

        assert_eq!(cursor.peek(), Some(&7));
        assert_eq!(cursor.remove(), Err(QueueError::InvalidIteratorState));

        // Peek agrees with the element advance produces next
        assert_eq!(cursor.advance(), Some(&7));
        assert_eq!(cursor.peek(), Some(&9));
    }

    #[test]
    fn test_cursor_has_next_tracks_position() {
        let mut items = vec![4];
        let mut cursor = Cursor::new(&mut items);

        assert!(cursor.has_next());
        cursor.advance();
        assert!(!cursor.has_next());
    }
}
