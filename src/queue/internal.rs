//! Internal PriorityQueue implementation over a single sorted array
//!
//! This module provides the core queue functionality with:
//! - One growable `Vec` kept sorted ascending at all times
//! - Binary-search placement on insert (O(log n) probe, O(n) shift)
//! - O(1) retrieval and removal of the maximum from the last live slot
//! - Comparator strategies for element types without a usable `Ord`

use std::cmp::Ordering;
use std::fmt;

use crate::queue::compare::{Compare, NaturalOrder};
use crate::queue::cursor::Cursor;
use crate::queue::error::{QueueError, QueueResult};

/// Max-priority queue backed by a single always-sorted array.
///
/// Elements live in ascending order, so the maximum occupies the last live
/// slot at all times. Inserting pays the ordering cost up front; retrieval
/// never sorts, sifts or scans.
///
/// The second type parameter selects the ordering strategy. It defaults to
/// [`NaturalOrder`] for element types implementing [`Ord`]; a function or
/// closure comparator can be supplied via
/// [`with_comparator`](PriorityQueue::with_comparator) for everything else.
///
/// ```rust
/// use priqueue::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.insert(5);
/// queue.insert(3);
/// queue.insert(8);
///
/// assert_eq!(queue.find_max(), Ok(&8));
/// assert_eq!(queue.delete_max(), Ok(8));
/// assert_eq!(queue.find_max(), Ok(&5));
/// ```
#[derive(Clone)]
pub struct PriorityQueue<T, C = NaturalOrder> {
    /// Element storage, sorted ascending by the comparator
    items: Vec<T>,

    /// Ordering strategy consulted for placement and membership
    comparator: C,
}

impl<T: Ord> PriorityQueue<T> {
    /// Create an empty queue ordered by the element type's [`Ord`].
    ///
    /// No storage is allocated until the first insert.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Create an empty naturally-ordered queue with room for at least
    /// `capacity` elements before the first growth.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl<T, C: Compare<T>> PriorityQueue<T, C> {
    /// Create an empty queue ordered by the given comparator strategy
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            items: Vec::new(),
            comparator,
        }
    }

    /// Create an empty comparator-ordered queue with room for at least
    /// `capacity` elements before the first growth.
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            comparator,
        }
    }

    /// Insert an element at its sorted position.
    ///
    /// The slot is found by binary search and the tail beyond it shifts right
    /// by one. An element comparing equal to ones already present is placed
    /// adjacent to them; duplicates are kept, not merged. When the storage is
    /// full it at least doubles before the element goes in.
    pub fn insert(&mut self, item: T) {
        self.grow_if_full();

        if self.items.is_empty() {
            self.items.push(item);
            return;
        }

        let probe = self.locate(&item);
        let slot = match self.comparator.compare(&self.items[probe], &item) {
            // Probe holds a smaller element: the new one goes just after it
            Ordering::Less => probe + 1,
            // Equal or greater: the new element claims the probe slot and
            // pushes the rest of the tail right
            Ordering::Equal | Ordering::Greater => probe,
        };
        self.items.insert(slot, item);
    }

    /// Insert every element of `items` in iteration order.
    ///
    /// Equivalent to calling [`insert`](PriorityQueue::insert) once per
    /// element: each element is fully placed before the next is examined, so
    /// a panicking comparator leaves the queue holding the already-inserted
    /// prefix, still correctly sorted.
    pub fn insert_all<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.insert(item);
        }
    }

    /// Whether some element compares equal to `target` under the queue's
    /// ordering.
    ///
    /// Membership follows the comparator, not `PartialEq`: an element whose
    /// non-ordering fields differ from `target` still counts when the
    /// comparator places them equal.
    pub fn contains(&self, target: &T) -> bool {
        if self.items.is_empty() {
            return false;
        }
        let probe = self.locate(target);
        self.comparator.compare(&self.items[probe], target) == Ordering::Equal
    }

    /// Binary search for `target`, returning the index of an element that
    /// compares equal, or the last probed index when no element does.
    ///
    /// The final probe is always adjacent to `target`'s sorted position, so
    /// the caller classifies it with one extra comparison. Requires a
    /// non-empty queue.
    fn locate(&self, target: &T) -> usize {
        debug_assert!(!self.items.is_empty());

        let mut lower = 0;
        let mut upper = self.items.len();
        let mut probe = 0;

        while lower < upper {
            probe = lower + (upper - lower) / 2;
            match self.comparator.compare(&self.items[probe], target) {
                Ordering::Equal => return probe,
                Ordering::Less => lower = probe + 1,
                Ordering::Greater => upper = probe,
            }
        }
        probe
    }

    /// Double the storage when every slot is occupied, so the following
    /// insert cannot reallocate on its own.
    fn grow_if_full(&mut self) {
        if self.items.len() == self.items.capacity() {
            let old_capacity = self.items.capacity();
            self.items.reserve(old_capacity.max(1));
            log::trace!(
                "Queue storage grown: {} -> {} slots",
                old_capacity,
                self.items.capacity()
            );
        }
    }
}

impl<T, C> PriorityQueue<T, C> {
    /// Borrow the maximum element without removing it
    pub fn find_max(&self) -> QueueResult<&T> {
        self.items.last().ok_or(QueueError::EmptyQueue)
    }

    /// Remove and return the maximum element.
    ///
    /// Only the last live slot is vacated; no other element moves.
    pub fn delete_max(&mut self) -> QueueResult<T> {
        self.items.pop().ok_or(QueueError::EmptyQueue)
    }

    /// Number of elements currently queued
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue holds no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements the queue can hold before the next growth
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Drop every element, keeping the allocated storage for reuse
    pub fn clear(&mut self) {
        let dropped = self.items.len();
        self.items.clear();
        if dropped > 0 {
            log::trace!("Queue cleared: {} elements dropped", dropped);
        }
    }

    /// Iterate the elements in ascending order without consuming them
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// View the elements as an ascending sorted slice
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the queue, returning its elements as an ascending sorted `Vec`
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.items
    }

    /// Begin an ascending traversal that may remove elements along the way.
    ///
    /// The returned [`Cursor`] borrows the queue exclusively, so inserts and
    /// other queue operations wait until it is dropped.
    pub fn cursor(&mut self) -> Cursor<'_, T> {
        Cursor::new(&mut self.items)
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> fmt::Debug for PriorityQueue<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    /// Bulk-build a naturally-ordered queue.
    ///
    /// One sort over the collected elements yields the same layout as
    /// repeated inserts at a fraction of the shifting.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items: Vec<T> = iter.into_iter().collect();
        items.sort();
        Self {
            items,
            comparator: NaturalOrder,
        }
    }
}

impl<T, C: Compare<T>> Extend<T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<T, C> IntoIterator for PriorityQueue<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Consume the queue, yielding elements in ascending order
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a PriorityQueue<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
