//! Ordering strategies for the priority queue
//!
//! Element types never have to implement [`Ord`] themselves. Every placement
//! and membership decision goes through a [`Compare`] strategy instead:
//! [`NaturalOrder`] delegates to `Ord` for types that have it, and any
//! function or closure with a `Fn(&T, &T) -> Ordering` signature acts as a
//! drop-in strategy for types that need an external or reversed ordering.
//!
//! ```rust
//! use priqueue::PriorityQueue;
//!
//! // A reversed comparator turns the max-queue into a min-queue.
//! let mut queue = PriorityQueue::with_comparator(|a: &u32, b: &u32| b.cmp(a));
//! queue.insert_all([4, 9, 2]);
//! assert_eq!(queue.delete_max(), Ok(2));
//! ```

use std::cmp::Ordering;

/// Ordering strategy consulted for every placement and membership decision.
///
/// Implementations must define a total order over the stored elements. It is
/// a logic error for a strategy to order inconsistently across calls or to
/// violate transitivity: the sorted layout silently degrades and placement
/// and membership answers become unspecified. Such a logic error is never
/// detected at runtime and never results in undefined behavior.
pub trait Compare<T> {
    /// Compare two elements, returning how `lhs` sorts relative to `rhs`.
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;
}

/// Strategy that orders elements by their own [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Compare<T> for NaturalOrder {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// Any two-argument ordering function is usable as a comparator strategy.
impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self(lhs, rhs)
    }
}
