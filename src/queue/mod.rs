//! Ordered Array Priority Queue Component
//!
//! A reusable max-priority queue backed by a single growable array that is
//! kept fully sorted at all times. Ordering work is paid eagerly on insert,
//! so the maximum element is always sitting in the last live slot and both
//! retrieval and removal of the maximum are O(1).
//!
//! # Overview
//!
//! This module provides a generic priority queue for single-threaded use.
//! Key features include:
//!
//! - **Eager Ordering**: every insert places the element at its final sorted
//!   position; retrieval never sorts or sifts
//! - **O(1) Maximum**: `find_max`/`delete_max` touch only the last live slot
//! - **Binary-Search Insert**: each insert bisects the array, then shifts the
//!   tail right by one slot
//! - **Pluggable Ordering**: natural [`Ord`] ordering by default, or any
//!   comparator strategy via [`Compare`]
//! - **Cursor Traversal**: ascending iteration with safe mid-traversal
//!   removal through [`Cursor`]
//! - **Serde Support**: queues serialize as their ascending element sequence;
//!   deserialization rebuilds the sorted layout from any input order
//!
//! # Architecture
//!
//! ```text
//!          items (always sorted ascending by the active ordering)
//!   ┌─────┬─────┬─────┬─────┬─────┬─────┬ ─ ─ ─ ─ ─ ─ ┐
//!   │  1  │  3  │  5  │  5  │  8  │  9  │ spare slots
//!   └─────┴─────┴─────┴─────┴─────┴─────┴ ─ ─ ─ ─ ─ ─ ┘
//!      ▲                             ▲
//!      │                             │
//!   Cursor traversal          find_max / delete_max
//!   (ascending, may remove)   (last live slot, O(1))
//! ```
//!
//! # Example Usage
//!
//! ```rust
//! use priqueue::{PriorityQueue, QueueError};
//!
//! let mut queue = PriorityQueue::new();
//! queue.insert_all([5, 3, 8, 1]);
//!
//! assert_eq!(queue.find_max(), Ok(&8));
//! assert_eq!(queue.delete_max(), Ok(8));
//! assert_eq!(queue.len(), 3);
//! assert!(queue.contains(&3));
//!
//! // Drain the rest in descending priority order
//! while let Ok(item) = queue.delete_max() {
//!     println!("{}", item);
//! }
//! assert_eq!(queue.find_max(), Err(QueueError::EmptyQueue));
//! ```

mod compare;
mod cursor;
mod error;
mod internal;
mod serialize;

pub use compare::{Compare, NaturalOrder};
pub use cursor::Cursor;
pub use error::{QueueError, QueueResult};
pub use internal::PriorityQueue;

#[cfg(test)]
mod tests;
