pub mod queue;

pub use queue::{Compare, Cursor, NaturalOrder, PriorityQueue, QueueError, QueueResult};
