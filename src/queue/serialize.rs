//! Serde support for the priority queue
//!
//! Queues serialize as their ascending element sequence and nothing else.
//! Deserialization re-inserts every element through the normal placement
//! path, so the sorted invariant holds even when the input sequence was
//! produced elsewhere or edited by hand. The ordering strategy itself is
//! never part of the wire format: only strategies that can be
//! default-constructed (such as [`NaturalOrder`](crate::queue::NaturalOrder))
//! support deserialization, which keeps captured-closure comparators out of
//! interchange data by construction.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::queue::compare::Compare;
use crate::queue::internal::PriorityQueue;

impl<T, C> Serialize for PriorityQueue<T, C>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T, C> Deserialize<'de> for PriorityQueue<T, C>
where
    T: Deserialize<'de>,
    C: Compare<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(QueueVisitor {
            _marker: PhantomData,
        })
    }
}

struct QueueVisitor<T, C> {
    _marker: PhantomData<fn() -> (T, C)>,
}

impl<'de, T, C> Visitor<'de> for QueueVisitor<T, C>
where
    T: Deserialize<'de>,
    C: Compare<T> + Default,
{
    type Value = PriorityQueue<T, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of queue elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let capacity = seq.size_hint().unwrap_or(0);
        let mut queue = PriorityQueue::with_capacity_and_comparator(capacity, C::default());
        while let Some(item) = seq.next_element()? {
            queue.insert(item);
        }
        Ok(queue)
    }
}
