#![no_std]

//! Stack, queue and deque adapters over interchangeable sequence backends.
//!
//! Every adapter owns one backend instance and forwards its operations to it
//! through the [`Sequence`] trait object. The backend is chosen at
//! construction time by passing a [`SequenceTable`], a static singleton that
//! knows how to build instances of one concrete container:
//!
//! - [`GROW_ARRAY`]: [`GrowArray`], the default;
//! - [`LINKED_LIST`]: [`ListSequence`], a doubly linked list;
//! - [`RING_BUFFER`]: [`RingSequence`], a ring buffer.
//!
//! ```
//! # use seqadapt::{Queue, Stack, RING_BUFFER};
//! let mut stack = Stack::new().unwrap();
//! stack.push("first").unwrap();
//! stack.push("second").unwrap();
//! assert_eq!(*stack.top(), "second");
//! assert_eq!(stack.pop(), "second");
//!
//! let mut queue = Queue::with_table(&RING_BUFFER).unwrap();
//! queue.push(1).unwrap();
//! queue.push(2).unwrap();
//! assert_eq!(queue.pop(), 1);
//! assert_eq!(queue.backend_name(), "ring_buffer");
//! ```
//!
//! Adapters built from different tables hold instances that are not
//! interchangeable, so swapping them is a programming error and panics.
//!
//! # Keyed and ordered containers
//!
//! [`PriorityQueue`] keeps a binary heap and [`ArrayMap`] a sorted array, both
//! inside a [`GrowArray`]. Their order comes from `Ord` or from a less-than
//! function given at construction.
//!
//! ```
//! # use seqadapt::{ArrayMap, Error, PriorityQueue, Status};
//! let mut map = ArrayMap::new().unwrap();
//! map.insert("b", 2).unwrap();
//! map.insert("a", 1).unwrap();
//!
//! let duplicate = map.insert("a", 10);
//! assert_eq!(duplicate, Err(Error::AlreadyExists));
//! assert_eq!(Status::from(&duplicate), Status::AlreadyExists);
//! assert_eq!(map.insert_or_assign("a", 10), Ok(Some(1)));
//!
//! let keys: Vec<_> = map.iter().map(|(key, _)| *key).collect();
//! assert_eq!(keys, ["a", "b"]);
//!
//! let mut queue = PriorityQueue::with_less(|a: &u32, b: &u32| a > b).unwrap();
//! for value in [5, 1, 3] {
//!     queue.push(value).unwrap();
//! }
//! assert_eq!(queue.pop(), 1);
//! ```

extern crate alloc;

mod backend;
mod deque;
mod error;
mod handle;
mod map;
mod priority_queue;
mod queue;
mod sequence;
mod stack;
mod table;

pub use backend::{ListSequence, RingSequence};
pub use deque::Deque;
pub use error::{Error, Result, Status};
pub use handle::Handle;
pub use map::{ArrayMap, KeyLess};
pub use priority_queue::{Less, PriorityQueue};
pub use queue::Queue;
pub use sequence::Sequence;
pub use stack::Stack;
pub use table::{
    same_table, GrowArrayTable, LinkedListTable, RingBufferTable, SequenceTable, GROW_ARRAY,
    LINKED_LIST, RING_BUFFER,
};

pub use growarray;
pub use growarray::{GrowArray, GrowArrayError, GrowthPolicy};
